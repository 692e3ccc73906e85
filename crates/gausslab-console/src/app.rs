//! The menu-driven console application.

use std::io::{BufRead, Write};

use gausslab::prelude::*;

use crate::io::ConsoleIo;
use crate::levels::{Level, LEVELS};

/// Method selector as presented in the menu: 1 = Gauss, 2 = Gauss-Jordan.
const GAUSS_JORDAN: i64 = 2;

pub struct App<R, W> {
    io: ConsoleIo<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(io: ConsoleIo<R, W>) -> Self {
        Self { io }
    }

    /// Runs the main menu loop until the user quits.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.print_header()?;
        loop {
            self.print_menu()?;
            match self.io.read_choice("Pick an option (1, 2, 3): ", 1, 3)? {
                1 => self.play_levels()?,
                2 => self.solve_custom()?,
                _ => {
                    self.io.blank()?;
                    self.io.say("Done!")?;
                    return Ok(());
                }
            }
        }
    }

    fn print_header(&mut self) -> anyhow::Result<()> {
        self.io.say("==============================================")?;
        self.io.say("        GAUSS CHALLENGE (console)             ")?;
        self.io.say("   2x2 systems + Gauss / Gauss-Jordan         ")?;
        self.io.say("==============================================")?;
        Ok(())
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        self.io.blank()?;
        self.io.say("MAIN MENU")?;
        self.io.say("1) Play levels (GaussLab mode)")?;
        self.io.say("2) Solve a custom 2x2 system")?;
        self.io.say("3) Quit")?;
        Ok(())
    }

    fn play_levels(&mut self) -> anyhow::Result<()> {
        self.io.blank()?;
        self.io.say("=== STORY MODE: GAUSSLAB ===")?;
        self.io
            .say("Rule: first PREDICT the solution type, then the program verifies it.")?;

        for (index, level) in LEVELS.iter().enumerate() {
            let level = *level;
            self.show_level_intro(index, &level)?;
            let guess = self.io.read_choice("Your prediction (1, 2 or 3): ", 1, 3)?;
            let method = self
                .io
                .read_choice("Method (1=Gauss, 2=Gauss-Jordan): ", 1, 2)?;

            tracing::debug!(level = index + 1, method, "solving level");
            let aug = level.augmented();
            let result = if method == GAUSS_JORDAN {
                solve_rref(&aug, 2)?
            } else {
                solve_ref(&aug, 2)?
            };

            self.report(&result, method)?;
            self.check_prediction(guess, &result)?;

            if index + 1 < LEVELS.len() {
                self.io.blank()?;
                self.io
                    .wait_enter("Press ENTER to continue to the next level... ")?;
            }
        }

        self.io.blank()?;
        self.io.say("=== All levels completed! ===")?;
        Ok(())
    }

    fn show_level_intro(&mut self, index: usize, level: &Level) -> anyhow::Result<()> {
        self.io.blank()?;
        self.io
            .say(&format!("--- LEVEL {}: {} ---", index + 1, level.title))?;
        self.io.say(level.story)?;
        self.io.blank()?;
        self.io.say("System (equations):")?;
        for equation in level.equations() {
            self.io.say(&equation)?;
        }
        self.io.blank()?;
        self.io.say("Augmented matrix [A|b]:")?;
        for line in level.augmented().render(2) {
            self.io.say(&line)?;
        }
        self.io.blank()?;
        self.io
            .say("Before solving, what solution type do you expect?")?;
        self.io.say("1) Unique solution")?;
        self.io.say("2) Infinitely many solutions")?;
        self.io.say("3) No solution")?;
        Ok(())
    }

    fn solve_custom(&mut self) -> anyhow::Result<()> {
        self.io.blank()?;
        self.io.say("=== CUSTOM SYSTEM (2x2) ===")?;
        self.io.say("System layout:")?;
        self.io.say("a11*x + a12*y = b1")?;
        self.io.say("a21*x + a22*y = b2")?;
        self.io.say("You can enter integers or fractions: 5 or -3/2")?;
        self.io.blank()?;

        let mut coefs: Vec<Rational> = Vec::with_capacity(6);
        for label in ["a11: ", "a12: ", "b1 : ", "a21: ", "a22: ", "b2 : "] {
            coefs.push(self.io.read_rational(label)?);
        }
        let aug = Matrix::from_rows(vec![coefs[..3].to_vec(), coefs[3..].to_vec()]);

        self.io.blank()?;
        self.io.say("Entered system:")?;
        self.io
            .say(&format!("{}*x + {}*y = {}", coefs[0], coefs[1], coefs[2]))?;
        self.io
            .say(&format!("{}*x + {}*y = {}", coefs[3], coefs[4], coefs[5]))?;
        self.io.blank()?;
        self.io.say("Augmented matrix [A|b]:")?;
        for line in aug.render(2) {
            self.io.say(&line)?;
        }
        self.io.blank()?;

        let method = self
            .io
            .read_choice("Method (1=Gauss, 2=Gauss-Jordan): ", 1, 2)?;
        tracing::debug!(method, "solving custom system");
        let result = if method == GAUSS_JORDAN {
            solve_rref(&aug, 2)?
        } else {
            solve_ref(&aug, 2)?
        };

        self.report(&result, method)
    }

    fn report(&mut self, result: &SolveResult, method: i64) -> anyhow::Result<()> {
        let (steps_title, final_title) = if method == GAUSS_JORDAN {
            (
                "=== STEPS (Gauss-Jordan: RREF) ===",
                "=== FINAL MATRIX (RREF) ===",
            )
        } else {
            (
                "=== STEPS (Gauss elimination: REF) ===",
                "=== FINAL MATRIX (REF) ===",
            )
        };

        self.io.blank()?;
        self.io.say(steps_title)?;
        for (i, step) in result.steps.iter().enumerate() {
            self.io.say(&format!("Step {i}: {}", step.op))?;
            for line in &step.snapshot {
                self.io.say(line)?;
            }
        }

        self.io.blank()?;
        self.io.say(final_title)?;
        for line in result.final_rendered() {
            self.io.say(&line)?;
        }

        self.io.blank()?;
        self.io.say("=== RANK ANALYSIS ===")?;
        self.io
            .say(&format!("rank(A)     = {}", result.rank_coeffs))?;
        self.io
            .say(&format!("rank([A|b]) = {}", result.rank_augmented))?;
        self.io
            .say(&format!("Solution type: {}", result.solution_type))?;

        self.io.blank()?;
        self.io.say("=== SOLUTION ===")?;
        for line in &result.solution {
            self.io.say(line)?;
        }
        Ok(())
    }

    fn check_prediction(&mut self, guess: i64, result: &SolveResult) -> anyhow::Result<()> {
        let predicted = match guess {
            1 => SolutionType::Unique,
            2 => SolutionType::Infinite,
            _ => SolutionType::None,
        };

        self.io.blank()?;
        self.io.say("=== CHECK ===")?;
        self.io.say(&format!("Your prediction: {predicted}"))?;
        self.io
            .say(&format!("Program result:  {}", result.solution_type))?;
        if predicted == result.solution_type {
            self.io.say("You got it!")?;
        } else {
            self.io.say("Not this time.")?;
        }
        Ok(())
    }
}
