//! The built-in story levels, one per solution-type scenario.

use gausslab::prelude::{Matrix, Rational};

/// One story level: a fixed 2x2 system plus flavor text.
#[derive(Clone, Copy)]
pub struct Level {
    pub title: &'static str,
    pub story: &'static str,
    /// `[a11, a12, b1, a21, a22, b2]`.
    pub coefs: [i64; 6],
}

impl Level {
    /// Builds the augmented matrix `[A|b]` for this level.
    pub fn augmented(&self) -> Matrix {
        let [a11, a12, b1, a21, a22, b2] = self.coefs;
        Matrix::from_rows(vec![
            vec![Rational::from(a11), Rational::from(a12), Rational::from(b1)],
            vec![Rational::from(a21), Rational::from(a22), Rational::from(b2)],
        ])
    }

    /// The two equations as display lines.
    pub fn equations(&self) -> [String; 2] {
        let [a11, a12, b1, a21, a22, b2] = self.coefs;
        [
            format!("{a11}*x + {a12}*y = {b1}"),
            format!("{a21}*x + {a22}*y = {b2}"),
        ]
    }
}

/// The four gates of story mode.
pub const LEVELS: [Level; 4] = [
    Level {
        title: "Gate 01: Dependent system",
        story: "The panel detects proportional equations. What does that imply?",
        coefs: [2, 2, 4, 1, 1, 2],
    },
    Level {
        title: "Gate 02: Proportional rows",
        story: "One row turns out to be a multiple of the other. Analyze the solution type.",
        coefs: [3, 6, 9, 1, 2, 3],
    },
    Level {
        title: "Gate 03: Independent system",
        story: "The reactor only stabilizes if you find an exact solution for x and y.",
        coefs: [2, 1, 5, 1, -1, 1],
    },
    Level {
        title: "Gate 04: Contradiction",
        story: "Two sensors contradict each other: can the gate be opened at all?",
        coefs: [1, 1, 2, 1, 1, 3],
    },
];
