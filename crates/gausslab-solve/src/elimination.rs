//! Gauss / Gauss-Jordan elimination with step tracking.
//!
//! Both solvers share one skeleton: walk the coefficient columns left to
//! right, pick the first non-zero entry at or below the current pivot row
//! (exact arithmetic makes magnitude-based pivoting unnecessary), swap it
//! up, normalize it to 1, and eliminate the column from the other rows.
//! Forward mode ([`Elimination::Forward`]) eliminates only below the pivot
//! and yields row echelon form; full mode ([`Elimination::Full`]) also
//! eliminates above and yields reduced row echelon form.

use std::fmt;

use gausslab_rational::{Rational, RationalError};
use num_traits::{One, Zero};

use crate::matrix::Matrix;

/// How far elimination goes once a pivot is normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Elimination {
    /// Eliminate below the pivot only: row echelon form (Gauss).
    Forward,
    /// Eliminate above and below: reduced row echelon form (Gauss-Jordan).
    Full,
}

/// One elementary row operation, recorded as it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverStep {
    /// Human-readable operation label, e.g. `"Swap: R2 <-> R1"`.
    pub op: String,
    /// Rendered snapshot of the matrix immediately after the operation.
    pub snapshot: Vec<String>,
}

/// Classification of the solution set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionType {
    /// Exactly one solution: `rank(A) = rank([A|b]) = n`.
    Unique,
    /// Infinitely many solutions: `rank(A) = rank([A|b]) < n`.
    Infinite,
    /// No solution: `rank(A) < rank([A|b])`.
    None,
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SolutionType::Unique => "unique solution",
            SolutionType::Infinite => "infinitely many solutions",
            SolutionType::None => "no solution",
        };
        write!(f, "{text}")
    }
}

/// The complete outcome of one solve call.
#[derive(Clone, Debug)]
pub struct SolveResult {
    /// Every recorded operation, starting with the initial matrix snapshot.
    pub steps: Vec<SolverStep>,
    /// The matrix in its target form (REF or RREF).
    pub final_matrix: Matrix,
    /// Number of coefficient columns; the constant column follows them.
    pub num_vars: usize,
    /// Rank of the coefficient sub-matrix.
    pub rank_coeffs: usize,
    /// Rank of the full augmented matrix.
    pub rank_augmented: usize,
    /// Classification of the solution set.
    pub solution_type: SolutionType,
    /// Solution description lines: variable assignments, a parametric
    /// line, or an inconsistency notice.
    pub solution: Vec<String>,
}

impl SolveResult {
    /// Renders the final matrix with the augmented bar, like the step
    /// snapshots.
    #[must_use]
    pub fn final_rendered(&self) -> Vec<String> {
        self.final_matrix.render(self.num_vars)
    }
}

/// Reduces a copy of `aug` to row echelon form (Gauss elimination) and
/// derives the solution by back-substitution.
///
/// `aug` holds `num_vars` coefficient columns followed by the constant
/// column; it is not mutated.
///
/// # Errors
///
/// Propagates [`RationalError::DivisionByZero`] from rational arithmetic.
/// Every division the solver performs is guarded by the pivot search or
/// the rank classification, so this cannot trigger on a well-formed
/// augmented matrix.
pub fn solve_ref(aug: &Matrix, num_vars: usize) -> Result<SolveResult, RationalError> {
    solve(aug, num_vars, Elimination::Forward)
}

/// Reduces a copy of `aug` to reduced row echelon form (Gauss-Jordan)
/// and reads the solution off the constant column.
///
/// Same contract as [`solve_ref`].
///
/// # Errors
///
/// Propagates [`RationalError::DivisionByZero`]; see [`solve_ref`].
pub fn solve_rref(aug: &Matrix, num_vars: usize) -> Result<SolveResult, RationalError> {
    solve(aug, num_vars, Elimination::Full)
}

fn solve(aug: &Matrix, num_vars: usize, mode: Elimination) -> Result<SolveResult, RationalError> {
    let mut m = aug.clone();
    let mut steps = vec![SolverStep {
        op: "Initial augmented matrix [A|b]".to_string(),
        snapshot: m.render(num_vars),
    }];

    reduce(&mut m, num_vars, mode, &mut steps)?;

    let rank_coeffs = (0..m.num_rows())
        .filter(|&r| !m.coeff_row_is_zero(r, num_vars))
        .count();
    let rank_augmented = (0..m.num_rows()).filter(|&r| !m.row_is_zero(r)).count();

    let solution_type = if rank_coeffs < rank_augmented {
        SolutionType::None
    } else if rank_coeffs == num_vars {
        SolutionType::Unique
    } else {
        SolutionType::Infinite
    };

    let solution = describe_solution(&m, num_vars, rank_coeffs, solution_type)?;

    Ok(SolveResult {
        steps,
        final_matrix: m,
        num_vars,
        rank_coeffs,
        rank_augmented,
        solution_type,
        solution,
    })
}

/// The shared elimination skeleton. Walks pivot columns left to right;
/// a column with no pivot advances without consuming a pivot row.
fn reduce(
    m: &mut Matrix,
    num_vars: usize,
    mode: Elimination,
    steps: &mut Vec<SolverStep>,
) -> Result<(), RationalError> {
    let mut pivot_row = 0;
    let mut pivot_col = 0;

    while pivot_row < m.num_rows() && pivot_col < num_vars {
        // First non-zero entry at or below the pivot row wins.
        let Some(found) = (pivot_row..m.num_rows()).find(|&r| !m[(r, pivot_col)].is_zero())
        else {
            pivot_col += 1;
            continue;
        };

        if found != pivot_row {
            m.swap_rows(found, pivot_row);
            steps.push(snapshot_step(
                format!("Swap: R{} <-> R{}", found + 1, pivot_row + 1),
                m,
                num_vars,
            ));
        }

        let pivot = m[(pivot_row, pivot_col)].clone();
        if !pivot.is_one() {
            // Non-zero by the search above.
            let k = pivot.recip()?;
            m.scale_row(pivot_row, &k);
            steps.push(snapshot_step(
                format!("Normalize pivot: R{row} <- ({k}) R{row}", row = pivot_row + 1),
                m,
                num_vars,
            ));
        }

        for target in 0..m.num_rows() {
            if target == pivot_row || (mode == Elimination::Forward && target < pivot_row) {
                continue;
            }
            let factor = m[(target, pivot_col)].clone();
            if factor.is_zero() {
                continue;
            }
            m.add_scaled_row(target, pivot_row, &(-factor.clone()));
            steps.push(snapshot_step(
                eliminate_label(mode, target, pivot_row, &factor),
                m,
                num_vars,
            ));
        }

        pivot_row += 1;
        pivot_col += 1;
    }

    Ok(())
}

fn snapshot_step(op: String, m: &Matrix, num_vars: usize) -> SolverStep {
    SolverStep {
        op,
        snapshot: m.render(num_vars),
    }
}

/// Phrases the row update so it reads naturally for either sign:
/// subtracting a negative factor is written as an addition.
fn eliminate_label(mode: Elimination, target: usize, pivot_row: usize, factor: &Rational) -> String {
    let verb = match mode {
        Elimination::Forward => "Eliminate below",
        Elimination::Full => "Eliminate",
    };
    let (t, p) = (target + 1, pivot_row + 1);
    if factor >= &Rational::zero() {
        format!("{verb}: R{t} <- R{t} - ({factor}) R{p}")
    } else {
        format!("{verb}: R{t} <- R{t} + ({}) R{p}", -factor)
    }
}

/// Derives the solution description from the reduced matrix.
///
/// Pivots are already normalized to 1, so the unique-solution path is a
/// division-free back-substitution; in full mode the inner loop finds
/// nothing to substitute and the constant column is read off directly.
fn describe_solution(
    m: &Matrix,
    num_vars: usize,
    rank_coeffs: usize,
    solution_type: SolutionType,
) -> Result<Vec<String>, RationalError> {
    match solution_type {
        SolutionType::None => Ok(vec![
            "The system is INCONSISTENT => no solution.".to_string(),
        ]),
        SolutionType::Unique => Ok(unique_solution(m, num_vars)),
        SolutionType::Infinite => infinite_solution(m, num_vars, rank_coeffs),
    }
}

/// Back-substitution over the pivot rows, bottom-up.
fn unique_solution(m: &Matrix, num_vars: usize) -> Vec<String> {
    let mut values: Vec<Option<Rational>> = vec![None; num_vars];
    for row in (0..num_vars).rev() {
        let Some(col) = (0..num_vars).find(|&c| !m[(row, c)].is_zero()) else {
            continue;
        };
        let mut value = m[(row, num_vars)].clone();
        for j in col + 1..num_vars {
            if let Some(known) = &values[j] {
                if !m[(row, j)].is_zero() {
                    value = value - &m[(row, j)] * known;
                }
            }
        }
        values[col] = Some(value);
    }

    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| format!("{} = {v}", variable_name(i))))
        .collect()
}

/// Parametric description of an underdetermined system.
///
/// The closed form covers the 2-variable domain; with more variables only
/// the degrees of freedom are reported. The division guards mirror the
/// rank classification: a leading coefficient is only divided by when it
/// is known non-zero.
fn infinite_solution(
    m: &Matrix,
    num_vars: usize,
    rank_coeffs: usize,
) -> Result<Vec<String>, RationalError> {
    let mut lines = Vec::new();

    if num_vars == 2 {
        let a = &m[(0, 0)];
        let b = &m[(0, 1)];
        let c = &m[(0, 2)];
        if !a.is_zero() {
            lines.push(format!("{} = t (free parameter)", variable_name(1)));
            lines.push(format!(
                "{} = {} - ({})*t",
                variable_name(0),
                c.checked_div(a)?,
                b.checked_div(a)?,
            ));
        } else if !b.is_zero() {
            lines.push(format!("{} = t (free parameter)", variable_name(0)));
            lines.push(format!("{} = {}", variable_name(1), c.checked_div(b)?));
        } else {
            // Coefficient rank 0: every equation is 0 = 0, both variables
            // are unconstrained.
            lines.push(format!("{} = s (free parameter)", variable_name(0)));
            lines.push(format!("{} = t (free parameter)", variable_name(1)));
        }
    } else {
        lines.push(format!(
            "{} free variable(s); no closed form emitted",
            num_vars - rank_coeffs
        ));
    }

    lines.push(format!(
        "Note: infinitely many solutions since rank(A) = rank([A|b]) < {num_vars}"
    ));
    Ok(lines)
}

fn variable_name(index: usize) -> String {
    match index {
        0 => "x".to_string(),
        1 => "y".to_string(),
        2 => "z".to_string(),
        3 => "w".to_string(),
        _ => format!("x{}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(num: i64, den: i64) -> Rational {
        Rational::from_i64(num, den).unwrap()
    }

    fn system(coefs: [i64; 6]) -> Matrix {
        let [a11, a12, b1, a21, a22, b2] = coefs;
        Matrix::from_rows(vec![
            vec![q(a11, 1), q(a12, 1), q(b1, 1)],
            vec![q(a21, 1), q(a22, 1), q(b2, 1)],
        ])
    }

    #[test]
    fn test_unique_rref() {
        // x + y = 3, 2x - y = 3 => x = 2, y = 1
        let aug = system([1, 1, 3, 2, -1, 3]);
        let res = solve_rref(&aug, 2).unwrap();

        assert_eq!(res.solution_type, SolutionType::Unique);
        assert_eq!(res.rank_coeffs, 2);
        assert_eq!(res.rank_augmented, 2);
        assert_eq!(res.solution, vec!["x = 2", "y = 1"]);

        // RREF leaves an identity sub-matrix on the left
        let m = &res.final_matrix;
        assert_eq!(m[(0, 0)], q(1, 1));
        assert_eq!(m[(0, 1)], q(0, 1));
        assert_eq!(m[(1, 0)], q(0, 1));
        assert_eq!(m[(1, 1)], q(1, 1));
    }

    #[test]
    fn test_unique_ref_back_substitution() {
        let aug = system([1, 1, 3, 2, -1, 3]);
        let res = solve_ref(&aug, 2).unwrap();

        assert_eq!(res.solution_type, SolutionType::Unique);
        assert_eq!(res.solution, vec!["x = 2", "y = 1"]);

        // REF only guarantees zeros below the pivots
        let m = &res.final_matrix;
        assert_eq!(m[(1, 0)], q(0, 1));
    }

    #[test]
    fn test_infinite() {
        // 2x + 2y = 4, x + y = 2: one equation twice over
        let aug = system([2, 2, 4, 1, 1, 2]);
        let res = solve_rref(&aug, 2).unwrap();

        assert_eq!(res.solution_type, SolutionType::Infinite);
        assert_eq!(res.rank_coeffs, 1);
        assert_eq!(res.rank_augmented, 1);
        assert_eq!(res.solution[0], "y = t (free parameter)");
        assert_eq!(res.solution[1], "x = 2 - (1)*t");
        assert_eq!(
            res.solution[2],
            "Note: infinitely many solutions since rank(A) = rank([A|b]) < 2"
        );
    }

    #[test]
    fn test_inconsistent() {
        // x + 2y = 5, 2x + 4y = 7: parallel lines
        let aug = system([1, 2, 5, 2, 4, 7]);
        let res = solve_rref(&aug, 2).unwrap();

        assert_eq!(res.solution_type, SolutionType::None);
        assert_eq!(res.rank_coeffs, 1);
        assert_eq!(res.rank_augmented, 2);
        assert_eq!(
            res.solution,
            vec!["The system is INCONSISTENT => no solution."]
        );
    }

    #[test]
    fn test_fraction_coefficients_stay_exact() {
        // a11 = 1/2: snapshots must show "1/2", never a decimal
        let aug = Matrix::from_rows(vec![
            vec![q(1, 2), q(1, 1), q(1, 1)],
            vec![q(1, 1), q(1, 1), q(2, 1)],
        ]);
        let res = solve_rref(&aug, 2).unwrap();

        assert!(res.steps[0].snapshot[0].contains("1/2"));
        assert_eq!(res.solution_type, SolutionType::Unique);
        assert_eq!(res.solution, vec!["x = 2", "y = 0"]);
    }

    #[test]
    fn test_swap_step_recorded() {
        // a11 = 0 forces a row swap before anything else
        let aug = system([0, 1, 1, 1, 1, 2]);
        let res = solve_rref(&aug, 2).unwrap();

        let swaps: Vec<&SolverStep> = res
            .steps
            .iter()
            .filter(|s| s.op.starts_with("Swap:"))
            .collect();
        assert_eq!(swaps.len(), 1);
        assert_eq!(swaps[0].op, "Swap: R2 <-> R1");
        assert_eq!(res.solution_type, SolutionType::Unique);
        assert_eq!(res.solution, vec!["x = 1", "y = 1"]);
    }

    #[test]
    fn test_first_step_is_initial_snapshot() {
        let aug = system([1, 1, 3, 2, -1, 3]);
        let res = solve_ref(&aug, 2).unwrap();
        assert_eq!(res.steps[0].op, "Initial augmented matrix [A|b]");
        assert_eq!(res.steps[0].snapshot, aug.render(2));
    }

    #[test]
    fn test_input_not_mutated() {
        let aug = system([1, 1, 3, 2, -1, 3]);
        let copy = aug.clone();
        let _ = solve_rref(&aug, 2).unwrap();
        assert_eq!(aug, copy);
    }

    #[test]
    fn test_rref_idempotent() {
        // Re-running on the final matrix records no further operations
        let aug = system([1, 1, 3, 2, -1, 3]);
        let first = solve_rref(&aug, 2).unwrap();
        let again = solve_rref(&first.final_matrix, 2).unwrap();
        assert_eq!(again.steps.len(), 1);
        assert_eq!(again.final_matrix, first.final_matrix);
    }

    #[test]
    fn test_elimination_labels_read_naturally() {
        // Positive factor reads as subtraction, negative as addition
        let aug = system([1, 1, 3, 2, -1, 3]);
        let res = solve_rref(&aug, 2).unwrap();
        assert!(res
            .steps
            .iter()
            .any(|s| s.op == "Eliminate: R2 <- R2 - (2) R1"));

        let aug = system([1, 1, 3, -2, 1, 0]);
        let res = solve_ref(&aug, 2).unwrap();
        assert!(res
            .steps
            .iter()
            .any(|s| s.op == "Eliminate below: R2 <- R2 + (2) R1"));
    }

    #[test]
    fn test_degenerate_all_zero_system() {
        // 0 = 0 twice: every (x, y) is a solution and nothing divides
        let aug = system([0, 0, 0, 0, 0, 0]);
        let res = solve_rref(&aug, 2).unwrap();

        assert_eq!(res.solution_type, SolutionType::Infinite);
        assert_eq!(res.rank_coeffs, 0);
        assert_eq!(res.rank_augmented, 0);
        assert_eq!(res.solution[0], "x = s (free parameter)");
        assert_eq!(res.solution[1], "y = t (free parameter)");
    }

    #[test]
    fn test_solution_type_display() {
        assert_eq!(SolutionType::Unique.to_string(), "unique solution");
        assert_eq!(
            SolutionType::Infinite.to_string(),
            "infinitely many solutions"
        );
        assert_eq!(SolutionType::None.to_string(), "no solution");
    }
}
