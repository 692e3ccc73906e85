//! Augmented matrices of exact rationals, stored row-major.

use std::fmt::Write as _;
use std::ops::{Index, IndexMut};

use gausslab_rational::Rational;
use num_traits::Zero;

/// Width of one rendered cell, matching the fixed-width console layout.
const CELL_WIDTH: usize = 10;

/// A rectangular matrix of [`Rational`] entries.
///
/// The matrix itself does not know which columns are coefficients and
/// which hold constants; the augmented split is a parameter of the
/// operations that need it.
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix {
    /// Entries in row-major order.
    data: Vec<Rational>,
    num_rows: usize,
    num_cols: usize,
}

impl Matrix {
    /// Creates a matrix from rows of entries.
    ///
    /// # Panics
    ///
    /// Panics if there are no rows, a row is empty, or the rows have
    /// differing lengths. Shape validation is the constructing caller's
    /// responsibility; the row operations assume a rectangular matrix.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Self {
        assert!(!rows.is_empty(), "matrix needs at least one row");
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        assert!(num_cols > 0, "matrix needs at least one column");
        assert!(
            rows.iter().all(|r| r.len() == num_cols),
            "matrix rows must have equal length"
        );
        let data: Vec<Rational> = rows.into_iter().flatten().collect();
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Rational] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Swaps two rows in place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Scales a row by a factor: `row[r] <- k * row[r]`.
    pub fn scale_row(&mut self, row: usize, k: &Rational) {
        for c in 0..self.num_cols {
            self[(row, c)] = &self[(row, c)] * k;
        }
    }

    /// Adds a scaled row to another: `row[target] += k * row[source]`.
    ///
    /// Does nothing when `k` is zero.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, k: &Rational) {
        if k.is_zero() {
            return;
        }
        for c in 0..self.num_cols {
            let scaled = &self[(source, c)] * k;
            self[(target, c)] = &self[(target, c)] + &scaled;
        }
    }

    /// Returns true if the first `num_vars` columns of the row are all zero.
    #[must_use]
    pub fn coeff_row_is_zero(&self, row: usize, num_vars: usize) -> bool {
        (0..num_vars).all(|c| self[(row, c)].is_zero())
    }

    /// Returns true if the entire row is zero, constant column included.
    #[must_use]
    pub fn row_is_zero(&self, row: usize) -> bool {
        (0..self.num_cols).all(|c| self[(row, c)].is_zero())
    }

    /// Renders each row as a fixed-width display line, with a vertical
    /// bar marking the start of the constant column at `split_col`:
    /// `[ 1         2         | 4         ]`.
    #[must_use]
    pub fn render(&self, split_col: usize) -> Vec<String> {
        (0..self.num_rows)
            .map(|r| {
                let mut line = String::from("[ ");
                for (c, value) in self.row(r).iter().enumerate() {
                    if c == split_col {
                        line.push_str("| ");
                    }
                    let cell = value.to_string();
                    let _ = write!(line, "{cell:<CELL_WIDTH$}");
                }
                line.push(']');
                line
            })
            .collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl std::fmt::Debug for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Matrix {}x{}", self.num_rows, self.num_cols)?;
        for line in self.render(self.num_cols) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
