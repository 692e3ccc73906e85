//! # gausslab-solve
//!
//! Step-tracking row reduction over exact rationals.
//!
//! This crate provides:
//! - [`Matrix`]: a rectangular matrix of [`Rational`] entries with the
//!   elementary row operations of Gaussian elimination
//! - [`solve_ref`] / [`solve_rref`]: elimination to row echelon form
//!   (forward only) or reduced row echelon form (Gauss-Jordan), recording
//!   every elementary operation as a labeled step with a snapshot
//! - Rank computation, solution classification (unique / infinite / none)
//!   and closed-form solution derivation
//!
//! Each solve call is a pure function: the caller's matrix is never
//! mutated, and the returned steps own independent snapshots.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod elimination;
pub mod matrix;

pub use elimination::{
    solve_ref, solve_rref, Elimination, SolutionType, SolveResult, SolverStep,
};
pub use gausslab_rational::{Rational, RationalError};
pub use matrix::Matrix;
