//! # GaussLab
//!
//! An exact-arithmetic Gauss / Gauss-Jordan solver for small linear
//! systems, with every elementary row operation recorded as a labeled,
//! snapshot-carrying step.
//!
//! All arithmetic runs over arbitrary precision rationals, so the steps
//! show clean fractions (`1/2`, `-21/10`) rather than rounded decimals.
//!
//! ## Quick Start
//!
//! ```rust
//! use gausslab::prelude::*;
//!
//! // x + y = 3, 2x - y = 3
//! let aug = Matrix::from_rows(vec![
//!     vec![1.into(), 1.into(), 3.into()],
//!     vec![2.into(), (-1).into(), 3.into()],
//! ]);
//! let result = solve_rref(&aug, 2)?;
//!
//! assert_eq!(result.solution_type, SolutionType::Unique);
//! assert_eq!(result.solution, vec!["x = 2", "y = 1"]);
//! # Ok::<(), RationalError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use gausslab_rational as rational;
pub use gausslab_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use gausslab_rational::{Rational, RationalError};
    pub use gausslab_solve::{
        solve_ref, solve_rref, Elimination, Matrix, SolutionType, SolveResult, SolverStep,
    };
}
