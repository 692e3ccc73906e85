//! Prints every elimination step for one system, both methods.

use gausslab::prelude::*;

fn main() -> Result<(), RationalError> {
    // 2x + y = 5, x - y = 1
    let aug = Matrix::from_rows(vec![
        vec![2.into(), 1.into(), 5.into()],
        vec![1.into(), (-1).into(), 1.into()],
    ]);

    for (name, result) in [
        ("Gauss elimination (REF)", solve_ref(&aug, 2)?),
        ("Gauss-Jordan (RREF)", solve_rref(&aug, 2)?),
    ] {
        println!("=== {name} ===");
        for (i, step) in result.steps.iter().enumerate() {
            println!("Step {i}: {}", step.op);
            for line in &step.snapshot {
                println!("{line}");
            }
        }
        println!();
        println!("rank(A)     = {}", result.rank_coeffs);
        println!("rank([A|b]) = {}", result.rank_augmented);
        println!("Solution type: {}", result.solution_type);
        for line in &result.solution {
            println!("{line}");
        }
        println!();
    }

    Ok(())
}
