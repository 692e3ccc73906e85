//! Tours the three solution classes on textbook systems.

use gausslab::prelude::*;

fn main() -> Result<(), RationalError> {
    let systems: [(&str, [i64; 6]); 3] = [
        ("independent", [1, 1, 3, 2, -1, 3]),
        ("dependent", [2, 2, 4, 1, 1, 2]),
        ("contradictory", [1, 2, 5, 2, 4, 7]),
    ];

    for (name, [a11, a12, b1, a21, a22, b2]) in systems {
        let aug = Matrix::from_rows(vec![
            vec![a11.into(), a12.into(), b1.into()],
            vec![a21.into(), a22.into(), b2.into()],
        ]);
        let result = solve_rref(&aug, 2)?;

        println!("--- {name} ---");
        println!(
            "{a11}*x + {a12}*y = {b1}   /   {a21}*x + {a22}*y = {b2}"
        );
        println!(
            "rank(A) = {}, rank([A|b]) = {} => {}",
            result.rank_coeffs, result.rank_augmented, result.solution_type
        );
        for line in &result.solution {
            println!("  {line}");
        }
        println!();
    }

    Ok(())
}
