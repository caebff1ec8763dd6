//! Square rules from Stroud's tables.
//!
//! A. H. Stroud, Approximate Calculation of Multiple Integrals,
//! Prentice Hall, 1971. Identifiers follow the book (`"C2 3-1"`, …).
//!
//! The product rules are built here; the others delegate to `classic` or to
//! the n-cube builders at dimension 2 and take the Stroud identifier as name.
//!
//! Not built: C2 3-5, 5-7 (Irwin) and 7-2 (Phillips) place points outside the
//! square; C2 9-1 through 15-2 (Rabinowitz–Richter) exist only as decimal
//! tables, with no closed form for exact mode.

use super::classic::{albrecht_collatz, burnside, maxwell, meister, miller, tyler};
use crate::error::QuadratureError;
use crate::ncube;
use crate::numeric::Numeric;
use crate::orbit::{axis_pair, full_symmetric, origin, sign_flips};
use crate::scheme::{Domain, Scheme};
use crate::table::Weight::Uniform;

/// Identifiers with a builder, in table order.
pub const IDS: [&str; 17] = [
    "C2 1-1", "C2 1-2", "C2 3-1", "C2 3-2", "C2 3-3", "C2 3-4", "C2 5-1", "C2 5-2", "C2 5-3",
    "C2 5-4", "C2 5-5", "C2 5-6", "C2 7-1", "C2 7-3", "C2 7-4", "C2 7-5", "C2 7-6",
];

pub fn stroud<N: Numeric>(id: &str, num: &N) -> Result<Scheme<N::Value>, QuadratureError> {
    let area = Domain::Square.measure(num);
    let scheme = match id {
        // product trapezoidal
        "C2 1-1" => {
            let one = num.int(1);
            let data = vec![(Uniform(num.frac(1, 4)), sign_flips(one.clone(), one))];
            Scheme::assemble(id, 1, data, area)?
        }
        "C2 1-2" => miller(num)?,
        // product Gauss, 2 points per axis
        "C2 3-1" => {
            // The book misprints the coordinate as 1/3.
            let r = num.sqrt(&num.frac(1, 3));
            let data = vec![(Uniform(num.frac(1, 4)), sign_flips(r.clone(), r))];
            Scheme::assemble(id, 3, data, area)?
        }
        "C2 3-2" => ncube::ewing::<N, 2>(num)?,
        // product Simpson
        "C2 3-3" => ncube::stroud::<N, 2>("Cn 3-6", num)?,
        "C2 3-4" => albrecht_collatz(1, num)?,
        "C2 5-1" => albrecht_collatz(2, num)?,
        "C2 5-2" => albrecht_collatz(3, num)?,
        "C2 5-3" => burnside(num)?,
        // product Gauss, 3 points per axis
        "C2 5-4" => {
            let r = num.sqrt(&num.frac(3, 5));
            let data = vec![
                (Uniform(num.frac(16, 81)), origin()),
                (Uniform(num.frac(10, 81)), axis_pair(r.clone())),
                (Uniform(num.frac(25, 324)), sign_flips(r.clone(), r)),
            ];
            Scheme::assemble(id, 5, data, area)?
        }
        "C2 5-5" => tyler(1, num)?,
        "C2 5-6" => albrecht_collatz(4, num)?,
        "C2 7-1" => tyler(2, num)?,
        "C2 7-3" => maxwell(num)?,
        "C2 7-4" => return c2_7_4(num),
        "C2 7-5" => tyler(3, num)?,
        "C2 7-6" => meister(num)?,
        _ => {
            return Err(QuadratureError::UnknownScheme {
                domain: Domain::Square,
                id: id.to_string(),
            })
        }
    };
    Ok(scheme.renamed(id))
}

/// Stroud's C2 7-4, as published: the radius `r` is computed from the
/// `(15 ∓ 2√30)/35` pair and then overwritten by `√(3/5)`, so the table only
/// integrates linear functions. Kept with its published coefficients and
/// flagged as defective (claimed 7, actual 1).
fn c2_7_4<N: Numeric>(num: &N) -> Result<Scheme<N::Value>, QuadratureError> {
    let int = |n| num.int(n);
    let sqrt30 = num.sqrt(&int(30));
    let s = num.sqrt(&((int(15) + int(2) * sqrt30.clone()) / int(35)));
    let r = num.sqrt(&num.frac(3, 5));
    let b1 = (int(59) + int(6) * sqrt30.clone()) / int(864);
    let b2 = (int(59) - int(6) * sqrt30) / int(864);
    let data = vec![
        (Uniform(b1), sign_flips(r.clone(), r.clone())),
        (Uniform(b2), sign_flips(s.clone(), s.clone())),
        (Uniform(num.frac(49, 864)), full_symmetric(r, s)),
    ];
    Ok(Scheme::assemble("C2 7-4", 1, data, Domain::Square.measure(num))?.with_defect(7))
}
