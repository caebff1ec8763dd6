//! Older square rules that Stroud's tables delegate to.
//!
//! - Miller (1960): 9 points, degree 1, with a negative axis weight.
//! - Burnside (1908): 8 points, degree 5.
//! - Tyler (1953): rule 1 (13 points, degree 5), rules 2 and 3 (degree 7).
//! - Albrecht–Collatz (1958): four rules of degree 3 and 5.
//! - Maxwell (1877): 13 points, degree 7.
//! - Meister (1966): 25 points on the grid of thirds, degree 7.
//!
//! Weights are normalised to 1 and scaled by the square's area.

use crate::error::QuadratureError;
use crate::numeric::Numeric;
use crate::orbit::{axis_pair, central_pair, full_symmetric, origin, sign_flips};
use crate::scheme::{Domain, Scheme};
use crate::table::Weight::Uniform;

fn unknown(id: String) -> QuadratureError {
    QuadratureError::UnknownScheme {
        domain: Domain::Square,
        id,
    }
}

pub fn miller<N: Numeric>(num: &N) -> Result<Scheme<N::Value>, QuadratureError> {
    let one = num.int(1);
    let data = vec![
        (Uniform(num.frac(250, 225)), origin()),
        (Uniform(num.frac(-8, 225)), axis_pair(one.clone())),
        (Uniform(num.frac(7, 900)), sign_flips(one.clone(), one)),
    ];
    Scheme::assemble("Miller", 1, data, Domain::Square.measure(num))
}

pub fn burnside<N: Numeric>(num: &N) -> Result<Scheme<N::Value>, QuadratureError> {
    let r = num.sqrt(&num.frac(7, 15));
    let s = num.sqrt(&num.frac(7, 9));
    let data = vec![
        (Uniform(num.frac(10, 49)), axis_pair(r)),
        (Uniform(num.frac(9, 196)), sign_flips(s.clone(), s)),
    ];
    Scheme::assemble("Burnside", 5, data, Domain::Square.measure(num))
}

/// G. W. Tyler, Numerical integration of functions of several variables,
/// Canad. J. Math. 5 (1953), 393–412. Rules 1..=3.
pub fn tyler<N: Numeric>(index: u32, num: &N) -> Result<Scheme<N::Value>, QuadratureError> {
    let name = format!("Tyler({index})");
    let fr = |p, q| num.frac(p, q);
    let int = |n| num.int(n);
    let (degree, data) = match index {
        1 => (
            5,
            vec![
                (Uniform(fr(-28, 45)), origin()),
                (Uniform(fr(1, 36)), sign_flips(int(1), int(1))),
                (Uniform(fr(1, 45)), axis_pair(int(1))),
                (Uniform(fr(16, 45)), axis_pair(fr(1, 2))),
            ],
        ),
        2 => {
            let sqrt583 = num.sqrt(&int(583));
            let r = num.sqrt(&fr(6, 7));
            let s = num.sqrt(&((int(114) - int(3) * sqrt583.clone()) / int(287)));
            let t = num.sqrt(&((int(114) + int(3) * sqrt583.clone()) / int(287)));
            let b2 = (int(178981) + int(2769) * sqrt583.clone()) / int(1888920);
            let b3 = (int(178981) - int(2769) * sqrt583) / int(1888920);
            (
                7,
                vec![
                    (Uniform(fr(49, 810)), axis_pair(r)),
                    (Uniform(b2), sign_flips(s.clone(), s)),
                    (Uniform(b3), sign_flips(t.clone(), t)),
                ],
            )
        }
        3 => (
            7,
            vec![
                (Uniform(fr(449, 315)), origin()),
                (Uniform(fr(37, 1260)), axis_pair(int(1))),
                (Uniform(fr(3, 28)), axis_pair(fr(2, 3))),
                (Uniform(fr(-69, 140)), axis_pair(fr(1, 3))),
                (Uniform(fr(7, 540)), sign_flips(int(1), int(1))),
                (Uniform(fr(32, 135)), sign_flips(fr(1, 2), fr(1, 2))),
            ],
        ),
        _ => return Err(unknown(name)),
    };
    Scheme::assemble(name, degree, data, Domain::Square.measure(num))
}

/// J. Albrecht, L. Collatz, Zur numerischen Auswertung mehrdimensionaler
/// Integrale, ZAMM 38 (1958), 1–15. Rules 1..=4.
pub fn albrecht_collatz<N: Numeric>(
    index: u32,
    num: &N,
) -> Result<Scheme<N::Value>, QuadratureError> {
    let name = format!("Albrecht-Collatz({index})");
    let fr = |p, q| num.frac(p, q);
    let int = |n| num.int(n);
    let (degree, data) = match index {
        1 => (3, vec![(Uniform(fr(1, 4)), axis_pair(num.sqrt(&fr(2, 3))))]),
        2 => {
            let r = num.sqrt(&fr(3, 5));
            let s = num.sqrt(&fr(1, 3));
            let t = num.sqrt(&fr(14, 15));
            (
                5,
                vec![
                    (Uniform(fr(2, 7)), origin()),
                    (Uniform(fr(5, 36)), sign_flips(r, s)),
                    (Uniform(fr(5, 63)), central_pair(int(0), t)),
                ],
            )
        }
        // central symmetry only: ±(r, r) against ±(s, -t), ±(t, -s)
        3 => {
            let r = num.sqrt(&fr(7, 15));
            let sqrt24 = num.sqrt(&int(24));
            let s = num.sqrt(&((int(7) + sqrt24.clone()) / int(15)));
            let t = num.sqrt(&((int(7) - sqrt24) / int(15)));
            (
                5,
                vec![
                    (Uniform(fr(2, 7)), origin()),
                    (Uniform(fr(25, 168)), central_pair(r.clone(), r)),
                    (Uniform(fr(5, 48)), central_pair(s.clone(), -t.clone())),
                    (Uniform(fr(5, 48)), central_pair(t, -s)),
                ],
            )
        }
        4 => (
            5,
            vec![
                (Uniform(fr(2, 45)), origin()),
                (Uniform(fr(2, 45)), axis_pair(int(1))),
                (Uniform(fr(1, 60)), sign_flips(int(1), int(1))),
                (Uniform(fr(8, 45)), sign_flips(fr(1, 2), fr(1, 2))),
            ],
        ),
        _ => return Err(unknown(name)),
    };
    Scheme::assemble(name, degree, data, Domain::Square.measure(num))
}

/// J. C. Maxwell (1877).
pub fn maxwell<N: Numeric>(num: &N) -> Result<Scheme<N::Value>, QuadratureError> {
    let int = |n| num.int(n);
    let r = num.sqrt(&num.frac(12, 35));
    let sqrt186 = num.sqrt(&int(186));
    let s = num.sqrt(&((int(93) + int(3) * sqrt186.clone()) / int(155)));
    let t = num.sqrt(&((int(93) - int(3) * sqrt186) / int(155)));
    let data = vec![
        (Uniform(num.frac(1, 81)), origin()),
        (Uniform(num.frac(49, 324)), axis_pair(r)),
        // Stroud's book prints 31/649; only 31/648 gives degree 7.
        (Uniform(num.frac(31, 648)), full_symmetric(s, t)),
    ];
    Scheme::assemble("Maxwell", 7, data, Domain::Square.measure(num))
}

/// B. Meister (1966).
pub fn meister<N: Numeric>(num: &N) -> Result<Scheme<N::Value>, QuadratureError> {
    let w = |p| num.frac(p, 6720);
    let (one, r, s) = (num.int(1), num.frac(2, 3), num.frac(1, 3));
    let data = vec![
        (Uniform(w(1024)), origin()),
        (Uniform(w(576)), sign_flips(r.clone(), r.clone())),
        (Uniform(w(-9)), sign_flips(s.clone(), s.clone())),
        (Uniform(w(47)), sign_flips(one.clone(), one.clone())),
        (Uniform(w(576)), axis_pair(r)),
        (Uniform(w(117)), full_symmetric(one, s)),
    ];
    Scheme::assemble("Meister", 7, data, Domain::Square.measure(num))
}
