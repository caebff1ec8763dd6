//! Curated surface for downstream code.
//!
//! - One `build` entry point over both domains and both numeric modes.
//! - Re-exports of the builders and the pieces needed to write new ones.

pub use crate::disk::albrecht;
pub use crate::ncube::{ewing, stroud as ncube_stroud};
pub use crate::numeric::{vandermonde, Atom, Exact, Expr, Float, Numeric, RealRoot, Scalar};
pub use crate::orbit::{axis_pair, full_symmetric, origin, polygon, sign_flips};
pub use crate::registry::{domains, ids, Registered};
pub use crate::scheme::{Defect, Domain, Scheme};
pub use crate::square::{albrecht_collatz, burnside, maxwell, meister, miller, stroud, tyler};
pub use crate::table::{untangle, Weight};

use crate::error::QuadratureError;

/// Build `(domain, id)` in the mode of `num`.
pub fn build<N: Registered>(
    domain: Domain,
    id: &str,
    num: &N,
) -> Result<Scheme<N::Value>, QuadratureError> {
    crate::registry::build(domain, id, num)
}

/// Build every registered scheme in float mode, in registry order.
pub fn build_all_float() -> Result<Vec<Scheme<f64>>, QuadratureError> {
    let num = Float::default();
    domains()
        .into_iter()
        .flat_map(|d| ids(d).into_iter().map(move |id| (d, id)))
        .map(|(d, id)| build(d, id, &num))
        .collect()
}
