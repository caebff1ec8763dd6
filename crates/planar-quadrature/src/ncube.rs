//! Rules for the cube `[-1, 1]^D`, generic in the dimension.
//!
//! - `ewing::<N, D>`: centre plus the `2^D` vertices, degree 3.
//! - `stroud::<N, D>(id)`: Stroud's Cn rules; `"Cn 3-6"` (product Simpson) is available.
//!
//! The square tables use both at `D = 2`.

use crate::error::QuadratureError;
use crate::numeric::Numeric;
use crate::orbit::{origin_nd, sign_flips_nd, tensor_grid};
use crate::scheme::{Domain, Scheme};
use crate::table::Weight::{PerPoint, Uniform};

/// G. A. Ewing, On approximate cubature, Amer. Math. Monthly 48 (1941).
pub fn ewing<N: Numeric, const D: usize>(num: &N) -> Result<Scheme<N::Value, D>, QuadratureError> {
    let vertex = std::array::from_fn(|_| num.int(1));
    let vertex_weight = num.int(1) / (num.int(3) * Domain::NCube(D).measure(num));
    let data = vec![
        (Uniform(num.frac(2, 3)), origin_nd()),
        (Uniform(vertex_weight), sign_flips_nd(&vertex)),
    ];
    Scheme::assemble("Ewing", 3, data, Domain::NCube(D).measure(num))
}

pub fn stroud<N: Numeric, const D: usize>(
    id: &str,
    num: &N,
) -> Result<Scheme<N::Value, D>, QuadratureError> {
    match id {
        "Cn 3-6" => {
            let nodes = [num.int(-1), num.int(0), num.int(1)];
            let weights = [num.frac(1, 6), num.frac(2, 3), num.frac(1, 6)];
            let (points, w) = tensor_grid::<_, D>(&nodes, &weights);
            Scheme::assemble(id, 3, vec![(PerPoint(w), points)], Domain::NCube(D).measure(num))
        }
        _ => Err(QuadratureError::UnknownScheme {
            domain: Domain::NCube(D),
            id: id.to_string(),
        }),
    }
}
