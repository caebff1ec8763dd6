//! Symmetry-orbit expansion: canonical generators → concrete points.
//!
//! Planar orbits
//! - `origin`: `(0, 0)`.
//! - `sign_flips(x, y)`: `(±x, ±y)`.
//! - `axis_pair(r)`: `(±r, 0), (0, ±r)`.
//! - `full_symmetric(u, v)`: `(±u, ±v), (±v, ±u)`.
//! - `central_pair(x, y)`: `±(x, y)`, for rules with only central symmetry.
//! - `polygon(n, r, half_step)`: regular n-gon of radius `r`, vertex angles
//!   `2kπ/n` or `(2k+1)π/n`.
//!
//! n-dimensional helpers used by the n-cube builders: `origin_nd`,
//! `sign_flips_nd`, `tensor_grid`.
//!
//! Points are returned in a fixed order and are never deduplicated; a
//! generator with a zero coordinate yields repeated points.

use crate::numeric::{Numeric, Scalar};

pub fn origin<V: Scalar>() -> Vec<[V; 2]> {
    vec![[V::zero(), V::zero()]]
}

/// `(x, y), (x, -y), (-x, y), (-x, -y)`.
pub fn sign_flips<V: Scalar>(x: V, y: V) -> Vec<[V; 2]> {
    vec![
        [x.clone(), y.clone()],
        [x.clone(), -y.clone()],
        [-x.clone(), y.clone()],
        [-x, -y],
    ]
}

/// `(r, 0), (-r, 0), (0, r), (0, -r)`.
pub fn axis_pair<V: Scalar>(r: V) -> Vec<[V; 2]> {
    vec![
        [r.clone(), V::zero()],
        [-r.clone(), V::zero()],
        [V::zero(), r.clone()],
        [V::zero(), -r],
    ]
}

/// `(x, y), (-x, -y)`.
pub fn central_pair<V: Scalar>(x: V, y: V) -> Vec<[V; 2]> {
    vec![[x.clone(), y.clone()], [-x, -y]]
}

/// Orbit of `(u, v)` under the full symmetry group of the square (8 points).
pub fn full_symmetric<V: Scalar>(u: V, v: V) -> Vec<[V; 2]> {
    let mut out = sign_flips(u.clone(), v.clone());
    out.extend(sign_flips(v, u));
    out
}

/// `radius · (cos α_k, sin α_k)` for `k = 0..n`, `α_k = (2k + h)π/n`, `h = half_step as i64`.
pub fn polygon<N: Numeric>(num: &N, n: i64, radius: &N::Value, half_step: bool) -> Vec<[N::Value; 2]> {
    let h = i64::from(half_step);
    (0..n)
        .map(|k| {
            [
                radius.clone() * num.cos_pi(2 * k + h, n),
                radius.clone() * num.sin_pi(2 * k + h, n),
            ]
        })
        .collect()
}

pub fn origin_nd<V: Scalar, const D: usize>() -> Vec<[V; D]> {
    vec![std::array::from_fn(|_| V::zero())]
}

/// All `2^D` sign patterns of `x`; the first coordinate flips slowest.
pub fn sign_flips_nd<V: Scalar, const D: usize>(x: &[V; D]) -> Vec<[V; D]> {
    (0..1usize << D)
        .map(|mask| {
            std::array::from_fn(|k| {
                if mask >> (D - 1 - k) & 1 == 1 {
                    -x[k].clone()
                } else {
                    x[k].clone()
                }
            })
        })
        .collect()
}

/// Cartesian product of a 1D rule with itself: points and product weights.
/// The first coordinate varies slowest.
pub fn tensor_grid<V: Scalar, const D: usize>(nodes: &[V], weights: &[V]) -> (Vec<[V; D]>, Vec<V>) {
    let m = nodes.len().min(weights.len());
    let total = m.pow(D as u32);
    let mut points = Vec::with_capacity(total);
    let mut ws = Vec::with_capacity(total);
    for flat in 0..total {
        let mut idx = [0usize; D];
        let mut rest = flat;
        for slot in idx.iter_mut().rev() {
            *slot = rest % m;
            rest /= m;
        }
        points.push(std::array::from_fn(|k| nodes[idx[k]].clone()));
        ws.push(idx.iter().fold(V::one(), |acc, &i| acc * weights[i].clone()));
    }
    (points, ws)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Exact, Expr, Float};
    use proptest::prelude::*;

    #[test]
    fn shapes_have_expected_sizes() {
        assert_eq!(origin::<f64>().len(), 1);
        assert_eq!(
            sign_flips(1.0, 2.0),
            vec![[1.0, 2.0], [1.0, -2.0], [-1.0, 2.0], [-1.0, -2.0]]
        );
        assert_eq!(axis_pair(1.0).len(), 4);
        assert_eq!(full_symmetric(1.0, 2.0).len(), 8);
        assert_eq!(central_pair(1.0, -2.0), vec![[1.0, -2.0], [-1.0, 2.0]]);
        assert_eq!(sign_flips_nd(&[1.0, 2.0, 3.0]).len(), 8);
        let (p, w) = tensor_grid::<f64, 3>(&[-1.0, 0.0, 1.0], &[1.0, 4.0, 1.0]);
        assert_eq!((p.len(), w.len()), (27, 27));
    }

    #[test]
    fn polygon_vertices_follow_angle_convention() {
        let f = Float::default();
        let pts = polygon(&f, 4, &1.0, true);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let expected = [[h, h], [-h, h], [-h, -h], [h, -h]];
        for (p, e) in pts.iter().zip(&expected) {
            assert!((p[0] - e[0]).abs() < 1e-15 && (p[1] - e[1]).abs() < 1e-15);
        }
        let pts = polygon(&f, 6, &2.0, false);
        assert!((pts[0][0] - 2.0).abs() < 1e-15 && pts[0][1].abs() < 1e-15);
        assert!((pts[1][0] - 1.0).abs() < 1e-14);
    }

    #[test]
    fn exact_polygon_uses_closed_forms() {
        let e = Exact::default();
        let pts = polygon(&e, 4, &Expr::from(1), false);
        assert_eq!(pts[0], [Expr::from(1), Expr::from(0)]);
        assert_eq!(pts[1], [Expr::from(0), Expr::from(1)]);
        assert_eq!(pts[2], [Expr::from(-1), Expr::from(0)]);
        let pts = polygon(&e, 6, &Expr::from(1), true);
        assert_eq!(pts[1], [Expr::from(0), Expr::from(1)]);
    }

    #[test]
    fn tensor_grid_first_coordinate_slowest() {
        let (p, w) = tensor_grid::<f64, 2>(&[0.0, 1.0], &[2.0, 3.0]);
        assert_eq!(p, vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]);
        assert_eq!(w, vec![4.0, 6.0, 6.0, 9.0]);
    }

    proptest! {
        #[test]
        fn full_symmetric_is_closed_under_swaps_and_flips(u in -1.0f64..1.0, v in -1.0f64..1.0) {
            let pts = full_symmetric(u, v);
            for p in &pts {
                for q in [[p[1], p[0]], [-p[0], p[1]], [p[0], -p[1]]] {
                    prop_assert!(pts.contains(&q));
                }
            }
        }

        #[test]
        fn polygon_points_lie_on_circle(n in 3i64..16, r in 0.0f64..1.0, half in any::<bool>()) {
            let f = Float::default();
            for p in polygon(&f, n, &r, half) {
                prop_assert!(((p[0] * p[0] + p[1] * p[1]).sqrt() - r).abs() < 1e-12);
            }
        }

        #[test]
        fn sign_flips_sum_to_zero(x in prop::array::uniform3(-5.0f64..5.0)) {
            let pts = sign_flips_nd(&x);
            for k in 0..3 {
                prop_assert!(pts.iter().map(|p| p[k]).sum::<f64>().abs() < 1e-12);
            }
        }
    }
}
