//! Table assembler: `(weight, orbit)` pairs → aligned flat arrays.
//!
//! Orbits are concatenated in input order; a uniform weight is broadcast to
//! every point of its orbit.

use crate::error::QuadratureError;

/// Weight attached to one orbit.
#[derive(Clone, Debug, PartialEq)]
pub enum Weight<V> {
    /// One value shared by every point of the orbit.
    Uniform(V),
    /// One value per point; length must equal the orbit size.
    PerPoint(Vec<V>),
}

/// Flatten orbits into `(points, weights)` with `points.len() == weights.len()`.
pub fn untangle<V: Clone, const D: usize>(
    data: Vec<(Weight<V>, Vec<[V; D]>)>,
) -> Result<(Vec<[V; D]>, Vec<V>), QuadratureError> {
    let total: usize = data.iter().map(|(_, pts)| pts.len()).sum();
    let mut points = Vec::with_capacity(total);
    let mut weights = Vec::with_capacity(total);
    for (orbit, (weight, pts)) in data.into_iter().enumerate() {
        match weight {
            Weight::Uniform(w) => weights.extend(std::iter::repeat(w).take(pts.len())),
            Weight::PerPoint(ws) => {
                if ws.len() != pts.len() {
                    return Err(QuadratureError::ShapeMismatch {
                        orbit,
                        weights: ws.len(),
                        points: pts.len(),
                    });
                }
                weights.extend(ws);
            }
        }
        points.extend(pts);
    }
    Ok((points, weights))
}
