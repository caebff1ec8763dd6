//! Quadrature rules for the unit disk.
//!
//! - `albrecht(index, num)`: Albrecht's rules 1..=8 (degrees 3, 5, …, 17).
//! - `scheme(id, num)`: lookup by identifier (`"Albrecht(3)"`) through the registry.

mod albrecht;

pub use albrecht::albrecht;

use crate::error::QuadratureError;
use crate::registry::{self, Registered};
use crate::scheme::{Domain, Scheme};

/// Build the disk scheme registered under `id`.
pub fn scheme<N: Registered>(id: &str, num: &N) -> Result<Scheme<N::Value>, QuadratureError> {
    registry::build(Domain::Disk, id, num)
}

/// Registered disk identifiers, sorted.
pub fn ids() -> Vec<&'static str> {
    registry::ids(Domain::Disk)
}
