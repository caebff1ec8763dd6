//! Quadrature rules for the square `[-1, 1]²`.
//!
//! - `stroud(id, num)`: Stroud's C2 tables (see `stroud::IDS`).
//! - `miller`, `burnside`, `tyler`, `albrecht_collatz`, `maxwell`, `meister`:
//!   the older rules those tables point to.
//! - `scheme(id, num)`: lookup through the registry.

mod classic;
mod stroud;

pub use classic::{albrecht_collatz, burnside, maxwell, meister, miller, tyler};
pub use stroud::{stroud, IDS};

use crate::error::QuadratureError;
use crate::registry::{self, Registered};
use crate::scheme::{Domain, Scheme};

/// Build the square scheme registered under `id`.
pub fn scheme<N: Registered>(id: &str, num: &N) -> Result<Scheme<N::Value>, QuadratureError> {
    registry::build(Domain::Square, id, num)
}

/// Registered square identifiers, sorted.
pub fn ids() -> Vec<&'static str> {
    registry::ids(Domain::Square)
}
