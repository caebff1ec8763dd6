//! Closed-form quadrature rules for the unit disk and the square `[-1, 1]²`.
//!
//! Every rule is a published table of points and weights, rebuilt from its
//! closed-form coefficients in one of two numeric modes:
//! - `Float`: `f64`, with nalgebra for auxiliary polynomial roots and moment solves.
//! - `Exact`: `Expr`, exact algebraic numbers; weight sums equal the domain
//!   measure structurally.
//!
//! Entry points
//! - `disk::scheme("Albrecht(4)", &Float::default())`
//! - `square::scheme("C2 5-4", &Exact::default())`
//! - `registry::ids(Domain::Square)` to enumerate what is available.
//!
//! Weights include the domain measure (π for the disk, 4 for the square).
//! Known-defective published rules are built as published, carry the degree
//! they actually attain, and report the discrepancy through `Scheme::defect()`
//! and a `tracing` warning.

pub mod api;
pub mod cfg;
pub mod disk;
pub mod error;
pub mod ncube;
pub mod numeric;
pub mod orbit;
pub mod registry;
pub mod scheme;
pub mod square;
pub mod table;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::Tolerances;
pub use error::QuadratureError;
pub use numeric::{Exact, Expr, Float, Numeric};
pub use scheme::{Defect, Domain, Scheme};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::Tolerances;
    pub use crate::error::QuadratureError;
    pub use crate::numeric::{Exact, Expr, Float, Numeric};
    pub use crate::registry::Registered;
    pub use crate::scheme::{Defect, Domain, Scheme};
    pub use crate::{disk, square};
}
