//! Numeric tolerances for scheme construction.
//!
//! - `Tolerances`: runtime knobs carried by both numeric strategies.
//! - Fixed internal constants for the exact arithmetic layer.
//!
//! Policy
//! - Defaults are chosen so that every registered scheme builds in both modes;
//!   callers only touch them for experiments (e.g. stricter root checks).

/// Tolerances used by the numeric strategies and the domain checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// Largest |Im z| / max(1, |z|) for a float root to count as real.
    pub root_imag: f64,
    /// LU pivots below `pivot * max|a_ij|` are treated as singular.
    pub pivot: f64,
    /// Newton polishing steps applied to companion-matrix roots.
    pub newton_steps: usize,
    /// Slack for `Domain::contains`.
    pub domain: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            root_imag: 1e-10,
            pivot: 1e-12,
            newton_steps: 3,
            domain: 1e-12,
        }
    }
}

/// Exact root intervals are bisected until their width is below 2^-ROOT_REFINE_BITS.
pub(crate) const ROOT_REFINE_BITS: u32 = 72;
/// Trial-division limit when splitting a radicand into square and square-free parts.
pub(crate) const SQUAREFREE_TRIAL_LIMIT: u64 = 100_000;
