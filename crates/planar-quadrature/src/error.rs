//! Construction errors.
//!
//! Every failure is fatal to the construction call that raised it; nothing is
//! retried and nothing falls back to an approximate table.

use crate::scheme::Domain;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuadratureError {
    /// The dispatcher has no builder under this identifier.
    #[error("illegal {domain} scheme identifier '{id}'")]
    UnknownScheme { domain: Domain, id: String },

    /// A moment system could not be solved. Points at a transcription defect.
    /// `matrix` holds the system's entries as f64, row by row.
    #[error("singular {size}x{size} moment system in scheme '{scheme}': {matrix}")]
    SingularSystem {
        scheme: String,
        size: usize,
        matrix: String,
    },

    /// A per-point weight array disagrees with its orbit.
    #[error("orbit {orbit}: {weights} weights for {points} points")]
    ShapeMismatch {
        orbit: usize,
        weights: usize,
        points: usize,
    },

    #[error("linear system is not square: {rows} rows, {cols} columns, {rhs} right-hand sides")]
    NotSquare { rows: usize, cols: usize, rhs: usize },

    /// Squared radii must be real; a complex root means the coefficients are wrong.
    #[error("polynomial {coeffs:?} has non-real roots (scheme '{scheme}')")]
    NonRealRoots { scheme: String, coeffs: Vec<i64> },

    #[error("invalid polynomial {coeffs:?}: {reason}")]
    InvalidPolynomial {
        coeffs: Vec<i64>,
        reason: &'static str,
    },
}

impl QuadratureError {
    pub(crate) fn singular<V>(matrix: &[Vec<V>], to_f64: impl Fn(&V) -> f64) -> Self {
        let rows: Vec<Vec<f64>> = matrix
            .iter()
            .map(|row| row.iter().map(&to_f64).collect())
            .collect();
        Self::SingularSystem {
            scheme: String::new(),
            size: matrix.len(),
            matrix: format!("{rows:?}"),
        }
    }

    pub(crate) fn non_real(coeffs: &[i64]) -> Self {
        Self::NonRealRoots {
            scheme: String::new(),
            coeffs: coeffs.to_vec(),
        }
    }

    /// Attach the scheme name to adapter errors raised inside a builder.
    pub fn in_scheme(self, name: &str) -> Self {
        match self {
            Self::SingularSystem { size, matrix, .. } => Self::SingularSystem {
                scheme: name.to_string(),
                size,
                matrix,
            },
            Self::NonRealRoots { coeffs, .. } => Self::NonRealRoots {
                scheme: name.to_string(),
                coeffs,
            },
            other => other,
        }
    }
}
