//! Numeric strategies: one arithmetic interface, two modes.
//!
//! Purpose
//! - Builders are written once against `Numeric` and instantiated with either
//!   `Float` (machine `f64`, nalgebra for roots and solves) or `Exact`
//!   (rationals, radicals and real algebraic roots as `Expr`).
//! - A construction runs in exactly one mode: every value a builder touches is
//!   `N::Value`, so mixing modes does not type-check.
//!
//! Capabilities
//! - Ring/field arithmetic through the `Scalar` operator bounds.
//! - `sqrt`, `cos_pi`/`sin_pi` (cosine/sine of rational multiples of π), `pi`.
//! - `poly_roots`: roots of an integer polynomial, ascending, same order in both modes.
//! - `solve_linear`: square systems; singular matrices are hard errors.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::cfg::Tolerances;
use crate::error::QuadratureError;

mod exact;
mod float;

pub use exact::{Atom, Exact, Expr, Monomial, RealRoot};
pub use float::Float;

/// Arithmetic a scheme value must support.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + Send
    + Sync
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Scalar for T where
    T: Clone
        + Debug
        + PartialEq
        + Send
        + Sync
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
{
}

/// Numeric mode injected into every builder.
pub trait Numeric {
    type Value: Scalar;

    fn tolerances(&self) -> &Tolerances;

    fn int(&self, n: i64) -> Self::Value;
    /// `num / den`; `den` must be non-zero.
    fn frac(&self, num: i64, den: i64) -> Self::Value;
    fn pi(&self) -> Self::Value;
    fn sqrt(&self, x: &Self::Value) -> Self::Value;
    /// cos(num/den · π)
    fn cos_pi(&self, num: i64, den: i64) -> Self::Value;
    /// sin(num/den · π)
    fn sin_pi(&self, num: i64, den: i64) -> Self::Value;

    /// Real roots of `coeffs[0] x^n + … + coeffs[n]`, ascending.
    ///
    /// Only real roots are returned: builders take them as squared radii, so a
    /// polynomial with a non-real root fails with `NonRealRoots` instead of
    /// yielding complex values.
    fn poly_roots(&self, coeffs: &[i64]) -> Result<Vec<Self::Value>, QuadratureError>;

    /// Solve `matrix · x = rhs` for square `matrix` (rows outer).
    fn solve_linear(
        &self,
        matrix: &[Vec<Self::Value>],
        rhs: &[Self::Value],
    ) -> Result<Vec<Self::Value>, QuadratureError>;

    fn to_f64(&self, x: &Self::Value) -> f64;
}

/// Row `k` holds `node_i^k`, i.e. numpy's `vander(nodes, increasing=True).T`.
pub fn vandermonde<V: Scalar>(nodes: &[V]) -> Vec<Vec<V>> {
    let mut rows = Vec::with_capacity(nodes.len());
    let mut row: Vec<V> = vec![V::one(); nodes.len()];
    for _ in 0..nodes.len() {
        let next = row
            .iter()
            .zip(nodes)
            .map(|(r, x)| r.clone() * x.clone())
            .collect();
        rows.push(std::mem::replace(&mut row, next));
    }
    rows
}

/// Validate a square system; returns its size.
pub(crate) fn check_square<V>(matrix: &[Vec<V>], rhs: &[V]) -> Result<usize, QuadratureError> {
    let n = matrix.len();
    let bad_row = matrix.iter().find(|row| row.len() != n);
    if n == 0 || rhs.len() != n || bad_row.is_some() {
        return Err(QuadratureError::NotSquare {
            rows: n,
            cols: bad_row.map_or(n, |row| row.len()),
            rhs: rhs.len(),
        });
    }
    Ok(n)
}

/// Leading coefficient non-zero and degree at least one.
pub(crate) fn check_polynomial(coeffs: &[i64]) -> Result<(), QuadratureError> {
    match coeffs.first() {
        None | Some(0) => Err(QuadratureError::InvalidPolynomial {
            coeffs: coeffs.to_vec(),
            reason: "leading coefficient must be non-zero",
        }),
        Some(_) if coeffs.len() < 2 => Err(QuadratureError::InvalidPolynomial {
            coeffs: coeffs.to_vec(),
            reason: "degree must be at least one",
        }),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests;
