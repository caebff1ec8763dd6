//! Exact strategy: values are `Expr` (rationals, radicals, algebraic roots).
//!
//! - `poly_roots`: Sturm isolation over Q; each root is a `RealRoot` atom.
//! - `solve_linear`: a Vandermonde system over all roots of one polynomial with
//!   rational right-hand side is solved in closed form through the Lagrange
//!   basis in `Q[x]/(p)`. Anything else goes through Gaussian elimination.

use std::sync::Arc;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::{check_square, Numeric};
use crate::cfg::Tolerances;
use crate::error::QuadratureError;

mod expr;
mod poly;
mod root;

pub use expr::{Atom, Expr, Monomial};
pub use root::RealRoot;

use poly::QPoly;

/// Exact mode: values are `Expr`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exact {
    tol: Tolerances,
}

impl Exact {
    pub fn with_tolerances(tol: Tolerances) -> Self {
        Self { tol }
    }
}

fn ratio(num: i64, den: i64) -> BigRational {
    BigRational::new(BigInt::from(num), BigInt::from(den))
}

impl Numeric for Exact {
    type Value = Expr;

    fn tolerances(&self) -> &Tolerances {
        &self.tol
    }

    fn int(&self, n: i64) -> Expr {
        Expr::from(n)
    }
    fn frac(&self, num: i64, den: i64) -> Expr {
        Expr::rational(ratio(num, den))
    }
    fn pi(&self) -> Expr {
        Expr::pi()
    }
    fn sqrt(&self, x: &Expr) -> Expr {
        x.sqrt()
    }
    fn cos_pi(&self, num: i64, den: i64) -> Expr {
        Expr::cos_pi(&ratio(num, den))
    }
    fn sin_pi(&self, num: i64, den: i64) -> Expr {
        // sin(xπ) = cos((1/2 - x)π)
        Expr::cos_pi(&ratio(den - 2 * num, 2 * den))
    }

    fn poly_roots(&self, coeffs: &[i64]) -> Result<Vec<Expr>, QuadratureError> {
        Ok(RealRoot::isolate(coeffs)?
            .into_iter()
            .map(Expr::root)
            .collect())
    }

    fn solve_linear(&self, matrix: &[Vec<Expr>], rhs: &[Expr]) -> Result<Vec<Expr>, QuadratureError> {
        let n = check_square(matrix, rhs)?;
        if let Some(x) = solve_vandermonde(matrix, rhs) {
            tracing::trace!(size = n, "exact Vandermonde solve");
            return Ok(x);
        }
        tracing::trace!(size = n, "exact Gaussian elimination");
        self.solve_gauss(matrix, rhs)
    }

    fn to_f64(&self, x: &Expr) -> f64 {
        x.to_f64()
    }
}

impl Exact {
    /// Gaussian elimination with pivots chosen by f64 magnitude.
    ///
    /// A rational pivot is exact, so only zero rejects it. Pivots that still
    /// carry radicals or roots are rejected below `tol.pivot` relative to the
    /// largest entry, since a cancellation to zero may not be visible
    /// structurally.
    fn solve_gauss(&self, matrix: &[Vec<Expr>], rhs: &[Expr]) -> Result<Vec<Expr>, QuadratureError> {
        let n = matrix.len();
        let singular = || QuadratureError::singular(matrix, Expr::to_f64);
        let mut a: Vec<Vec<Expr>> = matrix
            .iter()
            .zip(rhs)
            .map(|(row, b)| {
                let mut r = row.clone();
                r.push(b.clone());
                r
            })
            .collect();
        let scale = matrix
            .iter()
            .flatten()
            .map(|x| x.to_f64().abs())
            .fold(0.0, f64::max);
        for col in 0..n {
            let (piv, mag) = (col..n)
                .filter(|&r| !a[r][col].is_zero())
                .map(|r| (r, a[r][col].to_f64().abs()))
                .fold((col, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });
            let accepted = match a[piv][col].as_rational() {
                Some(q) => !q.is_zero(),
                None => mag > self.tol.pivot * scale,
            };
            if !accepted {
                return Err(singular());
            }
            a.swap(col, piv);
            let inv = a[col][col].checked_recip().ok_or_else(singular)?;
            for r in (col + 1)..n {
                let factor = a[r][col].clone() * inv.clone();
                if factor.is_zero() {
                    continue;
                }
                for c in col..=n {
                    let delta = factor.clone() * a[col][c].clone();
                    a[r][c] = a[r][c].clone() - delta;
                }
            }
        }
        let mut x = vec![Expr::zero(); n];
        for r in (0..n).rev() {
            let mut acc = a[r][n].clone();
            for c in (r + 1)..n {
                acc = acc - a[r][c].clone() * x[c].clone();
            }
            let inv = a[r][r].checked_recip().ok_or_else(singular)?;
            x[r] = acc * inv;
        }
        Ok(x)
    }
}

/// Closed-form solve of `Σ_i B_i σ_i^k = b_k` (`k < d`) when the columns are
/// the `d` distinct roots of one degree-`d` polynomial `p` and `b` is rational.
///
/// With `a` the coefficients of `p`, `B_i = g(σ_i)` where
/// `g = N · (p')^{-1} mod p` and `N(s) = Σ_k b_k Σ_{j>k} a_j s^{j-k-1}`.
fn solve_vandermonde(matrix: &[Vec<Expr>], rhs: &[Expr]) -> Option<Vec<Expr>> {
    let n = matrix.len();
    let roots: Vec<&Arc<RealRoot>> = matrix.get(1)?.iter().map(Expr::as_root).collect::<Option<_>>()?;
    let first = roots.first()?;
    if first.degree() != n || roots.iter().any(|r| !r.sibling_of(first)) {
        return None;
    }
    let mut seen = vec![false; n];
    for r in &roots {
        if std::mem::replace(&mut seen[r.index()], true) {
            return None;
        }
    }
    for (k, row) in matrix.iter().enumerate() {
        for (entry, r) in row.iter().zip(&roots) {
            let want = Expr::eval_at_root(r, &r.power(k as u32));
            if *entry != want {
                return None;
            }
        }
    }
    let b: Vec<BigRational> = rhs.iter().map(Expr::as_rational).collect::<Option<_>>()?;

    let p = first.qpoly();
    let a = p.coeffs();
    let mut num = vec![BigRational::zero(); n];
    for (k, bk) in b.iter().enumerate() {
        for j in (k + 1)..=n {
            num[j - k - 1] += bk * &a[j];
        }
    }
    let inv = p.derivative().inverse_mod(&p)?;
    let g = QPoly::new(num).times(&inv).rem(&p);
    let mut gc = g.coeffs().to_vec();
    gc.resize(n, BigRational::zero());
    Some(
        roots
            .into_iter()
            .map(|r| Expr::eval_at_root(r, &gc))
            .collect(),
    )
}

#[cfg(test)]
mod tests;
