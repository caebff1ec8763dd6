//! Machine-precision strategy (`f64`), backed by nalgebra.

use std::f64::consts::PI;

use nalgebra::{DMatrix, DVector};

use super::{check_polynomial, check_square, Numeric};
use crate::cfg::Tolerances;
use crate::error::QuadratureError;

/// Floating-point mode: values are `f64`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Float {
    tol: Tolerances,
}

impl Float {
    pub fn with_tolerances(tol: Tolerances) -> Self {
        Self { tol }
    }
}

/// Horner evaluation of `p` and `p'` (coefficients highest degree first).
fn horner(coeffs: &[f64], x: f64) -> (f64, f64) {
    coeffs.iter().fold((0.0, 0.0), |(p, dp), &c| (p * x + c, dp * x + p))
}

impl Numeric for Float {
    type Value = f64;

    fn tolerances(&self) -> &Tolerances {
        &self.tol
    }

    fn int(&self, n: i64) -> f64 {
        n as f64
    }
    fn frac(&self, num: i64, den: i64) -> f64 {
        num as f64 / den as f64
    }
    fn pi(&self) -> f64 {
        PI
    }
    fn sqrt(&self, x: &f64) -> f64 {
        x.sqrt()
    }
    fn cos_pi(&self, num: i64, den: i64) -> f64 {
        (num as f64 / den as f64 * PI).cos()
    }
    fn sin_pi(&self, num: i64, den: i64) -> f64 {
        (num as f64 / den as f64 * PI).sin()
    }

    /// Companion-matrix eigenvalues, Newton-polished and sorted ascending.
    fn poly_roots(&self, coeffs: &[i64]) -> Result<Vec<f64>, QuadratureError> {
        check_polynomial(coeffs)?;
        let lead = coeffs[0] as f64;
        let monic: Vec<f64> = coeffs.iter().map(|&c| c as f64 / lead).collect();
        let n = monic.len() - 1;

        // Companion matrix: ones on the subdiagonal, -a_k in the first row.
        let mut comp = DMatrix::<f64>::zeros(n, n);
        for k in 0..n {
            comp[(0, k)] = -monic[k + 1];
        }
        for k in 1..n {
            comp[(k, k - 1)] = 1.0;
        }
        let eig = comp.complex_eigenvalues();

        let mut roots = Vec::with_capacity(n);
        for z in eig.iter() {
            if z.im.abs() > self.tol.root_imag * z.norm().max(1.0) {
                return Err(QuadratureError::non_real(coeffs));
            }
            let mut x = z.re;
            for _ in 0..self.tol.newton_steps {
                let (p, dp) = horner(&monic, x);
                if dp == 0.0 {
                    break;
                }
                x -= p / dp;
            }
            roots.push(x);
        }
        roots.sort_by(f64::total_cmp);
        tracing::trace!(degree = n, ?roots, "float polynomial roots");
        Ok(roots)
    }

    /// LU with partial pivoting; pivots below `tol.pivot * max|a_ij|` are singular.
    fn solve_linear(&self, matrix: &[Vec<f64>], rhs: &[f64]) -> Result<Vec<f64>, QuadratureError> {
        let n = check_square(matrix, rhs)?;
        let a = DMatrix::from_fn(n, n, |i, j| matrix[i][j]);
        let scale = a.amax();
        let lu = a.lu();
        let u = lu.u();
        let min_pivot = (0..n).map(|i| u[(i, i)].abs()).fold(f64::INFINITY, f64::min);
        if scale == 0.0 || min_pivot <= self.tol.pivot * scale {
            return Err(QuadratureError::singular(matrix, |x| *x));
        }
        let b = DVector::from_column_slice(rhs);
        let x = lu
            .solve(&b)
            .ok_or_else(|| QuadratureError::singular(matrix, |x| *x))?;
        tracing::trace!(size = n, "float linear solve");
        Ok(x.iter().copied().collect())
    }

    fn to_f64(&self, x: &f64) -> f64 {
        *x
    }
}
