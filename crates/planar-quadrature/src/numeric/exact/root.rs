//! Real algebraic numbers: a defining polynomial plus an isolating interval.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::poly::{sign_changes, QPoly};
use crate::cfg::ROOT_REFINE_BITS;
use crate::error::QuadratureError;
use crate::numeric::check_polynomial;

/// The `index`-th smallest real root of a squarefree integer polynomial.
///
/// Identity is `(poly, index)`; `lo < root < hi` is kept only for evaluation.
#[derive(Clone, Debug)]
pub struct RealRoot {
    /// Primitive, positive leading coefficient, ascending.
    poly: Vec<BigInt>,
    index: usize,
    lo: BigRational,
    hi: BigRational,
}

impl RealRoot {
    /// All real roots of `coeffs` (highest degree first), ascending.
    ///
    /// Fails unless the polynomial is squarefree with every root real.
    pub fn isolate(coeffs: &[i64]) -> Result<Vec<RealRoot>, QuadratureError> {
        check_polynomial(coeffs)?;
        let p = QPoly::from_desc(coeffs);
        let d = p.degree();
        if p.gcd(&p.derivative()).degree() > 0 {
            return Err(QuadratureError::InvalidPolynomial {
                coeffs: coeffs.to_vec(),
                reason: "repeated roots are not supported in exact mode",
            });
        }
        let seq = p.sturm();
        let bound = p.cauchy_bound();
        let count = |a: &BigRational, b: &BigRational| sign_changes(&seq, a) - sign_changes(&seq, b);
        if count(&-bound.clone(), &bound) != d {
            return Err(QuadratureError::non_real(coeffs));
        }

        let poly = primitive(coeffs);
        let width = BigRational::new(BigInt::one(), BigInt::one() << ROOT_REFINE_BITS);
        let two = BigRational::from_integer(BigInt::from(2));
        let mut out = Vec::with_capacity(d);
        // Bisect (lo, hi] intervals until each holds one root.
        let mut stack = vec![(-bound.clone(), bound)];
        while let Some((lo, hi)) = stack.pop() {
            match count(&lo, &hi) {
                0 => {}
                1 => out.push((lo, hi)),
                _ => {
                    let mid = (&lo + &hi) / &two;
                    stack.push((mid.clone(), hi));
                    stack.push((lo, mid));
                }
            }
        }
        out.sort_by(|a, b| a.0.cmp(&b.0));

        let roots = out
            .into_iter()
            .enumerate()
            .map(|(index, (lo, hi))| {
                let (lo, hi) = refine(&p, &seq, lo, hi, &width);
                RealRoot {
                    poly: poly.clone(),
                    index,
                    lo,
                    hi,
                }
            })
            .collect::<Vec<_>>();
        tracing::trace!(degree = d, "isolated exact roots");
        Ok(roots)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn degree(&self) -> usize {
        self.poly.len() - 1
    }

    /// Ascending integer coefficients of the defining polynomial.
    pub fn poly(&self) -> &[BigInt] {
        &self.poly
    }

    pub(crate) fn qpoly(&self) -> QPoly {
        QPoly::from_ints(&self.poly)
    }

    /// Same defining polynomial, different index.
    pub(crate) fn sibling_of(&self, other: &RealRoot) -> bool {
        self.poly == other.poly
    }

    /// Midpoint of the isolating interval.
    pub fn to_f64(&self) -> f64 {
        let mid = (&self.lo + &self.hi) / BigRational::from_integer(BigInt::from(2));
        ratio_to_f64(&mid)
    }

    /// `x^exp mod p`, ascending, length `degree()`.
    pub(crate) fn power(&self, exp: u32) -> Vec<BigRational> {
        let p = self.qpoly();
        let mut c = vec![BigRational::zero(); exp as usize + 1];
        c[exp as usize] = BigRational::one();
        let r = QPoly::new(c).rem(&p);
        let mut out = r.coeffs().to_vec();
        out.resize(self.degree(), BigRational::zero());
        out
    }

    /// `Σ_i σ_i^exp` over all roots of the defining polynomial.
    pub(crate) fn power_sum(&self, exp: u32) -> BigRational {
        self.qpoly()
            .power_sums(exp as usize + 1)
            .pop()
            .unwrap_or_else(BigRational::zero)
    }
}

/// Narrow `(lo, hi]` by bisection until `hi - lo < width`.
fn refine(
    p: &QPoly,
    seq: &[QPoly],
    mut lo: BigRational,
    mut hi: BigRational,
    width: &BigRational,
) -> (BigRational, BigRational) {
    let two = BigRational::from_integer(BigInt::from(2));
    while &(&hi - &lo) >= width {
        let mid = (&lo + &hi) / &two;
        if p.eval(&mid).is_zero() {
            return (mid.clone(), mid);
        }
        if sign_changes(seq, &lo) - sign_changes(seq, &mid) == 1 {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    (lo, hi)
}

fn primitive(coeffs: &[i64]) -> Vec<BigInt> {
    let mut c: Vec<BigInt> = coeffs.iter().rev().map(|&a| BigInt::from(a)).collect();
    let g = c.iter().fold(BigInt::zero(), |g, a| g.gcd(a));
    let sign = if c.last().is_some_and(Signed::is_negative) {
        -BigInt::one()
    } else {
        BigInt::one()
    };
    if !g.is_zero() {
        for a in &mut c {
            *a = &*a / &g * &sign;
        }
    }
    c
}

pub(crate) fn ratio_to_f64(x: &BigRational) -> f64 {
    // Scale so both parts fit an f64 mantissa comfortably.
    let (n, d) = (x.numer(), x.denom());
    let shift = n.bits().max(d.bits()).saturating_sub(900) as usize;
    let n = (n >> shift).to_f64().unwrap_or(f64::NAN);
    let d = (d >> shift).to_f64().unwrap_or(f64::NAN);
    n / d
}

impl PartialEq for RealRoot {
    fn eq(&self, other: &Self) -> bool {
        self.poly == other.poly && self.index == other.index
    }
}

impl Eq for RealRoot {}

impl PartialOrd for RealRoot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RealRoot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.poly
            .cmp(&other.poly)
            .then(self.index.cmp(&other.index))
    }
}

impl fmt::Display for RealRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root{}[", self.index)?;
        for (k, a) in self.poly.iter().enumerate().rev() {
            if k + 1 < self.poly.len() {
                f.write_str(", ")?;
            }
            write!(f, "{a}")?;
        }
        f.write_str("]")
    }
}
