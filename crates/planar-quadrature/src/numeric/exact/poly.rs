//! Dense univariate polynomials over Q (ascending coefficients).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// `c[0] + c[1] x + … + c[n] x^n`; trailing zeros are stripped, so the zero
/// polynomial has no coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct QPoly {
    c: Vec<BigRational>,
}

impl QPoly {
    pub(crate) fn new(mut c: Vec<BigRational>) -> Self {
        while c.last().is_some_and(Zero::is_zero) {
            c.pop();
        }
        Self { c }
    }

    /// From integer coefficients, highest degree first.
    pub(crate) fn from_desc(coeffs: &[i64]) -> Self {
        Self::new(
            coeffs
                .iter()
                .rev()
                .map(|&a| BigRational::from_integer(BigInt::from(a)))
                .collect(),
        )
    }

    pub(crate) fn from_ints(c: &[BigInt]) -> Self {
        Self::new(c.iter().cloned().map(BigRational::from_integer).collect())
    }

    pub(crate) fn constant(a: BigRational) -> Self {
        Self::new(vec![a])
    }

    pub(crate) fn coeffs(&self) -> &[BigRational] {
        &self.c
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.c.is_empty()
    }

    /// Degree; the zero polynomial reports 0.
    pub(crate) fn degree(&self) -> usize {
        self.c.len().saturating_sub(1)
    }

    pub(crate) fn lead(&self) -> BigRational {
        self.c.last().cloned().unwrap_or_else(BigRational::zero)
    }

    pub(crate) fn plus(&self, other: &Self) -> Self {
        let n = self.c.len().max(other.c.len());
        let zero = BigRational::zero();
        Self::new(
            (0..n)
                .map(|k| self.c.get(k).unwrap_or(&zero) + other.c.get(k).unwrap_or(&zero))
                .collect(),
        )
    }

    pub(crate) fn minus(&self, other: &Self) -> Self {
        self.plus(&other.scale(&-BigRational::one()))
    }

    pub(crate) fn scale(&self, a: &BigRational) -> Self {
        Self::new(self.c.iter().map(|x| x * a).collect())
    }

    pub(crate) fn times(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::new(vec![]);
        }
        let mut out = vec![BigRational::zero(); self.c.len() + other.c.len() - 1];
        for (i, a) in self.c.iter().enumerate() {
            for (j, b) in other.c.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Self::new(out)
    }

    /// Euclidean division; `divisor` must be non-zero.
    pub(crate) fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let mut rem = self.c.clone();
        let d = divisor.c.len();
        if d == 0 || rem.len() < d {
            return (Self::new(vec![]), self.clone());
        }
        let lead = divisor.lead();
        let mut quot = vec![BigRational::zero(); rem.len() - d + 1];
        for k in (0..quot.len()).rev() {
            let q = &rem[k + d - 1] / &lead;
            for (j, b) in divisor.c.iter().enumerate() {
                rem[k + j] -= &q * b;
            }
            quot[k] = q;
        }
        rem.truncate(d - 1);
        (Self::new(quot), Self::new(rem))
    }

    pub(crate) fn rem(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }

    /// Monic greatest common divisor.
    pub(crate) fn gcd(&self, other: &Self) -> Self {
        let (mut a, mut b) = (self.clone(), other.clone());
        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }
        if a.is_zero() {
            return a;
        }
        let inv = a.lead().recip();
        a.scale(&inv)
    }

    /// `self^{-1} mod modulus`, if `gcd(self, modulus) == 1`.
    pub(crate) fn inverse_mod(&self, modulus: &Self) -> Option<Self> {
        // Extended Euclid, tracking only the coefficient of `self`.
        let (mut r0, mut r1) = (modulus.clone(), self.rem(modulus));
        let (mut t0, mut t1) = (Self::new(vec![]), Self::constant(BigRational::one()));
        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1);
            let t = t0.minus(&q.times(&t1));
            r0 = std::mem::replace(&mut r1, r);
            t0 = std::mem::replace(&mut t1, t);
        }
        if r0.degree() != 0 || r0.is_zero() {
            return None;
        }
        let inv = r0.lead().recip();
        Some(t0.scale(&inv).rem(modulus))
    }

    pub(crate) fn derivative(&self) -> Self {
        Self::new(
            self.c
                .iter()
                .enumerate()
                .skip(1)
                .map(|(k, a)| a * BigRational::from_integer(BigInt::from(k)))
                .collect(),
        )
    }

    pub(crate) fn eval(&self, x: &BigRational) -> BigRational {
        self.c
            .iter()
            .rev()
            .fold(BigRational::zero(), |acc, a| acc * x + a)
    }

    /// Sturm sequence `p, p', -rem(p, p'), …`.
    pub(crate) fn sturm(&self) -> Vec<Self> {
        let mut seq = vec![self.clone(), self.derivative()];
        loop {
            let n = seq.len();
            if seq[n - 1].is_zero() {
                seq.pop();
                break;
            }
            let r = seq[n - 2].rem(&seq[n - 1]);
            if r.is_zero() {
                break;
            }
            seq.push(r.scale(&-BigRational::one()));
        }
        seq
    }

    /// Every real root lies in `(-B, B)`: `B = 1 + max |c_k / c_n|`.
    pub(crate) fn cauchy_bound(&self) -> BigRational {
        let lead = self.lead().abs();
        let max = self.c[..self.degree()]
            .iter()
            .map(|a| a.abs() / &lead)
            .max()
            .unwrap_or_else(BigRational::zero);
        max + BigRational::one()
    }

    /// Power sums `s_0..s_{count-1}` of the roots (Newton's identities).
    pub(crate) fn power_sums(&self, count: usize) -> Vec<BigRational> {
        let d = self.degree();
        let lead = self.lead();
        let a = |j: usize| self.c.get(j).cloned().unwrap_or_else(BigRational::zero);
        let mut s: Vec<BigRational> = Vec::with_capacity(count);
        for m in 0..count {
            if m == 0 {
                s.push(BigRational::from_integer(BigInt::from(d)));
                continue;
            }
            // lead·s_m + Σ_{j=1}^{min(m-1,d)} a_{d-j} s_{m-j} + [m <= d] m·a_{d-m} = 0
            let mut acc = BigRational::zero();
            for j in 1..m.min(d + 1) {
                acc += a(d - j) * &s[m - j];
            }
            if m <= d {
                acc += a(d - m) * BigRational::from_integer(BigInt::from(m));
            }
            s.push(-acc / &lead);
        }
        s
    }
}

/// Number of sign changes in `seq` evaluated at `x` (zeros skipped).
pub(crate) fn sign_changes(seq: &[QPoly], x: &BigRational) -> usize {
    let mut last = 0i8;
    let mut changes = 0;
    for p in seq {
        let v = p.eval(x);
        let s = if v.is_positive() {
            1
        } else if v.is_negative() {
            -1
        } else {
            0
        };
        if s != 0 {
            if last != 0 && s != last {
                changes += 1;
            }
            last = s;
        }
    }
    changes
}
