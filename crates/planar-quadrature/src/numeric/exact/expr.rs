//! Exact real numbers in canonical polynomial form.
//!
//! An `Expr` is a finite sum `Σ c_m · m` with rational `c_m` and monomials `m`
//! over a small alphabet of irrational atoms (π, square roots, cos(qπ), real
//! algebraic roots, reciprocals). Products are reduced on the fly:
//! - `√n · √n = n`, `√e · √e = e`;
//! - `σ^k` with `k >= deg p` is rewritten modulo the defining polynomial `p`;
//! - when a monomial appears with every root `σ_0..σ_{d-1}` of the same `p`,
//!   the `σ_0` coefficient is folded into the (rational) power sum.
//!
//! Equality is structural. The reductions above make the values produced by
//! the builders compare equal whenever their sums are the same algebraic
//! number, which is what weight-sum checks rely on; general zero testing is
//! out of reach.

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use num_bigint::BigInt;
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

use super::root::{ratio_to_f64, RealRoot};
use crate::cfg::SQUAREFREE_TRIAL_LIMIT;

/// Irrational building block of a monomial.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Atom {
    Pi,
    /// `√n`, `n > 1` square-free (up to the trial-division limit).
    SqrtInt(BigInt),
    /// `√e` for a non-rational `e` whose leading coefficient is 1.
    Sqrt(Arc<Expr>),
    /// `cos(qπ)`, `0 < q < 1/2`, not one of the closed-form angles.
    CosPi(BigRational),
    Root(Arc<RealRoot>),
    /// `1 / e` for a non-rational `e` whose leading coefficient is 1.
    Recip(Arc<Expr>),
}

impl Atom {
    fn to_f64(&self) -> f64 {
        match self {
            Atom::Pi => PI,
            Atom::SqrtInt(n) => n.to_f64().unwrap_or(f64::NAN).sqrt(),
            Atom::Sqrt(e) => e.to_f64().sqrt(),
            Atom::CosPi(q) => (ratio_to_f64(q) * PI).cos(),
            Atom::Root(r) => r.to_f64(),
            Atom::Recip(e) => e.to_f64().recip(),
        }
    }
}

/// Product of atoms with positive exponents; the empty monomial is 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Monomial(BTreeMap<Atom, u32>);

impl Monomial {
    fn single(atom: Atom) -> Self {
        Self(BTreeMap::from([(atom, 1)]))
    }

    fn as_single(&self) -> Option<(&Atom, u32)> {
        match self.0.len() {
            1 => self.0.iter().next().map(|(a, &k)| (a, k)),
            _ => None,
        }
    }

    /// The unique root atom, with its exponent and the remaining factors.
    fn split_root(&self) -> Option<(Arc<RealRoot>, u32, Monomial)> {
        let mut roots = self.0.iter().filter_map(|(a, &k)| match a {
            Atom::Root(r) => Some((r.clone(), k)),
            _ => None,
        });
        let (r, k) = roots.next()?;
        if roots.next().is_some() {
            return None;
        }
        let mut rest = self.clone();
        rest.0.remove(&Atom::Root(r.clone()));
        Some((r, k, rest))
    }
}

/// Exact real number; see the module docs for the representation.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Expr {
    terms: BTreeMap<Monomial, BigRational>,
}

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

impl Expr {
    pub fn rational(q: BigRational) -> Self {
        Self::from_terms(BTreeMap::from([(Monomial::default(), q)]))
    }

    pub fn pi() -> Self {
        Self::atom(Atom::Pi)
    }

    pub fn atom(atom: Atom) -> Self {
        Self {
            terms: BTreeMap::from([(Monomial::single(atom), BigRational::one())]),
        }
    }

    /// A real algebraic root; linear polynomials collapse to their rational root.
    pub fn root(r: RealRoot) -> Self {
        if r.degree() == 1 {
            let c = r.poly();
            return Self::rational(BigRational::new(-c[0].clone(), c[1].clone()));
        }
        Self::atom(Atom::Root(Arc::new(r)))
    }

    /// `Σ_j c_j σ^j` for a root `σ` (ascending `c`).
    fn root_poly(r: &Arc<RealRoot>, c: &[BigRational]) -> Self {
        let mut terms = BTreeMap::new();
        for (j, cj) in c.iter().enumerate() {
            let m = if j == 0 {
                Monomial::default()
            } else {
                Monomial(BTreeMap::from([(Atom::Root(r.clone()), j as u32)]))
            };
            terms.insert(m, cj.clone());
        }
        Self::from_terms(terms)
    }

    /// Evaluate a root polynomial at `σ` (used by the Lagrange solve).
    pub(crate) fn eval_at_root(r: &Arc<RealRoot>, c: &[BigRational]) -> Self {
        Self::root_poly(r, c)
    }

    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &BigRational)> {
        self.terms.iter()
    }

    /// `Some(q)` when the value is the rational `q`.
    pub fn as_rational(&self) -> Option<BigRational> {
        match self.terms.len() {
            0 => Some(BigRational::zero()),
            1 => self
                .terms
                .get(&Monomial::default())
                .cloned(),
            _ => None,
        }
    }

    /// The root atom when the value is exactly `σ`.
    pub(crate) fn as_root(&self) -> Option<&Arc<RealRoot>> {
        let (m, c) = self.terms.iter().next()?;
        if self.terms.len() != 1 || !c.is_one() {
            return None;
        }
        match m.as_single()? {
            (Atom::Root(r), 1) => Some(r),
            _ => None,
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.terms
            .iter()
            .map(|(m, c)| {
                m.0.iter()
                    .fold(ratio_to_f64(c), |acc, (a, &k)| acc * a.to_f64().powi(k as i32))
            })
            .sum()
    }

    fn scale(&self, q: &BigRational) -> Self {
        if q.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), c * q)).collect(),
        }
    }

    /// Coefficient of the first term, used to normalise radicands and divisors.
    fn leading(&self) -> Option<BigRational> {
        self.terms.values().next().cloned()
    }

    pub fn sqrt(&self) -> Self {
        if let Some(q) = self.as_rational() {
            if !q.is_negative() {
                return sqrt_rational(&q);
            }
        }
        match self.leading() {
            Some(c) => {
                let c = c.abs();
                let unit = self.scale(&c.recip());
                sqrt_rational(&c) * Self::atom(Atom::Sqrt(Arc::new(unit)))
            }
            None => Self::zero(),
        }
    }

    /// `cos(qπ)` with closed forms for multiples of π/6 and π/4.
    pub fn cos_pi(q: &BigRational) -> Self {
        let two = rat(2);
        let mut q = q - (q / &two).floor() * &two;
        if q > BigRational::one() {
            q = &two - q;
        }
        let half = BigRational::new(BigInt::one(), BigInt::from(2));
        let (q, sign) = if q > half {
            (BigRational::one() - q, -BigRational::one())
        } else {
            (q, BigRational::one())
        };
        let value = if q.is_zero() {
            Self::one()
        } else if q == half {
            Self::zero()
        } else if q == BigRational::new(1.into(), 3.into()) {
            Self::rational(half)
        } else if q == BigRational::new(1.into(), 4.into()) {
            sqrt_rational(&half)
        } else if q == BigRational::new(1.into(), 6.into()) {
            sqrt_rational(&BigRational::new(3.into(), 4.into()))
        } else {
            Self::atom(Atom::CosPi(q))
        };
        value.scale(&sign)
    }

    /// `1 / self`, or `None` for zero.
    pub fn checked_recip(&self) -> Option<Self> {
        let c = self.leading()?;
        if let Some(q) = self.as_rational() {
            return Some(Self::rational(q.recip()));
        }
        if let Some((m, _)) = self.terms.iter().next().filter(|_| self.terms.len() == 1) {
            // 1/(c√n) = √n/(c·n)
            if let Some((Atom::SqrtInt(n), 1)) = m.as_single() {
                let n = BigRational::from_integer(n.clone());
                return Some(Self {
                    terms: BTreeMap::from([(m.clone(), (c * n).recip())]),
                });
            }
        }
        let unit = self.scale(&c.recip());
        Some(Self::atom(Atom::Recip(Arc::new(unit))).scale(&c.recip()))
    }

    /// Drop zero terms, then fold complete conjugate root families into power sums.
    fn from_terms(mut terms: BTreeMap<Monomial, BigRational>) -> Self {
        terms.retain(|_, c| !c.is_zero());

        type Family = (Monomial, Vec<BigInt>, u32);
        let mut families: BTreeMap<Family, Vec<(Arc<RealRoot>, Monomial)>> = BTreeMap::new();
        for m in terms.keys() {
            if let Some((r, k, rest)) = m.split_root() {
                families
                    .entry((rest, r.poly().to_vec(), k))
                    .or_default()
                    .push((r, m.clone()));
            }
        }
        for ((rest, _, k), members) in families {
            let d = members[0].0.degree();
            if members.len() != d {
                continue;
            }
            let Some((first, m0)) = members.iter().find(|(r, _)| r.index() == 0) else {
                continue;
            };
            let c0 = terms.get(m0).cloned().unwrap_or_else(BigRational::zero);
            let sum = first.power_sum(k);
            for (_, m) in &members {
                if let Some(c) = terms.get_mut(m) {
                    *c -= &c0;
                }
            }
            *terms.entry(rest).or_insert_with(BigRational::zero) += c0 * sum;
        }

        terms.retain(|_, c| !c.is_zero());
        Self { terms }
    }
}

/// Multiply two monomials and reduce powers of radicals and roots.
fn mul_monomials(a: &Monomial, b: &Monomial) -> Expr {
    let mut merged = a.0.clone();
    for (atom, k) in &b.0 {
        *merged.entry(atom.clone()).or_insert(0) += k;
    }
    let mut coeff = BigRational::one();
    let mut plain = Monomial::default();
    let mut pending: Vec<Expr> = Vec::new();
    for (atom, k) in &merged {
        let k = *k;
        match atom {
            Atom::SqrtInt(n) => {
                coeff *= BigRational::from_integer(Pow::pow(n, k / 2));
                if k % 2 == 1 {
                    plain.0.insert(atom.clone(), 1);
                }
            }
            Atom::Sqrt(e) => {
                pending.extend(std::iter::repeat((**e).clone()).take((k / 2) as usize));
                if k % 2 == 1 {
                    plain.0.insert(atom.clone(), 1);
                }
            }
            Atom::Root(r) if k as usize >= r.degree() => {
                pending.push(Expr::root_poly(r, &r.power(k)));
            }
            _ => {
                plain.0.insert(atom.clone(), k);
            }
        }
    }
    let head = Expr {
        terms: BTreeMap::from([(plain, coeff)]),
    };
    pending.into_iter().fold(head, |acc, e| acc * e)
}

fn sqrt_rational(q: &BigRational) -> Expr {
    if q.is_zero() {
        return Expr::zero();
    }
    // √(a/b) = √(ab) / b
    let den = q.denom().clone();
    let (outside, inside) = split_square(&(q.numer() * &den));
    let c = BigRational::new(outside, den);
    if inside.is_one() {
        Expr::rational(c)
    } else {
        Expr::atom(Atom::SqrtInt(inside)).scale(&c)
    }
}

/// `n = s² · m` with `m` square-free as far as trial division can tell.
fn split_square(n: &BigInt) -> (BigInt, BigInt) {
    let mut rest = n.abs();
    let mut s = BigInt::one();
    let mut m = BigInt::one();
    let mut p = 2u64;
    while p <= SQUAREFREE_TRIAL_LIMIT {
        let pb = BigInt::from(p);
        if &pb * &pb > rest {
            break;
        }
        let mut k = 0u32;
        while (&rest % &pb).is_zero() {
            rest /= &pb;
            k += 1;
        }
        s *= Pow::pow(&pb, k / 2);
        if k % 2 == 1 {
            m *= &pb;
        }
        p += if p == 2 { 1 } else { 2 };
    }
    let r = rest.sqrt();
    if &r * &r == rest {
        s *= r;
    } else {
        m *= rest;
    }
    (s, m)
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::rational(rat(n))
    }
}

impl From<BigRational> for Expr {
    fn from(q: BigRational) -> Self {
        Self::rational(q)
    }
}

impl Zero for Expr {
    fn zero() -> Self {
        Self::default()
    }
    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Expr {
    fn one() -> Self {
        Self::rational(BigRational::one())
    }
}

impl Add for Expr {
    type Output = Expr;
    fn add(self, rhs: Expr) -> Expr {
        let mut terms = self.terms;
        for (m, c) in rhs.terms {
            *terms.entry(m).or_insert_with(BigRational::zero) += c;
        }
        Expr::from_terms(terms)
    }
}

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr {
            terms: self.terms.into_iter().map(|(m, c)| (m, -c)).collect(),
        }
    }
}

impl Sub for Expr {
    type Output = Expr;
    fn sub(self, rhs: Expr) -> Expr {
        self + (-rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;
    fn mul(self, rhs: Expr) -> Expr {
        let mut terms: BTreeMap<Monomial, BigRational> = BTreeMap::new();
        for (ma, ca) in &self.terms {
            for (mb, cb) in &rhs.terms {
                let c = ca * cb;
                for (m, cm) in mul_monomials(ma, mb).terms {
                    *terms.entry(m).or_insert_with(BigRational::zero) += &c * cm;
                }
            }
        }
        Expr::from_terms(terms)
    }
}

impl Div for Expr {
    type Output = Expr;
    /// # Panics
    /// On a structurally zero divisor, like `BigRational` division.
    fn div(self, rhs: Expr) -> Expr {
        match rhs.checked_recip() {
            Some(inv) => self * inv,
            None => panic!("division of exact expression by zero"),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Pi => f.write_str("π"),
            Atom::SqrtInt(n) => write!(f, "√{n}"),
            Atom::Sqrt(e) => write!(f, "√({e})"),
            Atom::CosPi(q) => write!(f, "cos({q}π)"),
            Atom::Root(r) => write!(f, "{r}"),
            Atom::Recip(e) => write!(f, "1/({e})"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (k, (m, c)) in self.terms.iter().enumerate() {
            if k > 0 {
                f.write_str(" + ")?;
            }
            if m.0.is_empty() {
                write!(f, "{c}")?;
                continue;
            }
            if !c.is_one() {
                write!(f, "{c}*")?;
            }
            for (j, (a, e)) in m.0.iter().enumerate() {
                if j > 0 {
                    f.write_str("*")?;
                }
                match e {
                    1 => write!(f, "{a}")?,
                    _ => write!(f, "{a}^{e}")?,
                }
            }
        }
        Ok(())
    }
}
