//! Quadrature scheme value type and reference domains.
//!
//! - `Domain`: disk, square, n-cube; measure and membership test.
//! - `Scheme`: name, exactness degree, aligned points and weights. Immutable
//!   after construction.
//! - `Defect`: published degree vs. degree actually attained (known-bad rules).

use std::fmt;

use crate::error::QuadratureError;
use crate::numeric::{Expr, Numeric, Scalar};
use crate::table::{untangle, Weight};

/// Reference integration domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Domain {
    /// Unit disk `x² + y² <= 1`, measure π.
    Disk,
    /// Square `[-1, 1]²`, measure 4.
    Square,
    /// Cube `[-1, 1]^n`, measure `2^n`.
    NCube(usize),
}

impl Domain {
    pub fn dim(&self) -> usize {
        match self {
            Domain::Disk | Domain::Square => 2,
            Domain::NCube(n) => *n,
        }
    }

    /// Lebesgue measure in the active numeric mode.
    pub fn measure<N: Numeric>(&self, num: &N) -> N::Value {
        match self {
            Domain::Disk => num.pi(),
            Domain::Square => num.int(4),
            Domain::NCube(n) => (0..*n).fold(num.int(1), |acc, _| acc * num.int(2)),
        }
    }

    /// `∫ x_1^{e_1} ⋯ x_n^{e_n}` over the domain; missing exponents are 0.
    pub fn moment(&self, exps: &[u32]) -> f64 {
        if exps.iter().any(|e| e % 2 == 1) {
            return 0.0;
        }
        let e = |k: usize| exps.get(k).copied().unwrap_or(0);
        match self {
            // π (2i-1)!! (2j-1)!! / (2^{i+j} (i+j+1)!)
            Domain::Disk => {
                let (i, j) = (e(0) / 2, e(1) / 2);
                let odd = |m: u32| (1..=m).map(|k| f64::from(2 * k - 1)).product::<f64>();
                let fact = (1..=i + j + 1).map(f64::from).product::<f64>();
                std::f64::consts::PI * odd(i) * odd(j) / (2f64.powi((i + j) as i32) * fact)
            }
            Domain::Square | Domain::NCube(_) => (0..self.dim())
                .map(|k| 2.0 / f64::from(e(k) + 1))
                .product(),
        }
    }

    /// Closed membership with slack `eps`.
    pub fn contains(&self, x: &[f64], eps: f64) -> bool {
        if x.len() != self.dim() {
            return false;
        }
        match self {
            Domain::Disk => x.iter().map(|c| c * c).sum::<f64>().sqrt() <= 1.0 + eps,
            Domain::Square | Domain::NCube(_) => x.iter().all(|c| c.abs() <= 1.0 + eps),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Disk => f.write_str("disk"),
            Domain::Square => f.write_str("square"),
            Domain::NCube(n) => write!(f, "{n}-cube"),
        }
    }
}

/// A rule whose published degree is not attained by its published coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Defect {
    pub claimed: u32,
    pub actual: u32,
}

/// Quadrature rule: `∫ f ≈ Σ w_i f(x_i)`, exact for polynomials of total degree `<= degree`.
///
/// Weights already include the domain measure.
#[derive(Clone, Debug, PartialEq)]
pub struct Scheme<V, const D: usize = 2> {
    name: String,
    degree: u32,
    points: Vec<[V; D]>,
    weights: Vec<V>,
    defect: Option<Defect>,
}

impl<V: Scalar, const D: usize> Scheme<V, D> {
    /// Untangle `(weight, orbit)` pairs and scale the weights by `measure`.
    pub(crate) fn assemble(
        name: impl Into<String>,
        degree: u32,
        data: Vec<(Weight<V>, Vec<[V; D]>)>,
        measure: V,
    ) -> Result<Self, QuadratureError> {
        let name = name.into();
        let (points, weights) = untangle(data).map_err(|e| e.in_scheme(&name))?;
        let weights = weights
            .into_iter()
            .map(|w| measure.clone() * w)
            .collect::<Vec<_>>();
        tracing::debug!(scheme = %name, degree, points = points.len(), "assembled scheme");
        Ok(Self {
            name,
            degree,
            points,
            weights,
            defect: None,
        })
    }

    /// Mark the rule as defective: the stored `degree` is the attained one,
    /// `claimed` is what the literature states.
    pub(crate) fn with_defect(mut self, claimed: u32) -> Self {
        tracing::warn!(
            scheme = %self.name,
            claimed,
            actual = self.degree,
            "scheme is known to be defective; published degree is not attained"
        );
        self.defect = Some(Defect {
            claimed,
            actual: self.degree,
        });
        self
    }

    pub(crate) fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn degree(&self) -> u32 {
        self.degree
    }
    pub fn points(&self) -> &[[V; D]] {
        &self.points
    }
    pub fn weights(&self) -> &[V] {
        &self.weights
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn defect(&self) -> Option<Defect> {
        self.defect
    }

    pub fn weight_sum(&self) -> V {
        self.weights
            .iter()
            .cloned()
            .fold(V::zero(), |acc, w| acc + w)
    }
}

impl<const D: usize> Scheme<f64, D> {
    /// `Σ w_i f(x_i)`.
    pub fn integrate<F: Fn(&[f64; D]) -> f64>(&self, f: F) -> f64 {
        self.points
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| w * f(x))
            .sum()
    }

    /// Largest `d <= max` such that every monomial of total degree `<= d` is
    /// integrated over `domain` to within `tol`; `None` if constants already fail.
    pub fn attained_degree(&self, domain: Domain, max: u32, tol: f64) -> Option<u32> {
        let mut attained = None;
        for total in 0..=max {
            let ok = exponents::<D>(total).iter().all(|e| {
                let approx = self.integrate(|x| {
                    x.iter().zip(e).map(|(xi, &k)| xi.powi(k as i32)).product()
                });
                (approx - domain.moment(e)).abs() <= tol
            });
            if !ok {
                break;
            }
            attained = Some(total);
        }
        attained
    }
}

/// All exponent vectors of length `D` with entries summing to `total`.
fn exponents<const D: usize>(total: u32) -> Vec<[u32; D]> {
    let mut out = Vec::new();
    let mut stack: Vec<(usize, u32, [u32; D])> = vec![(0, total, [0; D])];
    while let Some((k, left, mut e)) = stack.pop() {
        if k + 1 >= D {
            if D > 0 {
                e[D - 1] = left;
                out.push(e);
            }
            continue;
        }
        for v in 0..=left {
            e[k] = v;
            stack.push((k + 1, left - v, e));
        }
    }
    out
}

impl<const D: usize> Scheme<Expr, D> {
    /// Evaluate every exact value to `f64`.
    pub fn to_f64(&self) -> Scheme<f64, D> {
        Scheme {
            name: self.name.clone(),
            degree: self.degree,
            points: self
                .points
                .iter()
                .map(|p| std::array::from_fn(|k| p[k].to_f64()))
                .collect(),
            weights: self.weights.iter().map(Expr::to_f64).collect(),
            defect: self.defect,
        }
    }
}
