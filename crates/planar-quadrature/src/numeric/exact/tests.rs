use super::poly::QPoly;
use super::*;
use crate::error::QuadratureError;
use crate::numeric::vandermonde;
use num_traits::One;

fn q(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

#[test]
fn radicals_square_back() {
    let e = Exact::default();
    let s = e.sqrt(&e.int(8));
    // √8 = 2√2
    assert_eq!(s, e.int(2) * e.sqrt(&e.int(2)));
    assert_eq!(s.clone() * s, e.int(8));
    let h = e.sqrt(&e.frac(1, 2));
    assert_eq!(h.clone() * h, e.frac(1, 2));
    assert_eq!(e.sqrt(&e.frac(9, 4)), e.frac(3, 2));
}

#[test]
fn conjugates_cancel() {
    let e = Exact::default();
    let r29 = e.sqrt(&e.int(29));
    let a1 = (e.int(551) + e.int(41) * r29.clone()) / e.int(6264);
    let a2 = (e.int(551) - e.int(41) * r29.clone()) / e.int(6264);
    assert_eq!(a1 + a2, e.frac(551, 3132));
    // (27 - 3√29)(27 + 3√29) = 729 - 261
    let prod = (e.int(27) - e.int(3) * r29.clone()) * (e.int(27) + e.int(3) * r29);
    assert_eq!(prod, e.int(468));
}

#[test]
fn nested_radical_squares_to_radicand() {
    let e = Exact::default();
    let inner = (e.int(96) - e.int(4) * e.sqrt(&e.int(111))) / e.int(155);
    let rho = e.sqrt(&inner);
    assert_eq!(rho.clone() * rho.clone(), inner);
    let f = ((96.0 - 4.0 * 111f64.sqrt()) / 155.0).sqrt();
    assert!((rho.to_f64() - f).abs() < 1e-14);
}

#[test]
fn closed_form_cosines() {
    let e = Exact::default();
    assert_eq!(e.cos_pi(1, 3), e.frac(1, 2));
    assert_eq!(e.cos_pi(2, 3), e.frac(-1, 2));
    assert_eq!(e.cos_pi(1, 4), e.sqrt(&e.frac(1, 2)));
    assert_eq!(e.sin_pi(1, 6), e.frac(1, 2));
    assert_eq!(e.sin_pi(1, 1), e.int(0));
    assert_eq!(e.cos_pi(-7, 4), e.sqrt(&e.frac(1, 2)));
    // cos(π/8) stays symbolic but evaluates correctly
    let c = e.cos_pi(1, 8);
    assert!(matches!(c.terms().next(), Some((m, _)) if *m != Monomial::default()));
    assert!((c.to_f64() - (std::f64::consts::PI / 8.0).cos()).abs() < 1e-15);
}

#[test]
fn roots_are_isolated_in_ascending_order() {
    let roots = RealRoot::isolate(&[11025, -19020, 9370, -1212]).unwrap();
    assert_eq!(roots.len(), 3);
    assert!(roots.windows(2).all(|w| w[0].to_f64() < w[1].to_f64()));
    for (k, r) in roots.iter().enumerate() {
        assert_eq!(r.index(), k);
        let x = r.to_f64();
        let p = ((11025.0 * x - 19020.0) * x + 9370.0) * x - 1212.0;
        assert!(p.abs() < 1e-9, "p({x}) = {p}");
    }
}

#[test]
fn exact_root_rejections() {
    assert!(matches!(
        RealRoot::isolate(&[1, 0, 1]),
        Err(QuadratureError::NonRealRoots { .. })
    ));
    // (x - 1)^2
    assert!(matches!(
        RealRoot::isolate(&[1, -2, 1]),
        Err(QuadratureError::InvalidPolynomial { .. })
    ));
}

#[test]
fn linear_polynomial_gives_rational_root() {
    let e = Exact::default();
    assert_eq!(e.poly_roots(&[4, -3]).unwrap(), vec![e.frac(3, 4)]);
}

#[test]
fn root_powers_reduce_modulo_polynomial() {
    let e = Exact::default();
    // x^2 - 2: σ^2 = 2
    let roots = e.poly_roots(&[1, 0, -2]).unwrap();
    let s = roots[1].clone();
    assert_eq!(s.clone() * s.clone(), e.int(2));
    assert_eq!(roots[0].clone() + roots[1].clone(), e.int(0));
    assert!((s.to_f64() - 2f64.sqrt()).abs() < 1e-15);
}

#[test]
fn power_sums_follow_newton() {
    // x^3 - 6x^2 + 11x - 6: roots 1, 2, 3
    let p = QPoly::from_desc(&[1, -6, 11, -6]);
    let s = p.power_sums(4);
    assert_eq!(s, vec![q(3, 1), q(6, 1), q(14, 1), q(36, 1)]);
}

#[test]
fn polynomial_inverse_mod() {
    let p = QPoly::from_desc(&[1, 0, -2]);
    let a = QPoly::from_desc(&[1, 1]); // x + 1
    let inv = a.inverse_mod(&p).unwrap();
    assert_eq!(a.times(&inv).rem(&p), QPoly::constant(BigRational::one()));
    assert!(QPoly::from_desc(&[1, -2]).inverse_mod(&QPoly::from_desc(&[1, -3, 2])).is_none());
}

#[test]
fn vandermonde_solve_is_exact() {
    let e = Exact::default();
    let roots = e
        .poly_roots(&[4960228, -10267740, 6746490, -1476540, 70425])
        .unwrap();
    let a = vandermonde(&roots);
    let b = vec![
        e.frac(57719, 675000),
        e.frac(9427, 270000),
        e.frac(193, 9000),
        e.frac(113, 7200),
    ];
    let w = e.solve_linear(&a, &b).unwrap();
    // Substituting back reproduces every moment structurally.
    for (row, bk) in a.iter().zip(&b) {
        let lhs = row
            .iter()
            .zip(&w)
            .fold(Expr::zero(), |acc, (x, wi)| acc + x.clone() * wi.clone());
        assert_eq!(&lhs, bk);
    }
}

#[test]
fn gaussian_path_handles_radical_entries() {
    let e = Exact::default();
    let r2 = e.sqrt(&e.int(2));
    let a = vec![
        vec![e.int(1), r2.clone()],
        vec![r2.clone(), e.int(3)],
    ];
    let x = e.solve_linear(&a, &[e.int(1), e.int(0)]).unwrap();
    // det = 1; inverse = [[3, -√2], [-√2, 1]]
    assert!((x[0].to_f64() - 3.0).abs() < 1e-12);
    assert!((x[1].to_f64() + 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn display_is_readable() {
    let e = Exact::default();
    let x = e.frac(1, 4) + e.sqrt(&e.int(2)) * e.pi();
    let s = x.to_string();
    assert!(s.contains("1/4") && s.contains("√2") && s.contains("π"), "{s}");
    assert_eq!(Expr::zero().to_string(), "0");
}
