use super::*;
use crate::cfg::Tolerances;
use crate::error::QuadratureError;

#[test]
fn float_roots_are_ascending_and_polished() {
    let f = Float::default();
    // (x - 1)(x - 2)(x - 3)
    let r = f.poly_roots(&[1, -6, 11, -6]).unwrap();
    assert_eq!(r.len(), 3);
    for (x, e) in r.iter().zip([1.0, 2.0, 3.0]) {
        assert!((x - e).abs() < 1e-13, "{x} vs {e}");
    }
}

#[test]
fn float_rejects_complex_roots() {
    let f = Float::default();
    let err = f.poly_roots(&[1, 0, 1]).unwrap_err();
    assert!(matches!(err, QuadratureError::NonRealRoots { .. }));
}

#[test]
fn invalid_polynomials_are_rejected_in_both_modes() {
    for coeffs in [&[][..], &[0, 1, 2][..], &[5][..]] {
        assert!(matches!(
            Float::default().poly_roots(coeffs),
            Err(QuadratureError::InvalidPolynomial { .. })
        ));
        assert!(matches!(
            Exact::default().poly_roots(coeffs),
            Err(QuadratureError::InvalidPolynomial { .. })
        ));
    }
}

#[test]
fn float_solve_matches_known_solution() {
    let f = Float::default();
    let a = vec![vec![2.0, 1.0], vec![1.0, 3.0]];
    let x = f.solve_linear(&a, &[3.0, 5.0]).unwrap();
    assert!((x[0] - 0.8).abs() < 1e-14 && (x[1] - 1.4).abs() < 1e-14);
}

#[test]
fn singular_and_ragged_systems_fail() {
    let f = Float::default();
    let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
    assert_eq!(
        f.solve_linear(&a, &[1.0, 2.0]),
        Err(QuadratureError::SingularSystem {
            scheme: String::new(),
            size: 2,
            matrix: "[[1.0, 2.0], [2.0, 4.0]]".to_string(),
        })
    );
    let ragged = vec![vec![1.0, 2.0], vec![1.0]];
    assert!(matches!(
        f.solve_linear(&ragged, &[1.0, 1.0]),
        Err(QuadratureError::NotSquare { .. })
    ));
    assert!(matches!(
        f.solve_linear(&[vec![1.0]], &[1.0, 2.0]),
        Err(QuadratureError::NotSquare { rhs: 2, .. })
    ));

    let e = Exact::default();
    let a = vec![
        vec![Expr::from(1), Expr::from(2)],
        vec![Expr::from(2), Expr::from(4)],
    ];
    assert!(matches!(
        e.solve_linear(&a, &[Expr::from(1), Expr::from(2)]),
        Err(QuadratureError::SingularSystem { size: 2, .. })
    ));
}

#[test]
fn exact_solve_accepts_tiny_rational_pivots() {
    let e = Exact::default();
    let a = vec![
        vec![Expr::from(1), Expr::from(0)],
        vec![Expr::from(0), e.frac(1, 10_000_000_000_000)],
    ];
    let x = e.solve_linear(&a, &[Expr::from(1), Expr::from(1)]).unwrap();
    assert_eq!(x, vec![Expr::from(1), Expr::from(10_000_000_000_000)]);
    // the float solver treats the same system as numerically singular
    let f = Float::default();
    let af = vec![vec![1.0, 0.0], vec![0.0, 1e-13]];
    assert!(matches!(
        f.solve_linear(&af, &[1.0, 1.0]),
        Err(QuadratureError::SingularSystem { size: 2, .. })
    ));
}

#[test]
fn stricter_pivot_tolerance_rejects_what_the_default_accepts() {
    let strict = Tolerances {
        pivot: 0.5,
        ..Tolerances::default()
    };
    let a = vec![vec![2.0, 1.0], vec![1.0, 1.0]];
    assert!(Float::default().solve_linear(&a, &[1.0, 1.0]).is_ok());
    let f = Float::with_tolerances(strict);
    assert_eq!(f.tolerances().pivot, 0.5);
    assert!(matches!(
        f.solve_linear(&a, &[1.0, 1.0]),
        Err(QuadratureError::SingularSystem { size: 2, .. })
    ));

    // irrational pivots go through the same threshold in exact mode
    let e = Exact::default();
    let a = vec![
        vec![e.sqrt(&e.int(2)), e.int(1)],
        vec![e.int(1), e.sqrt(&e.int(3))],
    ];
    let rhs = [e.int(1), e.int(0)];
    assert!(e.solve_linear(&a, &rhs).is_ok());
    let strict = Tolerances {
        pivot: 0.9,
        ..Tolerances::default()
    };
    assert!(matches!(
        Exact::with_tolerances(strict).solve_linear(&a, &rhs),
        Err(QuadratureError::SingularSystem { size: 2, .. })
    ));
    // rational pivots are exact and ignore it
    let q = vec![vec![e.int(2), e.int(1)], vec![e.int(1), e.int(1)]];
    let x = Exact::with_tolerances(strict)
        .solve_linear(&q, &[e.int(1), e.int(1)])
        .unwrap();
    assert_eq!(x, vec![e.int(0), e.int(1)]);
}

#[test]
fn newton_steps_and_root_threshold_are_configurable() {
    let coeffs = [6317094, -10022245, 4149900, -336375];
    let unpolished = Float::with_tolerances(Tolerances {
        newton_steps: 0,
        ..Tolerances::default()
    });
    let polished = Float::default();
    let exact: Vec<f64> = Exact::default()
        .poly_roots(&coeffs)
        .unwrap()
        .iter()
        .map(Expr::to_f64)
        .collect();
    let raw = unpolished.poly_roots(&coeffs).unwrap();
    let fine = polished.poly_roots(&coeffs).unwrap();
    for ((r, p), x) in raw.iter().zip(&fine).zip(&exact) {
        assert!((r - x).abs() < 1e-9);
        assert!((p - x).abs() <= (r - x).abs() + 1e-15);
    }
    // (x - 1000)² + 1: roots 1000 ± i, relative imaginary part 1e-3
    let near_real = [1, -2000, 1_000_001];
    assert!(matches!(
        Float::default().poly_roots(&near_real),
        Err(QuadratureError::NonRealRoots { .. })
    ));
    let loose = Float::with_tolerances(Tolerances {
        root_imag: 1e-2,
        newton_steps: 0,
        ..Tolerances::default()
    });
    let r = loose.poly_roots(&near_real).unwrap();
    assert_eq!(r.len(), 2);
    assert!(r.iter().all(|x| (x - 1000.0).abs() < 1e-6), "{r:?}");
}

#[test]
fn vandermonde_rows_are_powers() {
    let v = vandermonde(&[2.0, 3.0, 5.0]);
    assert_eq!(v[0], vec![1.0, 1.0, 1.0]);
    assert_eq!(v[1], vec![2.0, 3.0, 5.0]);
    assert_eq!(v[2], vec![4.0, 9.0, 25.0]);
}

#[test]
fn modes_agree_on_trigonometry() {
    let (f, e) = (Float::default(), Exact::default());
    for den in [1, 2, 3, 4, 5, 6, 8, 10, 12] {
        for num in -2 * den..=2 * den {
            let c = f.cos_pi(num, den);
            let s = f.sin_pi(num, den);
            assert!((e.cos_pi(num, den).to_f64() - c).abs() < 1e-14, "cos {num}/{den}");
            assert!((e.sin_pi(num, den).to_f64() - s).abs() < 1e-14, "sin {num}/{den}");
        }
    }
}

#[test]
fn modes_agree_on_moment_solve() {
    let coeffs = [6317094, -10022245, 4149900, -336375];
    let (f, e) = (Float::default(), Exact::default());
    let rf = f.poly_roots(&coeffs).unwrap();
    let re = e.poly_roots(&coeffs).unwrap();
    for (a, b) in rf.iter().zip(&re) {
        assert!((a - b.to_f64()).abs() < 1e-12);
    }
    let bf = [168899.0 / 1350000.0, 7661.0 / 180000.0, 71.0 / 3000.0];
    let be = [
        e.frac(168899, 1350000),
        e.frac(7661, 180000),
        e.frac(71, 3000),
    ];
    let wf = f.solve_linear(&vandermonde(&rf), &bf).unwrap();
    let we = e.solve_linear(&vandermonde(&re), &be).unwrap();
    for (a, b) in wf.iter().zip(&we) {
        assert!((a - b.to_f64()).abs() < 1e-12, "{a} vs {b}");
    }
    // Σ B_i is the zeroth moment, exactly.
    let sum = we.into_iter().fold(Expr::zero(), |acc, w| acc + w);
    assert_eq!(sum, e.frac(168899, 1350000));
}
