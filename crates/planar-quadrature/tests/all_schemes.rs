//! Every registered scheme, both numeric modes.

use planar_quadrature::prelude::*;
use planar_quadrature::registry::{domains, ids};

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn all_ids() -> Vec<(Domain, &'static str)> {
    domains()
        .into_iter()
        .flat_map(|d| ids(d).into_iter().map(move |id| (d, id)))
        .collect()
}

fn build<N: Registered>(domain: Domain, id: &str, num: &N) -> Scheme<N::Value> {
    let s = match domain {
        Domain::Disk => disk::scheme(id, num),
        _ => square::scheme(id, num),
    };
    s.unwrap_or_else(|e| panic!("{domain} {id}: {e}"))
}

#[test]
fn weight_sums_match_measure() {
    init_logs();
    let (f, e) = (Float::default(), Exact::default());
    for (domain, id) in all_ids() {
        let sf = build(domain, id, &f);
        let se = build(domain, id, &e);
        assert!(
            (sf.weight_sum() - domain.measure(&f)).abs() < 1e-10,
            "{domain} {id}"
        );
        assert_eq!(se.weight_sum(), domain.measure(&e), "{domain} {id}");
        assert_eq!(sf.points().len(), sf.weights().len());
        assert_eq!(se.points().len(), se.weights().len());
    }
}

#[test]
fn points_lie_in_domain() {
    let f = Float::default();
    let eps = f.tolerances().domain;
    for (domain, id) in all_ids() {
        let s = build(domain, id, &f);
        for p in s.points() {
            assert!(domain.contains(p, eps), "{domain} {id}: {p:?}");
        }
        let s = build(domain, id, &Exact::default()).to_f64();
        for p in s.points() {
            assert!(domain.contains(p, 1e-12), "{domain} {id}: {p:?}");
        }
    }
}

#[test]
fn stored_degree_is_attained_and_sharp() {
    let f = Float::default();
    for (domain, id) in all_ids() {
        let s = build(domain, id, &f);
        let d = s.degree();
        assert_eq!(s.attained_degree(domain, d + 1, 1e-10), Some(d), "{domain} {id}");
    }
}

#[test]
fn exact_tables_evaluate_to_float_tables() {
    let (f, e) = (Float::default(), Exact::default());
    for (domain, id) in all_ids() {
        let sf = build(domain, id, &f);
        let se = build(domain, id, &e).to_f64();
        assert_eq!(sf.len(), se.len());
        assert_eq!(sf.degree(), se.degree());
        for (a, b) in sf.points().iter().zip(se.points()) {
            assert!((a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9, "{id}");
        }
        for (a, b) in sf.weights().iter().zip(se.weights()) {
            assert!((a - b).abs() < 1e-9, "{id}");
        }
    }
}

#[test]
fn construction_is_idempotent() {
    let (f, e) = (Float::default(), Exact::default());
    for (domain, id) in all_ids() {
        assert_eq!(build(domain, id, &f), build(domain, id, &f));
        assert_eq!(build(domain, id, &e), build(domain, id, &e));
    }
}

#[test]
fn only_the_known_defective_rule_is_flagged() {
    init_logs();
    let f = Float::default();
    let flagged: Vec<_> = all_ids()
        .into_iter()
        .filter(|&(d, id)| build(d, id, &f).defect().is_some())
        .collect();
    assert_eq!(flagged, vec![(Domain::Square, "C2 7-4")]);
    let s = build(Domain::Square, "C2 7-4", &Exact::default());
    assert_eq!(
        s.defect(),
        Some(Defect {
            claimed: 7,
            actual: 1
        })
    );
}

#[test]
fn schemes_are_shareable_across_threads() {
    let s = build(Domain::Disk, "Albrecht(6)", &Exact::default());
    let handle = std::thread::spawn(move || s.weight_sum());
    assert_eq!(handle.join().unwrap(), Expr::pi());
}
