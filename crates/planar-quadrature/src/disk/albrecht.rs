//! Albrecht's rules for the unit disk.
//!
//! J. Albrecht, Formeln zur numerischen Integration über Kreisbereiche,
//! ZAMM 40 (1960), 514–517, <https://doi.org/10.1002/zamm.19600401014>.
//!
//! Coefficients are published normalised to total weight 1; the builder scales
//! by π. Rules 5–8 place some rings at radii `√σ` where `σ` runs over the roots
//! of an auxiliary cubic/quartic; their weights solve the moment system
//! `Σ_i B_i σ_i^k = b_k`.

use crate::error::QuadratureError;
use crate::numeric::{vandermonde, Numeric};
use crate::orbit::{axis_pair, full_symmetric, origin, polygon, sign_flips};
use crate::scheme::{Domain, Scheme};
use crate::table::Weight::Uniform;

/// `(a + b, a - b)`
fn pm<V: Clone + std::ops::Add<Output = V> + std::ops::Sub<Output = V>>(a: V, b: V) -> (V, V) {
    (a.clone() + b.clone(), a - b)
}

/// Radii `√σ_i` (σ ascending) and the weights `B_i` matching the moments `b`.
fn moment_rings<N: Numeric>(
    num: &N,
    coeffs: &[i64],
    moments: &[(i64, i64)],
) -> Result<(Vec<N::Value>, Vec<N::Value>), QuadratureError> {
    let sigma2 = num.poly_roots(coeffs)?;
    let b: Vec<N::Value> = moments.iter().map(|&(p, q)| num.frac(p, q)).collect();
    let weights = num.solve_linear(&vandermonde(&sigma2), &b)?;
    let radii = sigma2.iter().map(|s| num.sqrt(s)).collect();
    Ok((radii, weights))
}

/// Albrecht rule `index` (1..=8); degree `2·index + 1`.
pub fn albrecht<N: Numeric>(index: u32, num: &N) -> Result<Scheme<N::Value>, QuadratureError> {
    let name = format!("Albrecht({index})");
    let fr = |p, q| num.frac(p, q);
    let int = |n| num.int(n);
    let sqrt = |x: N::Value| num.sqrt(&x);

    let (degree, data) = match index {
        1 => (
            3,
            vec![(Uniform(fr(1, 4)), polygon(num, 4, &sqrt(fr(1, 2)), true))],
        ),
        2 => (
            5,
            vec![
                (Uniform(fr(1, 4)), origin()),
                (Uniform(fr(1, 8)), polygon(num, 6, &sqrt(fr(2, 3)), true)),
            ],
        ),
        3 => {
            let sqrt29 = sqrt(int(29));
            let (a1, a2) = pm(int(551), int(41) * sqrt29.clone());
            let (r2, r1) = pm(int(27), int(3) * sqrt29);
            let rho1 = sqrt(r1 / int(52));
            let rho2 = sqrt(r2 / int(52));
            (
                7,
                vec![
                    (Uniform(fr(2, 27)), polygon(num, 4, &sqrt(fr(3, 4)), true)),
                    (Uniform(a1 / int(6264)), polygon(num, 4, &rho1, false)),
                    (Uniform(a2 / int(6264)), polygon(num, 4, &rho2, false)),
                ],
            )
        }
        4 => {
            let sqrt111 = sqrt(int(111));
            let (r2, r1) = pm(int(96), int(4) * sqrt111.clone());
            let rho1 = sqrt(r1 / int(155));
            let rho2 = sqrt(r2 / int(155));
            let (b1, b2) = pm(int(110297), int(5713) * sqrt111);
            (
                9,
                vec![
                    (Uniform(fr(251, 2304)), origin()),
                    (Uniform(b1 / int(2045952)), polygon(num, 6, &rho1, false)),
                    (Uniform(b2 / int(2045952)), polygon(num, 6, &rho2, false)),
                    (Uniform(fr(125, 3072)), polygon(num, 6, &sqrt(fr(4, 5)), true)),
                ],
            )
        }
        5 => {
            let (radii, b) = moment_rings(
                num,
                &[6317094, -10022245, 4149900, -336375],
                &[(168899, 1350000), (7661, 180000), (71, 3000)],
            )
            .map_err(|e| e.in_scheme(&name))?;
            let sqrt19 = sqrt(int(19));
            // Stroud's book prints √10 here; the radicand is 19.
            let (s2, s1) = pm(int(125), int(10) * sqrt19.clone());
            let s1 = sqrt(s1 / int(366));
            let s2 = sqrt(s2 / int(366));
            // Stroud's book prints 7494893; the original paper has 7494892.
            let (c1, c2) = pm(int(7494892), int(1053263) * sqrt19);
            let r = sqrt(fr(5, 6));
            let u = r.clone() * num.cos_pi(1, 8);
            let v = r * num.sin_pi(1, 8);

            let mut data: Vec<_> = b
                .into_iter()
                .zip(radii)
                .map(|(w, rho)| (Uniform(w), axis_pair(rho)))
                .collect();
            data.push((Uniform(c1 / int(205200000)), sign_flips(s1.clone(), s1)));
            data.push((Uniform(c2 / int(205200000)), sign_flips(s2.clone(), s2)));
            data.push((Uniform(fr(81, 3125)), full_symmetric(u, v)));
            (11, data)
        }
        6 => {
            let (radii, b) = moment_rings(
                num,
                &[11025, -19020, 9370, -1212],
                &[(1432433, 18849024), (1075, 31104), (521, 25920)],
            )
            .map_err(|e| e.in_scheme(&name))?;
            let mut data = vec![(Uniform(fr(2615, 43632)), origin())];
            for (w, rho) in b.into_iter().zip(radii) {
                data.push((Uniform(w), polygon(num, 10, &rho, false)));
            }
            data.push((
                Uniform(fr(16807, 933120)),
                polygon(num, 10, &sqrt(fr(6, 7)), true),
            ));
            (13, data)
        }
        7 => {
            let (radii, b) = moment_rings(
                num,
                &[4960228, -10267740, 6746490, -1476540, 70425],
                &[(57719, 675000), (9427, 270000), (193, 9000), (113, 7200)],
            )
            .map_err(|e| e.in_scheme(&name))?;
            let sqrt21 = sqrt(int(21));
            let (w1, w2) = pm(int(4998), int(343) * sqrt21.clone());
            let (t2, t1) = pm(int(21), sqrt21);
            let mut data: Vec<_> = b
                .into_iter()
                .zip(radii)
                .map(|(w, rho)| (Uniform(w), polygon(num, 8, &rho, false)))
                .collect();
            data.push((
                Uniform(w1 / int(253125)),
                polygon(num, 8, &sqrt(t1 / int(28)), true),
            ));
            data.push((
                Uniform(w2 / int(253125)),
                polygon(num, 8, &sqrt(t2 / int(28)), true),
            ));
            (15, data)
        }
        8 => {
            let (radii, b) = moment_rings(
                num,
                &[160901628, -364759920, 274856190, -76570340, 6054195],
                &[
                    (121827491812, 1802182496625),
                    (48541, 1666980),
                    (977, 55566),
                    (671, 52920),
                ],
            )
            .map_err(|e| e.in_scheme(&name))?;
            let sqrt7 = sqrt(int(7));
            let (w1, w2) = pm(int(125504), int(16054) * sqrt7.clone());
            let (t2, t1) = pm(int(14), sqrt7);
            let mut data = vec![(Uniform(fr(496439663, 13349499975)), origin())];
            for (w, rho) in b.into_iter().zip(radii) {
                data.push((Uniform(w), polygon(num, 10, &rho, false)));
            }
            data.push((
                Uniform(w1 / int(8751645)),
                polygon(num, 10, &sqrt(t1 / int(18)), true),
            ));
            data.push((
                Uniform(w2 / int(8751645)),
                polygon(num, 10, &sqrt(t2 / int(18)), true),
            ));
            (17, data)
        }
        _ => {
            return Err(QuadratureError::UnknownScheme {
                domain: Domain::Disk,
                id: name,
            })
        }
    };
    Scheme::assemble(name, degree, data, Domain::Disk.measure(num))
}
