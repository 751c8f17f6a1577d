//! Integration tests for the Bernstein polynomial engine

mod common;

use common::{assert_allclose_f64, assert_close_f64};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hepmath::poly::{casteljau, Basic, Bernstein, ClassicalSum};

fn random_poly(rng: &mut StdRng, degree: usize, xmin: f64, xmax: f64) -> Bernstein {
    let pars: Vec<f64> = (0..=degree).map(|_| rng.gen_range(-5.0..5.0)).collect();
    Bernstein::with_pars(pars, xmin, xmax)
}

#[test]
fn test_partition_of_unity_random_points() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 1..=8 {
        for _ in 0..20 {
            let t: f64 = rng.gen_range(0.0..1.0);
            let sum: f64 = (0..=n)
                .map(|k| {
                    let mut pars = vec![0.0; n + 1];
                    pars[k] = 1.0;
                    casteljau(&pars, t)
                })
                .sum();
            assert_close_f64(sum, 1.0, 1e-12, 1e-12, &format!("n={} t={}", n, t));
        }
    }
}

#[test]
fn test_evaluation_against_direct_expansion() {
    // de Casteljau agrees with the explicit binomial sum at modest degree
    let mut rng = StdRng::seed_from_u64(21);
    let binomial = |n: usize, k: usize| -> f64 {
        let mut r = 1.0;
        for i in 0..k {
            r = r * (n - i) as f64 / (i + 1) as f64;
        }
        r
    };
    for _ in 0..10 {
        let p = random_poly(&mut rng, 5, -1.0, 2.0);
        let x: f64 = rng.gen_range(-1.0..2.0);
        let t = (x + 1.0) / 3.0;
        let direct: f64 = p
            .pars()
            .iter()
            .enumerate()
            .map(|(k, &c)| c * binomial(5, k) * t.powi(k as i32) * (1.0 - t).powi(5 - k as i32))
            .sum();
        assert_close_f64(p.value(x), direct, 1e-11, 1e-11, "direct expansion");
    }
}

#[test]
fn test_arithmetic_consistency() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        let a = random_poly(&mut rng, 3, 0.0, 1.0);
        let b = random_poly(&mut rng, 2, 0.0, 1.0);
        let sum = a.sum(&b).unwrap();
        let product = a.mul(&b).unwrap();
        for i in 0..=10 {
            let x = 0.1 * i as f64;
            assert_close_f64(sum.value(x), a.value(x) + b.value(x), 1e-11, 1e-11, "sum");
            assert_close_f64(
                product.value(x),
                a.value(x) * b.value(x),
                1e-11,
                1e-11,
                "product",
            );
        }
    }
}

#[test]
fn test_divmod_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(11);
    for trial in 0..20 {
        let f = random_poly(&mut rng, 4, 0.0, 1.0);
        let g = random_poly(&mut rng, 2, 0.0, 1.0);
        let (q, r) = f.divmod(&g).unwrap();
        let back = q.mul(&g).unwrap().sum(&r).unwrap();
        for i in 0..=10 {
            let x = 0.1 * i as f64;
            assert_close_f64(
                back.value(x),
                f.value(x),
                1e-8,
                1e-8,
                &format!("trial {} x={}", trial, x),
            );
        }
        assert!(r.degree() < 2);
    }
}

#[test]
fn test_integral_of_basis_functions() {
    // every B_k^N integrates to w/(N+1)
    for n in 0..=6 {
        for k in 0..=n {
            let p = Bernstein::basic(Basic::new(k, n), 1.0, 4.0);
            assert_close_f64(
                p.integral(),
                3.0 / (n as f64 + 1.0),
                1e-13,
                1e-13,
                &format!("k={} n={}", k, n),
            );
        }
    }
}

#[test]
fn test_spec_integral_values() {
    let p = Bernstein::with_pars(vec![1.0, 2.0, 1.0], 0.0, 1.0);
    assert_close_f64(p.integral(), 4.0 / 3.0, 1e-14, 1e-14, "[1,2,1]");
}

#[test]
fn test_nearest_is_least_squares_projection() {
    // independent check: nearest(0.5) minimizes the Euclidean coefficient
    // distance among degree N-1 polynomials, so perturbing the reduced
    // coefficients can only increase the distance to the original
    let mut rng = StdRng::seed_from_u64(5);
    let p = random_poly(&mut rng, 4, 0.0, 1.0);
    let near = p.nearest(0.5).unwrap();
    let base = p.distance(&near, 0.5).unwrap();
    for _ in 0..50 {
        let mut perturbed = near.clone();
        for i in 0..perturbed.npars() {
            let delta: f64 = rng.gen_range(-0.1..0.1);
            let v = perturbed.par(i) + delta;
            perturbed.set_par(i, v);
        }
        let d = p.distance(&perturbed, 0.5).unwrap();
        assert!(d + 1e-12 >= base, "perturbation improved: {} < {}", d, base);
    }
}

#[test]
fn test_elevate_reduce_round_trip() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..10 {
        let p = random_poly(&mut rng, 3, -2.0, 2.0);
        let up = p.elevate(2);
        let back = up.reduce(2).unwrap();
        assert_allclose_f64(back.pars(), p.pars(), 1e-9, 1e-9, "round trip");
    }
}

#[test]
fn test_conversion_round_trip_preserves_values() {
    let s = ClassicalSum::legendre(vec![1.0, -0.5, 0.25, 0.75], -1.0, 1.0);
    let p = Bernstein::from_classical(&s);
    for i in 0..=20 {
        let x = -1.0 + 0.1 * i as f64;
        assert_close_f64(p.value(x), s.value(x), 1e-10, 1e-10, &format!("x={}", x));
    }
}

#[test]
fn test_root_bracketing_pipeline() {
    // hull bounds bracket the roots, deflation removes them one by one
    let p = Bernstein::from_roots(0.0, 1.0, &[0.2, 0.5, 0.8], &[]);
    assert_eq!(p.sign_changes(), 3);
    assert!(p.left_line_hull() <= 0.2);
    assert!(p.right_line_hull() >= 0.8);

    let d = p.deflate(0.5).unwrap();
    assert_eq!(d.degree(), 2);
    assert_close_f64(d.value(0.2), 0.0, 0.0, 1e-10, "root kept");
    assert_close_f64(d.value(0.8), 0.0, 0.0, 1e-10, "root kept");
}
