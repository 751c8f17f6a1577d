//! Closed-form integrals of Bernstein polynomials against analytic kernels
//!
//! Fit models pair a polynomial shape with an exponential or power-law
//! factor; these helpers integrate the product without quadrature:
//!
//! ```text
//! integrate_exp:   int B(x) exp(tau x) dx
//! integrate_poly:  int B(x) (x - xmin)^m / m! dx
//! ```
//!
//! Both reduce, on the normalized variable, to Euler integrals of the
//! basic Bernstein polynomials. The exponential case is a rapidly
//! converging series whose terms obey a two-factor recurrence; it is
//! exact in the `tau -> 0` limit (the leading term is the plain
//! integral). Large negative `tau * width` cancels catastrophically in
//! the alternating series; the kernels here are meant for moderate
//! slopes.

use super::{Basic, Bernstein};

/// `int_0^1 B_k^n(t) exp(tau t) dt`
///
/// Series over the monomial moments of B_k^n with the term recurrence
/// `term[m+1] = term[m] * tau * (k+m+1) / ((m+1)(n+m+2))`.
pub fn integrate_exp_basic(b: Basic, tau: f64) -> f64 {
    let (k, n) = (b.k(), b.n());
    if k > n {
        return 0.0;
    }
    let mut term = 1.0 / (n as f64 + 1.0);
    let mut sum = term;
    for m in 0..500 {
        term *= tau * (k + m + 1) as f64 / ((m + 1) as f64 * (n + m + 2) as f64);
        sum += term;
        if term.abs() <= f64::EPSILON * sum.abs() {
            break;
        }
    }
    sum
}

/// `int_xmin^xmax poly(x) exp(tau x) dx`
pub fn integrate_exp(poly: &Bernstein, tau: f64) -> f64 {
    if tau == 0.0 {
        return poly.integral();
    }
    // x = xmin + w t pulls out w exp(tau xmin) and rescales the slope
    let w = poly.xmax() - poly.xmin();
    let n = poly.degree();
    let s: f64 = poly
        .pars()
        .iter()
        .enumerate()
        .map(|(k, &c)| c * integrate_exp_basic(Basic::new(k, n), tau * w))
        .sum();
    w * (tau * poly.xmin()).exp() * s
}

/// `int_low^high poly(x) exp(tau x) dx`, clamped to the domain; reversed
/// bounds negate the result.
pub fn integrate_exp_between(poly: &Bernstein, tau: f64, low: f64, high: f64) -> f64 {
    if low > high {
        return -integrate_exp_between(poly, tau, high, low);
    }
    if tau == 0.0 {
        return poly.integral_between(low, high);
    }
    let lo = low.max(poly.xmin());
    let hi = high.min(poly.xmax());
    if lo >= hi {
        return 0.0;
    }
    if lo == poly.xmin() && hi == poly.xmax() {
        return integrate_exp(poly, tau);
    }
    // exact restriction: the polynomial re-expressed over the sub-range
    integrate_exp(&Bernstein::with_domain(poly, lo, hi), tau)
}

/// `int_0^1 B_k^n(t) t^m / m! dt`
///
/// Closed form `1/(n+1) * prod_{i=1..m} (k+i) / ((n+1+i) i)`; the `1/i`
/// factors fold the `1/m!` of the kernel into the product.
pub fn integrate_poly_basic(b: Basic, m: usize) -> f64 {
    let (k, n) = (b.k(), b.n());
    if k > n {
        return 0.0;
    }
    let mut r = 1.0 / (n as f64 + 1.0);
    for i in 1..=m {
        r *= (k + i) as f64 / ((n + 1 + i) as f64 * i as f64);
    }
    r
}

/// `int_xmin^xmax poly(x) (x - xmin)^m / m! dx`
pub fn integrate_poly(poly: &Bernstein, m: usize) -> f64 {
    let w = poly.xmax() - poly.xmin();
    let n = poly.degree();
    let s: f64 = poly
        .pars()
        .iter()
        .enumerate()
        .map(|(k, &c)| c * integrate_poly_basic(Basic::new(k, n), m))
        .sum();
    w.powi(m as i32 + 1) * s
}

/// `int_low^high poly(x) (x - xmin)^m / m! dx`, clamped to the domain.
///
/// The monomial factor is itself a polynomial, so the sub-range integral
/// is the plain Bernstein integral of the exact product.
pub fn integrate_poly_between(poly: &Bernstein, m: usize, low: f64, high: f64) -> f64 {
    let factorial: f64 = (1..=m).map(|i| i as f64).product();
    poly.mul_edges(m, 0).integral_between(low, high) / factorial
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::Workspace;

    fn assert_close(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() <= tol * (1.0 + b.abs()), "{}: {} vs {}", msg, a, b);
    }

    #[test]
    fn test_basic_exp_at_zero_slope() {
        // all basis functions integrate to 1/(n+1)
        for n in 0..=5 {
            for k in 0..=n {
                assert_close(
                    integrate_exp_basic(Basic::new(k, n), 0.0),
                    1.0 / (n as f64 + 1.0),
                    1e-14,
                    &format!("k={} n={}", k, n),
                );
            }
        }
        assert_eq!(integrate_exp_basic(Basic::new(4, 2), 1.0), 0.0);
    }

    #[test]
    fn test_basic_exp_degree_zero() {
        // int_0^1 exp(tau t) dt = (exp(tau) - 1)/tau
        for tau in [0.1, 1.0, -2.0, 5.0] {
            let expect = (f64::exp(tau) - 1.0) / tau;
            assert_close(
                integrate_exp_basic(Basic::new(0, 0), tau),
                expect,
                1e-13,
                &format!("tau={}", tau),
            );
        }
    }

    #[test]
    fn test_exp_matches_quadrature() {
        let p = Bernstein::with_pars(vec![1.0, 2.0, 1.0], 0.0, 1.0);
        let ws = Workspace::default();
        for tau in [0.3, -1.5, 2.0] {
            let numeric = ws
                .integrate(|x| p.value(x) * (tau * x).exp(), 0.0, 1.0)
                .unwrap()
                .value;
            assert_close(integrate_exp(&p, tau), numeric, 1e-10, &format!("tau={}", tau));
        }
    }

    #[test]
    fn test_exp_small_slope_stability() {
        let p = Bernstein::with_pars(vec![1.0, -0.5, 2.0, 0.25], -1.0, 3.0);
        assert_close(integrate_exp(&p, 1e-14), p.integral(), 1e-10, "tau -> 0");
        assert_eq!(integrate_exp(&p, 0.0), p.integral());
    }

    #[test]
    fn test_exp_between() {
        let p = Bernstein::with_pars(vec![1.0, 0.0, 2.0], 0.0, 1.0);
        let tau = 0.7;
        let whole = integrate_exp(&p, tau);
        let split = integrate_exp_between(&p, tau, 0.0, 0.4)
            + integrate_exp_between(&p, tau, 0.4, 1.0);
        assert_close(split, whole, 1e-11, "additive");
        assert_close(
            integrate_exp_between(&p, tau, -3.0, 4.0),
            whole,
            1e-12,
            "clamped",
        );
        assert_close(
            integrate_exp_between(&p, tau, 1.0, 0.0),
            -whole,
            1e-12,
            "reversed",
        );
    }

    #[test]
    fn test_basic_poly_moments() {
        // m = 0 is the plain integral; B_n^n = t^n has moment 1/(n+2)
        assert_close(integrate_poly_basic(Basic::new(1, 3), 0), 0.25, 1e-14, "m=0");
        assert_close(integrate_poly_basic(Basic::new(3, 3), 1), 1.0 / 5.0, 1e-14, "t^3 * t");
        assert_eq!(integrate_poly_basic(Basic::new(7, 3), 2), 0.0);
    }

    #[test]
    fn test_poly_matches_quadrature() {
        let p = Bernstein::with_pars(vec![1.0, 2.0, 0.5], 1.0, 3.0);
        let ws = Workspace::default();
        for m in [0usize, 1, 2, 3] {
            let mf: f64 = (1..=m).map(|i| i as f64).product();
            let numeric = ws
                .integrate(|x| p.value(x) * (x - 1.0).powi(m as i32) / mf, 1.0, 3.0)
                .unwrap()
                .value;
            assert_close(integrate_poly(&p, m), numeric, 1e-10, &format!("m={}", m));
        }
    }

    #[test]
    fn test_poly_between_consistency() {
        let p = Bernstein::with_pars(vec![1.0, 2.0, 0.5], 1.0, 3.0);
        for m in [0usize, 1, 2] {
            assert_close(
                integrate_poly_between(&p, m, 1.0, 3.0),
                integrate_poly(&p, m),
                1e-11,
                &format!("full range m={}", m),
            );
        }
        let split = integrate_poly_between(&p, 2, 1.0, 1.7)
            + integrate_poly_between(&p, 2, 1.7, 3.0);
        assert_close(split, integrate_poly(&p, 2), 1e-11, "additive");
    }
}
