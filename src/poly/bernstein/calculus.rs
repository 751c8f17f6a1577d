//! Integrals, derivatives, degree changes and coefficient norms
//!
//! The Bernstein basis makes most of the calculus closed-form:
//!
//! - full-domain integral: coefficient mean times interval width
//! - indefinite integral: running coefficient sums, one degree up
//! - derivative: scaled consecutive differences, one degree down
//! - degree elevation: exact convex recombination of coefficients
//!
//! Degree *reduction* is the lossy inverse and is implemented as the
//! nearest-polynomial projection of Corless & Rezvani ("The nearest
//! polynomial of lower degree", SNC'07), parametrized by the coefficient
//! q-norm.

use crate::error::{Error, Result};
use crate::special::binomial;

use super::Bernstein;

impl Bernstein {
    /// Integral over the full domain: `(xmax - xmin) * mean(c)`
    pub fn integral(&self) -> f64 {
        let s: f64 = self.pars().iter().sum();
        s / self.npars() as f64 * self.width()
    }

    /// Integral over `[low, high]`, clamped to the domain (the function
    /// is zero outside). Reversed bounds negate the result.
    pub fn integral_between(&self, low: f64, high: f64) -> f64 {
        if low > high {
            return -self.integral_between(high, low);
        }
        let lo = low.max(self.xmin);
        let hi = high.min(self.xmax);
        if lo >= hi {
            return 0.0;
        }
        let indef = self.indefinite_integral(0.0);
        indef.value(hi) - indef.value(lo)
    }

    /// Indefinite integral as a polynomial of degree N+1 whose value at
    /// `xmin` is `c0`:
    ///
    /// ```text
    /// I(x) = c0 + ∫_xmin^x f(u) du
    /// ```
    pub fn indefinite_integral(&self, c0: f64) -> Bernstein {
        let scale = self.width() / self.npars() as f64;
        let mut out = Bernstein::new(self.degree() + 1, self.xmin, self.xmax);
        let mut run = c0;
        out.store_mut().set_par(0, run);
        for (k, &c) in self.pars().iter().enumerate() {
            run += c * scale;
            out.store_mut().set_par(k + 1, run);
        }
        out
    }

    /// Derivative as a polynomial of degree N-1 (the zero polynomial for
    /// a constant), via the Bernstein differentiation identity
    /// `f'(x) = N/w * sum_k (c[k+1] - c[k]) B_k^(N-1)(t)`.
    pub fn derivative(&self) -> Bernstein {
        let n = self.degree();
        if n == 0 {
            return Bernstein::new(0, self.xmin, self.xmax);
        }
        let scale = n as f64 / self.width();
        let mut out = Bernstein::new(n - 1, self.xmin, self.xmax);
        for k in 0..n {
            out.store_mut()
                .set_par(k, scale * (self.par(k + 1) - self.par(k)));
        }
        out
    }

    /// Derivative value at `x` (zero outside the domain, like `value`)
    pub fn derivative_at(&self, x: f64) -> f64 {
        self.derivative().value(x)
    }

    /// Exact re-expression as a degree N+r polynomial.
    ///
    /// Elevation is lossless: the represented function is unchanged.
    pub fn elevate(&self, r: usize) -> Bernstein {
        if r == 0 {
            return self.clone();
        }
        let n = self.degree();
        let mut out = Bernstein::new(n + r, self.xmin, self.xmax);
        for i in 0..=n + r {
            let mut s = 0.0;
            for j in i.saturating_sub(r)..=n.min(i) {
                s += self.par(j) * binomial(n, j) * binomial(r, i - j);
            }
            out.store_mut().set_par(i, s / binomial(n + r, i));
        }
        out
    }

    /// Best degree N-r approximation (lossy, unlike [`Bernstein::elevate`]):
    /// repeated [`Bernstein::nearest`] at the default Euclidean coefficient
    /// norm (q_inv = 0.5).
    pub fn reduce(&self, r: usize) -> Result<Bernstein> {
        if r > self.degree() {
            return Err(Error::DegreeTooLow {
                requested: r,
                degree: self.degree(),
            });
        }
        let mut out = self.clone();
        for _ in 0..r {
            out = out.nearest(0.5)?;
        }
        Ok(out)
    }

    /// Nearest polynomial of degree N-1 under the coefficient q-norm
    ///
    /// ```text
    /// |f|_q = ( sum_k |c[k]|^(1/q_inv) )^(q_inv)
    /// ```
    ///
    /// - `q_inv = 0`: max-norm
    /// - `q_inv = 0.5`: Euclidean norm (the least-squares projection)
    /// - `q_inv = 1`: sum of absolute values
    ///
    /// The degree N coefficient vectors representing true degree N-1
    /// polynomials form the hyperplane `a·c = 0` with
    /// `a[k] = (-1)^(N-k) C(N,k)` (vanishing leading power coefficient).
    /// The minimal q-norm correction onto that hyperplane is the
    /// Hölder-dual direction; the corrected vector is then reduced
    /// exactly by inverting the elevation recurrence.
    pub fn nearest(&self, q_inv: f64) -> Result<Bernstein> {
        let n = self.degree();
        if n == 0 {
            return Err(Error::DegreeTooLow {
                requested: 1,
                degree: 0,
            });
        }

        let a: Vec<f64> = (0..=n)
            .map(|k| {
                let b = binomial(n, k);
                if (n - k) % 2 == 0 {
                    b
                } else {
                    -b
                }
            })
            .collect();
        let s: f64 = a.iter().zip(self.pars()).map(|(ak, ck)| ak * ck).sum();

        let mut e: Vec<f64> = self.pars().to_vec();
        if s != 0.0 {
            if q_inv <= 0.0 {
                // q = inf, dual p = 1: spread the correction evenly
                let denom: f64 = a.iter().map(|ak| ak.abs()).sum();
                for (ek, ak) in e.iter_mut().zip(&a) {
                    *ek -= s * ak.signum() / denom;
                }
            } else if q_inv >= 1.0 {
                // q = 1, dual p = inf: all of it on the largest |a[k]|
                let mut j = 0;
                for (k, ak) in a.iter().enumerate() {
                    if ak.abs() > a[j].abs() {
                        j = k;
                    }
                }
                e[j] -= s / a[j];
            } else {
                let p = 1.0 / (1.0 - q_inv);
                let denom: f64 = a.iter().map(|ak| ak.abs().powf(p)).sum();
                for (ek, ak) in e.iter_mut().zip(&a) {
                    *ek -= s * ak.signum() * ak.abs().powf(p - 1.0) / denom;
                }
            }
        }

        // exact degree drop: invert e[i] = (i/N) b[i-1] + (1 - i/N) b[i]
        let nf = n as f64;
        let mut b = vec![0.0; n];
        b[0] = e[0];
        for i in 1..n {
            b[i] = (nf * e[i] - i as f64 * b[i - 1]) / (nf - i as f64);
        }
        Ok(Bernstein::with_pars(b, self.xmin, self.xmax))
    }

    /// Coefficient q-norm (see [`Bernstein::nearest`] for the family)
    pub fn norm(&self, q_inv: f64) -> f64 {
        if q_inv <= 0.0 {
            self.pars().iter().fold(0.0f64, |m, c| m.max(c.abs()))
        } else {
            let q = 1.0 / q_inv;
            self.pars()
                .iter()
                .map(|c| c.abs().powf(q))
                .sum::<f64>()
                .powf(q_inv)
        }
    }

    /// Distance between two polynomials in the coefficient q-norm, after
    /// pooling onto a common degree. Domains must match.
    pub fn distance(&self, other: &Bernstein, q_inv: f64) -> Result<f64> {
        Ok(self.sub(other)?.norm(q_inv))
    }

    /// Zero out negligible coefficients, returning how many were zeroed.
    ///
    /// A coefficient c is filtered when:
    /// - `epsilon > 0` and `|c| < epsilon`, or
    /// - `scale > 0` and `scale + c == scale`, or
    /// - `scale <= 0` and `norm + c == norm` with the polynomial's own
    ///   max-norm as the scale.
    pub fn remove_noise(&mut self, epsilon: f64, scale: f64) -> usize {
        let nrm = self.norm(0.0);
        let mut count = 0;
        for k in 0..self.npars() {
            let c = self.par(k);
            if c == 0.0 {
                continue;
            }
            let negligible = (epsilon > 0.0 && c.abs() < epsilon)
                || (scale > 0.0 && scale + c == scale)
                || (scale <= 0.0 && nrm + c == nrm);
            if negligible && self.store_mut().set_par(k, 0.0) {
                count += 1;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn assert_close(a: f64, b: f64, msg: &str) {
        assert!((a - b).abs() <= TOL * (1.0 + b.abs()), "{}: {} vs {}", msg, a, b);
    }

    #[test]
    fn test_integral_identity() {
        // integral = mean(c) * width, every degree
        for n in 0..=5 {
            let pars: Vec<f64> = (0..=n).map(|k| (k as f64) - 1.5).collect();
            let mean = pars.iter().sum::<f64>() / pars.len() as f64;
            let p = Bernstein::with_pars(pars, -1.0, 3.0);
            assert_close(p.integral(), mean * 4.0, &format!("n={}", n));
        }
    }

    #[test]
    fn test_spec_integral_121() {
        let p = Bernstein::with_pars(vec![1.0, 2.0, 1.0], 0.0, 1.0);
        assert_close(p.integral(), 4.0 / 3.0, "integral of [1,2,1]");
    }

    #[test]
    fn test_sub_range_integral() {
        let p = Bernstein::with_pars(vec![1.0, 0.0, 2.0], 0.0, 1.0);
        let whole = p.integral();
        let split = p.integral_between(0.0, 0.3) + p.integral_between(0.3, 1.0);
        assert_close(split, whole, "additivity");
        // clamping and orientation
        assert_close(p.integral_between(-5.0, 5.0), whole, "clamped");
        assert_close(p.integral_between(1.0, 0.0), -whole, "reversed");
    }

    #[test]
    fn test_derivative_round_trip() {
        let p = Bernstein::with_pars(vec![0.5, -1.0, 2.0, 1.0], -2.0, 2.0);
        let indef = p.indefinite_integral(3.0);
        assert_close(indef.value(-2.0), 3.0, "constant of integration");
        let back = indef.derivative();
        assert_eq!(back.degree(), p.degree());
        for (a, b) in back.pars().iter().zip(p.pars()) {
            assert_close(*a, *b, "d/dx of indefinite integral");
        }
    }

    #[test]
    fn test_derivative_of_constant() {
        let p = Bernstein::with_pars(vec![7.0], 0.0, 1.0);
        let d = p.derivative();
        assert_eq!(d.degree(), 0);
        assert_eq!(d.pars(), &[0.0]);
    }

    #[test]
    fn test_derivative_values() {
        // f = x^2 on [0,2]: Bernstein coeffs via monomial bridge not
        // needed, use [0, 0, 4] (endpoint values 0 and 4, middle 0)
        let p = Bernstein::with_pars(vec![0.0, 0.0, 4.0], 0.0, 2.0);
        for i in 0..=4 {
            let x = 0.5 * i as f64;
            assert_close(p.value(x), x * x, "f");
            assert_close(p.derivative_at(x), 2.0 * x, "f'");
        }
    }

    #[test]
    fn test_elevation_is_exact() {
        let p = Bernstein::with_pars(vec![1.0, -1.0, 0.5], 0.0, 1.0);
        for r in 0..=4 {
            let e = p.elevate(r);
            assert_eq!(e.degree(), 2 + r);
            for i in 0..=10 {
                let x = 0.1 * i as f64;
                assert_close(e.value(x), p.value(x), &format!("r={} x={}", r, x));
            }
        }
    }

    #[test]
    fn test_nearest_l2_matches_projection() {
        // independent least-squares computation: project c onto the
        // hyperplane a.c = 0, a[k] = (-1)^(N-k) C(N,k)
        let p = Bernstein::with_pars(vec![1.0, 0.5, -0.25, 2.0], 0.0, 1.0);
        let a = [-1.0, 3.0, -3.0, 1.0];
        let s: f64 = a.iter().zip(p.pars()).map(|(x, y)| x * y).sum();
        let aa: f64 = a.iter().map(|x| x * x).sum();
        let proj: Vec<f64> = p
            .pars()
            .iter()
            .zip(&a)
            .map(|(c, ak)| c - s * ak / aa)
            .collect();

        let near = p.nearest(0.5).unwrap();
        assert_eq!(near.degree(), 2);
        let lifted = near.elevate(1);
        for (got, want) in lifted.pars().iter().zip(&proj) {
            assert_close(*got, *want, "projection coefficients");
        }
    }

    #[test]
    fn test_nearest_preserves_lower_degree_input() {
        // an elevated polynomial is already in the hyperplane: nearest
        // must give back the original, for every norm
        let p = Bernstein::with_pars(vec![1.0, 3.0, -2.0], 0.0, 1.0);
        let lifted = p.elevate(1);
        for q_inv in [0.0, 0.25, 0.5, 1.0] {
            let near = lifted.nearest(q_inv).unwrap();
            for (a, b) in near.pars().iter().zip(p.pars()) {
                assert_close(*a, *b, &format!("q_inv={}", q_inv));
            }
        }
    }

    #[test]
    fn test_reduce_consistent_with_nearest() {
        let p = Bernstein::with_pars(vec![1.0, 0.5, -0.25, 2.0], 0.0, 1.0);
        let r = p.reduce(1).unwrap();
        let n = p.nearest(0.5).unwrap();
        assert_eq!(r.pars(), n.pars());
        assert!(matches!(
            p.reduce(7),
            Err(Error::DegreeTooLow { requested: 7, degree: 3 })
        ));
    }

    #[test]
    fn test_norms() {
        let p = Bernstein::with_pars(vec![3.0, -4.0], 0.0, 1.0);
        assert_close(p.norm(0.0), 4.0, "max");
        assert_close(p.norm(0.5), 5.0, "euclid");
        assert_close(p.norm(1.0), 7.0, "abs sum");
    }

    #[test]
    fn test_distance() {
        let a = Bernstein::with_pars(vec![1.0, 1.0], 0.0, 1.0);
        let b = Bernstein::with_pars(vec![1.0, 1.0, 1.0], 0.0, 1.0);
        // same function, different degree: distance 0
        assert_close(a.distance(&b, 0.5).unwrap(), 0.0, "same function");
        let c = Bernstein::with_pars(vec![2.0, 2.0], 0.0, 1.0);
        assert_close(a.distance(&c, 0.5).unwrap(), 2.0f64.sqrt(), "shifted");
    }

    #[test]
    fn test_remove_noise() {
        let mut p = Bernstein::with_pars(vec![1.0, 1e-18, -1e-3, 0.0], 0.0, 1.0);
        // relative to own norm: only the 1e-18 term goes
        assert_eq!(p.remove_noise(0.0, 0.0), 1);
        assert_eq!(p.par(1), 0.0);
        assert_eq!(p.par(2), -1e-3);
        // absolute threshold takes the 1e-3 term as well
        assert_eq!(p.remove_noise(1e-2, 0.0), 1);
        assert_eq!(p.par(2), 0.0);
        assert_eq!(p.par(0), 1.0);
    }
}
