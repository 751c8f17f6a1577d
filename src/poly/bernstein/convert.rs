//! Exact basis conversions in and out of Bernstein form
//!
//! Everything routes through monomial coefficients of the normalized
//! variable t: both directions of that bridge are closed-form,
//!
//! ```text
//! m[j] = C(N,j) sum_{i<=j} (-1)^(j-i) C(j,i) c[i]      (Bernstein -> t-monomial)
//! c[k] = sum_{j<=k} C(k,j)/C(N,j) m[j]                 (t-monomial -> Bernstein)
//! ```
//!
//! The alternating sum in the forward direction is mildly ill-conditioned
//! at high degree; that is inherent to leaving the Bernstein basis, and
//! acceptable here because conversions are construction-time operations.

use crate::poly::classical::ClassicalSum;
use crate::poly::mono;
use crate::special::binomial;

use super::Bernstein;

/// Monomial coefficients in t of a Bernstein coefficient vector
pub(crate) fn bernstein_to_tmono(pars: &[f64]) -> Vec<f64> {
    let n = pars.len() - 1;
    let mut out = vec![0.0; n + 1];
    for (j, o) in out.iter_mut().enumerate() {
        let mut s = 0.0;
        for (i, &c) in pars.iter().enumerate().take(j + 1) {
            let term = binomial(j, i) * c;
            if (j - i) % 2 == 0 {
                s += term;
            } else {
                s -= term;
            }
        }
        *o = binomial(n, j) * s;
    }
    out
}

/// Bernstein coefficients of degree `n` for t-monomial coefficients
/// (`mono.len() <= n + 1`; missing high powers are zero).
pub(crate) fn tmono_to_bernstein(mono: &[f64], n: usize) -> Vec<f64> {
    let mut out = vec![0.0; n + 1];
    for (k, o) in out.iter_mut().enumerate() {
        let mut s = 0.0;
        for (j, &m) in mono.iter().enumerate().take(k + 1) {
            s += binomial(k, j) / binomial(n, j) * m;
        }
        *o = s;
    }
    out
}

impl Bernstein {
    /// Re-express `poly` over a different interval.
    ///
    /// The result represents the same function: values at shared points
    /// agree up to floating-point rounding (outside-domain zeroing follows
    /// the *new* interval).
    pub fn with_domain(poly: &Bernstein, xmin: f64, xmax: f64) -> Self {
        let (xmin, xmax) = super::order_edges(xmin, xmax);
        if xmin == poly.xmin && xmax == poly.xmax {
            return poly.clone();
        }
        // t_old = alpha + beta * t_new
        let ow = poly.width();
        let alpha = (xmin - poly.xmin) / ow;
        let beta = (xmax - xmin) / ow;
        let m = mono::affine(&bernstein_to_tmono(poly.pars()), alpha, beta);
        Bernstein::with_pars(tmono_to_bernstein(&m, poly.degree()), xmin, xmax)
    }

    /// Exact conversion from a Legendre, Chebyshev or monomial sum
    pub fn from_classical(sum: &ClassicalSum) -> Self {
        let m = sum.tmono_coefficients();
        Bernstein::with_pars(
            tmono_to_bernstein(&m, sum.degree()),
            sum.xmin(),
            sum.xmax(),
        )
    }

    /// Monic polynomial built from its roots,
    ///
    /// ```text
    /// f(x) = prod_i (x - r[i]) * prod_j (x - c[j])(x - conj(c[j]))
    /// ```
    ///
    /// Complex roots are supplied as `(re, im)` pairs, one representative
    /// per conjugate pair; the conjugate is implied. No roots at all gives
    /// the constant 1.
    pub fn from_roots(xmin: f64, xmax: f64, real: &[f64], complex: &[(f64, f64)]) -> Self {
        // power-basis coefficients in x by convolving linear and
        // conjugate-quadratic factors
        let mut coeffs = vec![1.0];
        for &r in real {
            coeffs = mono::mul(&coeffs, &[-r, 1.0]);
        }
        for &(re, im) in complex {
            coeffs = mono::mul(&coeffs, &[re * re + im * im, -2.0 * re, 1.0]);
        }
        Bernstein::from_classical(&ClassicalSum::monomial(coeffs, xmin, xmax))
    }

    /// Leading power coefficient: `f(x) = head * x^N + ...`
    pub fn head(&self) -> f64 {
        let n = self.degree();
        let mut s = 0.0;
        for (k, &c) in self.pars().iter().enumerate() {
            let term = binomial(n, k) * c;
            if (n - k) % 2 == 0 {
                s += term;
            } else {
                s -= term;
            }
        }
        s / self.width().powi(n as i32)
    }
}
