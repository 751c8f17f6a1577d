//! Classical polynomial bases: Legendre, Chebyshev and monomial sums
//!
//! These types are coefficient *sources* for conversion into Bernstein
//! form. They carry a [`PolySum`] store, a domain and a basis tag; the
//! evaluation and expansion rules dispatch by exhaustive match on the tag
//! rather than through virtual calls.
//!
//! Conventions:
//! - Legendre and Chebyshev sums act on the mapped variable
//!   `u = 2t - 1 ∈ [-1, 1]` with `t = (x - xmin)/(xmax - xmin)`.
//! - Monomial sums are plain power series in `x` itself; the attached
//!   domain only matters as the target interval of a conversion.
//!
//! # Algorithm
//! Clenshaw recurrences for the orthogonal bases (the summation form of
//! the standard upward three-term recurrences), Horner for monomials.

use super::mono;
use super::store::PolySum;

/// Tag identifying a classical polynomial basis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassicalBasis {
    /// Legendre polynomials P_k(u) on u in [-1, 1]
    Legendre,
    /// Chebyshev polynomials of the first kind T_k(u) on u in [-1, 1]
    Chebyshev,
    /// Plain powers x^k
    Monomial,
}

/// Sum over one classical basis: `f(x) = sum_k a[k] φ_k`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicalSum {
    basis: ClassicalBasis,
    store: PolySum,
    xmin: f64,
    xmax: f64,
}

impl ClassicalSum {
    /// Generic constructor; reversed interval edges are swapped.
    pub fn new(basis: ClassicalBasis, pars: Vec<f64>, xmin: f64, xmax: f64) -> Self {
        let (xmin, xmax) = if xmin <= xmax { (xmin, xmax) } else { (xmax, xmin) };
        ClassicalSum {
            basis,
            store: PolySum::new(pars),
            xmin,
            xmax,
        }
    }

    /// Legendre sum over `[xmin, xmax]`
    pub fn legendre(pars: Vec<f64>, xmin: f64, xmax: f64) -> Self {
        Self::new(ClassicalBasis::Legendre, pars, xmin, xmax)
    }

    /// Chebyshev sum over `[xmin, xmax]`
    pub fn chebyshev(pars: Vec<f64>, xmin: f64, xmax: f64) -> Self {
        Self::new(ClassicalBasis::Chebyshev, pars, xmin, xmax)
    }

    /// Monomial (power-basis) polynomial, converted over `[xmin, xmax]`
    pub fn monomial(pars: Vec<f64>, xmin: f64, xmax: f64) -> Self {
        Self::new(ClassicalBasis::Monomial, pars, xmin, xmax)
    }

    /// The basis tag
    pub fn basis(&self) -> ClassicalBasis {
        self.basis
    }

    /// Polynomial degree
    pub fn degree(&self) -> usize {
        self.store.degree()
    }

    /// Coefficient `i`, 0.0 out of range
    pub fn par(&self, i: usize) -> f64 {
        self.store.par(i)
    }

    /// All coefficients
    pub fn pars(&self) -> &[f64] {
        self.store.pars()
    }

    /// Lower edge
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Upper edge
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Evaluate the sum at `x` (no out-of-domain clamping; these are
    /// coefficient sources, not bounded shapes).
    pub fn value(&self, x: f64) -> f64 {
        let a = self.store.pars();
        match self.basis {
            ClassicalBasis::Legendre => {
                let u = self.u(x);
                // Clenshaw for (k+1) P_{k+1} = (2k+1) u P_k - k P_{k-1}
                let n = a.len();
                let mut b1 = 0.0;
                let mut b2 = 0.0;
                for k in (0..n).rev() {
                    let kf = k as f64;
                    let b0 = a[k] + (2.0 * kf + 1.0) / (kf + 1.0) * u * b1
                        - (kf + 1.0) / (kf + 2.0) * b2;
                    b2 = b1;
                    b1 = b0;
                }
                b1
            }
            ClassicalBasis::Chebyshev => {
                let u = self.u(x);
                // Clenshaw for T_{k+1} = 2u T_k - T_{k-1}
                let mut b1 = 0.0;
                let mut b2 = 0.0;
                for &ak in a.iter().skip(1).rev() {
                    let b0 = ak + 2.0 * u * b1 - b2;
                    b2 = b1;
                    b1 = b0;
                }
                a[0] + u * b1 - b2
            }
            ClassicalBasis::Monomial => {
                let mut r = 0.0;
                for &ak in a.iter().rev() {
                    r = r * x + ak;
                }
                r
            }
        }
    }

    /// Monomial coefficients of the sum in the normalized variable
    /// `t = (x - xmin)/(xmax - xmin)`; this is the exact bridge every
    /// Bernstein conversion goes through.
    pub(crate) fn tmono_coefficients(&self) -> Vec<f64> {
        let a = self.store.pars();
        match self.basis {
            ClassicalBasis::Legendre => {
                let cu = accumulate_recurrence(a, |k, pk, pk1| {
                    // (k+1) P_{k+1} = (2k+1) u P_k - k P_{k-1}
                    let kf = k as f64;
                    let mut next = vec![0.0; pk.len() + 1];
                    for (j, &c) in pk.iter().enumerate() {
                        next[j + 1] += (2.0 * kf + 1.0) / (kf + 1.0) * c;
                    }
                    for (j, &c) in pk1.iter().enumerate() {
                        next[j] -= kf / (kf + 1.0) * c;
                    }
                    next
                });
                mono::affine(&cu, -1.0, 2.0)
            }
            ClassicalBasis::Chebyshev => {
                let cu = accumulate_recurrence(a, |_, tk, tk1| {
                    // T_{k+1} = 2u T_k - T_{k-1}
                    let mut next = vec![0.0; tk.len() + 1];
                    for (j, &c) in tk.iter().enumerate() {
                        next[j + 1] += 2.0 * c;
                    }
                    for (j, &c) in tk1.iter().enumerate() {
                        next[j] -= c;
                    }
                    next
                });
                mono::affine(&cu, -1.0, 2.0)
            }
            ClassicalBasis::Monomial => {
                // x = xmin + (xmax - xmin) t
                mono::affine(a, self.xmin, self.xmax - self.xmin)
            }
        }
    }

    fn u(&self, x: f64) -> f64 {
        2.0 * (x - self.xmin) / (self.xmax - self.xmin) - 1.0
    }
}

/// Expand `sum_k a[k] φ_k(u)` into monomial coefficients of `u`, given the
/// three-term recurrence `φ_{k+1} = step(k, φ_k, φ_{k-1})` acting on
/// coefficient vectors, with `φ_0 = 1` and `φ_1 = u`.
fn accumulate_recurrence<F>(a: &[f64], step: F) -> Vec<f64>
where
    F: Fn(usize, &[f64], &[f64]) -> Vec<f64>,
{
    let n = a.len();
    let mut out = vec![0.0; n];
    let mut prev = vec![1.0]; // φ_0
    let mut curr = vec![0.0, 1.0]; // φ_1
    out[0] += a[0];
    if n > 1 {
        for (j, &c) in curr.iter().enumerate() {
            out[j] += a[1] * c;
        }
    }
    for k in 1..n.saturating_sub(1) {
        let next = step(k, &curr, &prev);
        for (j, &c) in next.iter().enumerate() {
            out[j] += a[k + 1] * c;
        }
        prev = curr;
        curr = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn assert_close(a: f64, b: f64, msg: &str) {
        assert!((a - b).abs() <= TOL * (1.0 + b.abs()), "{}: {} vs {}", msg, a, b);
    }

    #[test]
    fn test_legendre_matches_explicit() {
        // a = [0, 0, 1]: P_2(u) = (3u^2 - 1)/2 on [-1, 1] with u = x
        let s = ClassicalSum::legendre(vec![0.0, 0.0, 1.0], -1.0, 1.0);
        for x in [-1.0, -0.3, 0.0, 0.7, 1.0] {
            assert_close(s.value(x), 0.5 * (3.0 * x * x - 1.0), "P2");
        }
    }

    #[test]
    fn test_chebyshev_matches_explicit() {
        // T_3(u) = 4u^3 - 3u
        let s = ClassicalSum::chebyshev(vec![0.0, 0.0, 0.0, 1.0], -1.0, 1.0);
        for x in [-1.0, -0.5, 0.2, 1.0] {
            assert_close(s.value(x), 4.0 * x * x * x - 3.0 * x, "T3");
        }
    }

    #[test]
    fn test_monomial_horner() {
        let s = ClassicalSum::monomial(vec![1.0, -2.0, 1.0], 0.0, 2.0);
        for x in [0.0, 0.5, 1.0, 3.0] {
            assert_close(s.value(x), (x - 1.0) * (x - 1.0), "monomial");
        }
    }

    #[test]
    fn test_tmono_agrees_with_value() {
        // Evaluate the t-monomial expansion directly and compare
        let sums = [
            ClassicalSum::legendre(vec![0.5, -1.0, 2.0, 0.3], 0.0, 4.0),
            ClassicalSum::chebyshev(vec![1.0, 0.5, -0.5], -2.0, 2.0),
            ClassicalSum::monomial(vec![3.0, -1.0, 0.25], -1.0, 3.0),
        ];
        for s in &sums {
            let m = s.tmono_coefficients();
            for i in 0..=8 {
                let t = i as f64 / 8.0;
                let x = s.xmin() + (s.xmax() - s.xmin()) * t;
                let mut horner = 0.0;
                for &c in m.iter().rev() {
                    horner = horner * t + c;
                }
                assert!(
                    (horner - s.value(x)).abs() < 1e-10,
                    "{:?} at t={}: {} vs {}",
                    s.basis(),
                    t,
                    horner,
                    s.value(x)
                );
            }
        }
    }

    #[test]
    fn test_swapped_edges() {
        let s = ClassicalSum::monomial(vec![0.0, 1.0], 2.0, -1.0);
        assert_eq!(s.xmin(), -1.0);
        assert_eq!(s.xmax(), 2.0);
    }
}
