//! Bernstein-form polynomials
//!
//! A polynomial of degree N is stored as N+1 control coefficients over a
//! closed interval `[xmin, xmax]`:
//!
//! ```text
//! f(x) = sum_k c[k] * B_k^N(t),   B_k^N(t) = C(N,k) t^k (1-t)^(N-k)
//! t = (x - xmin)/(xmax - xmin)
//! ```
//!
//! The control coefficients form a convex hull containing the graph of
//! the polynomial, which is what makes the basis attractive for shape
//! queries and root bracketing. Evaluation uses the de Casteljau
//! recurrence, which is numerically stable where direct binomial
//! expansion is not.
//!
//! Outside the domain the polynomial is defined to be exactly zero; this
//! is a modelling convention (density shapes vanish off-range), not an
//! error.
//!
//! # Submodules
//!
//! - [`calculus`](self): integrals, derivatives, degree elevation and
//!   reduction, q-norms and noise filtering
//! - conversion from classical bases, roots and foreign intervals
//! - polynomial long division and deflation
//! - control-polygon root geometry
//! - Newton–Bernstein interpolation builders
//! - closed-form integrals against exponential and monomial kernels

mod calculus;
mod convert;
mod division;
mod geometry;
mod integrals;
mod interpolate;

pub use integrals::{
    integrate_exp, integrate_exp_basic, integrate_exp_between, integrate_poly,
    integrate_poly_basic, integrate_poly_between,
};
pub use interpolate::{bernstein_interpolate, bernstein_of_fn, lobatto};

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Error, Result};
use crate::poly::store::PolySum;
use crate::special::binomial;

/// Index pair identifying one basic Bernstein polynomial B_k^N
///
/// A pure value object: no owned state beyond the two indices. `k > n`
/// identifies nothing and evaluates to zero wherever it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Basic {
    k: usize,
    n: usize,
}

impl Basic {
    /// Identify B_k^N
    pub fn new(k: usize, n: usize) -> Self {
        Basic { k, n }
    }

    /// Basis function index
    pub fn k(&self) -> usize {
        self.k
    }

    /// Basis degree
    pub fn n(&self) -> usize {
        self.n
    }
}

/// Polynomial in the Bernstein basis over `[xmin, xmax]`
#[derive(Debug, Clone, PartialEq)]
pub struct Bernstein {
    store: PolySum,
    xmin: f64,
    xmax: f64,
}

/// Order interval edges, swapping reversed input
fn order_edges(xmin: f64, xmax: f64) -> (f64, f64) {
    if xmin <= xmax {
        (xmin, xmax)
    } else {
        (xmax, xmin)
    }
}

impl Bernstein {
    /// Zero polynomial of degree `n` over `[xmin, xmax]`
    pub fn new(n: usize, xmin: f64, xmax: f64) -> Self {
        let (xmin, xmax) = order_edges(xmin, xmax);
        Bernstein {
            store: PolySum::zeros(n),
            xmin,
            xmax,
        }
    }

    /// Polynomial from explicit coefficients; an empty vector yields the
    /// degree-0 zero polynomial.
    pub fn with_pars(pars: Vec<f64>, xmin: f64, xmax: f64) -> Self {
        let (xmin, xmax) = order_edges(xmin, xmax);
        Bernstein {
            store: PolySum::new(pars),
            xmin,
            xmax,
        }
    }

    /// The basic Bernstein polynomial B_k^N: all coefficients zero except
    /// index k, which is one. `k > n` gives the zero polynomial.
    pub fn basic(b: Basic, xmin: f64, xmax: f64) -> Self {
        let mut p = Bernstein::new(b.n, xmin, xmax);
        p.store.set_par(b.k, 1.0);
        p
    }

    /// Polynomial degree
    pub fn degree(&self) -> usize {
        self.store.degree()
    }

    /// Number of coefficients (degree + 1)
    pub fn npars(&self) -> usize {
        self.store.npars()
    }

    /// Coefficient `i`, 0.0 out of range
    pub fn par(&self, i: usize) -> f64 {
        self.store.par(i)
    }

    /// Set coefficient `i`; out-of-range indices are silently ignored.
    /// Returns whether the stored value changed.
    pub fn set_par(&mut self, i: usize, value: f64) -> bool {
        self.store.set_par(i, value)
    }

    /// All coefficients
    pub fn pars(&self) -> &[f64] {
        self.store.pars()
    }

    /// Lower edge of the domain
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Upper edge of the domain
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Map the normalized coordinate `t in [0, 1]` to `x`
    pub fn x(&self, t: f64) -> f64 {
        self.xmin + (self.xmax - self.xmin) * t
    }

    /// Map `x` to the normalized coordinate `t`
    pub fn t(&self, x: f64) -> f64 {
        (x - self.xmin) / (self.xmax - self.xmin)
    }

    pub(crate) fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Value at `x`: de Casteljau inside the domain, exactly zero outside
    pub fn value(&self, x: f64) -> f64 {
        if x < self.xmin || x > self.xmax {
            return 0.0;
        }
        casteljau(self.pars(), self.t(x))
    }

    /// Are all coefficients negligible against the scale `c`, in the
    /// `c + p == c` sense?
    pub fn small(&self, c: f64) -> bool {
        self.store.small(c)
    }

    /// Is this the constant function (all control coefficients equal)?
    pub fn constant(&self) -> bool {
        let c0 = self.par(0);
        self.pars().iter().all(|&p| p == c0 || c0 + (p - c0) == c0)
    }

    /// Non-decreasing control coefficients: a *sufficient* condition for
    /// the polynomial itself to be non-decreasing (convex-hull property).
    pub fn increasing(&self) -> bool {
        self.pars().windows(2).all(|w| w[0] <= w[1])
    }

    /// Non-increasing control coefficients (sufficient condition)
    pub fn decreasing(&self) -> bool {
        self.pars().windows(2).all(|w| w[0] >= w[1])
    }

    /// Monotonic control polygon in either direction
    pub fn monotonic(&self) -> bool {
        self.increasing() || self.decreasing()
    }

    /// Check that `other` lives on the same interval
    pub(crate) fn same_domain(&self, other: &Bernstein) -> Result<()> {
        if self.xmin == other.xmin && self.xmax == other.xmax {
            Ok(())
        } else {
            Err(Error::domain_mismatch(
                (self.xmin, self.xmax),
                (other.xmin, other.xmax),
            ))
        }
    }

    /// Sum of two Bernstein polynomials over the same domain; the lower
    /// degree operand is elevated first.
    pub fn sum(&self, other: &Bernstein) -> Result<Bernstein> {
        self.same_domain(other)?;
        let n = self.degree().max(other.degree());
        let mut a = self.elevate(n - self.degree());
        let b = other.elevate(n - other.degree());
        for (x, y) in a.store.pars_mut().iter_mut().zip(b.pars()) {
            *x += y;
        }
        Ok(a)
    }

    /// Difference of two Bernstein polynomials over the same domain
    pub fn sub(&self, other: &Bernstein) -> Result<Bernstein> {
        self.sum(&(-other.clone()))
    }

    /// Product of two Bernstein polynomials over the same domain.
    ///
    /// Degrees M and N yield degree M+N via the convolution identity
    ///
    /// ```text
    /// c[k] = sum_j a[j] b[k-j] C(M,j) C(N,k-j) / C(M+N,k)
    /// ```
    ///
    /// which is exact (no approximation) for binomial weights inside
    /// double precision.
    pub fn mul(&self, other: &Bernstein) -> Result<Bernstein> {
        self.same_domain(other)?;
        Ok(self.raw_mul(other))
    }

    /// Product with a single basic Bernstein polynomial of the same domain
    pub fn mul_basic(&self, b: Basic) -> Bernstein {
        self.raw_mul(&Bernstein::basic(b, self.xmin, self.xmax))
    }

    /// Product with `(x - xmin)^i (xmax - x)^j`.
    ///
    /// In the normalized variable the factor is
    /// `w^(i+j) t^i (1-t)^j = w^(i+j) / C(i+j, i) * B_i^(i+j)(t)`,
    /// so this is an exact single-coefficient multiply.
    pub fn mul_edges(&self, i: usize, j: usize) -> Bernstein {
        let mut factor = Bernstein::new(i + j, self.xmin, self.xmax);
        factor
            .store
            .set_par(i, self.width().powi((i + j) as i32) / binomial(i + j, i));
        self.raw_mul(&factor)
    }

    /// Integer power by repeated multiplication
    pub fn pow(&self, i: usize) -> Bernstein {
        match i {
            0 => Bernstein::with_pars(vec![1.0], self.xmin, self.xmax),
            _ => {
                let mut r = self.clone();
                for _ in 1..i {
                    r = r.raw_mul(self);
                }
                r
            }
        }
    }

    /// Scale every coefficient by 2^i. Powers of two multiply exactly, so
    /// this is bit-exact, not an approximate multiply.
    pub fn ldexp(&self, i: i32) -> Bernstein {
        let factor = 2.0f64.powi(i);
        let mut r = self.clone();
        for p in r.store.pars_mut() {
            *p *= factor;
        }
        r
    }

    /// Convolution product without the domain check; callers guarantee
    /// both operands share the interval.
    fn raw_mul(&self, other: &Bernstein) -> Bernstein {
        let m = self.degree();
        let n = other.degree();
        let a = self.pars();
        let b = other.pars();
        let mut out = Bernstein::new(m + n, self.xmin, self.xmax);
        for k in 0..=m + n {
            let mut s = 0.0;
            for j in k.saturating_sub(n)..=m.min(k) {
                s += a[j] * b[k - j] * binomial(m, j) * binomial(n, k - j);
            }
            out.store.set_par(k, s / binomial(m + n, k));
        }
        out
    }

    pub(crate) fn store_mut(&mut self) -> &mut PolySum {
        &mut self.store
    }

    pub(crate) fn from_store(store: PolySum, xmin: f64, xmax: f64) -> Self {
        Bernstein { store, xmin, xmax }
    }
}

/// De Casteljau evaluation of `sum_k pars[k] B_k^N(t)`
///
/// Repeated linear interpolation between control coefficients; stable for
/// any `t`, including far outside `[0, 1]`.
pub fn casteljau(pars: &[f64], t: f64) -> f64 {
    match pars.len() {
        0 => 0.0,
        1 => pars[0],
        _ => {
            let mut beta = pars.to_vec();
            let u = 1.0 - t;
            for j in 1..beta.len() {
                for i in 0..beta.len() - j {
                    beta[i] = beta[i] * u + beta[i + 1] * t;
                }
            }
            beta[0]
        }
    }
}

impl Add<f64> for Bernstein {
    type Output = Bernstein;
    fn add(mut self, a: f64) -> Bernstein {
        self += a;
        self
    }
}

impl AddAssign<f64> for Bernstein {
    fn add_assign(&mut self, a: f64) {
        for p in self.store.pars_mut() {
            *p += a;
        }
    }
}

impl Sub<f64> for Bernstein {
    type Output = Bernstein;
    fn sub(mut self, a: f64) -> Bernstein {
        self -= a;
        self
    }
}

impl SubAssign<f64> for Bernstein {
    fn sub_assign(&mut self, a: f64) {
        for p in self.store.pars_mut() {
            *p -= a;
        }
    }
}

impl Mul<f64> for Bernstein {
    type Output = Bernstein;
    fn mul(mut self, a: f64) -> Bernstein {
        self *= a;
        self
    }
}

impl MulAssign<f64> for Bernstein {
    fn mul_assign(&mut self, a: f64) {
        for p in self.store.pars_mut() {
            *p *= a;
        }
    }
}

impl Div<f64> for Bernstein {
    type Output = Bernstein;
    fn div(mut self, a: f64) -> Bernstein {
        self /= a;
        self
    }
}

impl DivAssign<f64> for Bernstein {
    fn div_assign(&mut self, a: f64) {
        for p in self.store.pars_mut() {
            *p /= a;
        }
    }
}

impl Neg for Bernstein {
    type Output = Bernstein;
    fn neg(mut self) -> Bernstein {
        for p in self.store.pars_mut() {
            *p = -*p;
        }
        self
    }
}
