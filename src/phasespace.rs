//! Relativistic phase-space factors
//!
//! Shapes for invariant-mass distributions of particle decays:
//!
//! - [`PhaseSpace2`]: exact two-body phase space from the Källén triangle
//!   function
//! - [`PhaseSpace3`]: three-body phase space by nested two-body
//!   convolution
//! - [`PhaseSpaceLeft`], [`PhaseSpaceRight`]: power-law threshold
//!   behaviour near the lower/upper edge of an N-body decay
//! - [`PhaseSpaceNL`]: normalized mass distribution of L particles out of
//!   an N-body decay
//! - [`PhaseSpace23L`]: two particles out of a three-body decay with
//!   orbital angular momenta
//!
//! All functions vanish outside their physical range. Numerical integrals
//! go through the adaptive [`Workspace`](crate::quadrature::Workspace);
//! everything with a closed form (two-body values, edge power laws, the
//! Euler Beta normalization of [`PhaseSpaceNL`]) is evaluated analytically.

use std::f64::consts::PI;

use crate::error::{Error, Result};
use crate::quadrature::Workspace;
use crate::special::beta;

/// Two-body phase space for the decay `m -> m1 + m2`
#[derive(Debug)]
pub struct PhaseSpace2 {
    m1: f64,
    m2: f64,
    workspace: Workspace,
}

impl PhaseSpace2 {
    /// Construct from the two daughter masses (absolute values are taken)
    pub fn new(m1: f64, m2: f64) -> Self {
        PhaseSpace2 {
            m1: m1.abs(),
            m2: m2.abs(),
            workspace: Workspace::default(),
        }
    }

    /// First daughter mass
    pub fn m1(&self) -> f64 {
        self.m1
    }

    /// Second daughter mass
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Kinematic threshold `m1 + m2`
    pub fn low_edge(&self) -> f64 {
        self.m1 + self.m2
    }

    /// Phase-space value at mass `x`, zero below threshold
    pub fn value(&self, x: f64) -> f64 {
        Self::phasespace(x, self.m1, self.m2, 0)
    }

    /// Momentum of either daughter in the rest frame of a mother of
    /// mass `x`
    pub fn q_(&self, x: f64) -> f64 {
        Self::q(x, self.m1, self.m2)
    }

    /// Complex momentum branch at mass `x`, as `(re, im)`
    pub fn q1_(&self, x: f64) -> (f64, f64) {
        Self::q1(x, self.m1, self.m2)
    }

    /// Numerical integral over `[xmin, xmax]`, clamped to the physical
    /// region
    pub fn integral(&self, xmin: f64, xmax: f64) -> Result<f64> {
        if xmin > xmax {
            return Ok(-self.integral(xmax, xmin)?);
        }
        let lo = xmin.max(self.low_edge());
        if lo >= xmax {
            return Ok(0.0);
        }
        Ok(self.workspace.integrate(|x| self.value(x), lo, xmax)?.value)
    }

    /// Källén triangle function
    ///
    /// ```text
    /// lambda(a, b, c) = a^2 + b^2 + c^2 - 2ab - 2bc - 2ca
    /// ```
    pub fn triangle(a: f64, b: f64, c: f64) -> f64 {
        a * a + b * b + c * c - 2.0 * (a * b + b * c + c * a)
    }

    /// Daughter momentum in the mother rest frame,
    /// `q = sqrt(lambda(m^2, m1^2, m2^2)) / (2 m)`; zero for unphysical
    /// configurations.
    pub fn q(m: f64, m1: f64, m2: f64) -> f64 {
        if m <= 0.0 {
            return 0.0;
        }
        let lam = Self::triangle(m * m, m1 * m1, m2 * m2);
        if lam > 0.0 {
            0.5 * lam.sqrt() / m
        } else {
            0.0
        }
    }

    /// Momentum with its analytic continuation below threshold: real
    /// above, purely imaginary below, returned as `(re, im)`.
    pub fn q1(m: f64, m1: f64, m2: f64) -> (f64, f64) {
        if m <= 0.0 {
            return (0.0, 0.0);
        }
        let lam = Self::triangle(m * m, m1 * m1, m2 * m2);
        if lam >= 0.0 {
            (0.5 * lam.sqrt() / m, 0.0)
        } else {
            (0.0, 0.5 * (-lam).sqrt() / m)
        }
    }

    /// Two-body phase space with orbital angular momentum `l`,
    ///
    /// ```text
    /// Phi = 1/(8 pi) * ( sqrt(lambda(m^2, m1^2, m2^2)) / m^2 )^(2l+1)
    /// ```
    pub fn phasespace(m: f64, m1: f64, m2: f64, l: usize) -> f64 {
        if m <= 0.0 || m < m1 + m2 {
            return 0.0;
        }
        let lam = Self::triangle(m * m, m1 * m1, m2 * m2);
        if lam <= 0.0 {
            return 0.0;
        }
        let r = lam.sqrt() / (m * m);
        0.125 / PI * r.powi(2 * l as i32 + 1)
    }
}

/// Three-body phase space for `m -> m1 + m2 + m3` with orbital momenta
/// `l1` (inside the first pair) and `l2` (pair against the third)
///
/// Evaluated by convolving two-body factors over the intermediate pair
/// mass. Two workspaces, one per nesting level; the integrand is a pure
/// closure over the outer mass.
#[derive(Debug)]
pub struct PhaseSpace3 {
    m1: f64,
    m2: f64,
    m3: f64,
    l1: usize,
    l2: usize,
    workspace: Workspace,
    workspace2: Workspace,
}

impl PhaseSpace3 {
    /// Construct from the three daughter masses (absolute values) and the
    /// two orbital momenta
    pub fn new(m1: f64, m2: f64, m3: f64, l1: usize, l2: usize) -> Self {
        PhaseSpace3 {
            m1: m1.abs(),
            m2: m2.abs(),
            m3: m3.abs(),
            l1,
            l2,
            workspace: Workspace::default(),
            workspace2: Workspace::default(),
        }
    }

    /// Kinematic threshold `m1 + m2 + m3`
    pub fn low_edge(&self) -> f64 {
        self.m1 + self.m2 + self.m3
    }

    /// Integrand over the intermediate `(1,2)` pair mass for a mother of
    /// mass `x`
    pub fn ps2_aux(&self, x: f64, m12: f64) -> f64 {
        PhaseSpace2::phasespace(m12, self.m1, self.m2, self.l1)
            * PhaseSpace2::phasespace(x, m12, self.m3, self.l2)
    }

    /// Phase-space value at mass `x`, zero below threshold
    pub fn value(&self, x: f64) -> Result<f64> {
        if x <= self.low_edge() {
            return Ok(0.0);
        }
        let r = self
            .workspace
            .integrate(|m12| self.ps2_aux(x, m12), self.m1 + self.m2, x - self.m3)?;
        Ok(r.value)
    }

    /// Numerical integral over `[low, high]`
    pub fn integral(&self, low: f64, high: f64) -> Result<f64> {
        if low > high {
            return Ok(-self.integral(high, low)?);
        }
        let lo = low.max(self.low_edge());
        if lo >= high {
            return Ok(0.0);
        }
        // an exhausted inner budget contributes zero to the outer sum
        let r = self
            .workspace2
            .integrate(|x| self.value(x).unwrap_or(0.0), lo, high)?;
        Ok(r.value)
    }
}

/// N-body phase space near its left (lower) threshold,
/// `(x - threshold)^((3N-5)/2)`
#[derive(Debug)]
pub struct PhaseSpaceLeft {
    threshold: f64,
    num: usize,
}

impl PhaseSpaceLeft {
    /// Construct from an explicit threshold and particle count (`num >= 2`)
    pub fn new(threshold: f64, num: usize) -> Result<Self> {
        if num < 2 {
            return Err(Error::invalid_argument(
                "num",
                format!("phase space needs at least 2 particles, got {}", num),
            ));
        }
        Ok(PhaseSpaceLeft { threshold, num })
    }

    /// Construct with the threshold taken as the sum of the masses
    pub fn from_masses(masses: &[f64]) -> Result<Self> {
        Self::new(masses.iter().map(|m| m.abs()).sum(), masses.len())
    }

    /// The threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of particles
    pub fn num(&self) -> usize {
        self.num
    }

    fn exponent(&self) -> f64 {
        0.5 * (3.0 * self.num as f64 - 5.0)
    }

    /// Value at `x`, zero at and below the threshold
    pub fn value(&self, x: f64) -> f64 {
        if x <= self.threshold {
            return 0.0;
        }
        (x - self.threshold).powf(self.exponent())
    }

    /// Analytic integral over `[xmin, xmax]`, clamped at the threshold
    pub fn integral(&self, xmin: f64, xmax: f64) -> f64 {
        if xmin > xmax {
            return -self.integral(xmax, xmin);
        }
        let lo = xmin.max(self.threshold);
        if lo >= xmax {
            return 0.0;
        }
        let e1 = self.exponent() + 1.0;
        ((xmax - self.threshold).powf(e1) - (lo - self.threshold).powf(e1)) / e1
    }

    /// Move the threshold; reports whether the value changed.
    pub fn set_threshold(&mut self, x: f64) -> bool {
        if x == self.threshold {
            return false;
        }
        self.threshold = x;
        true
    }
}

/// L-of-N-body phase space near its right (upper) threshold,
/// `(threshold - x)^((3(N-L)-3)/2)`
#[derive(Debug)]
pub struct PhaseSpaceRight {
    threshold: f64,
    n: usize,
    l: usize,
}

impl PhaseSpaceRight {
    /// Construct from the upper threshold, the subsystem size `l >= 2` and
    /// the total particle count `n > l`
    pub fn new(threshold: f64, l: usize, n: usize) -> Result<Self> {
        if l < 2 {
            return Err(Error::invalid_argument(
                "l",
                format!("subsystem needs at least 2 particles, got {}", l),
            ));
        }
        if n <= l {
            return Err(Error::invalid_argument(
                "n",
                format!("total count {} must exceed subsystem size {}", n, l),
            ));
        }
        Ok(PhaseSpaceRight { threshold, n, l })
    }

    /// The threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn exponent(&self) -> f64 {
        0.5 * (3.0 * (self.n - self.l) as f64 - 3.0)
    }

    /// Value at `x`, zero at and above the threshold
    pub fn value(&self, x: f64) -> f64 {
        if x >= self.threshold {
            return 0.0;
        }
        (self.threshold - x).powf(self.exponent())
    }

    /// Analytic integral over `[xmin, xmax]`, clamped at the threshold
    pub fn integral(&self, xmin: f64, xmax: f64) -> f64 {
        if xmin > xmax {
            return -self.integral(xmax, xmin);
        }
        let hi = xmax.min(self.threshold);
        if xmin >= hi {
            return 0.0;
        }
        let e1 = self.exponent() + 1.0;
        ((self.threshold - xmin).powf(e1) - (self.threshold - hi).powf(e1)) / e1
    }

    /// Move the threshold; reports whether the value changed.
    pub fn set_threshold(&mut self, x: f64) -> bool {
        if x == self.threshold {
            return false;
        }
        self.threshold = x;
        true
    }
}

/// Mass distribution of `L` particles out of an `N`-body phase-space
/// decay, between two thresholds
///
/// On the normalized variable `y = (x - t1)/(t2 - t1)` the shape is
/// `y^((3L-5)/2) (1-y)^((3(N-L)-3)/2)`, and the unit normalization is the
/// Euler Beta function in closed form.
#[derive(Debug)]
pub struct PhaseSpaceNL {
    threshold1: f64,
    threshold2: f64,
    n: usize,
    l: usize,
    norm: f64,
    workspace: Workspace,
}

impl PhaseSpaceNL {
    /// Construct from the two thresholds (swapped if reversed), the
    /// subsystem size `l >= 2` and the total count `n > l`
    pub fn new(threshold_l: f64, threshold_h: f64, l: usize, n: usize) -> Result<Self> {
        if l < 2 {
            return Err(Error::invalid_argument(
                "l",
                format!("subsystem needs at least 2 particles, got {}", l),
            ));
        }
        if n <= l {
            return Err(Error::invalid_argument(
                "n",
                format!("total count {} must exceed subsystem size {}", n, l),
            ));
        }
        let (t1, t2) = if threshold_l <= threshold_h {
            (threshold_l, threshold_h)
        } else {
            (threshold_h, threshold_l)
        };
        let mut ps = PhaseSpaceNL {
            threshold1: t1,
            threshold2: t2,
            n,
            l,
            norm: 1.0,
            workspace: Workspace::default(),
        };
        ps.norm = ps.normalization();
        Ok(ps)
    }

    fn normalization(&self) -> f64 {
        let a = 0.5 * (3.0 * self.l as f64 - 3.0);
        let b = 0.5 * (3.0 * (self.n - self.l) as f64 - 1.0);
        1.0 / ((self.threshold2 - self.threshold1) * beta(a, b))
    }

    /// Lower threshold
    pub fn low_edge(&self) -> f64 {
        self.threshold1
    }

    /// Upper threshold
    pub fn high_edge(&self) -> f64 {
        self.threshold2
    }

    /// Subsystem size L
    pub fn l(&self) -> usize {
        self.l
    }

    /// Total particle count N
    pub fn n(&self) -> usize {
        self.n
    }

    /// Density at `x`, zero outside `(t1, t2)`; integrates to one over
    /// the full range.
    pub fn value(&self, x: f64) -> f64 {
        if x <= self.threshold1 || x >= self.threshold2 {
            return 0.0;
        }
        let y = (x - self.threshold1) / (self.threshold2 - self.threshold1);
        self.norm
            * y.powf(0.5 * (3.0 * self.l as f64 - 5.0))
            * (1.0 - y).powf(0.5 * (3.0 * (self.n - self.l) as f64 - 3.0))
    }

    /// Move both thresholds; reports whether anything changed.
    pub fn set_thresholds(&mut self, mn: f64, mx: f64) -> bool {
        let (t1, t2) = if mn <= mx { (mn, mx) } else { (mx, mn) };
        if t1 == self.threshold1 && t2 == self.threshold2 {
            return false;
        }
        self.threshold1 = t1;
        self.threshold2 = t2;
        self.norm = self.normalization();
        true
    }

    /// Integral over the full range (unity up to quadrature accuracy)
    pub fn integral(&self) -> Result<f64> {
        self.integral_between(self.threshold1, self.threshold2)
    }

    /// Numerical integral over `[low, high]`, clamped to the thresholds
    pub fn integral_between(&self, low: f64, high: f64) -> Result<f64> {
        if low > high {
            return Ok(-self.integral_between(high, low)?);
        }
        let lo = low.max(self.threshold1);
        let hi = high.min(self.threshold2);
        if lo >= hi {
            return Ok(0.0);
        }
        Ok(self.workspace.integrate(|x| self.value(x), lo, hi)?.value)
    }
}

/// Phase space of two particles out of a three-body decay,
/// `f(x) ~ q(x)^(2l+1) p(x)^(2L+1)`
///
/// `q` is the daughter momentum inside the `(1,2)` pair of mass `x`, `p`
/// the momentum of the third particle in the mother frame. Normalized to
/// unit integral over `[m1+m2, m-m3]` at construction.
#[derive(Debug)]
pub struct PhaseSpace23L {
    m1: f64,
    m2: f64,
    m3: f64,
    m: f64,
    l: usize,
    big_l: usize,
    norm: f64,
    workspace: Workspace,
}

impl PhaseSpace23L {
    /// Construct from the three daughter masses, the mother mass
    /// (`m > m1 + m2 + m3`) and the orbital momenta `big_l` (pair against
    /// third) and `l` (inside the pair).
    pub fn new(m1: f64, m2: f64, m3: f64, m: f64, big_l: usize, l: usize) -> Result<Self> {
        let (m1, m2, m3) = (m1.abs(), m2.abs(), m3.abs());
        if m <= m1 + m2 + m3 {
            return Err(Error::invalid_argument(
                "m",
                format!("mother mass {} below threshold {}", m, m1 + m2 + m3),
            ));
        }
        let mut ps = PhaseSpace23L {
            m1,
            m2,
            m3,
            m,
            l,
            big_l,
            norm: 1.0,
            workspace: Workspace::default(),
        };
        let raw = ps
            .workspace
            .integrate(|x| ps.ps23l(x), ps.low_edge(), ps.high_edge())?
            .value;
        ps.norm = raw;
        Ok(ps)
    }

    /// First daughter mass
    pub fn m1(&self) -> f64 {
        self.m1
    }

    /// Second daughter mass
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Third daughter mass
    pub fn m3(&self) -> f64 {
        self.m3
    }

    /// Mother mass
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Orbital momentum inside the pair
    pub fn l(&self) -> usize {
        self.l
    }

    /// Orbital momentum between the pair and the third particle
    pub fn big_l(&self) -> usize {
        self.big_l
    }

    /// Lower edge `m1 + m2`
    pub fn low_edge(&self) -> f64 {
        self.m1 + self.m2
    }

    /// Upper edge `m - m3`
    pub fn high_edge(&self) -> f64 {
        self.m - self.m3
    }

    /// Momentum of the first particle in the `(1,2)` rest frame
    pub fn q(&self, x: f64) -> f64 {
        PhaseSpace2::q(x, self.m1, self.m2)
    }

    /// Momentum of the third particle in the mother rest frame
    pub fn p(&self, x: f64) -> f64 {
        PhaseSpace2::q(self.m, x, self.m3)
    }

    /// Unnormalized shape `q^(2l+1) p^(2L+1)`, zero outside the edges
    pub fn ps23l(&self, x: f64) -> f64 {
        if x <= self.low_edge() || x >= self.high_edge() {
            return 0.0;
        }
        self.q(x).powi(2 * self.l as i32 + 1) * self.p(x).powi(2 * self.big_l as i32 + 1)
    }

    /// Normalized density at `x`
    pub fn value(&self, x: f64) -> f64 {
        self.ps23l(x) / self.norm
    }

    /// Integral over the full range (unity up to quadrature accuracy)
    pub fn integral(&self) -> Result<f64> {
        self.integral_between(self.low_edge(), self.high_edge())
    }

    /// Numerical integral over `[low, high]`, clamped to the edges
    pub fn integral_between(&self, low: f64, high: f64) -> Result<f64> {
        if low > high {
            return Ok(-self.integral_between(high, low)?);
        }
        let lo = low.max(self.low_edge());
        let hi = high.min(self.high_edge());
        if lo >= hi {
            return Ok(0.0);
        }
        Ok(self.workspace.integrate(|x| self.value(x), lo, hi)?.value)
    }
}
