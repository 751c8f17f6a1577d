//! Adaptive numerical integration workspace
//!
//! Globally adaptive Gauss–Kronrod quadrature on the (G7, K15) rule pair:
//! each interval is integrated with the 15-point Kronrod rule, the
//! embedded 7-point Gauss rule provides the error estimate, and the
//! interval with the largest estimate is bisected until the requested
//! tolerance is met or the subdivision budget is exhausted.
//!
//! The contract is deliberately narrow: "given a function and bounds,
//! return a numerically integrated value and an error estimate". Phase
//! space functions hold one [`Workspace`] per nesting level.
//!
//! # Concurrency
//!
//! A workspace reuses an internal segment buffer across calls, so a single
//! instance must not be entered from multiple threads at once. Use one
//! workspace per thread when parallelising.

use std::cell::RefCell;

use crate::error::{Error, Result};

/// Abscissae of the 15-point Kronrod rule on [-1, 1], non-negative half
const XGK: [f64; 8] = [
    0.991_455_371_120_812_7,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

/// Weights of the 15-point Kronrod rule
const WGK: [f64; 8] = [
    0.022_935_322_010_529_224,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_18,
    0.140_653_259_715_525_92,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_83,
];

/// Weights of the embedded 7-point Gauss rule (matching XGK[1], XGK[3], ...)
const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_94,
    0.417_959_183_673_469_4,
];

/// Value and error estimate returned by [`Workspace::integrate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadResult {
    /// Approximation of the integral
    pub value: f64,
    /// Absolute error estimate
    pub error: f64,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

/// Adaptive integration workspace
///
/// # Example
///
/// ```
/// use hepmath::quadrature::Workspace;
///
/// let ws = Workspace::default();
/// let r = ws.integrate(|x| x * x, 0.0, 1.0).unwrap();
/// assert!((r.value - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct Workspace {
    abs_tol: f64,
    rel_tol: f64,
    max_subdivisions: usize,
    // scratch buffer reused across calls; makes the workspace non-reentrant
    segments: RefCell<Vec<Segment>>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(1.0e-10, 1.0e-8, 200)
    }
}

impl Workspace {
    /// Create a workspace with the given absolute tolerance, relative
    /// tolerance and maximum number of interval subdivisions.
    pub fn new(abs_tol: f64, rel_tol: f64, max_subdivisions: usize) -> Self {
        Workspace {
            abs_tol: abs_tol.abs(),
            rel_tol: rel_tol.abs(),
            max_subdivisions: max_subdivisions.max(1),
            segments: RefCell::new(Vec::new()),
        }
    }

    /// Absolute tolerance
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Relative tolerance
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Maximum number of interval subdivisions
    pub fn max_subdivisions(&self) -> usize {
        self.max_subdivisions
    }

    /// Integrate `f` over `[a, b]`.
    ///
    /// Reversed bounds negate the result. Fails with
    /// [`Error::ToleranceNotReached`] when the subdivision budget is
    /// exhausted before the tolerance is met.
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<QuadResult>
    where
        F: Fn(f64) -> f64,
    {
        if a == b {
            return Ok(QuadResult {
                value: 0.0,
                error: 0.0,
            });
        }
        let (lo, hi, sign) = if a < b { (a, b, 1.0) } else { (b, a, -1.0) };

        let mut segments = self.segments.borrow_mut();
        segments.clear();
        segments.push(qk15(&f, lo, hi));

        let mut subdivisions = 0usize;
        loop {
            let mut total = 0.0;
            let mut err = 0.0;
            let mut worst = 0usize;
            for (i, s) in segments.iter().enumerate() {
                total += s.value;
                err += s.error;
                if s.error > segments[worst].error {
                    worst = i;
                }
            }

            if err <= self.abs_tol.max(self.rel_tol * total.abs()) {
                return Ok(QuadResult {
                    value: sign * total,
                    error: err,
                });
            }
            if subdivisions >= self.max_subdivisions {
                return Err(Error::ToleranceNotReached {
                    subdivisions,
                    estimate: err,
                });
            }

            let Segment { a, b, .. } = segments[worst];
            let mid = 0.5 * (a + b);
            segments[worst] = qk15(&f, a, mid);
            segments.push(qk15(&f, mid, b));
            subdivisions += 1;
        }
    }
}

/// Apply the (G7, K15) rule pair to one interval
fn qk15<F>(f: &F, a: f64, b: f64) -> Segment
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let fc = f(center);
    let mut kronrod = WGK[7] * fc;
    let mut gauss = WG[3] * fc;

    for j in 0..7 {
        let dx = half * XGK[j];
        let fsum = f(center - dx) + f(center + dx);
        kronrod += WGK[j] * fsum;
        // odd Kronrod points are the Gauss points
        if j % 2 == 1 {
            gauss += WG[j / 2] * fsum;
        }
    }

    kronrod *= half;
    gauss *= half;

    Segment {
        a,
        b,
        value: kronrod,
        error: (kronrod - gauss).abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_exact() {
        // K15 integrates degree <= 22 exactly; no subdivision needed
        let ws = Workspace::default();
        let r = ws.integrate(|x| 3.0 * x * x, 0.0, 2.0).unwrap();
        assert!((r.value - 8.0).abs() < 1e-12, "got {}", r.value);
    }

    #[test]
    fn test_reversed_bounds() {
        let ws = Workspace::default();
        let fwd = ws.integrate(|x| x.exp(), 0.0, 1.0).unwrap();
        let rev = ws.integrate(|x| x.exp(), 1.0, 0.0).unwrap();
        assert!((fwd.value + rev.value).abs() < 1e-12);
        assert!((fwd.value - (std::f64::consts::E - 1.0)).abs() < 1e-10);
    }

    #[test]
    fn test_sqrt_singularity() {
        // Integrable endpoint singularity forces adaptive refinement
        let ws = Workspace::new(1e-10, 1e-10, 500);
        let r = ws.integrate(|x| x.sqrt(), 0.0, 1.0).unwrap();
        assert!((r.value - 2.0 / 3.0).abs() < 1e-8, "got {}", r.value);
    }

    #[test]
    fn test_budget_exhausted() {
        let ws = Workspace::new(0.0, 1e-16, 2);
        let err = ws
            .integrate(|x| (1.0 / (1e-3 + x * x)).sin(), 0.0, 1.0)
            .unwrap_err();
        assert!(matches!(err, Error::ToleranceNotReached { .. }));
    }

    #[test]
    fn test_empty_interval() {
        let ws = Workspace::default();
        let r = ws.integrate(|x| x, 3.0, 3.0).unwrap();
        assert_eq!(r.value, 0.0);
    }
}
