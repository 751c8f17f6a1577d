//! Newton-Bernstein interpolation
//!
//! Direct construction of the Bezier control points of the Lagrange
//! interpolant, without solving a Vandermonde system or leaving the
//! Bernstein basis:
//!
//! - Mark Ainsworth and Manuel A. Sanches, "Computing Bezier control
//!   points of Lagrangian interpolant in arbitrary dimension",
//!   arXiv:1510.09197 [math.NA]
//!
//! # Algorithm
//! One pass of Newton divided differences over the normalized abscissas,
//! interleaved with the triangular update that accumulates the Newton
//! basis polynomial `w` and the control coefficients `c` in Bernstein
//! form. O(n^2) time, O(n) extra storage.

use std::f64::consts::PI;

use super::Bernstein;

impl Bernstein {
    /// Interpolating polynomial through `(xs[i], ys[i])` over
    /// `[xmin, xmax]`, degree `xs.len() - 1`.
    ///
    /// - extra `ys` entries are ignored; missing ones are taken as zero
    /// - empty `xs` gives the degree 0 zero polynomial
    /// - coincident abscissas are the caller's problem (the divided
    ///   differences divide by their spacing)
    pub fn interpolate(xs: &[f64], ys: &[f64], xmin: f64, xmax: f64) -> Bernstein {
        let n = xs.len();
        let mut out = Bernstein::new(n.saturating_sub(1), xmin, xmax);
        if n == 0 {
            return out;
        }

        let t: Vec<f64> = xs.iter().map(|&x| out.t(x)).collect();
        let mut f = vec![0.0; n];
        for (fi, &y) in f.iter_mut().zip(ys) {
            *fi = y;
        }

        let mut w = vec![0.0; n];
        let mut c = vec![0.0; n];
        w[0] = 1.0;
        c[0] = f[0];

        for s in 1..n {
            // divided differences of order s, in place from the right
            for k in (s..n).rev() {
                f[k] = (f[k] - f[k - 1]) / (t[k] - t[k - s]);
            }
            let ts1 = t[s - 1];
            let sf = s as f64;
            for j in (1..=s).rev() {
                let jf = j as f64;
                w[j] = jf * w[j - 1] * (1.0 - ts1) / sf - (sf - jf) * ts1 * w[j] / sf;
                c[j] = jf * c[j - 1] / sf + (sf - jf) * c[j] / sf + w[j] * f[s];
            }
            w[0] = -w[0] * ts1;
            c[0] += w[0] * f[s];
        }

        for (i, &ci) in c.iter().enumerate() {
            out.set_par(i, ci);
        }
        out
    }
}

/// Free-function spelling of [`Bernstein::interpolate`]
pub fn bernstein_interpolate(xs: &[f64], ys: &[f64], xmin: f64, xmax: f64) -> Bernstein {
    Bernstein::interpolate(xs, ys, xmin, xmax)
}

/// Interpolant of `func` sampled on the given abscissas
pub fn bernstein_of_fn<F>(func: F, xs: &[f64], xmin: f64, xmax: f64) -> Bernstein
where
    F: Fn(f64) -> f64,
{
    let ys: Vec<f64> = xs.iter().map(|&x| func(x)).collect();
    Bernstein::interpolate(xs, &ys, xmin, xmax)
}

/// Degree `n` interpolant of `func` on the Gauss-Lobatto (cosine-spaced)
/// grid over `[xmin, xmax]`.
///
/// The grid includes both endpoints, so the interpolant matches `func`
/// exactly there, and clusters nodes near the edges, which suppresses the
/// Runge oscillation of equidistant grids. `n = 0` samples the midpoint.
pub fn lobatto<F>(func: F, n: usize, xmin: f64, xmax: f64) -> Bernstein
where
    F: Fn(f64) -> f64,
{
    let (lo, hi) = if xmin <= xmax { (xmin, xmax) } else { (xmax, xmin) };
    if n == 0 {
        let x = 0.5 * (lo + hi);
        return Bernstein::interpolate(&[x], &[func(x)], lo, hi);
    }
    let xhs = 0.5 * (lo + hi);
    let xhd = 0.5 * (hi - lo);
    let xs: Vec<f64> = (0..=n)
        .map(|i| {
            if i == 0 {
                lo
            } else if i == n {
                hi
            } else {
                xhs - (PI * i as f64 / n as f64).cos() * xhd
            }
        })
        .collect();
    bernstein_of_fn(func, &xs, lo, hi)
}
