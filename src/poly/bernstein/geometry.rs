//! Root geometry from the control polygon
//!
//! The control polygon of a Bernstein polynomial is the piecewise-linear
//! function through the nodes `(x(k/N), c[k])`. By the convex-hull and
//! variation-diminishing properties it brackets the real roots inside the
//! domain: the polynomial has no more sign changes than its coefficient
//! sequence, and no root left of where every line through two
//! opposite-sign control points crosses zero. These bounds drive
//! bisection-style root isolation without ever evaluating the polynomial.

use super::Bernstein;

impl Bernstein {
    /// Number of sign changes in the coefficient sequence, zeros skipped.
    ///
    /// An upper bound on the number of real roots inside the domain
    /// (variation-diminishing property).
    pub fn sign_changes(&self) -> usize {
        let mut count = 0;
        let mut prev = 0.0f64;
        for &c in self.pars() {
            if c == 0.0 {
                continue;
            }
            if prev != 0.0 && c.signum() != prev.signum() {
                count += 1;
            }
            prev = c;
        }
        count
    }

    /// Zero crossings of the control polygon, ascending in `x`.
    ///
    /// Nodes with an exactly zero coefficient count as crossings;
    /// opposite-sign neighbours contribute the linear interpolation point
    /// between their nodes. A degree 0 polynomial has no polygon segments
    /// and reports nothing.
    pub fn crossing_points(&self) -> Vec<f64> {
        let n = self.degree();
        let pars = self.pars();
        let mut out = Vec::new();
        if n == 0 {
            return out;
        }
        let node = |k: usize| self.x(k as f64 / n as f64);
        for k in 0..=n {
            if pars[k] == 0.0 {
                out.push(node(k));
            } else if k < n && pars[k + 1] != 0.0 && pars[k].signum() != pars[k + 1].signum() {
                let (xa, xb) = (node(k), node(k + 1));
                out.push(xa + (xb - xa) * pars[k] / (pars[k] - pars[k + 1]));
            }
        }
        out.dedup();
        out
    }

    /// Leftmost zero crossing of any line through two control points.
    ///
    /// No real root of the polynomial lies left of this point. When no
    /// pair of control points straddles zero the hull never crosses and
    /// `xmax` comes back: the bracket `[left, xmax]` is then empty.
    pub fn left_line_hull(&self) -> f64 {
        self.hull_crossings(f64::min, self.xmax)
    }

    /// Rightmost zero crossing of any line through two control points;
    /// `xmin` when the hull never crosses zero.
    pub fn right_line_hull(&self) -> f64 {
        self.hull_crossings(f64::max, self.xmin)
    }

    fn hull_crossings(&self, pick: fn(f64, f64) -> f64, fallback: f64) -> f64 {
        let n = self.degree();
        let pars = self.pars();
        if n == 0 {
            return fallback;
        }
        let node = |k: usize| self.x(k as f64 / n as f64);
        let mut best: Option<f64> = None;
        let mut consider = |x: f64| {
            best = Some(match best {
                Some(b) => pick(b, x),
                None => x,
            });
        };
        for i in 0..=n {
            if pars[i] == 0.0 {
                consider(node(i));
                continue;
            }
            for j in i + 1..=n {
                if pars[j] != 0.0 && pars[i].signum() != pars[j].signum() {
                    let (xa, xb) = (node(i), node(j));
                    consider(xa + (xb - xa) * pars[i] / (pars[i] - pars[j]));
                }
            }
        }
        best.unwrap_or(fallback)
    }
}
