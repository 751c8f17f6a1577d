//! Polynomial long division and root deflation
//!
//! Long division runs in the monomial basis of the normalized variable t
//! (both operands share it when their domains match), with effective
//! degrees decided by the noise-aware trimming rule rather than raw
//! coefficient counts. Deflation at a domain edge never leaves the
//! Bernstein basis: dividing out `(x - xmin)` or `(xmax - x)` is a
//! one-pass coefficient recurrence.

use crate::error::{Error, Result};
use crate::poly::mono;

use super::convert::{bernstein_to_tmono, tmono_to_bernstein};
use super::{casteljau, Bernstein};

impl Bernstein {
    /// Quotient and remainder of division by `g`: `self = q * g + r` with
    /// `deg r < deg g` (effective degrees). Domains must match; a divisor
    /// whose coefficients are all negligible is a division by zero.
    pub fn divmod(&self, g: &Bernstein) -> Result<(Bernstein, Bernstein)> {
        self.same_domain(g)?;
        let gm = bernstein_to_tmono(g.pars());
        let dg = mono::effective_degree(&gm).ok_or(Error::DivisionByZero)?;
        let fm = bernstein_to_tmono(self.pars());
        let df = match mono::effective_degree(&fm) {
            Some(d) => d,
            None => 0,
        };
        if df < dg {
            return Ok((Bernstein::new(0, self.xmin, self.xmax), self.clone()));
        }

        let mut rem = fm[..=df].to_vec();
        let mut quo = vec![0.0; df - dg + 1];
        let lead = gm[dg];
        for k in (0..quo.len()).rev() {
            let q = rem[k + dg] / lead;
            quo[k] = q;
            for (j, &gc) in gm.iter().enumerate().take(dg + 1) {
                rem[k + j] -= q * gc;
            }
        }
        // remainder has degree dg - 1; a constant divisor divides exactly
        rem.truncate(dg);

        Ok((
            Bernstein::with_pars(
                tmono_to_bernstein(&quo, df - dg),
                self.xmin,
                self.xmax,
            ),
            Bernstein::with_pars(
                tmono_to_bernstein(&rem, dg.saturating_sub(1)),
                self.xmin,
                self.xmax,
            ),
        ))
    }

    /// Quotient of division by `g`
    pub fn quotient(&self, g: &Bernstein) -> Result<Bernstein> {
        Ok(self.divmod(g)?.0)
    }

    /// Remainder of division by `g`
    pub fn remainder(&self, g: &Bernstein) -> Result<Bernstein> {
        Ok(self.divmod(g)?.1)
    }

    /// Divide out the left edge: the degree N-1 polynomial `d` with
    ///
    /// ```text
    /// f(x) - f(xmin) = (x - xmin) * d(x)
    /// ```
    ///
    /// Closed form in place, `d[j] = (c[j+1] - c[0]) * N / ((j+1) * w)`.
    pub fn deflate_left(&self) -> Result<Bernstein> {
        let n = self.degree();
        if n == 0 {
            return Err(Error::DegreeTooLow {
                requested: 1,
                degree: 0,
            });
        }
        let c0 = self.par(0);
        let scale = n as f64 / self.width();
        let pars = (0..n)
            .map(|j| (self.par(j + 1) - c0) * scale / (j as f64 + 1.0))
            .collect();
        Ok(Bernstein::with_pars(pars, self.xmin, self.xmax))
    }

    /// Divide out the right edge: the degree N-1 polynomial `d` with
    ///
    /// ```text
    /// f(x) - f(xmax) = (x - xmax) * d(x)
    /// ```
    pub fn deflate_right(&self) -> Result<Bernstein> {
        let n = self.degree();
        if n == 0 {
            return Err(Error::DegreeTooLow {
                requested: 1,
                degree: 0,
            });
        }
        let cn = self.par(n);
        let scale = n as f64 / self.width();
        let pars = (0..n)
            .map(|j| -(self.par(j) - cn) * scale / ((n - j) as f64))
            .collect();
        Ok(Bernstein::with_pars(pars, self.xmin, self.xmax))
    }

    /// Divide out an arbitrary point: the degree N-1 quotient of
    /// `f(x) - f(x0)` by `(x - x0)`. Edge points take the closed-form
    /// paths; anywhere else goes through [`Bernstein::divmod`] with the
    /// linear divisor expressed over the same domain.
    pub fn deflate(&self, x0: f64) -> Result<Bernstein> {
        if x0 == self.xmin {
            return self.deflate_left();
        }
        if x0 == self.xmax {
            return self.deflate_right();
        }
        if self.degree() == 0 {
            return Err(Error::DegreeTooLow {
                requested: 1,
                degree: 0,
            });
        }
        // polynomial extension, not the clamped value: x0 may be outside
        let y0 = casteljau(self.pars(), self.t(x0));
        let linear = Bernstein::with_pars(
            vec![self.xmin - x0, self.xmax - x0],
            self.xmin,
            self.xmax,
        );
        (self.clone() - y0).quotient(&linear)
    }
}
