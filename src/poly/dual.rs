//! Dual Bernstein basis
//!
//! The dual basis element D_k^N is the polynomial of degree N with
//!
//! ```text
//! int_0^1 D_k^N(t) B_j^N(t) dt = delta(k, j)
//! ```
//!
//! so coefficients of an arbitrary polynomial in the Bernstein basis are
//! plain inner products against the duals. Construction solves the Gram
//! system `G d = e_k` once, with the closed-form Gram matrix on [0, 1]
//!
//! ```text
//! G[i][j] = C(N,i) C(N,j) / ((2N+1) C(2N,i+j))
//! ```
//!
//! The system grows ill-conditioned quickly with N; solves beyond N = 20
//! go through but are flagged on the warning channel.

use crate::error::Result;
use crate::linalg;
use crate::poly::bernstein::Bernstein;
use crate::special::binomial;

/// One element D_k^N of the dual Bernstein basis on [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct BernsteinDualBasis {
    k: usize,
    n: usize,
    poly: Bernstein,
}

impl BernsteinDualBasis {
    /// Construct D_k^N. `k > n` identifies nothing and yields the zero
    /// polynomial; a singular Gram solve (not expected for any reachable
    /// N) is propagated.
    pub fn new(n: usize, k: usize) -> Result<Self> {
        if k > n {
            return Ok(BernsteinDualBasis {
                k,
                n,
                poly: Bernstein::new(n, 0.0, 1.0),
            });
        }
        if n > 20 {
            log::warn!(
                "dual Bernstein basis of degree {} is ill-conditioned, \
                 coefficients may be inaccurate",
                n
            );
        }
        let sz = n + 1;
        let norm = (2 * n + 1) as f64;
        let mut gram = vec![0.0; sz * sz];
        for i in 0..sz {
            for j in 0..sz {
                gram[i * sz + j] =
                    binomial(n, i) * binomial(n, j) / (norm * binomial(2 * n, i + j));
            }
        }
        let mut rhs = vec![0.0; sz];
        rhs[k] = 1.0;
        let d = linalg::solve(gram, rhs)?;
        Ok(BernsteinDualBasis {
            k,
            n,
            poly: Bernstein::with_pars(d, 0.0, 1.0),
        })
    }

    /// Basis function index
    pub fn k(&self) -> usize {
        self.k
    }

    /// Basis degree
    pub fn n(&self) -> usize {
        self.n
    }

    /// Bernstein coefficients of the dual element
    pub fn pars(&self) -> &[f64] {
        self.poly.pars()
    }

    /// Coefficient `i`, 0.0 out of range
    pub fn par(&self, i: usize) -> f64 {
        self.poly.par(i)
    }

    /// Value at `t`, zero outside [0, 1] and zero everywhere for `k > n`
    pub fn value(&self, t: f64) -> f64 {
        self.poly.value(t)
    }
}
