//! # hepmath
//!
//! Numerical mathematics for particle-physics statistical analysis:
//! Bernstein-form polynomial algebra and relativistic phase-space
//! functions.
//!
//! ## Features
//!
//! - **Bernstein engine** ([`poly::bernstein`]): de Casteljau evaluation,
//!   exact arithmetic, degree elevation and nearest-polynomial reduction,
//!   in-basis long division and deflation, control-polygon root
//!   bracketing, Newton-Bernstein interpolation, and closed-form
//!   integrals against exponential and monomial kernels
//! - **Basis conversions** ([`poly::classical`], [`poly::dual`]):
//!   Legendre, Chebyshev and monomial sums in and out of Bernstein form;
//!   the dual Bernstein basis for coefficient projection
//! - **Phase space** ([`phasespace`]): two-, three- and N-body
//!   phase-space factors with analytic integrals where they exist
//! - **Support** ([`quadrature`], [`linalg`], [`special`]): adaptive
//!   Gauss-Kronrod integration, dense LU solves, scalar special functions
//!
//! ## Example
//!
//! ```
//! use hepmath::poly::Bernstein;
//!
//! let p = Bernstein::with_pars(vec![1.0, 2.0, 1.0], 0.0, 1.0);
//! assert!((p.value(0.5) - 1.5).abs() < 1e-12);
//! assert!((p.integral() - 4.0 / 3.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod linalg;
pub mod phasespace;
pub mod poly;
pub mod quadrature;
pub mod special;

pub use error::{Error, Result};
