//! Error types for hepmath

use thiserror::Error;

/// Result type alias using hepmath's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hepmath operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Binary polynomial operation over mismatched domains
    #[error("Domain mismatch: [{lhs_min}, {lhs_max}] vs [{rhs_min}, {rhs_max}]")]
    DomainMismatch {
        /// Left operand lower edge
        lhs_min: f64,
        /// Left operand upper edge
        lhs_max: f64,
        /// Right operand lower edge
        rhs_min: f64,
        /// Right operand upper edge
        rhs_max: f64,
    },

    /// Division by the zero polynomial
    #[error("Division by the zero polynomial")]
    DivisionByZero,

    /// Degree-reduction or deflation request exceeds the current degree
    #[error("Cannot lower degree by {requested}: polynomial has degree {degree}")]
    DegreeTooLow {
        /// Requested degree decrease
        requested: usize,
        /// Current polynomial degree
        degree: usize,
    },

    /// Linear solve hit a (numerically) singular matrix
    #[error("Singular matrix in {n}x{n} linear solve")]
    SingularMatrix {
        /// Dimension of the system
        n: usize,
    },

    /// Adaptive quadrature exhausted its subdivision budget
    #[error(
        "Quadrature tolerance not reached after {subdivisions} subdivisions (error estimate {estimate:e})"
    )]
    ToleranceNotReached {
        /// Number of interval subdivisions performed
        subdivisions: usize,
        /// Best error estimate achieved
        estimate: f64,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a domain mismatch error from two `(xmin, xmax)` pairs
    pub fn domain_mismatch(lhs: (f64, f64), rhs: (f64, f64)) -> Self {
        Self::DomainMismatch {
            lhs_min: lhs.0,
            lhs_max: lhs.1,
            rhs_min: rhs.0,
            rhs_max: rhs.1,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
