//! Small dense linear-algebra helpers
//!
//! Row-major LU factorization with partial pivoting, sized for the Gram
//! systems of the Bernstein dual basis (tens of unknowns, not thousands).

use crate::error::{Error, Result};

/// Solve the dense system `A x = b` in place via LU with partial pivoting.
///
/// `a` is an n*n row-major matrix, consumed by the factorization; `b` is
/// the right-hand side, overwritten with the solution which is also
/// returned.
///
/// # Errors
///
/// [`Error::SingularMatrix`] when a pivot is exactly zero (the Gram
/// matrices solved here are symmetric positive definite, so this only
/// happens once conditioning has destroyed the factorization entirely).
pub fn solve(mut a: Vec<f64>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();
    debug_assert_eq!(a.len(), n * n, "matrix/rhs size mismatch");

    for col in 0..n {
        // pivot search
        let mut pivot = col;
        for row in col + 1..n {
            if a[row * n + col].abs() > a[pivot * n + col].abs() {
                pivot = row;
            }
        }
        if a[pivot * n + col] == 0.0 {
            return Err(Error::SingularMatrix { n });
        }
        if pivot != col {
            for j in 0..n {
                a.swap(col * n + j, pivot * n + j);
            }
            b.swap(col, pivot);
        }

        // eliminate below
        let inv = 1.0 / a[col * n + col];
        for row in col + 1..n {
            let factor = a[row * n + col] * inv;
            if factor == 0.0 {
                continue;
            }
            a[row * n + col] = 0.0;
            for j in col + 1..n {
                a[row * n + j] -= factor * a[col * n + j];
            }
            b[row] -= factor * b[col];
        }
    }

    // back substitution
    for col in (0..n).rev() {
        let mut x = b[col];
        for j in col + 1..n {
            x -= a[col * n + j] * b[j];
        }
        b[col] = x / a[col * n + col];
    }

    Ok(b)
}
