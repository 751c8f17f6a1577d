//! Crate-internal monomial (power-basis) coefficient utilities
//!
//! Exact basis conversions route through coefficients of the normalized
//! variable t = (x - xmin)/(xmax - xmin). These helpers manipulate plain
//! ascending-order monomial coefficient vectors.

/// Substitute `y = alpha + beta * t` into `p(y) = sum_j c[j] y^j`,
/// returning the coefficients of the result in powers of `t`.
///
/// Horner-style expansion: fold from the leading coefficient down,
/// multiplying the accumulator by the linear factor at each step. Exact
/// up to floating-point rounding.
pub(crate) fn affine(coeffs: &[f64], alpha: f64, beta: f64) -> Vec<f64> {
    let n = coeffs.len();
    let mut out = vec![0.0; n];
    if n == 0 {
        return out;
    }
    out[0] = coeffs[n - 1];
    let mut len = 1;
    for &c in coeffs[..n - 1].iter().rev() {
        // out <- out * (alpha + beta t) + c
        for k in (1..=len).rev() {
            out[k] = out[k] * alpha + out[k - 1] * beta;
        }
        out[0] = out[0] * alpha + c;
        len += 1;
    }
    out
}

/// Multiply two monomial coefficient vectors (discrete convolution)
pub(crate) fn mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        if x == 0.0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// Effective degree: index of the last coefficient that is not negligible
/// against the largest one, or `None` for the (numerically) zero vector.
pub(crate) fn effective_degree(coeffs: &[f64]) -> Option<usize> {
    let scale = coeffs.iter().fold(0.0f64, |m, c| m.max(c.abs()));
    if scale == 0.0 {
        return None;
    }
    coeffs.iter().rposition(|&c| scale + c != scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affine_identity() {
        let c = vec![1.0, 2.0, 3.0];
        assert_eq!(affine(&c, 0.0, 1.0), c);
    }

    #[test]
    fn test_affine_shift() {
        // p(y) = y^2, y = 1 + t  ->  1 + 2t + t^2
        let out = affine(&[0.0, 0.0, 1.0], 1.0, 1.0);
        assert_eq!(out, vec![1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_affine_scale() {
        // p(y) = y^2 + y, y = 2t  ->  2t + 4t^2
        let out = affine(&[0.0, 1.0, 1.0], 0.0, 2.0);
        assert_eq!(out, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_mul() {
        // (1 + t)(1 - t) = 1 - t^2
        assert_eq!(mul(&[1.0, 1.0], &[1.0, -1.0]), vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_effective_degree() {
        assert_eq!(effective_degree(&[0.0, 0.0]), None);
        assert_eq!(effective_degree(&[1.0, 2.0, 0.0]), Some(1));
        assert_eq!(effective_degree(&[1.0, 1e-40]), Some(0));
    }
}
