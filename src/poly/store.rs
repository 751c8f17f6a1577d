//! Ordered coefficient storage shared by every polynomial basis

/// Ordered sequence of polynomial coefficients
///
/// A degree-N polynomial stores exactly N+1 coefficients, whatever the
/// basis. The store knows nothing about evaluation; basis-specific types
/// hold a `PolySum` by composition and supply the evaluation rule.
///
/// Out-of-range writes are silent no-ops: the owning type is responsible
/// for keeping indices valid, and a stray index must never change the
/// degree behind its back.
#[derive(Debug, Clone, PartialEq)]
pub struct PolySum {
    pars: Vec<f64>,
}

impl PolySum {
    /// Zero-initialized store for a degree-`n` polynomial (n+1 slots)
    pub fn zeros(n: usize) -> Self {
        PolySum {
            pars: vec![0.0; n + 1],
        }
    }

    /// Store holding the given coefficients; empty input becomes the
    /// single zero coefficient of a degree-0 polynomial.
    pub fn new(pars: Vec<f64>) -> Self {
        if pars.is_empty() {
            PolySum::zeros(0)
        } else {
            PolySum { pars }
        }
    }

    /// Polynomial degree (one less than the coefficient count)
    pub fn degree(&self) -> usize {
        self.pars.len() - 1
    }

    /// Number of stored coefficients
    pub fn npars(&self) -> usize {
        self.pars.len()
    }

    /// Coefficient `i`, or 0.0 out of range
    pub fn par(&self, i: usize) -> f64 {
        self.pars.get(i).copied().unwrap_or(0.0)
    }

    /// Set coefficient `i`; out-of-range indices are ignored.
    ///
    /// Returns whether the stored value actually changed.
    pub fn set_par(&mut self, i: usize, value: f64) -> bool {
        match self.pars.get_mut(i) {
            Some(p) if *p != value => {
                *p = value;
                true
            }
            _ => false,
        }
    }

    /// All coefficients
    pub fn pars(&self) -> &[f64] {
        &self.pars
    }

    /// Mutable access for the owning basis type
    pub(crate) fn pars_mut(&mut self) -> &mut [f64] {
        &mut self.pars
    }

    /// Consume the store, returning the coefficient vector
    pub fn into_pars(self) -> Vec<f64> {
        self.pars
    }

    /// Are all coefficients exactly zero?
    pub fn zero(&self) -> bool {
        self.pars.iter().all(|&p| p == 0.0)
    }

    /// Are all coefficients negligible against the scale `c`, in the
    /// sense that `c + p == c` in floating point?
    pub fn small(&self, c: f64) -> bool {
        self.pars.iter().all(|&p| c + p == c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_invariant() {
        assert_eq!(PolySum::zeros(0).npars(), 1);
        assert_eq!(PolySum::zeros(5).degree(), 5);
        assert_eq!(PolySum::new(vec![]).degree(), 0);
        assert_eq!(PolySum::new(vec![1.0, 2.0, 3.0]).degree(), 2);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut p = PolySum::new(vec![1.0, 2.0]);
        assert_eq!(p.par(7), 0.0);
        assert!(!p.set_par(7, 3.0));
        assert_eq!(p.degree(), 1);
        assert!(p.set_par(0, 4.0));
        assert!(!p.set_par(0, 4.0)); // unchanged
        assert_eq!(p.par(0), 4.0);
    }

    #[test]
    fn test_small() {
        let p = PolySum::new(vec![1e-40, -1e-42]);
        assert!(p.small(1.0));
        assert!(!p.small(1e-30));
        assert!(PolySum::zeros(3).zero());
    }
}
