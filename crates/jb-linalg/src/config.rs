use crate::error::{LinalgError, Result};

/// Stopping criteria for the Jacobi eigen solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence threshold on the largest off-diagonal magnitude. Also the
    /// tolerance of the symmetry precondition.
    pub tol: f64,
    /// Maximum number of rotations. The only bound on how long a
    /// decomposition may run.
    pub max_iter: usize,
}

impl SolverConfig {
    pub fn new(tol: f64, max_iter: usize) -> Self {
        Self { tol, max_iter }
    }

    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Rejects a tolerance that is not finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(LinalgError::InvalidTolerance(self.tol));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iter: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.tol, 1e-6);
        assert_eq!(c.max_iter, 100);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = SolverConfig::default().with_tol(1e-9).with_max_iter(5);
        assert_eq!(c, SolverConfig::new(1e-9, 5));
    }

    #[test]
    fn test_invalid_tolerance() {
        for tol in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SolverConfig::new(tol, 10).validate(),
                Err(LinalgError::InvalidTolerance(_))
            ));
        }
    }
}
