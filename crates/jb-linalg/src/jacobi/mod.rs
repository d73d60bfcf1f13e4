//! Classical Jacobi eigenvalue algorithm with global pivoting.
//!
//! Each iteration picks the largest off-diagonal entry of the working matrix,
//! builds the dense rotation that annihilates it and applies it as
//! A ← Jᵗ·A·J, V ← V·J through the backend's full matrix products. The dense
//! O(n³) update is kept on purpose: the benchmark measures this formulation,
//! not the O(n) two-row update.

pub mod pivot;
pub mod rotation;

pub use pivot::{find_pivot, Pivot};
pub use rotation::RotationPlan;

use jb_tensor::{ExecutionContext, Matrix, TensorError};
use log::{debug, trace, warn};

use crate::config::SolverConfig;
use crate::error::Result;
use crate::symmetry::check_symmetric;

/// Outcome of a Jacobi decomposition.
#[derive(Debug, Clone)]
pub struct EigenResult {
    eigenvalues: Vec<f64>,
    eigenvectors: Matrix,
    converged: bool,
    iterations: usize,
    off_diagonal: f64,
}

impl EigenResult {
    /// Diagonal of the final working matrix, in iteration order (unsorted).
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Accumulated rotations; column k pairs with `eigenvalues()[k]`.
    pub fn eigenvectors(&self) -> &Matrix {
        &self.eigenvectors
    }

    /// Column `k` of the eigenvector matrix.
    pub fn eigenvector(&self, k: usize) -> Vec<f64> {
        self.eigenvectors.column(k)
    }

    /// False when the iteration budget ran out before the tolerance was met.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Number of rotations applied.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Largest off-diagonal magnitude of the final working matrix.
    pub fn off_diagonal(&self) -> f64 {
        self.off_diagonal
    }

    /// Eigenvalues in ascending order.
    pub fn sorted_eigenvalues(&self) -> Vec<f64> {
        let mut sorted = self.eigenvalues.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

/// Decompose a symmetric matrix into eigenvalues and eigenvectors.
///
/// `a` must be non-empty, resident on the context's backend, and symmetric
/// within `config.tol`. Exhausting `config.max_iter` is not an error: the
/// result comes back with `converged() == false`.
///
/// # Errors
/// - `InvalidTolerance` for a tolerance that is not finite and positive.
/// - `DeviceMismatch` / `DTypeMismatch` if `a` is not resident on the backend.
/// - `DimensionMismatch` for an empty matrix.
/// - `NotSymmetric` if the symmetry precondition fails.
/// - `NumericalDegeneracy` if `a` holds a non-finite entry, or one shows up
///   during pivot search.
pub fn decompose(
    ctx: &ExecutionContext,
    a: &Matrix,
    config: &SolverConfig,
) -> Result<EigenResult> {
    config.validate()?;
    let backend = ctx.backend();
    backend.ensure_resident(a, "matrix A")?;
    let n = a.n();
    if n == 0 {
        return Err(TensorError::DimensionMismatch(
            "cannot decompose an empty matrix".to_string(),
        )
        .into());
    }
    check_symmetric(a, config.tol)?;

    let mut work = a.clone();
    let mut v = backend.identity(n);
    let mut converged = false;
    let mut iterations = 0;
    let mut off_diagonal = None;

    for _ in 0..config.max_iter {
        let pivot = match find_pivot(ctx, &work)? {
            Some(pivot) => pivot,
            None => {
                converged = true;
                off_diagonal = Some(0.0);
                break;
            }
        };
        if pivot.magnitude < config.tol {
            converged = true;
            off_diagonal = Some(pivot.magnitude);
            break;
        }

        let plan = RotationPlan::new(ctx, &work, pivot.p, pivot.q);
        trace!(
            "iteration {}: pivot ({}, {}) |a|={:e} theta={}",
            iterations,
            plan.p,
            plan.q,
            pivot.magnitude,
            plan.theta
        );
        let j = plan.matrix(ctx, n);
        let jt = backend.transpose(&j)?;
        work = backend.matmul(&backend.matmul(&jt, &work)?, &j)?;
        v = backend.matmul(&v, &j)?;
        iterations += 1;
    }

    // Budget ran out without a pivot check after the last rotation.
    let off_diagonal = match off_diagonal {
        Some(m) => m,
        None => {
            let m = find_pivot(ctx, &work)?.map_or(0.0, |p| p.magnitude);
            converged = m < config.tol;
            m
        }
    };
    if converged {
        debug!(
            "{}: jacobi converged n={} after {} rotations",
            ctx.name(),
            n,
            iterations
        );
    } else {
        warn!(
            "{}: jacobi did not converge n={} after {} rotations (off-diagonal {:e}, tol {:e})",
            ctx.name(),
            n,
            iterations,
            off_diagonal,
            config.tol
        );
    }

    Ok(EigenResult {
        eigenvalues: backend.diag(&work)?,
        eigenvectors: v,
        converged,
        iterations,
        off_diagonal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use jb_tensor::BackendKind;

    fn two_by_two() -> Matrix {
        Matrix::from_rows(&[vec![4.0, 1.0], vec![1.0, 3.0]]).unwrap()
    }

    #[test]
    fn test_two_by_two_eigenvalues() {
        let ctx = ExecutionContext::default();
        let r = decompose(&ctx, &two_by_two(), &SolverConfig::default()).unwrap();
        assert!(r.converged());
        let ev = r.sorted_eigenvalues();
        assert_relative_eq!(ev[0], (7.0 - 5f64.sqrt()) / 2.0, epsilon = 1e-9);
        assert_relative_eq!(ev[1], (7.0 + 5f64.sqrt()) / 2.0, epsilon = 1e-9);

        let v0 = r.eigenvector(0);
        let v1 = r.eigenvector(1);
        assert_abs_diff_eq!(v0[0] * v1[0] + v0[1] * v1[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v0[0] * v0[0] + v0[1] * v0[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eigenpairs_satisfy_definition() {
        let ctx = ExecutionContext::default();
        let a = two_by_two();
        let r = decompose(&ctx, &a, &SolverConfig::default()).unwrap();
        for k in 0..2 {
            let v = r.eigenvector(k);
            let lambda = r.eigenvalues()[k];
            for i in 0..2 {
                let av = a.get(i, 0) * v[0] + a.get(i, 1) * v[1];
                assert_abs_diff_eq!(av, lambda * v[i], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_zero_iterations_returns_input_diagonal() {
        let ctx = ExecutionContext::default();
        let config = SolverConfig::default().with_max_iter(0);
        let r = decompose(&ctx, &two_by_two(), &config).unwrap();
        assert!(!r.converged());
        assert_eq!(r.iterations(), 0);
        assert_eq!(r.eigenvalues(), &[4.0, 3.0]);
        assert_eq!(r.eigenvectors(), &ctx.backend().identity(2));
        assert_eq!(r.off_diagonal(), 1.0);
    }

    #[test]
    fn test_budget_exhaustion_is_not_an_error() {
        let ctx = ExecutionContext::default();
        let a = Matrix::from_rows(&[
            vec![1.0, 0.5, 0.25, 0.125],
            vec![0.5, 2.0, 0.5, 0.25],
            vec![0.25, 0.5, 3.0, 0.5],
            vec![0.125, 0.25, 0.5, 4.0],
        ])
        .unwrap();
        let config = SolverConfig::new(1e-12, 2);
        let r = decompose(&ctx, &a, &config).unwrap();
        assert!(!r.converged());
        assert_eq!(r.iterations(), 2);
        assert!(r.off_diagonal() >= 1e-12);
    }

    #[test]
    fn test_diagonal_input_converges_immediately() {
        let ctx = ExecutionContext::default();
        let a = Matrix::from_rows(&[vec![2.0, 0.0], vec![0.0, -7.0]]).unwrap();
        let r = decompose(&ctx, &a, &SolverConfig::default()).unwrap();
        assert!(r.converged());
        assert_eq!(r.iterations(), 0);
        assert_eq!(r.eigenvalues(), &[2.0, -7.0]);
    }

    #[test]
    fn test_one_by_one() {
        let ctx = ExecutionContext::default();
        let a = Matrix::from_vec(1, vec![5.0]).unwrap();
        let r = decompose(&ctx, &a, &SolverConfig::default()).unwrap();
        assert!(r.converged());
        assert_eq!(r.eigenvalues(), &[5.0]);
    }

    #[test]
    fn test_non_symmetric_rejected() {
        let ctx = ExecutionContext::default();
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert!(matches!(
            decompose(&ctx, &a, &SolverConfig::default()),
            Err(LinalgError::NotSymmetric { .. })
        ));
    }

    #[test]
    fn test_empty_rejected() {
        let ctx = ExecutionContext::default();
        let a = Matrix::from_vec(0, vec![]).unwrap();
        let err = decompose(&ctx, &a, &SolverConfig::default()).unwrap_err();
        assert!(err.is_dimension_mismatch());
    }

    #[test]
    fn test_last_rotation_converges() {
        let ctx = ExecutionContext::default();
        let r = decompose(&ctx, &two_by_two(), &SolverConfig::new(1e-6, 1)).unwrap();
        assert_eq!(r.iterations(), 1);
        assert!(r.off_diagonal() < 1e-6);
        assert!(r.converged());
    }

    #[test]
    fn test_nan_is_fatal() {
        let ctx = ExecutionContext::default();
        let a = Matrix::from_rows(&[vec![f64::NAN, 1.0], vec![1.0, 0.0]]).unwrap();
        assert!(matches!(
            decompose(&ctx, &a, &SolverConfig::default()),
            Err(LinalgError::NumericalDegeneracy { row: 0, col: 0, .. })
        ));
    }

    #[test]
    fn test_nan_on_diagonal_of_diagonal_input() {
        let ctx = ExecutionContext::default();
        let a = Matrix::from_rows(&[vec![f64::NAN, 0.0], vec![0.0, 1.0]]).unwrap();
        match decompose(&ctx, &a, &SolverConfig::default()) {
            Err(LinalgError::NumericalDegeneracy { row, col, value }) => {
                assert_eq!((row, col), (0, 0));
                assert!(value.is_nan());
            }
            other => panic!("expected NumericalDegeneracy, got {:?}", other),
        }
    }

    #[test]
    fn test_host_matrix_on_device_backend() {
        let ctx = ExecutionContext::from_kind(BackendKind::TensorDevice);
        let err = decompose(&ctx, &two_by_two(), &SolverConfig::default()).unwrap_err();
        assert!(err.is_device_mismatch());
    }

    #[test]
    fn test_tensor_backends_agree_with_array() {
        let config = SolverConfig::new(1e-4, 100);
        for kind in [BackendKind::TensorCpu, BackendKind::TensorDevice] {
            let ctx = ExecutionContext::from_kind(kind);
            let r = decompose(&ctx, &ctx.upload(&two_by_two()), &config).unwrap();
            assert!(r.converged());
            assert_eq!(r.eigenvectors().device(), ctx.device());
            let ev = r.sorted_eigenvalues();
            assert_relative_eq!(ev[0], 2.381966, epsilon = 1e-4);
            assert_relative_eq!(ev[1], 4.618034, epsilon = 1e-4);
        }
    }
}
