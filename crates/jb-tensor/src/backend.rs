use std::fmt::Debug;

use rand::rngs::StdRng;

use crate::block::{Block, BlockView};
use crate::device::Device;
use crate::dtype::DType;
use crate::error::{Result, TensorError};
use crate::matrix::Matrix;

/// Trait for pluggable numeric backends (plain arrays, tensor CPU, tensor device).
///
/// The multiplier and the eigen solver are written once against this
/// capability set. Every operation that consumes a matrix first runs
/// [`ensure_resident`](ComputeBackend::ensure_resident) on it, so a matrix
/// living on the wrong execution target is rejected before any arithmetic.
pub trait ComputeBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "array", "tensor-cpu").
    fn name(&self) -> &str;

    /// Execution target the backend computes on.
    fn device(&self) -> Device;

    /// Storage precision the backend computes in.
    fn dtype(&self) -> DType;

    /// Residency guard.
    ///
    /// Fails with `DeviceMismatch` if `m` lives on another execution target,
    /// and with `DTypeMismatch` if it is stored in another precision.
    fn ensure_resident(&self, m: &Matrix, name: &str) -> Result<()> {
        if m.device() != self.device() {
            return Err(TensorError::DeviceMismatch {
                name: name.to_string(),
                expected: self.device(),
                got: m.device(),
            });
        }
        if m.dtype() != self.dtype() {
            return Err(TensorError::DTypeMismatch {
                expected: self.dtype(),
                got: m.dtype(),
            });
        }
        Ok(())
    }

    /// Guards a pair of operands: both resident, both the same size.
    fn ensure_operands(&self, a: &Matrix, b: &Matrix) -> Result<()> {
        self.ensure_resident(a, "matrix A")?;
        self.ensure_resident(b, "matrix B")?;
        a.ensure_same_size(b)
    }

    /// Copy a matrix onto this backend's execution target and precision.
    fn upload(&self, m: &Matrix) -> Matrix {
        m.to(self.dtype(), self.device())
    }

    /// Matrix multiplication: C = A @ B.
    fn matmul(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;

    /// Tile product with accumulation: C[dst] += A[a] @ B[b].
    ///
    /// All three tiles must have the same size.
    fn matmul_accumulate(
        &self,
        a: BlockView<'_>,
        b: BlockView<'_>,
        c: &mut Matrix,
        dst: Block,
    ) -> Result<()>;

    /// Transpose: result[i][j] = a[j][i].
    fn transpose(&self, a: &Matrix) -> Result<Matrix>;

    /// Identity matrix resident on this backend.
    fn identity(&self, n: usize) -> Matrix {
        Matrix::identity(n, self.dtype(), self.device())
    }

    /// Element-wise addition.
    fn add(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;

    /// Scalar multiplication: result[i] = a[i] * s.
    fn scale(&self, a: &Matrix, s: f64) -> Result<Matrix>;

    /// Element-wise absolute value.
    fn abs(&self, a: &Matrix) -> Result<Matrix>;

    /// Main diagonal, widened to f64.
    fn diag(&self, a: &Matrix) -> Result<Vec<f64>>;

    /// Two-argument arctangent evaluated in the backend's precision.
    ///
    /// The trig capabilities are scalar: the solver needs one angle per
    /// rotation, so no element-wise form is exposed.
    fn atan2(&self, y: f64, x: f64) -> f64;

    /// Cosine evaluated in the backend's precision.
    fn cos(&self, x: f64) -> f64;

    /// Sine evaluated in the backend's precision.
    fn sin(&self, x: f64) -> f64;

    /// n×n matrix of uniform samples from [0, 1), resident on this backend.
    fn random(&self, n: usize, rng: &mut StdRng) -> Matrix;
}

/// Shared shape checks for [`ComputeBackend::matmul_accumulate`].
pub(crate) fn check_tiles(
    a: &BlockView<'_>,
    b: &BlockView<'_>,
    c: &Matrix,
    dst: Block,
) -> Result<()> {
    if a.size() != b.size() || a.size() != dst.size {
        return Err(TensorError::DimensionMismatch(format!(
            "tile sizes differ: A {} B {} C {}",
            a.size(),
            b.size(),
            dst.size
        )));
    }
    if a.matrix().n() != b.matrix().n() || a.matrix().n() != c.n() {
        return Err(TensorError::DimensionMismatch(format!(
            "tiles taken from matrices of different sizes: {} {} {}",
            a.matrix().n(),
            b.matrix().n(),
            c.n()
        )));
    }
    dst.ensure_fits(c.n())
}
