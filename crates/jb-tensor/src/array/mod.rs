use rand::rngs::StdRng;
use rand::Rng;

use crate::backend::{check_tiles, ComputeBackend};
use crate::block::{Block, BlockView};
use crate::device::Device;
use crate::dtype::DType;
use crate::error::Result;
use crate::kernels;
use crate::matrix::Matrix;
use crate::storage::Storage;

/// Plain array arithmetic on the host, in f64.
///
/// Implements all operations with straightforward loops optimized for
/// correctness rather than peak performance. This is the reference backend
/// the tensor backends are compared against.
#[derive(Debug, Clone)]
pub struct ArrayBackend;

impl ArrayBackend {
    pub fn new() -> Self {
        ArrayBackend
    }

    fn wrap(&self, n: usize, data: Vec<f64>) -> Result<Matrix> {
        Matrix::from_storage(n, Storage::F64(data), Device::Host)
    }

    fn map(&self, a: &Matrix, f: impl Fn(f64) -> f64) -> Result<Matrix> {
        self.ensure_resident(a, "matrix")?;
        let data = a.storage().as_f64_slice()?.iter().map(|&x| f(x)).collect();
        self.wrap(a.n(), data)
    }
}

impl Default for ArrayBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for ArrayBackend {
    fn name(&self) -> &str {
        "array"
    }

    fn device(&self) -> Device {
        Device::Host
    }

    fn dtype(&self) -> DType {
        DType::F64
    }

    fn matmul(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        self.ensure_operands(a, b)?;
        let c = kernels::matmul_ijk(a.storage().as_f64_slice()?, b.storage().as_f64_slice()?, a.n());
        self.wrap(a.n(), c)
    }

    fn matmul_accumulate(
        &self,
        a: BlockView<'_>,
        b: BlockView<'_>,
        c: &mut Matrix,
        dst: Block,
    ) -> Result<()> {
        self.ensure_operands(a.matrix(), b.matrix())?;
        self.ensure_resident(c, "matrix C")?;
        check_tiles(&a, &b, c, dst)?;
        let n = c.n();
        kernels::tile_accumulate_ijk(
            a.matrix().storage().as_f64_slice()?,
            a.block(),
            b.matrix().storage().as_f64_slice()?,
            b.block(),
            c.storage_mut().as_f64_slice_mut()?,
            dst,
            n,
        );
        Ok(())
    }

    fn transpose(&self, a: &Matrix) -> Result<Matrix> {
        self.ensure_resident(a, "matrix")?;
        let t = kernels::transpose(a.storage().as_f64_slice()?, a.n());
        self.wrap(a.n(), t)
    }

    fn add(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        self.ensure_operands(a, b)?;
        let data = a
            .storage()
            .as_f64_slice()?
            .iter()
            .zip(b.storage().as_f64_slice()?.iter())
            .map(|(x, y)| x + y)
            .collect();
        self.wrap(a.n(), data)
    }

    fn scale(&self, a: &Matrix, s: f64) -> Result<Matrix> {
        self.map(a, |x| x * s)
    }

    fn abs(&self, a: &Matrix) -> Result<Matrix> {
        self.map(a, f64::abs)
    }

    fn diag(&self, a: &Matrix) -> Result<Vec<f64>> {
        self.ensure_resident(a, "matrix")?;
        Ok(kernels::diag(a.storage().as_f64_slice()?, a.n()))
    }

    fn atan2(&self, y: f64, x: f64) -> f64 {
        y.atan2(x)
    }

    fn cos(&self, x: f64) -> f64 {
        x.cos()
    }

    fn sin(&self, x: f64) -> f64 {
        x.sin()
    }

    fn random(&self, n: usize, rng: &mut StdRng) -> Matrix {
        Matrix::from_fn(n, DType::F64, Device::Host, |_, _| rng.gen::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TensorError;
    use rand::SeedableRng;

    fn backend() -> ArrayBackend {
        ArrayBackend::new()
    }

    fn m(rows: &[Vec<f64>]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_matmul_identity() {
        let b = backend();
        let x = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let c = b.matmul(&b.identity(2), &x).unwrap();
        assert_eq!(c.to_f64_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_matmul_basic() {
        let b = backend();
        let a = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let x = m(&[vec![5.0, 6.0], vec![7.0, 8.0]]);
        let c = b.matmul(&a, &x).unwrap();
        assert_eq!(c.to_f64_vec(), vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_size_mismatch() {
        let b = backend();
        let a = b.identity(2);
        let x = b.identity(3);
        assert!(matches!(b.matmul(&a, &x), Err(TensorError::DimensionMismatch(_))));
    }

    #[test]
    fn test_transpose() {
        let b = backend();
        let a = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(b.transpose(&a).unwrap().to_f64_vec(), vec![1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_add_scale_abs() {
        let b = backend();
        let a = m(&[vec![1.0, -2.0], vec![-3.0, 4.0]]);
        assert_eq!(b.add(&a, &a).unwrap().to_f64_vec(), vec![2.0, -4.0, -6.0, 8.0]);
        assert_eq!(b.scale(&a, 0.5).unwrap().to_f64_vec(), vec![0.5, -1.0, -1.5, 2.0]);
        assert_eq!(b.abs(&a).unwrap().to_f64_vec(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(b.diag(&a).unwrap(), vec![1.0, 4.0]);
    }

    #[test]
    fn test_trig() {
        let b = backend();
        assert!((b.atan2(1.0, 1.0) - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
        assert!((b.cos(0.0) - 1.0).abs() < 1e-15);
        assert!(b.sin(0.0).abs() < 1e-15);
    }

    #[test]
    fn test_random_range_and_seed() {
        let b = backend();
        let r1 = b.random(4, &mut StdRng::seed_from_u64(7));
        let r2 = b.random(4, &mut StdRng::seed_from_u64(7));
        assert_eq!(r1, r2);
        assert!(r1.to_f64_vec().iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_rejects_f32_matrix() {
        let b = backend();
        let a = Matrix::identity(2, DType::F32, Device::Host);
        assert!(matches!(
            b.transpose(&a),
            Err(TensorError::DTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_accelerator_matrix() {
        let b = backend();
        let a = Matrix::identity(2, DType::F64, Device::Accelerator(0));
        assert!(matches!(
            b.abs(&a),
            Err(TensorError::DeviceMismatch { .. })
        ));
    }
}
