use rand::rngs::StdRng;

use super::exec;
use crate::backend::ComputeBackend;
use crate::block::{Block, BlockView};
use crate::device::Device;
use crate::dtype::DType;
use crate::error::Result;
use crate::matrix::Matrix;

/// Accelerated-tensor backend executing on the host CPU in f32.
#[derive(Debug, Clone)]
pub struct TensorBackend;

impl TensorBackend {
    pub fn new() -> Self {
        TensorBackend
    }
}

impl Default for TensorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for TensorBackend {
    fn name(&self) -> &str {
        "tensor-cpu"
    }

    fn device(&self) -> Device {
        Device::Host
    }

    fn dtype(&self) -> DType {
        DType::F32
    }

    fn matmul(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        exec::matmul(self, a, b)
    }

    fn matmul_accumulate(
        &self,
        a: BlockView<'_>,
        b: BlockView<'_>,
        c: &mut Matrix,
        dst: Block,
    ) -> Result<()> {
        exec::matmul_accumulate(self, a, b, c, dst)
    }

    fn transpose(&self, a: &Matrix) -> Result<Matrix> {
        exec::transpose(self, a)
    }

    fn add(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        exec::add(self, a, b)
    }

    fn scale(&self, a: &Matrix, s: f64) -> Result<Matrix> {
        let s = s as f32;
        exec::map(self, a, |x| x * s)
    }

    fn abs(&self, a: &Matrix) -> Result<Matrix> {
        exec::map(self, a, f32::abs)
    }

    fn diag(&self, a: &Matrix) -> Result<Vec<f64>> {
        exec::diag(self, a)
    }

    fn atan2(&self, y: f64, x: f64) -> f64 {
        exec::atan2(y, x)
    }

    fn cos(&self, x: f64) -> f64 {
        exec::cos(x)
    }

    fn sin(&self, x: f64) -> f64 {
        exec::sin(x)
    }

    fn random(&self, n: usize, rng: &mut StdRng) -> Matrix {
        exec::random(self, n, rng)
    }
}
