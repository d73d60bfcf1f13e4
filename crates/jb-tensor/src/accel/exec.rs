// f32 execution shared by the tensor backends. Every entry point runs the
// caller's residency guard before reading storage.

use rand::rngs::StdRng;
use rand::Rng;

use crate::backend::{check_tiles, ComputeBackend};
use crate::block::{Block, BlockView};
use crate::dtype::DType;
use crate::error::Result;
use crate::kernels;
use crate::matrix::Matrix;
use crate::storage::Storage;

fn wrap<B: ComputeBackend + ?Sized>(be: &B, n: usize, data: Vec<f32>) -> Result<Matrix> {
    Matrix::from_storage(n, Storage::F32(data), be.device())
}

pub(crate) fn matmul<B: ComputeBackend + ?Sized>(be: &B, a: &Matrix, b: &Matrix) -> Result<Matrix> {
    be.ensure_operands(a, b)?;
    let c = kernels::matmul_ikj(a.storage().as_f32_slice()?, b.storage().as_f32_slice()?, a.n());
    wrap(be, a.n(), c)
}

pub(crate) fn matmul_accumulate<B: ComputeBackend + ?Sized>(
    be: &B,
    a: BlockView<'_>,
    b: BlockView<'_>,
    c: &mut Matrix,
    dst: Block,
) -> Result<()> {
    be.ensure_operands(a.matrix(), b.matrix())?;
    be.ensure_resident(c, "matrix C")?;
    check_tiles(&a, &b, c, dst)?;
    let n = c.n();
    kernels::tile_accumulate_ikj(
        a.matrix().storage().as_f32_slice()?,
        a.block(),
        b.matrix().storage().as_f32_slice()?,
        b.block(),
        c.storage_mut().as_f32_slice_mut()?,
        dst,
        n,
    );
    Ok(())
}

pub(crate) fn transpose<B: ComputeBackend + ?Sized>(be: &B, a: &Matrix) -> Result<Matrix> {
    be.ensure_resident(a, "matrix")?;
    let t = kernels::transpose(a.storage().as_f32_slice()?, a.n());
    wrap(be, a.n(), t)
}

pub(crate) fn add<B: ComputeBackend + ?Sized>(be: &B, a: &Matrix, b: &Matrix) -> Result<Matrix> {
    be.ensure_operands(a, b)?;
    let data = a
        .storage()
        .as_f32_slice()?
        .iter()
        .zip(b.storage().as_f32_slice()?.iter())
        .map(|(x, y)| x + y)
        .collect();
    wrap(be, a.n(), data)
}

pub(crate) fn map<B: ComputeBackend + ?Sized>(
    be: &B,
    a: &Matrix,
    f: impl Fn(f32) -> f32,
) -> Result<Matrix> {
    be.ensure_resident(a, "matrix")?;
    let data = a.storage().as_f32_slice()?.iter().map(|&x| f(x)).collect();
    wrap(be, a.n(), data)
}

pub(crate) fn diag<B: ComputeBackend + ?Sized>(be: &B, a: &Matrix) -> Result<Vec<f64>> {
    be.ensure_resident(a, "matrix")?;
    Ok(kernels::diag(a.storage().as_f32_slice()?, a.n()))
}

pub(crate) fn random<B: ComputeBackend + ?Sized>(be: &B, n: usize, rng: &mut StdRng) -> Matrix {
    Matrix::from_fn(n, DType::F32, be.device(), |_, _| rng.gen::<f32>() as f64)
}

pub(crate) fn atan2(y: f64, x: f64) -> f64 {
    (y as f32).atan2(x as f32) as f64
}

pub(crate) fn cos(x: f64) -> f64 {
    (x as f32).cos() as f64
}

pub(crate) fn sin(x: f64) -> f64 {
    (x as f32).sin() as f64
}
