//! Block-partitioned matrix product.
//!
//! Both operands are cut into b×b tiles. Output tile C[i, j] is built by
//! streaming the tile pairs (A[i, k], B[k, j]) for k = 0, b, 2b, ... through
//! the backend's tile kernel and accumulating into C. Only one pair of input
//! tiles and one output tile are touched at a time, which is the dataflow a
//! pipelined hardware multiplier would follow. The total work equals the
//! direct product; only the summation order differs.

use jb_tensor::{Block, BlockView, ExecutionContext, Matrix};
use log::{debug, trace};

use crate::error::{LinalgError, Result};

/// Number of tile-pair products a blocked multiply of an n×n matrix performs.
///
/// Returns 0 when `block_size` is 0.
pub fn tile_count(n: usize, block_size: usize) -> usize {
    if block_size == 0 {
        return 0;
    }
    let tiles = n / block_size;
    tiles * tiles * tiles
}

/// Checks that `block_size` tiles an n×n matrix exactly.
pub fn check_block_size(n: usize, block_size: usize) -> Result<()> {
    if block_size == 0 || n % block_size != 0 {
        return Err(LinalgError::InvalidBlockSize { n, block_size });
    }
    Ok(())
}

/// C = A @ B computed tile by tile.
///
/// # Errors
/// - `DeviceMismatch` / `DTypeMismatch` if an operand is not resident on the
///   context's backend.
/// - `DimensionMismatch` if A and B differ in size.
/// - `InvalidBlockSize` if `block_size` is 0 or does not divide n.
///
/// All checks run before any arithmetic.
pub fn multiply(
    ctx: &ExecutionContext,
    a: &Matrix,
    b: &Matrix,
    block_size: usize,
) -> Result<Matrix> {
    let backend = ctx.backend();
    backend.ensure_operands(a, b)?;
    let n = a.n();
    check_block_size(n, block_size)?;

    debug!(
        "{}: blocked multiply n={} block={} tile products={}",
        ctx.name(),
        n,
        block_size,
        tile_count(n, block_size)
    );

    let mut c = Matrix::zeros(n, backend.dtype(), backend.device());
    for i in (0..n).step_by(block_size) {
        for j in (0..n).step_by(block_size) {
            let dst = Block::new(i, j, block_size);
            for k in (0..n).step_by(block_size) {
                let a_tile = BlockView::new(a, Block::new(i, k, block_size))?;
                let b_tile = BlockView::new(b, Block::new(k, j, block_size))?;
                backend.matmul_accumulate(a_tile, b_tile, &mut c, dst)?;
                trace!(
                    "C[{}..{}, {}..{}] += A[{}..{}, {}..{}] @ B[{}..{}, {}..{}]",
                    i,
                    i + block_size,
                    j,
                    j + block_size,
                    i,
                    i + block_size,
                    k,
                    k + block_size,
                    k,
                    k + block_size,
                    j,
                    j + block_size
                );
            }
        }
    }
    Ok(c)
}

/// Compare the blocked product against the backend's direct product.
///
/// Returns true if every entry agrees within `tol`.
pub fn verify_blocked(
    ctx: &ExecutionContext,
    a: &Matrix,
    b: &Matrix,
    block_size: usize,
    tol: f64,
) -> Result<bool> {
    let blocked = multiply(ctx, a, b, block_size)?;
    let direct = ctx.backend().matmul(a, b)?;
    let worst = blocked
        .to_f64_vec()
        .iter()
        .zip(direct.to_f64_vec().iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0f64, f64::max);
    debug!("{}: blocked vs direct max deviation {:e}", ctx.name(), worst);
    Ok(worst <= tol)
}
