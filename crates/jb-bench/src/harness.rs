//! Size sweep driver.
//!
//! For every size n the harness draws two random n×n operands, times the
//! multiply stage, then times the Jacobi decomposition of the product. The
//! optional symmetrisation between the two stages is not part of either
//! timing.

use std::time::Instant;

use jb_linalg::multiplier::check_block_size;
use jb_linalg::{decompose, multiply, symmetrize};
use jb_tensor::{ExecutionContext, Matrix};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::record::BenchmarkRecord;

/// Run the sweep on the backend named by `config.backend`.
pub fn run(config: &BenchConfig, sizes: &[usize]) -> Result<Vec<BenchmarkRecord>> {
    let ctx = ExecutionContext::from_kind(config.backend);
    run_with_context(&ctx, config, sizes)
}

/// Run the sweep on an existing context. `config.backend` is ignored.
///
/// Every size and the block size are validated before the first
/// measurement, so a bad argument never leaves a partial sweep behind.
/// Records come back in the order of `sizes`.
pub fn run_with_context(
    ctx: &ExecutionContext,
    config: &BenchConfig,
    sizes: &[usize],
) -> Result<Vec<BenchmarkRecord>> {
    for &n in sizes {
        if n == 0 {
            return Err(BenchError::InvalidSize(n));
        }
        if let Some(block_size) = config.block_size {
            check_block_size(n, block_size)?;
        }
    }
    config.solver.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let a = ctx.backend().random(n, &mut rng);
        let b = ctx.backend().random(n, &mut rng);

        let start = Instant::now();
        let c = product(ctx, &a, &b, config.block_size)?;
        let multiply_time = start.elapsed();

        let input = if config.symmetrize {
            symmetrize(ctx, &c)?
        } else {
            c
        };

        let start = Instant::now();
        let result = decompose(ctx, &input, &config.solver)?;
        let decompose_time = start.elapsed();

        let record = BenchmarkRecord::new(
            ctx.name(),
            n,
            multiply_time,
            decompose_time,
            result.iterations(),
            result.converged(),
        );
        info!(
            "{}: n={} multiply={:?} decompose={:?} total={:?} rotations={} converged={}",
            record.backend(),
            n,
            record.multiply_time(),
            record.decompose_time(),
            record.total_time(),
            record.iterations(),
            record.converged()
        );
        records.push(record);
    }
    debug!("{}: sweep finished, {} sizes", ctx.name(), records.len());
    Ok(records)
}

fn product(
    ctx: &ExecutionContext,
    a: &Matrix,
    b: &Matrix,
    block_size: Option<usize>,
) -> Result<Matrix> {
    match block_size {
        Some(block_size) => Ok(multiply(ctx, a, b, block_size)?),
        None => Ok(ctx.backend().matmul(a, b)?),
    }
}
