use jb_tensor::{ExecutionContext, Matrix};

use crate::error::{LinalgError, Result};

/// Checks that `a` is symmetric within `tol`.
///
/// The allowed deviation of a mirrored pair is `tol` scaled by the larger of
/// the two magnitudes, and never less than `tol` itself. A non-finite entry,
/// diagonal included, is reported as `NumericalDegeneracy`.
pub fn check_symmetric(a: &Matrix, tol: f64) -> Result<()> {
    let n = a.n();
    for i in 0..n {
        let d = a.get(i, i);
        if !d.is_finite() {
            return Err(LinalgError::NumericalDegeneracy { row: i, col: i, value: d });
        }
        for j in (i + 1)..n {
            let upper = a.get(i, j);
            let lower = a.get(j, i);
            if !upper.is_finite() {
                return Err(LinalgError::NumericalDegeneracy { row: i, col: j, value: upper });
            }
            if !lower.is_finite() {
                return Err(LinalgError::NumericalDegeneracy { row: j, col: i, value: lower });
            }
            let deviation = (upper - lower).abs();
            let limit = tol * upper.abs().max(lower.abs()).max(1.0);
            if deviation > limit {
                return Err(LinalgError::NotSymmetric { row: i, col: j, deviation });
            }
        }
    }
    Ok(())
}

/// S = ½(A + Aᵗ), computed on the context's backend.
///
/// The result is exactly symmetric in any precision, since each mirrored
/// pair is formed from the same two summands.
pub fn symmetrize(ctx: &ExecutionContext, a: &Matrix) -> Result<Matrix> {
    let backend = ctx.backend();
    let t = backend.transpose(a)?;
    let sum = backend.add(a, &t)?;
    Ok(backend.scale(&sum, 0.5)?)
}
