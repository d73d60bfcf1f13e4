use jb_tensor::{ExecutionContext, Matrix};

use crate::error::{LinalgError, Result};

/// Largest-magnitude entry of the strict upper triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub p: usize,
    pub q: usize,
    pub magnitude: f64,
}

/// Global pivot search over the strict upper triangle of `a`.
///
/// Magnitudes come from the backend's element-wise `abs`. Ties keep the first
/// entry in row-major order. Returns `None` for matrices smaller than 2×2,
/// which have no off-diagonal entries.
///
/// # Errors
/// `NumericalDegeneracy` if any scanned entry is not finite.
pub fn find_pivot(ctx: &ExecutionContext, a: &Matrix) -> Result<Option<Pivot>> {
    let n = a.n();
    if n < 2 {
        return Ok(None);
    }
    let magnitudes = ctx.backend().abs(a)?;
    let mut best = Pivot {
        p: 0,
        q: 1,
        magnitude: 0.0,
    };
    for i in 0..n {
        for j in (i + 1)..n {
            let m = magnitudes.get(i, j);
            if !m.is_finite() {
                return Err(LinalgError::NumericalDegeneracy {
                    row: i,
                    col: j,
                    value: a.get(i, j),
                });
            }
            if m > best.magnitude {
                best = Pivot { p: i, q: j, magnitude: m };
            }
        }
    }
    Ok(Some(best))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_largest_magnitude() {
        let ctx = ExecutionContext::default();
        let a = Matrix::from_rows(&[
            vec![9.0, 1.0, -5.0],
            vec![1.0, 9.0, 2.0],
            vec![-5.0, 2.0, 9.0],
        ])
        .unwrap();
        let p = find_pivot(&ctx, &a).unwrap().unwrap();
        assert_eq!((p.p, p.q), (0, 2));
        assert_eq!(p.magnitude, 5.0);
    }

    #[test]
    fn test_diagonal_entries_ignored() {
        let ctx = ExecutionContext::default();
        let a = Matrix::from_rows(&[vec![100.0, 0.0], vec![0.0, -100.0]]).unwrap();
        let p = find_pivot(&ctx, &a).unwrap().unwrap();
        assert_eq!(p.magnitude, 0.0);
    }

    #[test]
    fn test_one_by_one_has_no_pivot() {
        let ctx = ExecutionContext::default();
        let a = Matrix::from_vec(1, vec![3.0]).unwrap();
        assert!(find_pivot(&ctx, &a).unwrap().is_none());
    }

    #[test]
    fn test_non_finite_is_fatal() {
        let ctx = ExecutionContext::default();
        let a = Matrix::from_rows(&[
            vec![1.0, 0.5, f64::NEG_INFINITY],
            vec![0.5, 1.0, 0.0],
            vec![f64::NEG_INFINITY, 0.0, 1.0],
        ])
        .unwrap();
        match find_pivot(&ctx, &a) {
            Err(LinalgError::NumericalDegeneracy { row, col, value }) => {
                assert_eq!((row, col), (0, 2));
                assert_eq!(value, f64::NEG_INFINITY);
            }
            other => panic!("expected NumericalDegeneracy, got {:?}", other),
        }
    }
}
