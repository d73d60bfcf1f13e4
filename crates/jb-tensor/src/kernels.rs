//! Dense row-major kernels shared by every backend, generic over the scalar.
//!
//! All matrices are n×n. Loop order differs per backend: the plain array
//! backend uses the textbook i-j-k order, the tensor backends use i-k-j so the
//! innermost loop walks B and C with unit stride.

use num_traits::Float;

use crate::block::Block;

/// C = A @ B in i-j-k order.
pub(crate) fn matmul_ijk<T: Float>(a: &[T], b: &[T], n: usize) -> Vec<T> {
    let mut c = vec![T::zero(); n * n];
    for i in 0..n {
        for j in 0..n {
            let mut sum = T::zero();
            for p in 0..n {
                sum = sum + a[i * n + p] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
    c
}

/// C = A @ B in i-k-j order.
pub(crate) fn matmul_ikj<T: Float>(a: &[T], b: &[T], n: usize) -> Vec<T> {
    let mut c = vec![T::zero(); n * n];
    for i in 0..n {
        for p in 0..n {
            let a_ip = a[i * n + p];
            for j in 0..n {
                c[i * n + j] = c[i * n + j] + a_ip * b[p * n + j];
            }
        }
    }
    c
}

/// C[dst] += A[ab] @ B[bb] in i-j-k order. Tile sizes are checked by the caller.
pub(crate) fn tile_accumulate_ijk<T: Float>(
    a: &[T],
    ab: Block,
    b: &[T],
    bb: Block,
    c: &mut [T],
    dst: Block,
    n: usize,
) {
    let s = dst.size;
    for i in 0..s {
        for j in 0..s {
            let mut sum = T::zero();
            for p in 0..s {
                sum = sum + a[(ab.row + i) * n + ab.col + p] * b[(bb.row + p) * n + bb.col + j];
            }
            let idx = (dst.row + i) * n + dst.col + j;
            c[idx] = c[idx] + sum;
        }
    }
}

/// C[dst] += A[ab] @ B[bb] in i-k-j order. Tile sizes are checked by the caller.
pub(crate) fn tile_accumulate_ikj<T: Float>(
    a: &[T],
    ab: Block,
    b: &[T],
    bb: Block,
    c: &mut [T],
    dst: Block,
    n: usize,
) {
    let s = dst.size;
    for i in 0..s {
        for p in 0..s {
            let a_ip = a[(ab.row + i) * n + ab.col + p];
            let b_row = (bb.row + p) * n + bb.col;
            let c_row = (dst.row + i) * n + dst.col;
            for j in 0..s {
                c[c_row + j] = c[c_row + j] + a_ip * b[b_row + j];
            }
        }
    }
}

pub(crate) fn transpose<T: Float>(a: &[T], n: usize) -> Vec<T> {
    let mut t = vec![T::zero(); n * n];
    for i in 0..n {
        for j in 0..n {
            t[j * n + i] = a[i * n + j];
        }
    }
    t
}

pub(crate) fn diag<T: Float>(a: &[T], n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| a[i * n + i].to_f64().unwrap_or(f64::NAN))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matmul_orders_agree() {
        let a = [1.0f64, 2.0, 3.0, 4.0];
        let b = [5.0f64, 6.0, 7.0, 8.0];
        assert_eq!(matmul_ijk(&a, &b, 2), vec![19.0, 22.0, 43.0, 50.0]);
        assert_eq!(matmul_ikj(&a, &b, 2), vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_tile_accumulate_adds_into_destination() {
        // 4x4, multiply the top-right tile of A by the bottom-left tile of B.
        let a: Vec<f32> = (0..16).map(|x| x as f32).collect();
        let b: Vec<f32> = (0..16).map(|x| (x % 3) as f32).collect();
        let mut c1 = vec![1.0f32; 16];
        let mut c2 = vec![1.0f32; 16];
        let ab = Block::new(0, 2, 2);
        let bb = Block::new(2, 0, 2);
        let dst = Block::new(2, 2, 2);
        tile_accumulate_ijk(&a, ab, &b, bb, &mut c1, dst, 4);
        tile_accumulate_ikj(&a, ab, &b, bb, &mut c2, dst, 4);
        assert_eq!(c1, c2);
        // A[0..2, 2..4] = [[2,3],[6,7]], B[2..4, 0..2] = [[2,0],[0,1]]
        assert_eq!(c1[2 * 4 + 2], 1.0 + 4.0);
        assert_eq!(c1[2 * 4 + 3], 1.0 + 3.0);
        assert_eq!(c1[3 * 4 + 2], 1.0 + 12.0);
        assert_eq!(c1[3 * 4 + 3], 1.0 + 7.0);
        assert_eq!(c1[0], 1.0);
    }

    #[test]
    fn test_transpose_and_diag() {
        let a = [1.0f64, 2.0, 3.0, 4.0];
        assert_eq!(transpose(&a, 2), vec![1.0, 3.0, 2.0, 4.0]);
        assert_eq!(diag(&a, 2), vec![1.0, 4.0]);
    }
}
