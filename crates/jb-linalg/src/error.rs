use jb_tensor::TensorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinalgError {
    #[error("tensor error: {0}")]
    Tensor(#[from] TensorError),
    #[error("dimension mismatch: block size {block_size} does not evenly divide matrix dimension {n}")]
    InvalidBlockSize { n: usize, block_size: usize },
    #[error("matrix is not symmetric: |A[{row},{col}] - A[{col},{row}]| = {deviation:e}")]
    NotSymmetric {
        row: usize,
        col: usize,
        deviation: f64,
    },
    #[error("numerical degeneracy: non-finite value {value} at ({row}, {col})")]
    NumericalDegeneracy { row: usize, col: usize, value: f64 },
    #[error("invalid tolerance {0}: must be finite and positive")]
    InvalidTolerance(f64),
}

impl LinalgError {
    /// Returns true for every flavour of dimension mismatch, whichever layer raised it.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            LinalgError::InvalidBlockSize { .. }
                | LinalgError::Tensor(TensorError::DimensionMismatch(_))
        )
    }

    /// Returns true if an operand was resident on the wrong execution target.
    pub fn is_device_mismatch(&self) -> bool {
        matches!(self, LinalgError::Tensor(TensorError::DeviceMismatch { .. }))
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;
