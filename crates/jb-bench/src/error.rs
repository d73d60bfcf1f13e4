use jb_linalg::LinalgError;
use jb_tensor::TensorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
    #[error("tensor error: {0}")]
    Tensor(#[from] TensorError),
    #[error("invalid matrix size {0}: sizes must be positive")]
    InvalidSize(usize),
}

pub type Result<T> = std::result::Result<T, BenchError>;
