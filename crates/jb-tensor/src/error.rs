use thiserror::Error;

use crate::device::Device;
use crate::dtype::DType;

#[derive(Error, Debug)]
pub enum TensorError {
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("device mismatch: {name} is on {got}, expected {expected}")]
    DeviceMismatch {
        name: String,
        expected: Device,
        got: Device,
    },
    #[error("dtype mismatch: expected {expected}, got {got}")]
    DTypeMismatch { expected: DType, got: DType },
    #[error("unknown backend: {0}")]
    InvalidBackend(String),
}

pub type Result<T> = std::result::Result<T, TensorError>;
