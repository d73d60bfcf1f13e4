//! `jb-tensor` - Square matrices with pluggable numeric backends for jacobench.
//!
//! This crate provides:
//! - A square, row-major `Matrix` tagged with precision and residency
//! - `Block` index ranges and borrowed `BlockView` tiles
//! - A `ComputeBackend` trait describing the numeric capability set
//! - `ArrayBackend` (plain f64), `TensorBackend` (f32 host) and
//!   `DeviceBackend` (f32 accelerator) implementations
//! - An `ExecutionContext` that carries the active backend into every operation

pub mod accel;
pub mod array;
pub mod backend;
pub mod block;
pub mod context;
pub mod device;
pub mod dtype;
pub mod error;
mod kernels;
pub mod matrix;
pub mod storage;

// Re-export primary types at the crate root for convenience.
pub use accel::{DeviceBackend, TensorBackend};
pub use array::ArrayBackend;
pub use backend::ComputeBackend;
pub use block::{Block, BlockView};
pub use context::{BackendKind, ExecutionContext};
pub use device::Device;
pub use dtype::DType;
pub use error::{Result, TensorError};
pub use matrix::Matrix;
pub use storage::Storage;
