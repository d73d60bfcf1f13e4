//! Accelerated-tensor backends.
//!
//! Both backends compute in f32 with the cache-friendly i-k-j kernels. They
//! differ in where their matrices live: [`TensorBackend`] works on host
//! memory, [`DeviceBackend`] on a specific accelerator ordinal. Host data must
//! be moved onto the accelerator with [`ComputeBackend::upload`] before a
//! `DeviceBackend` will touch it.
//!
//! [`ComputeBackend::upload`]: crate::ComputeBackend::upload

mod device;
mod exec;
mod tensor;

pub use device::DeviceBackend;
pub use tensor::TensorBackend;
