use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::accel::{DeviceBackend, TensorBackend};
use crate::array::ArrayBackend;
use crate::backend::ComputeBackend;
use crate::device::Device;
use crate::dtype::DType;
use crate::error::{Result, TensorError};
use crate::matrix::Matrix;

/// Selects one of the built-in backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    /// Plain f64 array arithmetic on the host.
    #[default]
    Array,
    /// f32 tensor kernels on the host.
    TensorCpu,
    /// f32 tensor kernels on accelerator 0.
    TensorDevice,
}

impl BackendKind {
    /// All built-in backends, in sweep order.
    pub const ALL: [BackendKind; 3] = [
        BackendKind::Array,
        BackendKind::TensorCpu,
        BackendKind::TensorDevice,
    ];

    /// Name accepted by `FromStr` and reported by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Array => "array",
            BackendKind::TensorCpu => "tensor-cpu",
            BackendKind::TensorDevice => "tensor-device",
        }
    }

    /// Instantiate the backend.
    pub fn build(&self) -> Arc<dyn ComputeBackend> {
        match self {
            BackendKind::Array => Arc::new(ArrayBackend::new()),
            BackendKind::TensorCpu => Arc::new(TensorBackend::new()),
            BackendKind::TensorDevice => Arc::new(DeviceBackend::new(0)),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(BackendKind::Array),
            "tensor-cpu" => Ok(BackendKind::TensorCpu),
            "tensor-device" => Ok(BackendKind::TensorDevice),
            other => Err(TensorError::InvalidBackend(other.to_string())),
        }
    }
}

/// Execution context passed to every multiplier and solver operation.
///
/// Carries the active backend and, through it, the execution target and
/// precision every operand must match.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    backend: Arc<dyn ComputeBackend>,
}

impl ExecutionContext {
    pub fn new(backend: Arc<dyn ComputeBackend>) -> Self {
        Self { backend }
    }

    /// Build a context around one of the built-in backends.
    pub fn from_kind(kind: BackendKind) -> Self {
        Self::new(kind.build())
    }

    pub fn backend(&self) -> &dyn ComputeBackend {
        self.backend.as_ref()
    }

    pub fn name(&self) -> &str {
        self.backend.name()
    }

    pub fn device(&self) -> Device {
        self.backend.device()
    }

    pub fn dtype(&self) -> DType {
        self.backend.dtype()
    }

    /// Copy a matrix onto the context's execution target.
    pub fn upload(&self, m: &Matrix) -> Matrix {
        self.backend.upload(m)
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::from_kind(BackendKind::default())
    }
}
