use std::fmt;

/// Execution target a matrix is resident on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    /// Host memory.
    Host,
    /// Accelerator memory, identified by device ordinal.
    Accelerator(usize),
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Host => write!(f, "host"),
            Device::Accelerator(ordinal) => write!(f, "accel:{}", ordinal),
        }
    }
}
