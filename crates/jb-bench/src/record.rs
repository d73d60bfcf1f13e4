use std::time::Duration;

/// Timings for one matrix size.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    backend: String,
    size: usize,
    multiply_time: Duration,
    decompose_time: Duration,
    total_time: Duration,
    iterations: usize,
    converged: bool,
}

impl BenchmarkRecord {
    pub fn new(
        backend: impl Into<String>,
        size: usize,
        multiply_time: Duration,
        decompose_time: Duration,
        iterations: usize,
        converged: bool,
    ) -> Self {
        Self {
            backend: backend.into(),
            size,
            multiply_time,
            decompose_time,
            total_time: multiply_time + decompose_time,
            iterations,
            converged,
        }
    }

    /// Name of the backend the record was measured on.
    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// Matrix dimension n.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn multiply_time(&self) -> Duration {
        self.multiply_time
    }

    pub fn decompose_time(&self) -> Duration {
        self.decompose_time
    }

    /// Sum of both stage durations.
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Jacobi rotations applied during the decompose stage.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the decompose stage met its tolerance within budget.
    pub fn converged(&self) -> bool {
        self.converged
    }
}
