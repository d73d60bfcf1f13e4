//! `jb-bench` - Timing harness for jacobench.
//!
//! Sweeps a list of matrix sizes, timing the blocked multiply and the Jacobi
//! decomposition of its result on one backend, and returns one
//! [`BenchmarkRecord`] per size. Reporting and persistence are left to the
//! caller.

pub mod config;
pub mod error;
pub mod harness;
pub mod record;

pub use config::{BenchConfig, DEFAULT_SIZES};
pub use error::{BenchError, Result};
pub use harness::{run, run_with_context};
pub use record::BenchmarkRecord;
