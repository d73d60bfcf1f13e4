//! `jb-linalg` - The numeric kernels benchmarked by jacobench.
//!
//! - [`multiply`]: block-partitioned matrix product
//! - [`decompose`]: classical Jacobi eigen decomposition with global pivoting
//!
//! Both are written against [`jb_tensor::ComputeBackend`] and take the
//! backend through an explicit [`jb_tensor::ExecutionContext`].

pub mod config;
pub mod error;
pub mod jacobi;
pub mod multiplier;
pub mod symmetry;

pub use config::SolverConfig;
pub use error::{LinalgError, Result};
pub use jacobi::{decompose, EigenResult, Pivot, RotationPlan};
pub use multiplier::{multiply, tile_count, verify_blocked};
pub use symmetry::{check_symmetric, symmetrize};
