use crate::device::Device;
use crate::dtype::DType;
use crate::error::{Result, TensorError};
use crate::storage::Storage;

/// A square, row-major matrix.
///
/// Every `Matrix` is n×n by construction. It records the precision of its
/// storage and the execution target it is resident on; backends refuse
/// matrices that do not match their own target (see
/// [`ComputeBackend::ensure_resident`](crate::ComputeBackend::ensure_resident)).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    storage: Storage,
    n: usize,
    device: Device,
}

impl Matrix {
    /// Create a host-resident f64 matrix from row-major data.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `data.len() != n * n`.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        Self::from_storage(n, Storage::F64(data), Device::Host)
    }

    /// Create a host-resident f64 matrix from a list of rows.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if any row length differs from the row count.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(TensorError::DimensionMismatch(format!(
                    "row {} has {} columns, expected {} for a square matrix",
                    i,
                    row.len(),
                    n
                )));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(n, data)
    }

    /// Wrap existing storage.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the storage does not hold n×n elements.
    pub fn from_storage(n: usize, storage: Storage, device: Device) -> Result<Self> {
        if storage.len() != n * n {
            return Err(TensorError::DimensionMismatch(format!(
                "storage holds {} elements, expected {}x{}={}",
                storage.len(),
                n,
                n,
                n * n
            )));
        }
        Ok(Matrix { storage, n, device })
    }

    /// Create a zero-filled matrix.
    pub fn zeros(n: usize, dtype: DType, device: Device) -> Self {
        Matrix {
            storage: Storage::zeros(dtype, n * n),
            n,
            device,
        }
    }

    /// Create a matrix by evaluating `f(i, j)` in row-major order.
    pub fn from_fn(
        n: usize,
        dtype: DType,
        device: Device,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Self {
        let mut m = Self::zeros(n, dtype, device);
        for i in 0..n {
            for j in 0..n {
                m.set(i, j, f(i, j));
            }
        }
        m
    }

    /// Create an identity matrix.
    pub fn identity(n: usize, dtype: DType, device: Device) -> Self {
        let mut m = Self::zeros(n, dtype, device);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Dimension n of this n×n matrix.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the storage precision.
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Returns the execution target this matrix is resident on.
    pub fn device(&self) -> Device {
        self.device
    }

    /// Returns the underlying storage reference.
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Returns the underlying storage mutably.
    pub fn storage_mut(&mut self) -> &mut Storage {
        &mut self.storage
    }

    /// Reads element (i, j), widened to f64.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({}, {}) out of range for n={}", i, j, self.n);
        self.storage.get(i * self.n + j)
    }

    /// Writes element (i, j), narrowed to the storage precision.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < self.n && j < self.n, "index ({}, {}) out of range for n={}", i, j, self.n);
        self.storage.set(i * self.n + j, value);
    }

    /// Copies the matrix into a new precision and residency.
    pub fn to(&self, dtype: DType, device: Device) -> Matrix {
        Matrix {
            storage: self.storage.convert(dtype),
            n: self.n,
            device,
        }
    }

    /// Copies all elements out as row-major f64.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.storage.to_f64_vec()
    }

    /// Returns row `i` as f64.
    pub fn row(&self, i: usize) -> Vec<f64> {
        (0..self.n).map(|j| self.get(i, j)).collect()
    }

    /// Returns column `j` as f64.
    pub fn column(&self, j: usize) -> Vec<f64> {
        (0..self.n).map(|i| self.get(i, j)).collect()
    }

    /// Checks that `other` has the same dimension as `self`.
    pub fn ensure_same_size(&self, other: &Matrix) -> Result<()> {
        if self.n != other.n {
            return Err(TensorError::DimensionMismatch(format!(
                "matrices differ in size: {}x{} vs {}x{}",
                self.n, self.n, other.n, other.n
            )));
        }
        Ok(())
    }
}
