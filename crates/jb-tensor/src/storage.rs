use crate::dtype::DType;
use crate::error::{Result, TensorError};

/// Contiguous, row-major element storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    /// 32-bit floating point storage.
    F32(Vec<f32>),
    /// 64-bit floating point storage.
    F64(Vec<f64>),
}

impl Storage {
    /// Number of elements in this storage.
    pub fn len(&self) -> usize {
        match self {
            Storage::F32(v) => v.len(),
            Storage::F64(v) => v.len(),
        }
    }

    /// Returns true if the storage contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the dtype of this storage.
    pub fn dtype(&self) -> DType {
        match self {
            Storage::F32(_) => DType::F32,
            Storage::F64(_) => DType::F64,
        }
    }

    /// Create zero-filled storage for the given dtype and element count.
    pub fn zeros(dtype: DType, n: usize) -> Self {
        match dtype {
            DType::F32 => Storage::F32(vec![0.0; n]),
            DType::F64 => Storage::F64(vec![0.0; n]),
        }
    }

    /// Returns the data as an f32 slice.
    ///
    /// # Errors
    /// Returns `DTypeMismatch` if the storage is not F32.
    pub fn as_f32_slice(&self) -> Result<&[f32]> {
        match self {
            Storage::F32(v) => Ok(v.as_slice()),
            other => Err(TensorError::DTypeMismatch {
                expected: DType::F32,
                got: other.dtype(),
            }),
        }
    }

    /// Returns the data as a mutable f32 slice.
    pub fn as_f32_slice_mut(&mut self) -> Result<&mut [f32]> {
        match self {
            Storage::F32(v) => Ok(v.as_mut_slice()),
            other => Err(TensorError::DTypeMismatch {
                expected: DType::F32,
                got: other.dtype(),
            }),
        }
    }

    /// Returns the data as an f64 slice.
    ///
    /// # Errors
    /// Returns `DTypeMismatch` if the storage is not F64.
    pub fn as_f64_slice(&self) -> Result<&[f64]> {
        match self {
            Storage::F64(v) => Ok(v.as_slice()),
            other => Err(TensorError::DTypeMismatch {
                expected: DType::F64,
                got: other.dtype(),
            }),
        }
    }

    /// Returns the data as a mutable f64 slice.
    pub fn as_f64_slice_mut(&mut self) -> Result<&mut [f64]> {
        match self {
            Storage::F64(v) => Ok(v.as_mut_slice()),
            other => Err(TensorError::DTypeMismatch {
                expected: DType::F64,
                got: other.dtype(),
            }),
        }
    }

    /// Reads element `idx`, widened to f64.
    ///
    /// # Panics
    /// Panics if `idx >= len()`.
    pub fn get(&self, idx: usize) -> f64 {
        match self {
            Storage::F32(v) => v[idx] as f64,
            Storage::F64(v) => v[idx],
        }
    }

    /// Writes element `idx`, narrowing to the storage precision.
    ///
    /// # Panics
    /// Panics if `idx >= len()`.
    pub fn set(&mut self, idx: usize, value: f64) {
        match self {
            Storage::F32(v) => v[idx] = value as f32,
            Storage::F64(v) => v[idx] = value,
        }
    }

    /// Converts the storage to another precision. Same-dtype conversion clones.
    pub fn convert(&self, dtype: DType) -> Storage {
        match (self, dtype) {
            (Storage::F32(v), DType::F32) => Storage::F32(v.clone()),
            (Storage::F64(v), DType::F64) => Storage::F64(v.clone()),
            (Storage::F32(v), DType::F64) => Storage::F64(v.iter().map(|&x| x as f64).collect()),
            (Storage::F64(v), DType::F32) => Storage::F32(v.iter().map(|&x| x as f32).collect()),
        }
    }

    /// Copies all elements out as f64.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Storage::F32(v) => v.iter().map(|&x| x as f64).collect(),
            Storage::F64(v) => v.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let s = Storage::zeros(DType::F32, 5);
        assert_eq!(s.len(), 5);
        assert_eq!(s.dtype(), DType::F32);
        assert_eq!(s.as_f32_slice().unwrap(), &[0.0; 5]);

        let d = Storage::zeros(DType::F64, 3);
        assert_eq!(d.as_f64_slice().unwrap(), &[0.0; 3]);
    }

    #[test]
    fn test_wrong_slice_dtype() {
        let s = Storage::F64(vec![1.0]);
        assert!(matches!(
            s.as_f32_slice(),
            Err(TensorError::DTypeMismatch {
                expected: DType::F32,
                got: DType::F64
            })
        ));
        let mut t = Storage::F32(vec![1.0]);
        assert!(t.as_f64_slice_mut().is_err());
    }

    #[test]
    fn test_get_set_narrowing() {
        let mut s = Storage::zeros(DType::F32, 2);
        s.set(1, 0.1);
        assert_eq!(s.get(1), 0.1f32 as f64);
    }

    #[test]
    fn test_convert() {
        let s = Storage::F64(vec![1.5, -2.0]);
        let c = s.convert(DType::F32);
        assert_eq!(c.as_f32_slice().unwrap(), &[1.5, -2.0]);
        assert_eq!(c.convert(DType::F64), s);
    }

    #[test]
    fn test_mut_slice() {
        let mut s = Storage::F64(vec![1.0, 2.0]);
        s.as_f64_slice_mut().unwrap()[0] = 42.0;
        assert_eq!(s.to_f64_vec(), vec![42.0, 2.0]);
        assert!(!s.is_empty());
    }
}
