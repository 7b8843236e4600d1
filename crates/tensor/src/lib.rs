#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Tensor
//!
//! Fixed-rank numeric buffers for the tabula workspace.
//!
//! A [`Dense`] buffer is a run of little-endian element bytes plus the shape
//! and [`DType`] that describe them. Buffers are cheap to clone (the bytes are
//! shared) and never mutate after construction.
//!
//! Everything downstream works in `f32`. Getting there is one explicit step,
//! [`Dense::to_f32`], which either converts every element exactly or fails
//! with [`TensorError::LossyCoercion`] naming the first element that would
//! lose information.
//!
//! ```rust
//! use tensor::{DType, Dense};
//!
//! let counts = Dense::vector(vec![4_i64, 8]);
//! let floats = counts.to_f32().unwrap();
//! assert_eq!(floats.dtype(), DType::F32);
//! assert_eq!(floats.to_vec::<f32>().unwrap(), vec![4.0, 8.0]);
//! ```

use std::sync::Arc;
use thiserror::Error;
use tracing::trace;

pub mod dtype;
pub mod layout;

pub use dtype::{DType, Element};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    #[error("buffer shape mismatch: {0}")]
    ShapeMismatch(&'static str),
    #[error("element {index} ({value}: {from}) has no exact f32 representation")]
    LossyCoercion {
        index: usize,
        from: DType,
        value: String,
    },
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },
}

#[derive(Clone, Debug)]
pub struct Dense {
    data: Arc<[u8]>,
    shape: Vec<usize>,
    dtype: DType,
}

impl Dense {
    /// Wraps raw element bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] if the byte length does not match
    /// the product of `shape` times the element size of `dtype`.
    pub fn from_bytes(
        data: Arc<[u8]>,
        shape: Vec<usize>,
        dtype: DType,
    ) -> Result<Self, TensorError> {
        let expected_bytes = layout::element_count(&shape) * dtype.size_in_bytes();
        if data.len() != expected_bytes {
            return Err(TensorError::ShapeMismatch(
                "buffer data length does not match product of shape dimensions and element size",
            ));
        }
        Ok(Self { data, shape, dtype })
    }

    /// Builds a buffer of `shape` from typed elements.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] if `data.len()` differs from the
    /// element count of `shape`.
    pub fn from_vec<T: Element>(shape: Vec<usize>, data: Vec<T>) -> Result<Self, TensorError> {
        if layout::element_count(&shape) != data.len() {
            return Err(TensorError::ShapeMismatch(
                "element count does not match product of shape dimensions",
            ));
        }
        Ok(Self::from_elements(shape, &data))
    }

    /// Rank-1 buffer holding `data`.
    #[must_use]
    pub fn vector<T: Element>(data: Vec<T>) -> Self {
        Self::from_elements(vec![data.len()], &data)
    }

    /// Rank-0 buffer holding a single element.
    #[must_use]
    pub fn scalar<T: Element>(value: T) -> Self {
        Self::from_elements(Vec::new(), &[value])
    }

    fn from_elements<T: Element>(shape: Vec<usize>, data: &[T]) -> Self {
        let bytes: Arc<[u8]> = bytemuck::cast_slice(data).to_vec().into();
        Self {
            data: bytes,
            shape,
            dtype: T::DTYPE,
        }
    }

    #[must_use]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        layout::element_count(&self.shape)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Row-major flat position of a multi-index.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::IndexOutOfBounds`] for a malformed index.
    pub fn index_of(&self, index: &[usize]) -> Result<usize, TensorError> {
        layout::flat_index(&self.shape, index)
    }

    /// Same elements under a new shape.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] if the element counts differ.
    pub fn reshape(&self, shape: Vec<usize>) -> Result<Self, TensorError> {
        if layout::element_count(&shape) != self.len() {
            return Err(TensorError::ShapeMismatch("reshape must preserve element count"));
        }
        Ok(Self {
            data: Arc::clone(&self.data),
            shape,
            dtype: self.dtype,
        })
    }

    /// Element at flat position `i`, if the buffer holds `T` and `i` is in range.
    #[must_use]
    pub fn get<T: Element>(&self, i: usize) -> Option<T> {
        (T::DTYPE == self.dtype && i < self.len()).then(|| self.read(i))
    }

    /// All elements in row-major order, if the buffer holds `T`.
    #[must_use]
    pub fn to_vec<T: Element>(&self) -> Option<Vec<T>> {
        (T::DTYPE == self.dtype).then(|| (0..self.len()).map(|i| self.read(i)).collect())
    }

    fn read<T: Element>(&self, i: usize) -> T {
        let size = std::mem::size_of::<T>();
        bytemuck::pod_read_unaligned(&self.data[i * size..(i + 1) * size])
    }

    /// Converts every element to `f32`, keeping the shape.
    ///
    /// An `f32` buffer is returned as-is. Any other buffer is converted element
    /// by element and the conversion fails on the first element without an
    /// exact `f32` representation.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::LossyCoercion`] naming the first lossy element.
    pub fn to_f32(&self) -> Result<Self, TensorError> {
        let converted = match self.dtype {
            DType::F32 => return Ok(self.clone()),
            DType::F64 => self.narrow::<f64>(),
            DType::I8 => self.narrow::<i8>(),
            DType::I16 => self.narrow::<i16>(),
            DType::I32 => self.narrow::<i32>(),
            DType::I64 => self.narrow::<i64>(),
            DType::U8 => self.narrow::<u8>(),
            DType::U16 => self.narrow::<u16>(),
            DType::U32 => self.narrow::<u32>(),
            DType::U64 => self.narrow::<u64>(),
        }?;
        trace!(from = %self.dtype, len = converted.len(), "coerced buffer to f32");
        Ok(Self::from_elements(self.shape.clone(), &converted))
    }

    /// Row-major `f32` elements after [`Dense::to_f32`].
    ///
    /// # Errors
    ///
    /// Same as [`Dense::to_f32`].
    pub fn to_f32_vec(&self) -> Result<Vec<f32>, TensorError> {
        let floats = self.to_f32()?;
        Ok((0..floats.len()).map(|i| floats.read::<f32>(i)).collect())
    }

    fn narrow<T: Element>(&self) -> Result<Vec<f32>, TensorError> {
        (0..self.len())
            .map(|index| {
                let value: T = self.read(index);
                value.to_f32_exact().ok_or_else(|| TensorError::LossyCoercion {
                    index,
                    from: self.dtype,
                    value: value.to_string(),
                })
            })
            .collect()
    }
}

impl PartialEq for Dense {
    fn eq(&self, other: &Self) -> bool {
        self.dtype == other.dtype && self.shape == other.shape && self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_shape_fails() {
        let result = Dense::from_bytes(vec![0u8; 12].into(), vec![4], DType::F32);
        assert!(
            matches!(result, Err(TensorError::ShapeMismatch(_))),
            "Expected ShapeMismatch error, got {result:?}"
        );
    }

    #[test]
    fn correct_shape_succeeds() {
        let result = Dense::from_bytes(vec![0u8; 16].into(), vec![2, 2], DType::F32);
        assert!(result.is_ok(), "Expected Ok, got {result:?}");
        let result = Dense::from_bytes(vec![0u8; 16].into(), vec![2], DType::F64);
        assert!(result.is_ok(), "Expected Ok for 2x f64, got {result:?}");
    }

    #[test]
    fn from_vec_checks_element_count() {
        let result = Dense::from_vec(vec![2, 2], vec![1.0_f32, 2.0, 3.0]);
        assert!(matches!(result, Err(TensorError::ShapeMismatch(_))));
    }

    #[test]
    fn typed_reads_require_matching_dtype() {
        let t = Dense::vector(vec![1_i32, 2, 3]);
        assert_eq!(t.get::<i32>(1), Some(2));
        assert_eq!(t.get::<i32>(3), None);
        assert_eq!(t.get::<f32>(0), None);
        assert!(t.to_vec::<u32>().is_none());
    }

    #[test]
    fn f32_coercion_is_identity() {
        let t = Dense::vector(vec![0.1_f32, f32::NAN]);
        let c = t.to_f32().unwrap();
        assert_eq!(c.bytes(), t.bytes());
    }

    #[test]
    fn double_nan_coerces_to_nan() {
        let c = Dense::vector(vec![1.0_f64, f64::NAN]).to_f32().unwrap();
        assert_eq!(c.get::<f32>(0), Some(1.0));
        assert!(c.get::<f32>(1).is_some_and(f32::is_nan));
    }

    #[test]
    fn coercion_reports_first_lossy_element() {
        let t = Dense::vector(vec![0.5_f64, 0.1, 0.3]);
        match t.to_f32() {
            Err(TensorError::LossyCoercion { index, from, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(from, DType::F64);
            }
            other => panic!("expected LossyCoercion, got {other:?}"),
        }
    }

    #[test]
    fn reshape_shares_bytes() {
        let t = Dense::from_vec(vec![2, 3], (0..6).map(|i| i as f32).collect()).unwrap();
        let r = t.reshape(vec![3, 2]).unwrap();
        assert_eq!(r.shape(), &[3, 2]);
        assert_eq!(r.to_vec::<f32>(), t.to_vec::<f32>());
        assert!(t.reshape(vec![4]).is_err());
    }

    #[test]
    fn scalar_is_rank_zero() {
        let s = Dense::scalar(7_u8);
        assert_eq!(s.rank(), 0);
        assert_eq!(s.len(), 1);
        assert_eq!(s.to_f32_vec().unwrap(), vec![7.0]);
    }
}
