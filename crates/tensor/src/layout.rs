//! Row-major layout helpers.
//!
//! Flat positions in a [`crate::Dense`] buffer are row-major: the last axis
//! varies fastest. Every consumer that maps a flat position back to an axis
//! goes through these functions so the mapping stays in one place.

use crate::TensorError;

/// Number of elements described by `shape`. A rank-0 shape holds one element.
#[must_use]
pub fn element_count(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Row-major strides, in elements.
#[must_use]
pub fn strides(shape: &[usize]) -> Vec<usize> {
    let mut out = vec![1; shape.len()];
    for axis in (0..shape.len().saturating_sub(1)).rev() {
        out[axis] = out[axis + 1] * shape[axis + 1];
    }
    out
}

/// Flat row-major position of `index` within `shape`.
///
/// # Errors
///
/// Returns [`TensorError::IndexOutOfBounds`] if `index` has the wrong rank or
/// any coordinate exceeds its axis.
pub fn flat_index(shape: &[usize], index: &[usize]) -> Result<usize, TensorError> {
    if index.len() != shape.len() || index.iter().zip(shape).any(|(&i, &n)| i >= n) {
        return Err(TensorError::IndexOutOfBounds {
            index: index.to_vec(),
            shape: shape.to_vec(),
        });
    }
    Ok(index
        .iter()
        .zip(strides(shape))
        .map(|(&i, stride)| i * stride)
        .sum())
}
