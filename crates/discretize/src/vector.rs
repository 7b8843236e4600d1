use crate::axis::interval_count_from_f32;
use crate::config::{AxisConfig, BinnerConfig};
use crate::{BinAxis, BinError};
use tensor::Dense;
use tracing::{debug, trace};

/// Equal-width binner with independent bounds per dimension.
///
/// A value sequence handed to [`VectorBinner::bin`] is one point: flat
/// position `d` (row-major) is classified against dimension `d`'s own
/// boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorBinner {
    axes: Vec<BinAxis>,
    widths: Vec<f32>,
}

impl VectorBinner {
    /// Builds a binner from per-dimension interval counts and bounds.
    ///
    /// All three buffers are coerced to `f32` first, so integer-typed counts
    /// and bounds are accepted as long as they convert exactly.
    ///
    /// # Errors
    ///
    /// [`BinError::TypeCoercionFailure`] if a buffer cannot be coerced
    /// losslessly, [`BinError::DimensionMismatch`] if the buffers disagree on
    /// length, [`BinError::InvalidAxis`] for a bad dimension.
    pub fn new(intervals: &Dense, low: &Dense, high: &Dense) -> Result<Self, BinError> {
        let intervals = intervals.to_f32_vec()?;
        let low = low.to_f32_vec()?;
        let high = high.to_f32_vec()?;
        let counts = intervals
            .iter()
            .enumerate()
            .map(|(dim, &count)| interval_count_from_f32(dim, count))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slices(&counts, &low, &high)
    }

    /// Builds a binner from already-typed per-dimension settings.
    ///
    /// # Errors
    ///
    /// Same as [`VectorBinner::new`], minus coercion.
    pub fn from_slices(intervals: &[usize], low: &[f32], high: &[f32]) -> Result<Self, BinError> {
        for len in [low.len(), high.len()] {
            if len != intervals.len() {
                return Err(BinError::DimensionMismatch {
                    expected: intervals.len(),
                    actual: len,
                });
            }
        }
        if intervals.is_empty() {
            return Err(BinError::NoDimensions);
        }

        let axes = intervals
            .iter()
            .zip(low.iter().zip(high))
            .enumerate()
            .map(|(dim, (&count, (&lo, &hi)))| BinAxis::new(dim, count, lo, hi))
            .collect::<Result<Vec<_>, _>>()?;
        let widths = axes.iter().map(BinAxis::width).collect();
        debug!(dims = axes.len(), ?intervals, "built vector binner");
        Ok(Self { axes, widths })
    }

    /// Builds a binner from a parsed configuration.
    ///
    /// # Errors
    ///
    /// Same as [`VectorBinner::from_slices`].
    pub fn from_config(config: &BinnerConfig) -> Result<Self, BinError> {
        let intervals: Vec<usize> = config.axes.iter().map(|a| a.intervals).collect();
        let low: Vec<f32> = config.axes.iter().map(|a| a.low).collect();
        let high: Vec<f32> = config.axes.iter().map(|a| a.high).collect();
        Self::from_slices(&intervals, &low, &high)
    }

    /// Configuration that rebuilds this binner. Axes are unnamed.
    #[must_use]
    pub fn to_config(&self) -> BinnerConfig {
        BinnerConfig {
            axes: self
                .axes
                .iter()
                .map(|axis| AxisConfig {
                    name: None,
                    intervals: axis.interval_count(),
                    low: axis.low(),
                    high: axis.high(),
                })
                .collect(),
        }
    }

    /// Classifies one point given as a buffer of any numeric type. The result
    /// has the shape of `values` and holds `u64` bin indices.
    ///
    /// # Errors
    ///
    /// [`BinError::DimensionMismatch`] when the element count differs from
    /// the number of dimensions (checked before anything else), a coercion
    /// failure, or the first out-of-range dimension.
    pub fn bin(&self, values: &Dense) -> Result<Dense, BinError> {
        self.check_arity(values.len())?;
        let indices = self.bin_slice(&values.to_f32_vec()?)?;
        let indices: Vec<u64> = indices.into_iter().map(|i| i as u64).collect();
        Ok(Dense::vector(indices).reshape(values.shape().to_vec())?)
    }

    /// Classifies one point given as plain `f32` coordinates.
    ///
    /// # Errors
    ///
    /// Same as [`VectorBinner::bin`], minus coercion.
    pub fn bin_slice(&self, values: &[f32]) -> Result<Vec<usize>, BinError> {
        self.check_arity(values.len())?;
        let indices = self
            .axes
            .iter()
            .zip(values)
            .map(|(axis, &value)| axis.bin(value))
            .collect::<Result<Vec<_>, _>>()?;
        trace!(?values, ?indices, "binned point");
        Ok(indices)
    }

    fn check_arity(&self, actual: usize) -> Result<(), BinError> {
        if actual == self.axes.len() {
            Ok(())
        } else {
            Err(BinError::DimensionMismatch {
                expected: self.axes.len(),
                actual,
            })
        }
    }

    /// Bin width of each dimension.
    #[must_use]
    pub fn widths(&self) -> &[f32] {
        &self.widths
    }

    /// Boundary sequence of each dimension, `interval_count + 1` edges apiece.
    #[must_use]
    pub fn bounds(&self) -> Vec<&[f32]> {
        self.axes.iter().map(BinAxis::boundaries).collect()
    }

    #[must_use]
    pub fn interval_counts(&self) -> Vec<usize> {
        self.axes.iter().map(BinAxis::interval_count).collect()
    }

    #[must_use]
    pub fn dims(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn axes(&self) -> &[BinAxis] {
        &self.axes
    }
}
