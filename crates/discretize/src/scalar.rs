use crate::{BinAxis, BinError};
use tracing::debug;

/// Equal-width binner over a single continuous dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarBinner {
    axis: BinAxis,
}

impl ScalarBinner {
    /// Splits `[low, high)` into `interval_count` bins.
    ///
    /// # Errors
    ///
    /// Returns [`BinError::InvalidAxis`] for a zero interval count, non-finite
    /// bounds, or `high <= low`.
    pub fn new(interval_count: usize, high: f32, low: f32) -> Result<Self, BinError> {
        let axis = BinAxis::new(0, interval_count, low, high)?;
        debug!(interval_count, low, high, width = axis.width(), "built scalar binner");
        Ok(Self { axis })
    }

    /// Index of the bin containing `value`.
    ///
    /// # Errors
    ///
    /// Fails with [`BinError::OutOfRangeLow`] below `low` and
    /// [`BinError::OutOfRangeHigh`] at or above `high`.
    pub fn bin(&self, value: f32) -> Result<usize, BinError> {
        self.axis.bin(value)
    }

    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.axis.interval_count()
    }

    #[must_use]
    pub fn low(&self) -> f32 {
        self.axis.low()
    }

    #[must_use]
    pub fn high(&self) -> f32 {
        self.axis.high()
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.axis.width()
    }

    #[must_use]
    pub fn boundaries(&self) -> &[f32] {
        self.axis.boundaries()
    }
}
