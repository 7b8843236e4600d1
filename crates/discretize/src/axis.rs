use crate::BinError;

/// Largest supported interval count. Past 2^24 the bin indices themselves
/// stop being exact in `f32`.
pub const MAX_INTERVALS: usize = 1 << 24;

/// One dimension of an equal-width binner.
///
/// `[low, high)` is split into `interval_count` bins of equal `width`. The
/// boundaries are built by repeated addition from `low`, so the last one may
/// differ from `high` by rounding; classification always treats `high` itself
/// as the exclusive upper bound.
#[derive(Debug, Clone, PartialEq)]
pub struct BinAxis {
    dim: usize,
    interval_count: usize,
    low: f32,
    high: f32,
    width: f32,
    boundaries: Vec<f32>,
}

impl BinAxis {
    /// Builds the axis at position `dim`.
    ///
    /// # Errors
    ///
    /// Returns [`BinError::InvalidAxis`] if `interval_count` is zero or above
    /// [`MAX_INTERVALS`], a bound is not finite, `high <= low`, or the
    /// boundaries cannot be made strictly increasing in `f32`.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(dim: usize, interval_count: usize, low: f32, high: f32) -> Result<Self, BinError> {
        let invalid = |reason: String| BinError::InvalidAxis { dim, reason };

        if interval_count == 0 {
            return Err(invalid("interval count must be positive".to_string()));
        }
        if interval_count > MAX_INTERVALS {
            return Err(invalid(format!(
                "interval count {interval_count} exceeds the maximum of {MAX_INTERVALS}"
            )));
        }
        if !low.is_finite() || !high.is_finite() {
            return Err(invalid(format!("bounds must be finite, got [{low}, {high})")));
        }
        if high <= low {
            return Err(invalid(format!("high {high} must be greater than low {low}")));
        }

        let width = (high - low) / interval_count as f32;
        if !width.is_finite() || width <= 0.0 {
            return Err(invalid(format!("bin width {width} is not a positive finite number")));
        }

        let mut boundaries = Vec::with_capacity(interval_count + 1);
        let mut edge = low;
        boundaries.push(edge);
        for _ in 0..interval_count {
            let next = edge + width;
            if next <= edge {
                return Err(invalid(format!("width {width} vanishes next to edge {edge}")));
            }
            edge = next;
            boundaries.push(edge);
        }

        Ok(Self {
            dim,
            interval_count,
            low,
            high,
            width,
            boundaries,
        })
    }

    /// Bin index of `value`, in `[0, interval_count - 1]`.
    ///
    /// # Errors
    ///
    /// [`BinError::OutOfRangeLow`] below `low`, [`BinError::OutOfRangeHigh`]
    /// at or above `high`, [`BinError::NotANumber`] for NaN.
    pub fn bin(&self, value: f32) -> Result<usize, BinError> {
        if value.is_nan() {
            return Err(BinError::NotANumber { dim: self.dim });
        }
        if value < self.low {
            return Err(BinError::OutOfRangeLow {
                dim: self.dim,
                value,
                low: self.low,
                high: self.high,
            });
        }
        if value >= self.high {
            return Err(BinError::OutOfRangeHigh {
                dim: self.dim,
                value,
                low: self.low,
                high: self.high,
            });
        }
        // boundaries[0] == low <= value, so at least one edge passes.
        let passed = self.boundaries.partition_point(|&edge| edge <= value);
        Ok((passed - 1).min(self.interval_count - 1))
    }

    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.interval_count
    }

    #[must_use]
    pub fn low(&self) -> f32 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f32 {
        self.high
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn boundaries(&self) -> &[f32] {
        &self.boundaries
    }
}

/// Interprets a coerced `f32` as a bin count.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn interval_count_from_f32(dim: usize, count: f32) -> Result<usize, BinError> {
    if !count.is_finite() || count < 1.0 || count.fract() != 0.0 {
        return Err(BinError::InvalidAxis {
            dim,
            reason: format!("interval count {count} is not a positive integer"),
        });
    }
    if count > MAX_INTERVALS as f32 {
        return Err(BinError::InvalidAxis {
            dim,
            reason: format!("interval count {count} exceeds the maximum of {MAX_INTERVALS}"),
        });
    }
    Ok(count as usize)
}
