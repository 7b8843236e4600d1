use crate::StateError;
use discretize::VectorBinner;
use tracing::debug;

/// Discrete state space induced by a [`VectorBinner`].
///
/// A point's per-dimension bins are packed into one key in mixed radix,
/// dimension 0 most significant, so keys are dense in `[0, len)`.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace {
    binner: VectorBinner,
    radices: Vec<usize>,
    strides: Vec<usize>,
    len: usize,
}

impl StateSpace {
    /// # Errors
    ///
    /// [`StateError::Overflow`] if the product of interval counts does not fit
    /// in `usize`.
    pub fn new(binner: VectorBinner) -> Result<Self, StateError> {
        let radices = binner.interval_counts();
        let len = radices
            .iter()
            .try_fold(1_usize, |acc, &r| acc.checked_mul(r))
            .ok_or_else(|| StateError::Overflow(radices.clone()))?;
        // Every stride is a partial product of `len`, so none can overflow.
        let strides = tensor::layout::strides(&radices);
        debug!(states = len, ?radices, "built state space");
        Ok(Self {
            binner,
            radices,
            strides,
            len,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn binner(&self) -> &VectorBinner {
        &self.binner
    }

    /// Packs per-dimension bins into a state key.
    ///
    /// # Errors
    ///
    /// [`StateError::ArityMismatch`] for the wrong number of bins,
    /// [`StateError::BinOutOfRange`] for a bin past its dimension's count.
    pub fn encode(&self, bins: &[usize]) -> Result<usize, StateError> {
        if bins.len() != self.radices.len() {
            return Err(StateError::ArityMismatch {
                expected: self.radices.len(),
                actual: bins.len(),
            });
        }
        let mut key = 0;
        let digits = bins.iter().zip(&self.radices).zip(&self.strides);
        for (dim, ((&bin, &count), &stride)) in digits.enumerate() {
            if bin >= count {
                return Err(StateError::BinOutOfRange { dim, bin, count });
            }
            key += bin * stride;
        }
        Ok(key)
    }

    /// Unpacks a state key into per-dimension bins.
    ///
    /// # Errors
    ///
    /// [`StateError::KeyOutOfRange`] if `key >= len`.
    pub fn decode(&self, key: usize) -> Result<Vec<usize>, StateError> {
        if key >= self.len {
            return Err(StateError::KeyOutOfRange { key, len: self.len });
        }
        Ok(self
            .radices
            .iter()
            .zip(&self.strides)
            .map(|(&count, &stride)| (key / stride) % count)
            .collect())
    }

    /// State key of a continuous point.
    ///
    /// # Errors
    ///
    /// [`StateError::Bin`] if the point cannot be binned.
    pub fn state_of(&self, point: &[f32]) -> Result<usize, StateError> {
        let bins = self.binner.bin_slice(point)?;
        self.encode(&bins)
    }
}
