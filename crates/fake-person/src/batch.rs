//! Batch size resolution.

use crate::error::BatchSizeError;

/// Smallest batch a bulk request produces.
pub const MIN_BATCH_SIZE: usize = 2;

/// Largest batch a bulk request produces.
pub const MAX_BATCH_SIZE: usize = 100;

/// How a requested batch size outside the allowed range is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Clamp to `[MIN_BATCH_SIZE, MAX_BATCH_SIZE]`; never fails.
    #[default]
    Clamping,
    /// Reject anything outside `[MIN_BATCH_SIZE, MAX_BATCH_SIZE]`.
    Strict,
}

impl BatchPolicy {
    /// Resolves a requested amount to the number of records to build.
    ///
    /// # Errors
    ///
    /// [`BatchPolicy::Strict`] returns [`BatchSizeError::OutOfRange`] when
    /// `requested` lies outside the allowed range.
    ///
    /// # Examples
    ///
    /// ```
    /// use fake_person::BatchPolicy;
    ///
    /// assert_eq!(BatchPolicy::Clamping.resolve(-5), Ok(2));
    /// assert_eq!(BatchPolicy::Clamping.resolve(150), Ok(100));
    /// assert!(BatchPolicy::Strict.resolve(150).is_err());
    /// ```
    pub fn resolve(self, requested: i64) -> Result<usize, BatchSizeError> {
        match self {
            Self::Clamping => Ok(clamp_batch_size(requested)),
            Self::Strict => usize::try_from(requested)
                .ok()
                .filter(|n| (MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(n))
                .ok_or(BatchSizeError::OutOfRange {
                    requested,
                    min: MIN_BATCH_SIZE,
                    max: MAX_BATCH_SIZE,
                }),
        }
    }
}

/// Clamps any requested amount to `[MIN_BATCH_SIZE, MAX_BATCH_SIZE]`.
#[must_use]
pub fn clamp_batch_size(requested: i64) -> usize {
    if requested < 0 {
        return MIN_BATCH_SIZE;
    }
    usize::try_from(requested).map_or(MAX_BATCH_SIZE, |n| n.clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE))
}
