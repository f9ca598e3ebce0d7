//! Error types for structured error handling.
//!
//! Only shape problems are reported here. Numeric parameters that are merely
//! out of a sensible range (a zero `i_drop`, a negative decay rate) flow
//! through the floating-point arithmetic unchanged.

use thiserror::Error;

/// Errors raised by schedule construction and policy validation.
///
/// # Variants
/// - `InvalidStepCount`: A generator was requested with zero steps
/// - `ArityMismatch`: Piecewise values do not match the boundary count
/// - `InvalidBoundaries`: Piecewise boundaries do not partition the step axis
///
/// # Examples
/// ```
/// use schedule_core::types::ScheduleError;
///
/// let err = ScheduleError::ArityMismatch { boundaries: 2, values: 2 };
/// assert!(format!("{}", err).contains("got 2 values for 2 boundaries"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScheduleError {
    /// Step count must be at least one.
    #[error("Invalid step count: {0} (must be >= 1)")]
    InvalidStepCount(usize),

    /// Piecewise decay needs exactly one more value than boundaries.
    #[error("Arity mismatch: got {values} values for {boundaries} boundaries, need boundaries + 1")]
    ArityMismatch {
        /// Number of boundaries supplied
        boundaries: usize,
        /// Number of values supplied
        values: usize,
    },

    /// A boundary is out of order or beyond the end of the schedule.
    #[error("Invalid boundary {boundary} at index {index}: boundaries must be non-decreasing and <= {n_steps}")]
    InvalidBoundaries {
        /// Position of the offending boundary
        index: usize,
        /// The offending boundary value
        boundary: usize,
        /// Step count of the generator (`usize::MAX` when validated without one)
        n_steps: usize,
    },
}

impl ScheduleError {
    /// Create an arity mismatch error.
    pub fn arity_mismatch(boundaries: usize, values: usize) -> Self {
        Self::ArityMismatch { boundaries, values }
    }

    /// Returns true if this error came from piecewise input shape checks.
    pub fn is_piecewise(&self) -> bool {
        matches!(
            self,
            Self::ArityMismatch { .. } | Self::InvalidBoundaries { .. }
        )
    }
}
