//! Error type for the checked entry points.
//!
//! The unchecked operations treat bad indices as a caller bug and do not
//! validate; only the `try_*` methods and workload configuration report errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeQueryError {
    /// A tree cannot be built over zero elements.
    #[error("source array is empty")]
    EmptySource,

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// `start > end`, or `end` past the last element.
    #[error("invalid range {start}..={end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("invalid workload configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RangeQueryError>;

/// Checks that `index` addresses an element of a structure of length `len`.
///
/// # Example
/// ```
/// use range_query::error::{check_index, RangeQueryError};
///
/// assert!(check_index(2, 3).is_ok());
/// assert_eq!(
///     check_index(3, 3),
///     Err(RangeQueryError::IndexOutOfBounds { index: 3, len: 3 })
/// );
/// ```
pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(RangeQueryError::IndexOutOfBounds { index, len })
    }
}

/// Checks that the closed range `start..=end` is non-empty and inside `0..len`.
pub fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start <= end && end < len {
        Ok(())
    } else {
        Err(RangeQueryError::InvalidRange { start, end, len })
    }
}
