//! Error types for buffered string operations.

use std::collections::TryReserveError;

/// Result type alias for buffered string operations.
pub type Result<T> = std::result::Result<T, BufStringError>;

/// Buffered string operation error.
///
/// Every variant is a hard failure: the buffer that reported it keeps the
/// content and capacity it had before the call. Appending "no text" is not an
/// error and is reported as [`Appended::NoOp`](crate::Appended::NoOp) instead.
#[derive(Debug, thiserror::Error)]
pub enum BufStringError {
    /// The allocator could not provide a region of `requested` bytes.
    #[error("bufstring: cannot allocate {requested} bytes")]
    Alloc {
        requested: usize,
        #[source]
        source: Option<TryReserveError>,
    },

    /// Computing the grown capacity overflowed `usize`.
    #[error("bufstring: capacity overflow (needed {needed} bytes)")]
    CapacityOverflow { needed: usize },

    /// A byte append was given no bytes at all.
    #[error("bufstring: cannot add null bytes")]
    NullInput,

    /// A buffer was requested with a growth unit of zero.
    #[error("bufstring: capacity must be greater than zero")]
    ZeroCapacity,
}

impl BufStringError {
    /// Returns true if the error means memory could not be obtained.
    pub fn is_alloc_failure(&self) -> bool {
        matches!(
            self,
            BufStringError::Alloc { .. } | BufStringError::CapacityOverflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = BufStringError::Alloc {
            requested: 2049,
            source: None,
        };
        assert_eq!(format!("{}", err), "bufstring: cannot allocate 2049 bytes");

        assert_eq!(
            format!("{}", BufStringError::NullInput),
            "bufstring: cannot add null bytes"
        );
        assert!(format!("{}", BufStringError::CapacityOverflow { needed: 7 }).contains("7"));
    }

    #[test]
    fn test_alloc_source() {
        let reserve_err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err = BufStringError::Alloc {
            requested: usize::MAX,
            source: Some(reserve_err),
        };
        assert!(err.source().is_some());

        let err = BufStringError::Alloc {
            requested: 1,
            source: None,
        };
        assert!(err.source().is_none());
    }

    #[test]
    fn test_is_alloc_failure() {
        assert!(BufStringError::Alloc { requested: 1, source: None }.is_alloc_failure());
        assert!(BufStringError::CapacityOverflow { needed: 1 }.is_alloc_failure());
        assert!(!BufStringError::NullInput.is_alloc_failure());
        assert!(!BufStringError::ZeroCapacity.is_alloc_failure());
    }
}
