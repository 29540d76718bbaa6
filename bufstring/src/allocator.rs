//! Memory allocation used by [`BufString`](crate::BufString).

use crate::error::{BufStringError, Result};

/// Source of zero-filled backing regions.
///
/// The returned region is released by dropping it. Implementations must
/// report failure rather than abort, so that a failed append can leave the
/// buffer untouched.
pub trait Allocator {
    /// Allocates a zero-filled region of exactly `size` bytes.
    fn allocate(&self, size: usize) -> Result<Vec<u8>>;
}

/// The global heap, with out-of-memory reported as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heap;

impl Allocator for Heap {
    fn allocate(&self, size: usize) -> Result<Vec<u8>> {
        let mut region = Vec::new();
        region
            .try_reserve_exact(size)
            .map_err(|e| BufStringError::Alloc {
                requested: size,
                source: Some(e),
            })?;
        region.resize(size, 0);
        Ok(region)
    }
}

impl<A: Allocator + ?Sized> Allocator for &A {
    fn allocate(&self, size: usize) -> Result<Vec<u8>> {
        (**self).allocate(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_zero_filled() {
        let region = Heap.allocate(17).unwrap();
        assert_eq!(region.len(), 17);
        assert!(region.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_heap_reports_failure() {
        let err = Heap.allocate(usize::MAX).unwrap_err();
        assert!(err.is_alloc_failure());
        assert!(matches!(err, BufStringError::Alloc { requested, .. } if requested == usize::MAX));
    }
}
