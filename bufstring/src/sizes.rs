//! Convenience constructors for common growth units.

use crate::bufstring::{BufString, DEFAULT_CAPACITY};
use crate::error::Result;

/// Creates a buffered string growing in 256B units.
pub fn bufstring_256b() -> Result<BufString> {
    BufString::with_capacity(256)
}

/// Creates a buffered string growing in 1KB units.
pub fn bufstring_1kb() -> Result<BufString> {
    BufString::with_capacity(1024)
}

/// Creates a buffered string growing in 4KB units.
pub fn bufstring_4kb() -> Result<BufString> {
    BufString::with_capacity(4096)
}

/// Creates a buffered string growing in 16KB units.
pub fn bufstring_16kb() -> Result<BufString> {
    BufString::with_capacity(16384)
}

/// Creates a buffered string growing in 64KB units.
pub fn bufstring_64kb() -> Result<BufString> {
    BufString::with_capacity(65536)
}

/// Creates a buffered string with the default growth unit.
pub fn bufstring() -> Result<BufString> {
    BufString::with_capacity(DEFAULT_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_constructors() {
        assert_eq!(bufstring_256b().unwrap().capacity(), 256);
        assert_eq!(bufstring_1kb().unwrap().capacity(), 1024);
        assert_eq!(bufstring_4kb().unwrap().capacity(), 4096);
        assert_eq!(bufstring_16kb().unwrap().capacity(), 16384);
        assert_eq!(bufstring_64kb().unwrap().growth_unit(), 65536);
    }

    #[test]
    fn test_default_matches_new() {
        let a = bufstring().unwrap();
        let b = BufString::new().unwrap();
        assert_eq!(a.capacity(), b.capacity());
        assert_eq!(a.growth_unit(), b.growth_unit());
    }
}
