//! Capacity growth policy.

use crate::error::{BufStringError, Result};

/// Decides how much capacity a buffer grows to when an append overflows it.
///
/// Capacity is always rounded up to a whole number of growth units, then
/// padded with a number of extra "slack" units that depends on the kind of
/// append. Byte appends get more slack than text appends by default since
/// they are usually issued in tight loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Extra units reserved by text appends and empty-buffer byte appends.
    pub text_slack: usize,
    /// Extra units reserved when a byte append overflows a populated buffer.
    pub bytes_slack: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            text_slack: 0,
            bytes_slack: 4,
        }
    }
}

impl GrowthPolicy {
    /// A policy that never reserves slack beyond the rounded-up size.
    pub const fn exact() -> Self {
        Self {
            text_slack: 0,
            bytes_slack: 0,
        }
    }

    /// Capacity for a text append that needs `needed` bytes.
    pub fn text_capacity(&self, needed: usize, unit: usize) -> Result<usize> {
        round_up(needed, unit, self.text_slack)
    }

    /// Capacity for a byte append that overflows a populated buffer.
    pub fn bytes_capacity(&self, needed: usize, unit: usize) -> Result<usize> {
        round_up(needed, unit, self.bytes_slack)
    }
}

/// Returns `ceil(needed / unit) * unit + slack * unit`.
///
/// `unit` is never zero: buffers reject a zero growth unit at construction.
fn round_up(needed: usize, unit: usize, slack: usize) -> Result<usize> {
    debug_assert!(unit > 0);
    needed
        .div_ceil(unit)
        .checked_add(slack)
        .and_then(|units| units.checked_mul(unit))
        .ok_or(BufStringError::CapacityOverflow { needed })
}
