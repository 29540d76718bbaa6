//! Growable NUL-terminated byte buffers.
//!
//! This crate provides [`BufString`], a buffer for accumulating text or
//! binary data piece by piece. Capacity grows in whole multiples of a growth
//! unit fixed at construction, so a long run of small appends only
//! reallocates once in a while.
//!
//! # Appending
//!
//! ```
//! use giztoy_bufstring::{Appended, BufString};
//!
//! let mut buf = BufString::new().unwrap();
//! buf.append_text(Some("ab")).unwrap();
//! buf.append_text(Some("cd")).unwrap();
//! assert_eq!(buf.as_bytes(), b"abcd");
//!
//! // Nothing to append is not an error.
//! assert_eq!(buf.append_text(None).unwrap(), Appended::NoOp);
//!
//! // Binary data keeps embedded zero bytes.
//! buf.append_bytes(Some(&[0, 1, 0])).unwrap();
//! assert_eq!(buf.len(), 7);
//! ```
//!
//! # Growth
//!
//! Text appends round the needed size up to a whole number of growth units.
//! Byte appends that overflow a populated buffer reserve extra units on top
//! (see [`GrowthPolicy`]).
//!
//! ```
//! use giztoy_bufstring::BufString;
//!
//! let mut buf = BufString::new().unwrap();
//! buf.append_text(Some(&"x".repeat(5000))).unwrap();
//! assert_eq!(buf.capacity(), 5120);
//! ```
//!
//! # Errors
//!
//! Appends either fully succeed or leave the buffer as it was. Allocation
//! failures are reported as [`BufStringError`] instead of aborting, and the
//! memory source can be swapped through [`Allocator`].
//!
//! # Convenience Functions
//!
//! ```
//! use giztoy_bufstring::{bufstring_4kb, bufstring_256b};
//!
//! let large = bufstring_4kb().unwrap();
//! let small = bufstring_256b().unwrap();
//! ```

mod allocator;
mod bufstring;
mod error;
mod policy;
mod sizes;

pub use allocator::{Allocator, Heap};
pub use bufstring::{Appended, BufString, Builder, DEFAULT_CAPACITY};
pub use error::{BufStringError, Result};
pub use policy::GrowthPolicy;
pub use sizes::*;
