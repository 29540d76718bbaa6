//! Growable buffered string implementation.

use std::fmt;
use std::ops::Deref;
use std::str::Utf8Error;

use crate::allocator::{Allocator, Heap};
use crate::error::{BufStringError, Result};
use crate::policy::GrowthPolicy;

/// Default capacity, and growth unit, of [`BufString::new`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// Outcome of a successful append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appended {
    /// The data fit in the current capacity.
    InPlace,
    /// The buffer moved to a new region of `to` bytes capacity.
    Grew { from: usize, to: usize },
    /// There was no text to append; nothing changed.
    NoOp,
}

/// A growable byte buffer that keeps a NUL terminator after its content.
///
/// `BufString` accumulates text or binary data and grows its capacity in
/// multiples of a fixed growth unit chosen at construction. The backing
/// region always holds `capacity() + 1` bytes, and the byte right after the
/// content is zero after every successful append, so the content can be
/// handed to code that expects a NUL-terminated string.
///
/// # Semantics
///
/// - **append_text**: `None` is a soft no-op; text is cut at its first NUL
/// - **append_bytes**: copies bytes verbatim; `None` is a hard failure
/// - **Failure**: the buffer keeps its previous content and capacity
///
/// The backing region is released when the buffer is dropped.
///
/// # Example
///
/// ```
/// use giztoy_bufstring::{Appended, BufString};
///
/// let mut buf = BufString::with_capacity(8).unwrap();
/// buf.append_text(Some("hello ")).unwrap();
/// let grew = buf.append_text(Some("world")).unwrap();
///
/// assert_eq!(grew, Appended::Grew { from: 8, to: 16 });
/// assert_eq!(buf.to_str().unwrap(), "hello world");
/// assert_eq!(buf.as_bytes_with_nul().last(), Some(&0));
/// ```
pub struct BufString<A: Allocator = Heap> {
    /// Always `capacity + 1` bytes long.
    data: Vec<u8>,
    len: usize,
    unit: usize,
    policy: GrowthPolicy,
    alloc: A,
}

impl BufString<Heap> {
    /// Creates a buffer with [`DEFAULT_CAPACITY`] bytes of capacity.
    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a buffer holding `capacity` bytes before it has to grow.
    ///
    /// `capacity` is also the growth unit. Zero is rejected with
    /// [`BufStringError::ZeroCapacity`].
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_allocator(capacity, Heap)
    }

    /// Returns a builder for configuring a buffer.
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl<A: Allocator> BufString<A> {
    /// Creates a buffer whose memory comes from `alloc`.
    pub fn with_allocator(capacity: usize, alloc: A) -> Result<Self> {
        Self::build(capacity, GrowthPolicy::default(), alloc)
    }

    fn build(capacity: usize, policy: GrowthPolicy, alloc: A) -> Result<Self> {
        if capacity == 0 {
            return Err(BufStringError::ZeroCapacity);
        }
        let data = allocate_region(&alloc, capacity)?;
        Ok(BufString {
            data,
            len: 0,
            unit: capacity,
            policy,
            alloc,
        })
    }

    /// Returns the number of content bytes, not counting the terminator.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of content bytes the buffer can hold without growing.
    pub fn capacity(&self) -> usize {
        self.data.len() - 1
    }

    /// Returns the increment used when the buffer grows.
    pub fn growth_unit(&self) -> usize {
        self.unit
    }

    /// Returns the growth policy.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Returns the content bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Returns the content bytes followed by the terminator byte.
    ///
    /// The last byte is zero whenever at least one append has succeeded,
    /// and for a freshly constructed buffer.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data[..=self.len]
    }

    /// Returns the content as UTF-8 text.
    pub fn to_str(&self) -> std::result::Result<&str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }

    /// Consumes the buffer and returns its content bytes.
    pub fn into_vec(self) -> Vec<u8> {
        let mut data = self.data;
        data.truncate(self.len);
        data
    }

    /// Appends text.
    ///
    /// `None` means there is nothing to append and returns
    /// [`Appended::NoOp`]. Text is appended up to its first NUL byte.
    ///
    /// On error the buffer is left exactly as it was.
    pub fn append_text(&mut self, text: Option<&str>) -> Result<Appended> {
        let Some(text) = text else {
            return Ok(Appended::NoOp);
        };
        let bytes = text.as_bytes();
        let add = match memchr::memchr(0, bytes) {
            Some(end) => &bytes[..end],
            None => bytes,
        };
        self.append(add, GrowthPolicy::text_capacity)
    }

    /// Appends `bytes` verbatim, embedded zero bytes included.
    ///
    /// Unlike [`append_text`](Self::append_text), `None` is an error
    /// ([`BufStringError::NullInput`]). When a populated buffer overflows,
    /// the buffer reserves the extra [`GrowthPolicy::bytes_slack`] units.
    ///
    /// On error the buffer is left exactly as it was.
    pub fn append_bytes(&mut self, bytes: Option<&[u8]>) -> Result<Appended> {
        let Some(bytes) = bytes else {
            tracing::error!("bufstring: cannot add null bytes");
            return Err(BufStringError::NullInput);
        };
        if self.len == 0 && bytes.len() > self.unit {
            tracing::debug!(
                len = bytes.len(),
                unit = self.unit,
                "bufstring: append larger than growth unit"
            );
        }
        self.append(bytes, GrowthPolicy::bytes_capacity)
    }

    /// Shared append path.
    ///
    /// An empty buffer grows when `add` alone exceeds the growth unit, sized
    /// by the text rule. A populated buffer grows when the combined length
    /// exceeds capacity, sized by `overflow`.
    fn append(
        &mut self,
        add: &[u8],
        overflow: fn(&GrowthPolicy, usize, usize) -> Result<usize>,
    ) -> Result<Appended> {
        let grow_to = if self.len == 0 {
            if add.len() > self.unit {
                Some(self.policy.text_capacity(add.len(), self.unit))
            } else {
                None
            }
        } else {
            match self.len.checked_add(add.len()) {
                Some(new_len) if new_len > self.capacity() => {
                    Some(overflow(&self.policy, new_len, self.unit))
                }
                Some(_) => None,
                None => Some(Err(BufStringError::CapacityOverflow {
                    needed: usize::MAX,
                })),
            }
        };

        match grow_to {
            None => {
                self.write_in_place(add);
                Ok(Appended::InPlace)
            }
            Some(capacity) => capacity
                .and_then(|capacity| self.regrow(capacity, add))
                .inspect_err(|err| {
                    tracing::error!(
                        %err,
                        len = self.len,
                        add = add.len(),
                        "bufstring: cannot grow buffer"
                    );
                }),
        }
    }

    fn write_in_place(&mut self, add: &[u8]) {
        let end = self.len + add.len();
        self.data[self.len..end].copy_from_slice(add);
        self.data[end] = 0;
        self.len = end;
    }

    /// Moves the content into a fresh region of `capacity` bytes, followed by `add`.
    fn regrow(&mut self, capacity: usize, add: &[u8]) -> Result<Appended> {
        let mut region = allocate_region(&self.alloc, capacity)?;
        let end = self.len + add.len();
        region[..self.len].copy_from_slice(self.as_bytes());
        region[self.len..end].copy_from_slice(add);
        region[end] = 0;

        let from = self.capacity();
        self.data = region;
        self.len = end;
        tracing::trace!(from, to = capacity, "bufstring: grew");
        Ok(Appended::Grew { from, to: capacity })
    }
}

/// Allocates `capacity` bytes plus the terminator byte.
fn allocate_region<A: Allocator>(alloc: &A, capacity: usize) -> Result<Vec<u8>> {
    let size = capacity
        .checked_add(1)
        .ok_or(BufStringError::CapacityOverflow { needed: capacity })?;
    let region = alloc.allocate(size).inspect_err(|err| {
        tracing::error!(%err, requested = size, "bufstring: cannot allocate memory");
    })?;
    if region.len() != size {
        tracing::error!(
            requested = size,
            got = region.len(),
            "bufstring: allocator returned wrong size"
        );
        return Err(BufStringError::Alloc {
            requested: size,
            source: None,
        });
    }
    Ok(region)
}

impl<A: Allocator> Deref for BufString<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<A: Allocator> AsRef<[u8]> for BufString<A> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<A: Allocator> fmt::Debug for BufString<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufString")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("growth_unit", &self.unit)
            .field("data", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

/// Formatting goes through [`BufString::append_text`], so output is cut at
/// an embedded NUL. Allocation failures surface as [`fmt::Error`].
impl<A: Allocator> fmt::Write for BufString<A> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_text(Some(s)).map(|_| ()).map_err(|_| fmt::Error)
    }
}

/// Configures and creates a [`BufString`].
///
/// ```
/// use giztoy_bufstring::{BufString, GrowthPolicy};
///
/// let buf = BufString::builder()
///     .capacity(64)
///     .policy(GrowthPolicy::exact())
///     .build()
///     .unwrap();
/// assert_eq!(buf.capacity(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct Builder<A = Heap> {
    capacity: usize,
    policy: GrowthPolicy,
    alloc: A,
}

impl Default for Builder<Heap> {
    fn default() -> Self {
        Builder {
            capacity: DEFAULT_CAPACITY,
            policy: GrowthPolicy::default(),
            alloc: Heap,
        }
    }
}

impl<A: Allocator> Builder<A> {
    /// Sets the initial capacity and growth unit.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the growth policy.
    pub fn policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Uses `alloc` for all of the buffer's memory.
    pub fn allocator<B: Allocator>(self, alloc: B) -> Builder<B> {
        Builder {
            capacity: self.capacity,
            policy: self.policy,
            alloc,
        }
    }

    /// Creates the buffer.
    pub fn build(self) -> Result<BufString<A>> {
        BufString::build(self.capacity, self.policy, self.alloc)
    }
}
