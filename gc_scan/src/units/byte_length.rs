// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Add, AddAssign, Deref, DerefMut};

/// Represents a byte length measurement (1-based), e.g. the size of one grapheme
/// cluster inside a [`crate::GraphemeSource`].
///
/// Unlike [`crate::ByteIndex`] which is 0-based (representing positions), `ByteLength` is
/// 1-based (representing sizes/counts). A zero length is the "empty span" result
/// returned when there is nothing left to scan.
///
/// # Examples
///
/// ```rust
/// use gc_scan::{ByteLength, byte_len};
///
/// let length = byte_len(42);
/// assert_eq!(length, ByteLength::from(42usize));
/// assert!(!length.is_zero());
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ByteLength(pub usize);

/// Creates a new [`ByteLength`] from any type that can be converted into it.
pub fn byte_len(arg_byte_length: impl Into<ByteLength>) -> ByteLength {
    arg_byte_length.into()
}

impl ByteLength {
    /// Get the length value as a usize.
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }

    #[must_use]
    pub fn is_zero(&self) -> bool { self.0 == 0 }
}

impl Deref for ByteLength {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for ByteLength {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl From<usize> for ByteLength {
    fn from(it: usize) -> Self { Self(it) }
}

impl From<u16> for ByteLength {
    fn from(it: u16) -> Self { Self(it as usize) }
}

impl From<i32> for ByteLength {
    /// Negative lengths normalize to zero.
    fn from(it: i32) -> Self { Self(usize::try_from(it).unwrap_or(0)) }
}

impl Add for ByteLength {
    type Output = ByteLength;
    fn add(self, rhs: ByteLength) -> Self::Output { ByteLength(self.0 + rhs.0) }
}

impl AddAssign for ByteLength {
    fn add_assign(&mut self, rhs: ByteLength) { self.0 += rhs.0; }
}

impl AddAssign<usize> for ByteLength {
    fn add_assign(&mut self, rhs: usize) { self.0 += rhs; }
}
