// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Add, Deref, DerefMut, Sub};

use crate::ByteLength;

/// Represents a byte offset into a [`crate::GraphemeSource`].
///
/// Signed integers are accepted via [`From`] and negative values are clamped to `0`, so
/// callers that compute offsets with signed arithmetic (e.g. `cursor - 1`) can pass them
/// straight into [`crate::decode_at`] and [`crate::decode_before`].
///
/// # Examples
///
/// ```
/// use gc_scan::{ByteIndex, byte_index};
///
/// assert_eq!(byte_index(5), ByteIndex(5));
/// assert_eq!(byte_index(-3_i32), ByteIndex(0));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ByteIndex(pub usize);

impl ByteIndex {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

pub fn byte_index(arg_byte_index: impl Into<ByteIndex>) -> ByteIndex {
    arg_byte_index.into()
}

impl Deref for ByteIndex {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for ByteIndex {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl From<usize> for ByteIndex {
    fn from(it: usize) -> Self { Self(it) }
}

impl From<u32> for ByteIndex {
    fn from(it: u32) -> Self { Self(it as usize) }
}

impl From<i32> for ByteIndex {
    /// Negative offsets normalize to zero.
    fn from(it: i32) -> Self { Self(usize::try_from(it).unwrap_or(0)) }
}

impl From<isize> for ByteIndex {
    /// Negative offsets normalize to zero.
    fn from(it: isize) -> Self { Self(usize::try_from(it).unwrap_or(0)) }
}

impl From<i64> for ByteIndex {
    /// Negative offsets normalize to zero.
    fn from(it: i64) -> Self { Self(usize::try_from(it).unwrap_or(0)) }
}

/// Moving forward by a cluster: `index + span.byte_len`.
impl Add<ByteLength> for ByteIndex {
    type Output = ByteIndex;
    fn add(self, rhs: ByteLength) -> Self::Output { ByteIndex(self.0 + rhs.as_usize()) }
}

/// Moving backward by a cluster: `index - span.byte_len`. Saturates at `0`.
impl Sub<ByteLength> for ByteIndex {
    type Output = ByteIndex;
    fn sub(self, rhs: ByteLength) -> Self::Output {
        ByteIndex(self.0.saturating_sub(rhs.as_usize()))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, byte_len};

    #[test_case(0_i32, 0)]
    #[test_case(7_i32, 7)]
    #[test_case(-1_i32, 0)]
    #[test_case(i32::MIN, 0)]
    fn test_from_i32_clamps_negative(input: i32, expected: usize) {
        assert_eq2!(byte_index(input).as_usize(), expected);
    }

    #[test]
    fn test_from_isize_clamps_negative() {
        assert_eq2!(ByteIndex::from(-42_isize), byte_index(0));
        assert_eq2!(ByteIndex::from(42_isize), byte_index(42));
    }

    #[test]
    fn test_add_and_sub_byte_length() {
        assert_eq2!(byte_index(3) + byte_len(4), byte_index(7));
        assert_eq2!(byte_index(7) - byte_len(4), byte_index(3));
        assert_eq2!(byte_index(2) - byte_len(4), byte_index(0));
    }

    #[test]
    fn test_deref_and_deref_mut() {
        let mut it = byte_index(5);
        assert_eq2!(*it, 5);
        *it = 10;
        assert_eq2!(it, byte_index(10));
    }
}
