// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow, char::REPLACEMENT_CHARACTER, ops::Range};

use utf8_iter::Utf8CharsEx;

use crate::{ByteIndex, ByteLength, byte_len};

/// Random access, read only view of UTF-8 encoded text that the scanners work on.
///
/// The text does not have to be contiguous in memory (see [`crate::GapBuffer`]), and it
/// does not have to be valid UTF-8. Ill-formed byte sequences decode to
/// [`REPLACEMENT_CHARACTER`], consuming the maximal ill-formed subpart (at least one
/// byte), so decoding always makes progress.
///
/// Implementations must be deterministic and free of side effects.
pub trait GraphemeSource {
    /// Total length in bytes.
    fn len(&self) -> ByteLength;

    fn is_empty(&self) -> bool { self.len().is_zero() }

    /// The code point that starts at `offset`, and its encoded length. Callers only ask
    /// for `offset < len()`.
    fn decode_at(&self, offset: ByteIndex) -> (char, ByteLength);

    /// The code point that ends at `offset`, and its encoded length. Callers only ask for
    /// `0 < offset <= len()`.
    fn decode_before(&self, offset: ByteIndex) -> (char, ByteLength);

    /// Raw bytes in `range`. Borrowed when they are contiguous in memory.
    fn slice(&self, range: Range<ByteIndex>) -> Cow<'_, [u8]>;
}

/// Decode the code point starting at `offset` in `bytes`. Returns a zero length when
/// `offset` is at or past the end.
#[must_use]
pub fn decode_utf8_at(bytes: &[u8], offset: ByteIndex) -> (char, ByteLength) {
    let Some(rest) = bytes.get(offset.as_usize()..) else {
        return (REPLACEMENT_CHARACTER, byte_len(0));
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(ch) => (ch, byte_len(rest.len() - chars.as_slice().len())),
        None => (REPLACEMENT_CHARACTER, byte_len(0)),
    }
}

/// Decode the code point ending at `offset` in `bytes`. Returns a zero length when
/// `offset` is zero or past the end.
#[must_use]
pub fn decode_utf8_before(bytes: &[u8], offset: ByteIndex) -> (char, ByteLength) {
    let Some(head) = bytes.get(..offset.as_usize()) else {
        return (REPLACEMENT_CHARACTER, byte_len(0));
    };
    let mut chars = head.chars();
    match chars.next_back() {
        Some(ch) => (ch, byte_len(head.len() - chars.as_slice().len())),
        None => (REPLACEMENT_CHARACTER, byte_len(0)),
    }
}

/// Clamp `range` to `0..len` so that slicing never panics.
fn clamp_range(range: Range<ByteIndex>, len: usize) -> Range<usize> {
    let end = range.end.as_usize().min(len);
    let start = range.start.as_usize().min(end);
    start..end
}

impl GraphemeSource for [u8] {
    fn len(&self) -> ByteLength { byte_len(<[u8]>::len(self)) }

    fn decode_at(&self, offset: ByteIndex) -> (char, ByteLength) {
        decode_utf8_at(self, offset)
    }

    fn decode_before(&self, offset: ByteIndex) -> (char, ByteLength) {
        decode_utf8_before(self, offset)
    }

    fn slice(&self, range: Range<ByteIndex>) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self[clamp_range(range, <[u8]>::len(self))])
    }
}

impl GraphemeSource for str {
    fn len(&self) -> ByteLength { byte_len(str::len(self)) }

    fn decode_at(&self, offset: ByteIndex) -> (char, ByteLength) {
        decode_utf8_at(self.as_bytes(), offset)
    }

    fn decode_before(&self, offset: ByteIndex) -> (char, ByteLength) {
        decode_utf8_before(self.as_bytes(), offset)
    }

    fn slice(&self, range: Range<ByteIndex>) -> Cow<'_, [u8]> {
        self.as_bytes().slice(range)
    }
}

impl GraphemeSource for Vec<u8> {
    fn len(&self) -> ByteLength { GraphemeSource::len(self.as_slice()) }

    fn decode_at(&self, offset: ByteIndex) -> (char, ByteLength) {
        self.as_slice().decode_at(offset)
    }

    fn decode_before(&self, offset: ByteIndex) -> (char, ByteLength) {
        self.as_slice().decode_before(offset)
    }

    fn slice(&self, range: Range<ByteIndex>) -> Cow<'_, [u8]> {
        self.as_slice().slice(range)
    }
}

impl GraphemeSource for String {
    fn len(&self) -> ByteLength { GraphemeSource::len(self.as_str()) }

    fn decode_at(&self, offset: ByteIndex) -> (char, ByteLength) {
        self.as_str().decode_at(offset)
    }

    fn decode_before(&self, offset: ByteIndex) -> (char, ByteLength) {
        self.as_str().decode_before(offset)
    }

    fn slice(&self, range: Range<ByteIndex>) -> Cow<'_, [u8]> {
        self.as_str().slice(range)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, byte_index};

    #[test_case(b"abc", 0, 'a', 1)]
    #[test_case(b"abc", 2, 'c', 1)]
    #[test_case("é!".as_bytes(), 0, 'é', 2)]
    #[test_case("😀".as_bytes(), 0, '😀', 4)]
    #[test_case(b"\xFFa", 0, REPLACEMENT_CHARACTER, 1 ; "invalid lead byte")]
    #[test_case(b"\xE2\x82a", 0, REPLACEMENT_CHARACTER, 2 ; "truncated sequence")]
    #[test_case(b"abc", 3, REPLACEMENT_CHARACTER, 0 ; "at end")]
    fn test_decode_at(bytes: &[u8], offset: usize, ch: char, len: usize) {
        assert_eq2!(bytes.decode_at(byte_index(offset)), (ch, byte_len(len)));
    }

    #[test_case(b"abc", 3, 'c', 1)]
    #[test_case(b"abc", 1, 'a', 1)]
    #[test_case("!é".as_bytes(), 3, 'é', 2)]
    #[test_case("a😀".as_bytes(), 5, '😀', 4)]
    #[test_case(b"a\xFF", 2, REPLACEMENT_CHARACTER, 1 ; "invalid trailing byte")]
    #[test_case(b"abc", 0, REPLACEMENT_CHARACTER, 0 ; "at start")]
    fn test_decode_before(bytes: &[u8], offset: usize, ch: char, len: usize) {
        assert_eq2!(bytes.decode_before(byte_index(offset)), (ch, byte_len(len)));
    }

    #[test]
    fn test_str_string_and_vec_agree() {
        let text = "a\u{0301}中";
        let string = text.to_string();
        let vec = text.as_bytes().to_vec();

        assert_eq2!(GraphemeSource::len(text), byte_len(6));
        assert_eq2!(GraphemeSource::len(&string), byte_len(6));
        assert_eq2!(GraphemeSource::len(&vec), byte_len(6));

        for offset in [0, 1, 3] {
            let offset = byte_index(offset);
            assert_eq2!(text.decode_at(offset), string.decode_at(offset));
            assert_eq2!(text.decode_at(offset), vec.decode_at(offset));
        }
        for offset in [1, 3, 6] {
            let offset = byte_index(offset);
            assert_eq2!(text.decode_before(offset), string.decode_before(offset));
            assert_eq2!(text.decode_before(offset), vec.decode_before(offset));
        }
    }

    #[test]
    fn test_slice_is_borrowed_and_clamped() {
        let text = "hello";
        let it = text.slice(byte_index(1)..byte_index(3));
        assert!(matches!(it, Cow::Borrowed(_)));
        assert_eq2!(it.as_ref(), b"el");

        let it = text.slice(byte_index(3)..byte_index(99));
        assert_eq2!(it.as_ref(), b"lo");

        assert!(!text.is_empty());
        assert!("".is_empty());
    }
}
