// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow, ops::Range};

use super::{GraphemeSource, decode_utf8_at, decode_utf8_before};
use crate::{ByteIndex, ByteLength, byte_index, byte_len};

/// Longest UTF-8 encoding of a single code point.
const MAX_UTF8_LEN: usize = 4;

/// A text buffer with a movable gap, the way editors store the line being edited.
///
/// The logical content is `before ++ after`. Inserts and deletes happen at the gap, and
/// moving the gap copies the bytes between the old and the new position. The gap can
/// sit anywhere, even in the middle of a multi byte code point, and the
/// [`GraphemeSource`] impl still decodes across it.
///
/// ```
/// use gc_scan::{GapBuffer, decode_before, byte_index};
///
/// let mut buffer = GapBuffer::from("e");
/// buffer.insert_str("\u{301}!");
/// buffer.move_gap_to(byte_index(2));
///
/// let it = decode_before(&buffer, byte_index(3));
/// assert_eq!(it.base, 'e');
/// assert_eq!(it.combining.as_slice(), &['\u{301}']);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapBuffer {
    before: Vec<u8>,
    after: Vec<u8>,
}

impl GapBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Logical offset of the gap.
    #[must_use]
    pub fn gap_position(&self) -> ByteIndex { byte_index(self.before.len()) }

    /// Move the gap to `offset`, clamped to the length of the buffer.
    pub fn move_gap_to(&mut self, offset: impl Into<ByteIndex>) {
        let offset = offset.into().as_usize().min(self.total_len());
        let gap = self.before.len();
        if offset < gap {
            let moved: Vec<u8> = self.before.drain(offset..).collect();
            self.after.splice(0..0, moved);
        } else if offset > gap {
            self.before.extend(self.after.drain(..offset - gap));
        }
    }

    /// Insert `bytes` at the gap, and leave the gap after them.
    pub fn insert_bytes(&mut self, bytes: &[u8]) { self.before.extend_from_slice(bytes); }

    pub fn insert_str(&mut self, text: &str) { self.insert_bytes(text.as_bytes()); }

    /// Delete up to `len` bytes in front of the gap. Returns how many were deleted.
    pub fn delete_before_gap(&mut self, len: impl Into<ByteLength>) -> ByteLength {
        let len = len.into().as_usize().min(self.before.len());
        let start = self.before.len() - len;
        self.before.truncate(start);
        byte_len(len)
    }

    /// Delete up to `len` bytes after the gap. Returns how many were deleted.
    pub fn delete_after_gap(&mut self, len: impl Into<ByteLength>) -> ByteLength {
        let len = len.into().as_usize().min(self.after.len());
        self.after.drain(..len);
        byte_len(len)
    }

    /// Copy of the logical content.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut acc = Vec::with_capacity(self.total_len());
        acc.extend_from_slice(&self.before);
        acc.extend_from_slice(&self.after);
        acc
    }

    fn total_len(&self) -> usize { self.before.len() + self.after.len() }

    /// Copy at most [`MAX_UTF8_LEN`] bytes of the logical content starting at `start`
    /// into `buffer`, returning how many were copied.
    fn copy_window(&self, start: usize, buffer: &mut [u8; MAX_UTF8_LEN]) -> usize {
        let end = (start + MAX_UTF8_LEN).min(self.total_len());
        let gap = self.before.len();
        for (slot, index) in buffer.iter_mut().zip(start..end) {
            *slot = if index < gap {
                self.before[index]
            } else {
                self.after[index - gap]
            };
        }
        end.saturating_sub(start)
    }
}

impl From<&str> for GapBuffer {
    /// The gap starts at the end of the text.
    fn from(text: &str) -> Self {
        Self {
            before: text.as_bytes().to_vec(),
            after: vec![],
        }
    }
}

impl From<&[u8]> for GapBuffer {
    /// The gap starts at the end of the bytes.
    fn from(bytes: &[u8]) -> Self {
        Self {
            before: bytes.to_vec(),
            after: vec![],
        }
    }
}

impl GraphemeSource for GapBuffer {
    fn len(&self) -> ByteLength { byte_len(self.total_len()) }

    fn decode_at(&self, offset: ByteIndex) -> (char, ByteLength) {
        let offset = offset.as_usize();
        let gap = self.before.len();

        // Entirely after the gap.
        if offset >= gap {
            return decode_utf8_at(&self.after, byte_index(offset - gap));
        }

        // Entirely before the gap.
        if gap - offset >= MAX_UTF8_LEN {
            return decode_utf8_at(&self.before, byte_index(offset));
        }

        // Might straddle the gap.
        let mut window = [0; MAX_UTF8_LEN];
        let window_len = self.copy_window(offset, &mut window);
        decode_utf8_at(&window[..window_len], byte_index(0))
    }

    fn decode_before(&self, offset: ByteIndex) -> (char, ByteLength) {
        let offset = offset.as_usize().min(self.total_len());
        let gap = self.before.len();

        // Entirely before the gap.
        if offset <= gap {
            return decode_utf8_before(&self.before, byte_index(offset));
        }

        // Entirely after the gap.
        if offset - gap >= MAX_UTF8_LEN {
            return decode_utf8_before(&self.after, byte_index(offset - gap));
        }

        // Might straddle the gap.
        let start = offset.saturating_sub(MAX_UTF8_LEN);
        let mut window = [0; MAX_UTF8_LEN];
        let window_len = self.copy_window(start, &mut window);
        let end = (offset - start).min(window_len);
        decode_utf8_before(&window[..end], byte_index(end))
    }

    fn slice(&self, range: Range<ByteIndex>) -> Cow<'_, [u8]> {
        let end = range.end.as_usize().min(self.total_len());
        let start = range.start.as_usize().min(end);
        let gap = self.before.len();

        if end <= gap {
            Cow::Borrowed(&self.before[start..end])
        } else if start >= gap {
            Cow::Borrowed(&self.after[start - gap..end - gap])
        } else {
            let mut acc = Vec::with_capacity(end - start);
            acc.extend_from_slice(&self.before[start..]);
            acc.extend_from_slice(&self.after[..end - gap]);
            Cow::Owned(acc)
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    /// Every gap position must decode exactly like the contiguous text.
    #[test_case("abc")]
    #[test_case("é中😀")]
    #[test_case("e\u{301}\r\n🇺🇸")]
    #[test_case("a\u{FFFD}b")]
    fn test_decode_matches_contiguous_for_every_gap(text: &str) {
        for gap in 0..=text.len() {
            let mut buffer = GapBuffer::from(text);
            buffer.move_gap_to(byte_index(gap));
            assert_eq2!(buffer.gap_position(), byte_index(gap));
            assert_eq2!(buffer.to_bytes(), text.as_bytes());

            for (offset, _) in text.char_indices() {
                assert_eq2!(
                    buffer.decode_at(byte_index(offset)),
                    text.decode_at(byte_index(offset))
                );
            }
            for (offset, ch) in text.char_indices() {
                let end = byte_index(offset + ch.len_utf8());
                assert_eq2!(buffer.decode_before(end), text.decode_before(end));
            }
        }
    }

    #[test]
    fn test_slice_borrows_on_one_side_and_copies_across() {
        let mut buffer = GapBuffer::from("hello world");
        buffer.move_gap_to(byte_index(5));

        let it = buffer.slice(byte_index(0)..byte_index(5));
        assert!(matches!(it, Cow::Borrowed(_)));
        assert_eq2!(it.as_ref(), b"hello");

        let it = buffer.slice(byte_index(6)..byte_index(11));
        assert!(matches!(it, Cow::Borrowed(_)));
        assert_eq2!(it.as_ref(), b"world");

        let it = buffer.slice(byte_index(3)..byte_index(8));
        assert!(matches!(it, Cow::Owned(_)));
        assert_eq2!(it.as_ref(), b"lo wo");
    }

    #[test]
    fn test_edits_at_gap() {
        let mut buffer = GapBuffer::new();
        assert!(buffer.is_empty());

        buffer.insert_str("held");
        buffer.move_gap_to(byte_index(3));
        buffer.insert_str("l");
        buffer.move_gap_to(byte_index(99));
        buffer.insert_bytes(b"o");
        assert_eq2!(buffer.to_bytes(), b"hello".to_vec());
        assert_eq2!(buffer.len(), byte_len(5));

        buffer.move_gap_to(byte_index(1));
        assert_eq2!(buffer.delete_after_gap(byte_len(1)), byte_len(1));
        assert_eq2!(buffer.delete_before_gap(byte_len(9)), byte_len(1));
        assert_eq2!(buffer.to_bytes(), b"llo".to_vec());
        assert_eq2!(buffer.gap_position(), byte_index(0));
    }
}
