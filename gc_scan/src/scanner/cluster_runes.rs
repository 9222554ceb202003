// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Write};

use smallvec::SmallVec;
use utf8_iter::Utf8CharsEx;

use crate::{ByteLength, ColWidth, byte_len, width};

/// Inline storage for the code points that follow the base of a cluster. Most clusters
/// have at most a couple (an accent, a variation selector, a skin tone); ZWJ sequences
/// and stacked diacritics spill to the heap.
pub const INLINE_COMBINING_SIZE: usize = 4;
pub type CombiningChars = SmallVec<[char; INLINE_COMBINING_SIZE]>;

/// A grapheme cluster split into its first code point and the ones that follow it.
///
/// Re-encoding [`Self::base`] followed by [`Self::combining`] as UTF-8 gives back the
/// bytes of the cluster, as long as they were well formed.
///
/// [`GraphemeCluster::default()`] is the empty cluster: base `'\0'`, nothing combining,
/// zero length and zero width. That is what the decode functions return when there is
/// nothing to decode (empty input, offset at the end, offset zero going backwards).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphemeCluster {
    pub base: char,
    pub combining: CombiningChars,
    pub byte_len: ByteLength,
    pub width: ColWidth,
}

impl GraphemeCluster {
    /// Split `bytes`, which hold exactly one cluster, into code points. `width` is taken
    /// as is, it comes from the scan that located the cluster.
    #[must_use]
    pub fn from_bytes(bytes: &[u8], width: ColWidth) -> Self {
        let mut chars = bytes.chars();
        let Some(base) = chars.next() else {
            return Self::default();
        };

        // Fast path, a single code point.
        if chars.as_slice().is_empty() {
            return Self {
                base,
                combining: CombiningChars::new(),
                byte_len: byte_len(bytes.len()),
                width,
            };
        }

        Self {
            base,
            combining: chars.collect(),
            byte_len: byte_len(bytes.len()),
            width,
        }
    }

    /// Same as [`Self::from_bytes`] for callers that have no width at hand. The width is
    /// left at zero.
    #[must_use]
    pub fn decompose(bytes: &[u8]) -> Self { Self::from_bytes(bytes, width(0)) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.byte_len.is_zero() }

    /// All the code points of the cluster, base first.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        let base = (!self.is_empty()).then_some(self.base);
        base.into_iter().chain(self.combining.iter().copied())
    }
}

/// Writes the code points of the cluster, base first.
impl Display for GraphemeCluster {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.chars().try_for_each(|it| f.write_char(it))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_empty() {
        let it = GraphemeCluster::decompose(b"");
        assert!(it.is_empty());
        assert_eq2!(it, GraphemeCluster::default());
        assert_eq2!(it.base, '\0');
        assert_eq2!(it.to_string(), "");
    }

    #[test]
    fn test_single_code_point_has_no_combining() {
        let it = GraphemeCluster::from_bytes("中".as_bytes(), width(2));
        assert_eq2!(it.base, '中');
        assert!(it.combining.is_empty());
        assert_eq2!(it.byte_len, byte_len(3));
        assert_eq2!(it.width, width(2));
    }

    #[test]
    fn test_combining_in_encounter_order() {
        let text = "e\u{301}\u{323}";
        let it = GraphemeCluster::from_bytes(text.as_bytes(), width(1));
        assert_eq2!(it.base, 'e');
        assert_eq2!(it.combining.as_slice(), &['\u{301}', '\u{323}']);
        assert_eq2!(it.byte_len, byte_len(5));
        assert_eq2!(it.to_string(), text);
    }

    #[test]
    fn test_long_zwj_sequence_spills() {
        let text = "👨\u{200D}👩\u{200D}👧\u{200D}👦";
        let it = GraphemeCluster::decompose(text.as_bytes());
        assert_eq2!(it.base, '👨');
        assert_eq2!(it.combining.len(), 6);
        assert!(it.combining.spilled());
        assert_eq2!(it.to_string(), text);
    }

    #[test]
    fn test_ill_formed_bytes() {
        let it = GraphemeCluster::decompose(b"a\xFF");
        assert_eq2!(it.base, 'a');
        assert_eq2!(it.combining.as_slice(), &[char::REPLACEMENT_CHARACTER]);
        assert_eq2!(it.byte_len, byte_len(2));
    }
}
