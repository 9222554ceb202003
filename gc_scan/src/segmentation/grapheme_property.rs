// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use icu_properties::{CodePointMapData, CodePointSetData,
                     props::{ExtendedPictographic, GraphemeClusterBreak}};

/// Variation selector 15, requests text presentation of the preceding pictograph.
pub const VS15: char = '\u{FE0E}';

/// Variation selector 16, requests emoji presentation of the preceding pictograph.
pub const VS16: char = '\u{FE0F}';

/// The boundary relevant class of a code point. This is the `Grapheme_Cluster_Break`
/// property from [UAX #29](https://www.unicode.org/reports/tr29/), with the
/// `Extended_Pictographic` code points (which are `Other` as far as
/// `Grapheme_Cluster_Break` is concerned) split out into their own class, since rule
/// GB11 and the width rules both need them.
///
/// The variation selectors [`VS15`] and [`VS16`] are [`GraphemeProperty::Extend`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum GraphemeProperty {
    #[default]
    Other,
    Prepend,
    Cr,
    Lf,
    Control,
    Extend,
    RegionalIndicator,
    SpacingMark,
    /// Hangul leading consonant jamo.
    L,
    /// Hangul vowel jamo.
    V,
    /// Hangul trailing consonant jamo.
    T,
    /// Precomposed Hangul syllable without a trailing consonant.
    Lv,
    /// Precomposed Hangul syllable with a trailing consonant.
    Lvt,
    Zwj,
    ExtendedPictographic,
}

impl GraphemeProperty {
    /// These code points are always a cluster of their own (except for `CR LF`), so a
    /// boundary on either side of them is certain without any forward context.
    #[must_use]
    pub fn is_hard_break(&self) -> bool { matches!(self, Self::Cr | Self::Lf | Self::Control) }
}

/// Map a code point to its [`GraphemeProperty`].
///
/// The data comes from the ICU4X compiled Unicode Character Database tables, so this is
/// a couple of trie lookups with no allocation and no shared mutable state.
#[must_use]
pub fn classify(ch: char) -> GraphemeProperty {
    let gcb = CodePointMapData::<GraphemeClusterBreak>::new().get(ch);
    match gcb {
        GraphemeClusterBreak::CR => GraphemeProperty::Cr,
        GraphemeClusterBreak::LF => GraphemeProperty::Lf,
        GraphemeClusterBreak::Control => GraphemeProperty::Control,
        GraphemeClusterBreak::Extend => GraphemeProperty::Extend,
        GraphemeClusterBreak::ZWJ => GraphemeProperty::Zwj,
        GraphemeClusterBreak::RegionalIndicator => GraphemeProperty::RegionalIndicator,
        GraphemeClusterBreak::Prepend => GraphemeProperty::Prepend,
        GraphemeClusterBreak::SpacingMark => GraphemeProperty::SpacingMark,
        GraphemeClusterBreak::L => GraphemeProperty::L,
        GraphemeClusterBreak::V => GraphemeProperty::V,
        GraphemeClusterBreak::T => GraphemeProperty::T,
        GraphemeClusterBreak::LV => GraphemeProperty::Lv,
        GraphemeClusterBreak::LVT => GraphemeProperty::Lvt,
        // Emoji modifiers are Extend in current data; the legacy E_Base, E_Modifier and
        // Glue_After_Zwj values fall through to here.
        _ if CodePointSetData::new::<ExtendedPictographic>().contains(ch) => {
            GraphemeProperty::ExtendedPictographic
        }
        _ => GraphemeProperty::Other,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case('a', GraphemeProperty::Other)]
    #[test_case('中', GraphemeProperty::Other)]
    #[test_case('\r', GraphemeProperty::Cr)]
    #[test_case('\n', GraphemeProperty::Lf)]
    #[test_case('\t', GraphemeProperty::Control)]
    #[test_case('\u{7}', GraphemeProperty::Control)]
    #[test_case('\u{200B}', GraphemeProperty::Control)]
    #[test_case('\u{0301}', GraphemeProperty::Extend)]
    #[test_case(VS15, GraphemeProperty::Extend)]
    #[test_case(VS16, GraphemeProperty::Extend)]
    #[test_case('\u{1F3FD}', GraphemeProperty::Extend)]
    #[test_case('\u{200D}', GraphemeProperty::Zwj)]
    #[test_case('\u{1F1FA}', GraphemeProperty::RegionalIndicator)]
    #[test_case('\u{0600}', GraphemeProperty::Prepend)]
    #[test_case('\u{0903}', GraphemeProperty::SpacingMark)]
    #[test_case('\u{1100}', GraphemeProperty::L)]
    #[test_case('\u{1161}', GraphemeProperty::V)]
    #[test_case('\u{11A8}', GraphemeProperty::T)]
    #[test_case('가', GraphemeProperty::Lv)]
    #[test_case('각', GraphemeProperty::Lvt)]
    #[test_case('😀', GraphemeProperty::ExtendedPictographic)]
    #[test_case('©', GraphemeProperty::ExtendedPictographic)]
    #[test_case('☺', GraphemeProperty::ExtendedPictographic)]
    fn test_classify(ch: char, expected: GraphemeProperty) {
        assert_eq2!(classify(ch), expected);
    }

    #[test]
    fn test_is_hard_break() {
        assert!(GraphemeProperty::Cr.is_hard_break());
        assert!(GraphemeProperty::Lf.is_hard_break());
        assert!(GraphemeProperty::Control.is_hard_break());
        assert!(!GraphemeProperty::Extend.is_hard_break());
        assert!(!GraphemeProperty::Other.is_hard_break());
    }
}
