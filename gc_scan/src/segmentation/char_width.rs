// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use icu_properties::{CodePointSetData, props::EmojiPresentation};

use super::GraphemeProperty;
use crate::{ColWidth, WidthConfig, width};

/// Two em dash. Rendered as a dash spanning three columns.
pub const TWO_EM_DASH: char = '\u{2E3A}';

/// Three em dash. Rendered as a dash spanning four columns.
pub const THREE_EM_DASH: char = '\u{2E3B}';

/// Monospace display width of a single code point, given its already computed
/// [`GraphemeProperty`].
///
/// | Code point                                      | Width                     |
/// | ----------------------------------------------- | ------------------------- |
/// | Control, CR, LF, Extend, ZWJ                    | 0                         |
/// | Regional indicator                              | 2                         |
/// | Extended pictographic, emoji presentation       | 2                         |
/// | Extended pictographic, text presentation        | 1                         |
/// | [`TWO_EM_DASH`]                                 | 3                         |
/// | [`THREE_EM_DASH`]                               | 4                         |
/// | East Asian Wide or Fullwidth                    | 2                         |
/// | East Asian Ambiguous                            | per [`WidthConfig`]       |
/// | Everything else                                 | 1                         |
///
/// This is the width of the code point in isolation. How widths of the code points in
/// a cluster combine is up to the scanner.
#[must_use]
pub fn char_width(ch: char, property: GraphemeProperty, config: &WidthConfig) -> ColWidth {
    match property {
        GraphemeProperty::Control
        | GraphemeProperty::Cr
        | GraphemeProperty::Lf
        | GraphemeProperty::Extend
        | GraphemeProperty::Zwj => return width(0),
        GraphemeProperty::RegionalIndicator => return width(2),
        GraphemeProperty::ExtendedPictographic => {
            return if CodePointSetData::new::<EmojiPresentation>().contains(ch) {
                width(2)
            } else {
                width(1)
            };
        }
        _ => {}
    }

    match ch {
        TWO_EM_DASH => width(3),
        THREE_EM_DASH => width(4),
        _ => width(config.east_asian_width(ch).map_or(1, |it| it.max(1))),
    }
}
