// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ClusterSpan, ScanState};
use crate::{BreakState, ByteIndex, ColWidth, GraphemeProperty, GraphemeSource, VS15,
            VS16, WidthConfig, char_width, classify, transition, width};

/// Grapheme cluster scanner over any [`GraphemeSource`].
///
/// This is a small [`Copy`] value that only carries the [`WidthConfig`]; all the
/// Unicode data it consults is static. Use [`GraphemeScanner::default()`] for the common
/// case (ambiguous width characters are narrow), or the free functions in this crate,
/// which do exactly that.
///
/// ```
/// use gc_scan::{GraphemeScanner, ScanState, byte_index};
///
/// let scanner = GraphemeScanner::default();
/// let text = "🇺🇸e\u{301}";
///
/// let flag = scanner.scan(text, byte_index(0), ScanState::Unknown);
/// assert_eq!(flag.byte_len.as_usize(), 8);
/// assert_eq!(flag.width.as_usize(), 2);
///
/// // Resume right where the flag ended.
/// let accented = scanner.scan(text, byte_index(8), flag.state);
/// assert_eq!(accented.byte_len.as_usize(), 3);
/// assert_eq!(accented.width.as_usize(), 1);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GraphemeScanner {
    pub config: WidthConfig,
}

impl GraphemeScanner {
    #[must_use]
    pub fn new(config: impl Into<WidthConfig>) -> Self {
        Self {
            config: config.into(),
        }
    }

    /// Locate the grapheme cluster that starts at `offset`.
    ///
    /// - `state` is [`ScanState::Unknown`], or the state returned by the scan that ended
    ///   exactly at `offset`.
    /// - At or past the end of `source` the span is empty, and `state` is handed back
    ///   unchanged.
    /// - Otherwise the span covers at least one code point, and never more than what is
    ///   left of `source`.
    pub fn scan<S: GraphemeSource + ?Sized>(
        &self,
        source: &S,
        offset: impl Into<ByteIndex>,
        state: ScanState,
    ) -> ClusterSpan {
        let offset: ByteIndex = offset.into();
        let source_len = source.len().as_usize();

        if offset.as_usize() >= source_len {
            return ClusterSpan::empty(state);
        }

        let (first_char, mut length) = source.decode_at(offset);

        // Only one code point left, it is the whole cluster.
        if (offset + length).as_usize() >= source_len {
            let property = match state {
                ScanState::Unknown => classify(first_char),
                ScanState::Known { property, .. } => property,
            };
            return ClusterSpan {
                byte_len: length,
                width: char_width(first_char, property, &self.config),
                state: ScanState::known(BreakState::Any, property),
            };
        }

        let (mut break_state, first_property) = match state {
            ScanState::Unknown => {
                let it = transition(BreakState::Any, first_char);
                (it.state, it.property)
            }
            ScanState::Known {
                break_state,
                property,
            } => (break_state, property),
        };
        let mut acc_width = char_width(first_char, first_property, &self.config);

        loop {
            let (ch, ch_len) = source.decode_at(offset + length);
            let it = transition(break_state, ch);
            break_state = it.state;

            if it.is_boundary {
                return ClusterSpan {
                    byte_len: length,
                    width: acc_width,
                    state: ScanState::known(it.state, it.property),
                };
            }

            acc_width = self.accumulate_width(acc_width, first_property, ch, it.property);
            length += ch_len;

            if (offset + length).as_usize() >= source_len {
                return ClusterSpan {
                    byte_len: length,
                    width: acc_width,
                    state: ScanState::known(BreakState::Any, it.property),
                };
            }
        }
    }

    /// Width of a cluster after `ch` joined it.
    ///
    /// - Emoji presentation selector makes any cluster 2 columns wide.
    /// - Pictographs are 2 wide with anything attached, except the text presentation
    ///   selector which makes them 1 wide.
    /// - Flags (regional indicator pairs) and Hangul clusters starting with a leading
    ///   consonant keep the width of their first code point.
    /// - Everything else adds up.
    fn accumulate_width(
        &self,
        acc_width: ColWidth,
        first_property: GraphemeProperty,
        ch: char,
        property: GraphemeProperty,
    ) -> ColWidth {
        if ch == VS16 {
            return width(2);
        }
        match first_property {
            GraphemeProperty::ExtendedPictographic => {
                if ch == VS15 {
                    width(1)
                } else {
                    width(2)
                }
            }
            GraphemeProperty::RegionalIndicator | GraphemeProperty::L => acc_width,
            _ => acc_width + char_width(ch, property, &self.config),
        }
    }
}

/// [`GraphemeScanner::scan`] with the default [`WidthConfig`].
pub fn scan<S: GraphemeSource + ?Sized>(
    source: &S,
    offset: impl Into<ByteIndex>,
    state: ScanState,
) -> ClusterSpan {
    GraphemeScanner::default().scan(source, offset, state)
}
