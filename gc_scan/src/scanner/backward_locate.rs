// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The boundary rules only ever say "given everything so far, does the *next* code point
//! start a new cluster?", so they can't be run backwards. Finding the cluster that ends
//! at some offset is done in two phases instead:
//!
//! 1. [`simple_step`] walks backwards one code point at a time until it reaches a code
//!    point that is a cluster on its own no matter what surrounds it (CR, LF, CR LF,
//!    other controls), or the start of the source. This is where a forward scan can
//!    safely start.
//! 2. [`GraphemeScanner::full_scan`] runs the forward scanner from there up to the
//!    offset, threading the [`ScanState`] along, and keeps the last span.
//!
//! The cost is proportional to the distance back to the last control character, which
//! is usually a line or less.

use super::{ClusterSpan, GraphemeScanner, ScanState};
use crate::{ByteIndex, ByteLength, GraphemeProperty, GraphemeSource, byte_index,
            classify};

/// Outcome of one backward step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SimpleStep {
    /// Bytes consumed going backwards.
    pub byte_len: ByteLength,
    /// Whether a cluster boundary is known to be right before the consumed bytes.
    pub is_certain: bool,
}

/// Consume the code point that ends at `cursor`, plus the CR in front of it if it is the
/// LF of a CR LF pair.
pub fn simple_step<S: GraphemeSource + ?Sized>(source: &S, cursor: ByteIndex) -> SimpleStep {
    let (ch, ch_len) = source.decode_before(cursor);

    // Start of source.
    if ch_len.is_zero() {
        return SimpleStep {
            byte_len: ch_len,
            is_certain: true,
        };
    }

    match classify(ch) {
        GraphemeProperty::Lf => {
            let lf_start = cursor - ch_len;
            let byte_len = match lf_start.as_usize() {
                0 => ch_len,
                _ => match source.decode_before(lf_start) {
                    ('\r', cr_len) => ch_len + cr_len,
                    _ => ch_len,
                },
            };
            SimpleStep {
                byte_len,
                is_certain: true,
            }
        }
        GraphemeProperty::Cr | GraphemeProperty::Control => SimpleStep {
            byte_len: ch_len,
            is_certain: true,
        },
        _ => SimpleStep {
            byte_len: ch_len,
            is_certain: false,
        },
    }
}

impl GraphemeScanner {
    /// Locate the grapheme cluster that ends at `offset`. This is the same cluster a
    /// forward [`GraphemeScanner::scan`] from the start of `source` would find there.
    ///
    /// - `offset` past the end of `source` is clamped to the end.
    /// - At offset zero the span is empty.
    /// - When `offset` is not a cluster boundary, the cluster that contains it is cut
    ///   short at `offset`.
    pub fn locate_before<S: GraphemeSource + ?Sized>(
        &self,
        source: &S,
        offset: impl Into<ByteIndex>,
    ) -> ClusterSpan {
        let offset = byte_index(offset.into().as_usize().min(source.len().as_usize()));
        if offset.as_usize() == 0 {
            return ClusterSpan::default();
        }

        // Phase 1.
        let mut start = offset.as_usize();
        while start > 0 {
            let step = simple_step(source, byte_index(start));
            start = start.saturating_sub(step.byte_len.as_usize());
            if step.is_certain {
                break;
            }
        }

        // Phase 2.
        let (span, steps) = self.full_scan(source, byte_index(start), offset);

        tracing::trace!(
            message = "⬅️ locate_before",
            offset = offset.as_usize(),
            rescan_from = start,
            forward_steps = steps,
            byte_len = span.byte_len.as_usize(),
            width = span.width.as_usize()
        );

        span
    }

    /// Scan forward from `from`, which must be a cluster boundary, until `to` is reached.
    /// Returns the last span found, and how many forward scans it took.
    pub fn full_scan<S: GraphemeSource + ?Sized>(
        &self,
        source: &S,
        from: ByteIndex,
        to: ByteIndex,
    ) -> (ClusterSpan, usize) {
        let mut cursor = from;
        let mut state = ScanState::Unknown;
        let mut last = ClusterSpan::default();
        let mut steps = 0;

        while cursor < to {
            let span = self.scan(source, cursor, state);
            if span.is_empty() {
                break;
            }
            steps += 1;

            // `to` is inside this cluster, rescan it with the source cut off at `to`.
            if (cursor + span.byte_len) > to {
                let head = source.slice(cursor..to);
                last = self.scan(&*head, byte_index(0), state);
                break;
            }

            cursor = cursor + span.byte_len;
            state = span.state;
            last = span;
        }

        (last, steps)
    }
}

/// [`GraphemeScanner::locate_before`] with the default [`crate::WidthConfig`].
pub fn locate_before<S: GraphemeSource + ?Sized>(
    source: &S,
    offset: impl Into<ByteIndex>,
) -> ClusterSpan {
    GraphemeScanner::default().locate_before(source, offset)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, byte_len, log::try_initialize_logging_thread_local, width};

    #[test_case("abc", 3, (1, false) ; "letter")]
    #[test_case("a\u{301}", 3, (2, false) ; "combining mark")]
    #[test_case("a\n", 2, (1, true) ; "lone lf")]
    #[test_case("a\r\n", 3, (2, true) ; "cr lf")]
    #[test_case("\n", 1, (1, true) ; "lf at start")]
    #[test_case("a\r", 2, (1, true) ; "cr")]
    #[test_case("a\t", 2, (1, true) ; "control")]
    #[test_case("abc", 0, (0, true) ; "start of source")]
    fn test_simple_step(text: &str, cursor: usize, expected: (usize, bool)) {
        let it = simple_step(text, byte_index(cursor));
        assert_eq2!((it.byte_len.as_usize(), it.is_certain), expected);
    }

    /// `(byte_len, width)` of the cluster ending at `offset`.
    fn before(text: &str, offset: usize) -> (usize, usize) {
        let it = locate_before(text, byte_index(offset));
        (it.byte_len.as_usize(), it.width.as_usize())
    }

    #[test_case("", 0, (0, 0) ; "empty")]
    #[test_case("abc", 0, (0, 0) ; "offset zero")]
    #[test_case("abc", 3, (1, 1) ; "last letter")]
    #[test_case("abc", 99, (1, 1) ; "clamped past end")]
    #[test_case("e\u{301}", 3, (3, 1) ; "letter with combining acute")]
    #[test_case("x\r\n", 3, (2, 0) ; "crlf")]
    #[test_case("x\r\ny", 2, (1, 0) ; "cr of crlf")]
    #[test_case("🇺🇸🇩🇪", 16, (8, 2) ; "second flag")]
    #[test_case("🇺🇸🇩🇪🇫", 20, (4, 2) ; "odd indicator after two flags")]
    #[test_case("ab👨\u{200D}👩", 13, (11, 2) ; "zwj sequence")]
    #[test_case("中e\u{301}", 3, (3, 2) ; "wide ideograph")]
    fn test_locate_before(text: &str, offset: usize, expected: (usize, usize)) {
        assert_eq2!(before(text, offset), expected);
    }

    #[test]
    fn test_offset_inside_cluster_is_truncated() {
        // The cluster "e\u{301}\u{301}" spans bytes 0..5, ask for the one ending at 3.
        let it = locate_before("e\u{301}\u{301}", byte_index(3));
        assert_eq2!(it.byte_len, byte_len(3));
        assert_eq2!(it.width, width(1));
    }

    #[test]
    fn test_full_scan_counts_steps() {
        let scanner = GraphemeScanner::default();
        let (span, steps) =
            scanner.full_scan("abe\u{301}", byte_index(0), byte_index(5));
        assert_eq2!(steps, 3);
        assert_eq2!(span.byte_len, byte_len(3));
    }

    #[test]
    fn test_trace_event_with_logging_enabled() {
        let _guard = try_initialize_logging_thread_local(tracing_core::LevelFilter::TRACE);
        let it = locate_before("a\nbc\u{301}", byte_index(6));
        assert_eq2!(it.byte_len, byte_len(3));
    }
}
