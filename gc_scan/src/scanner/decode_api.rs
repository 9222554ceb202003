// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decode a whole grapheme cluster, as a [`GraphemeCluster`], in one of four ways:
//!
//! | Where                  | Buffer                                  | Any [`GraphemeSource`] |
//! | ---------------------- | --------------------------------------- | ---------------------- |
//! | First cluster          | [`decode`], [`decode_in_str`]           | [`decode_at`] at 0     |
//! | Cluster at an offset   |                                         | [`decode_at`]          |
//! | Last cluster           | [`decode_last`], [`decode_last_in_str`] | [`decode_before`] at len |
//! | Cluster before offset  |                                         | [`decode_before`]      |
//!
//! These never fail. Offsets past the end are clamped, and when there is nothing to
//! decode the empty cluster ([`GraphemeCluster::default()`]) comes back. The `try_`
//! variants report bad offsets as [`GcScanError`] instead.
//!
//! All the free functions use the default [`crate::WidthConfig`]. Build a
//! [`GraphemeScanner`] to use a different one.

use super::{GraphemeCluster, GraphemeScanner, ScanState};
use crate::{ByteIndex, ColWidth, CommonResult, GcScanError, GraphemeSource, byte_index,
            byte_len, ok, width};

/// Leading bits of a UTF-8 continuation byte.
const CONTINUATION_MASK: u8 = 0b1100_0000;
const CONTINUATION_TAG: u8 = 0b1000_0000;

impl GraphemeScanner {
    /// First cluster of `bytes`.
    #[must_use]
    pub fn decode(&self, bytes: &[u8]) -> GraphemeCluster { self.decode_at(bytes, byte_index(0)) }

    /// First cluster of `text`.
    #[must_use]
    pub fn decode_in_str(&self, text: &str) -> GraphemeCluster {
        self.decode_at(text, byte_index(0))
    }

    /// Cluster that starts at `offset`. Negative offsets (from signed integer types)
    /// are treated as zero.
    pub fn decode_at<S: GraphemeSource + ?Sized>(
        &self,
        source: &S,
        offset: impl Into<ByteIndex>,
    ) -> GraphemeCluster {
        let offset: ByteIndex = offset.into();
        let span = self.scan(source, offset, ScanState::Unknown);
        if span.is_empty() {
            return GraphemeCluster::default();
        }
        let bytes = source.slice(offset..offset + span.byte_len);
        GraphemeCluster::from_bytes(&bytes, span.width)
    }

    /// Last cluster of `bytes`.
    #[must_use]
    pub fn decode_last(&self, bytes: &[u8]) -> GraphemeCluster {
        self.decode_before(bytes, byte_index(bytes.len()))
    }

    /// Last cluster of `text`.
    #[must_use]
    pub fn decode_last_in_str(&self, text: &str) -> GraphemeCluster {
        self.decode_before(text, byte_index(text.len()))
    }

    /// Cluster that ends at `offset`.
    pub fn decode_before<S: GraphemeSource + ?Sized>(
        &self,
        source: &S,
        offset: impl Into<ByteIndex>,
    ) -> GraphemeCluster {
        let end = byte_index(offset.into().as_usize().min(source.len().as_usize()));
        let span = self.locate_before(source, end);
        if span.is_empty() {
            return GraphemeCluster::default();
        }
        let bytes = source.slice(end - span.byte_len..end);
        GraphemeCluster::from_bytes(&bytes, span.width)
    }

    /// Same as [`Self::decode_at`], but `offset` must be inside `source` (or at its
    /// end), and must not point into the middle of an encoded code point.
    ///
    /// # Errors
    ///
    /// [`GcScanError::OffsetOutOfBounds`] or [`GcScanError::OffsetNotOnCharBoundary`].
    pub fn try_decode_at<S: GraphemeSource + ?Sized>(
        &self,
        source: &S,
        offset: impl Into<ByteIndex>,
    ) -> CommonResult<GraphemeCluster> {
        let offset = validate_offset(source, offset.into())?;
        ok!(self.decode_at(source, offset))
    }

    /// Same as [`Self::decode_before`], with the offset checks of
    /// [`Self::try_decode_at`].
    ///
    /// # Errors
    ///
    /// [`GcScanError::OffsetOutOfBounds`] or [`GcScanError::OffsetNotOnCharBoundary`].
    pub fn try_decode_before<S: GraphemeSource + ?Sized>(
        &self,
        source: &S,
        offset: impl Into<ByteIndex>,
    ) -> CommonResult<GraphemeCluster> {
        let offset = validate_offset(source, offset.into())?;
        ok!(self.decode_before(source, offset))
    }

    /// Display width of `text`: the sum of the widths of its clusters.
    #[must_use]
    pub fn str_width(&self, text: &str) -> ColWidth {
        let mut acc = width(0);
        self.for_each_span(text, |span_width| acc += span_width);
        acc
    }

    /// Number of grapheme clusters in `text`.
    #[must_use]
    pub fn cluster_count(&self, text: &str) -> usize {
        let mut acc = 0;
        self.for_each_span(text, |_| acc += 1);
        acc
    }

    /// Scan `source` from start to end, threading the state, without materializing the
    /// clusters.
    fn for_each_span<S: GraphemeSource + ?Sized>(
        &self,
        source: &S,
        mut receiver: impl FnMut(ColWidth),
    ) {
        let mut offset = byte_index(0);
        let mut state = ScanState::Unknown;
        loop {
            let span = self.scan(source, offset, state);
            if span.is_empty() {
                break;
            }
            receiver(span.width);
            offset = offset + span.byte_len;
            state = span.state;
        }
    }
}

fn validate_offset<S: GraphemeSource + ?Sized>(
    source: &S,
    offset: ByteIndex,
) -> Result<ByteIndex, GcScanError> {
    let len = source.len().as_usize();
    if offset.as_usize() > len {
        return Err(GcScanError::OffsetOutOfBounds {
            offset: offset.as_usize(),
            len,
        });
    }
    let is_continuation = source
        .slice(offset..offset + byte_len(1))
        .first()
        .is_some_and(|it| it & CONTINUATION_MASK == CONTINUATION_TAG);
    if is_continuation {
        return Err(GcScanError::OffsetNotOnCharBoundary {
            offset: offset.as_usize(),
        });
    }
    Ok(offset)
}

/// [`GraphemeScanner::decode`] with the default config.
#[must_use]
pub fn decode(bytes: &[u8]) -> GraphemeCluster { GraphemeScanner::default().decode(bytes) }

/// [`GraphemeScanner::decode_in_str`] with the default config.
#[must_use]
pub fn decode_in_str(text: &str) -> GraphemeCluster {
    GraphemeScanner::default().decode_in_str(text)
}

/// [`GraphemeScanner::decode_at`] with the default config.
pub fn decode_at<S: GraphemeSource + ?Sized>(
    source: &S,
    offset: impl Into<ByteIndex>,
) -> GraphemeCluster {
    GraphemeScanner::default().decode_at(source, offset)
}

/// [`GraphemeScanner::decode_last`] with the default config.
#[must_use]
pub fn decode_last(bytes: &[u8]) -> GraphemeCluster {
    GraphemeScanner::default().decode_last(bytes)
}

/// [`GraphemeScanner::decode_last_in_str`] with the default config.
#[must_use]
pub fn decode_last_in_str(text: &str) -> GraphemeCluster {
    GraphemeScanner::default().decode_last_in_str(text)
}

/// [`GraphemeScanner::decode_before`] with the default config.
pub fn decode_before<S: GraphemeSource + ?Sized>(
    source: &S,
    offset: impl Into<ByteIndex>,
) -> GraphemeCluster {
    GraphemeScanner::default().decode_before(source, offset)
}

/// [`GraphemeScanner::try_decode_at`] with the default config.
///
/// # Errors
///
/// [`GcScanError::OffsetOutOfBounds`] or [`GcScanError::OffsetNotOnCharBoundary`].
pub fn try_decode_at<S: GraphemeSource + ?Sized>(
    source: &S,
    offset: impl Into<ByteIndex>,
) -> CommonResult<GraphemeCluster> {
    GraphemeScanner::default().try_decode_at(source, offset)
}

/// [`GraphemeScanner::try_decode_before`] with the default config.
///
/// # Errors
///
/// [`GcScanError::OffsetOutOfBounds`] or [`GcScanError::OffsetNotOnCharBoundary`].
pub fn try_decode_before<S: GraphemeSource + ?Sized>(
    source: &S,
    offset: impl Into<ByteIndex>,
) -> CommonResult<GraphemeCluster> {
    GraphemeScanner::default().try_decode_before(source, offset)
}

/// [`GraphemeScanner::str_width`] with the default config.
#[must_use]
pub fn str_width(text: &str) -> ColWidth { GraphemeScanner::default().str_width(text) }

/// [`GraphemeScanner::cluster_count`] with the default config.
#[must_use]
pub fn cluster_count(text: &str) -> usize { GraphemeScanner::default().cluster_count(text) }
