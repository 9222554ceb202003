// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::FusedIterator;

use super::{GraphemeCluster, GraphemeScanner, ScanState};
use crate::{ByteIndex, GraphemeSource, byte_index};

/// Iterator over the grapheme clusters of a source, front to back. Yields the byte
/// offset where each cluster starts, and the cluster.
///
/// The [`ScanState`] is threaded from one cluster to the next, so each code point is
/// classified once.
///
/// ```
/// use gc_scan::clusters;
///
/// let text = "e\u{301}🇺🇸!";
/// let offsets: Vec<usize> = clusters(text).map(|(offset, _)| offset.as_usize()).collect();
/// assert_eq!(offsets, vec![0, 3, 11]);
/// ```
#[derive(Debug, Clone)]
pub struct GraphemeClusters<'a, S: GraphemeSource + ?Sized> {
    scanner: GraphemeScanner,
    source: &'a S,
    offset: ByteIndex,
    state: ScanState,
}

impl<S: GraphemeSource + ?Sized> Iterator for GraphemeClusters<'_, S> {
    type Item = (ByteIndex, GraphemeCluster);

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.scanner.scan(self.source, self.offset, self.state);
        if span.is_empty() {
            return None;
        }

        let start = self.offset;
        let end = start + span.byte_len;
        let bytes = self.source.slice(start..end);

        self.offset = end;
        self.state = span.state;

        Some((start, GraphemeCluster::from_bytes(&bytes, span.width)))
    }
}

impl<S: GraphemeSource + ?Sized> FusedIterator for GraphemeClusters<'_, S> {}

/// Iterator over the grapheme clusters of a source, back to front, built on
/// [`GraphemeScanner::locate_before`]. Yields the same `(offset, cluster)` pairs as
/// [`GraphemeClusters`], in reverse.
#[derive(Debug, Clone)]
pub struct GraphemeClustersRev<'a, S: GraphemeSource + ?Sized> {
    scanner: GraphemeScanner,
    source: &'a S,
    end: ByteIndex,
}

impl<S: GraphemeSource + ?Sized> Iterator for GraphemeClustersRev<'_, S> {
    type Item = (ByteIndex, GraphemeCluster);

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.scanner.locate_before(self.source, self.end);
        if span.is_empty() {
            return None;
        }

        let end = self.end;
        let start = end - span.byte_len;
        let bytes = self.source.slice(start..end);

        self.end = start;

        Some((start, GraphemeCluster::from_bytes(&bytes, span.width)))
    }
}

impl<S: GraphemeSource + ?Sized> FusedIterator for GraphemeClustersRev<'_, S> {}

impl GraphemeScanner {
    /// Clusters of `source`, front to back.
    pub fn clusters<'a, S: GraphemeSource + ?Sized>(
        &self,
        source: &'a S,
    ) -> GraphemeClusters<'a, S> {
        GraphemeClusters {
            scanner: *self,
            source,
            offset: byte_index(0),
            state: ScanState::Unknown,
        }
    }

    /// Clusters of `source`, back to front.
    pub fn clusters_rev<'a, S: GraphemeSource + ?Sized>(
        &self,
        source: &'a S,
    ) -> GraphemeClustersRev<'a, S> {
        GraphemeClustersRev {
            scanner: *self,
            source,
            end: byte_index(source.len().as_usize()),
        }
    }
}

/// [`GraphemeScanner::clusters`] with the default [`crate::WidthConfig`].
pub fn clusters<S: GraphemeSource + ?Sized>(source: &S) -> GraphemeClusters<'_, S> {
    GraphemeScanner::default().clusters(source)
}

/// [`GraphemeScanner::clusters_rev`] with the default [`crate::WidthConfig`].
pub fn clusters_rev<S: GraphemeSource + ?Sized>(source: &S) -> GraphemeClustersRev<'_, S> {
    GraphemeScanner::default().clusters_rev(source)
}
