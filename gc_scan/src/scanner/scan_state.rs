// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BreakState, ByteLength, ColWidth, GraphemeProperty};

/// Opaque resumption token for [`crate::GraphemeScanner::scan`].
///
/// Every scan returns the state of the rule machine at the end of the cluster it found,
/// together with the property of the code point that starts the *next* cluster. Passing
/// that back in when scanning at the exact offset where the cluster ended skips
/// classifying that code point again, and gives the same result as
/// [`ScanState::Unknown`] would.
///
/// A [`ScanState::Known`] value is only meaningful at the offset that produced it. Use
/// [`ScanState::Unknown`] anywhere else.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ScanState {
    #[default]
    Unknown,
    Known {
        break_state: BreakState,
        property: GraphemeProperty,
    },
}

impl ScanState {
    #[must_use]
    pub fn known(break_state: BreakState, property: GraphemeProperty) -> Self {
        Self::Known {
            break_state,
            property,
        }
    }
}

/// One grapheme cluster located by a scan: how many bytes it covers, how many columns
/// it takes on a terminal, and the state to resume scanning with right after it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ClusterSpan {
    pub byte_len: ByteLength,
    pub width: ColWidth,
    pub state: ScanState,
}

impl ClusterSpan {
    /// Zero length span that hands `state` through untouched.
    #[must_use]
    pub fn empty(state: ScanState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.byte_len.is_zero() }
}
