// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Locate grapheme clusters in a [`crate::GraphemeSource`], going forwards
//! ([`GraphemeScanner::scan`]) or backwards ([`GraphemeScanner::locate_before`]), and
//! turn the located bytes into a [`GraphemeCluster`].

// Attach sources.
pub mod backward_locate;
pub mod cluster_iter;
pub mod cluster_runes;
pub mod decode_api;
pub mod forward_scan;
pub mod scan_state;

// Re-export.
pub use backward_locate::*;
pub use cluster_iter::*;
pub use cluster_runes::*;
pub use decode_api::*;
pub use forward_scan::*;
pub use scan_state::*;
