// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # gc_scan
//!
//! Find grapheme clusters (user perceived characters) in UTF-8 text, in both
//! directions, and measure how many terminal columns each one takes.
//!
//! A grapheme cluster is what a user thinks of as "one character": `e` followed by a
//! combining acute accent, a flag made of two regional indicators, a family emoji glued
//! together with zero width joiners, a Hangul syllable spelled out in jamo. Editors move
//! the caret over them, delete them, and lay them out as units. This crate answers:
//!
//! 1. Where does the cluster that starts at this offset end, and how wide is it?
//!    ([`GraphemeScanner::scan`]).
//! 2. Where does the cluster that ends at this offset start? ([`GraphemeScanner::locate_before`]).
//!    This gives exactly the answer a forward scan from the start of the text would.
//! 3. What code points make up that cluster? ([`GraphemeCluster`]).
//!
//! ## Sources
//!
//! Text is read through the [`GraphemeSource`] trait, which is implemented for `[u8]`,
//! `str`, `Vec<u8>`, `String`, and the editor style [`GapBuffer`]. The bytes don't have
//! to be valid UTF-8; ill-formed sequences decode to `U+FFFD`.
//!
//! ## Resuming
//!
//! Each forward scan returns a [`ScanState`] that can be passed to the scan starting
//! where the previous one ended. Walking a whole buffer this way classifies every code
//! point exactly once. [`GraphemeClusters`] does this for you.
//!
//! ## Width
//!
//! Widths follow what terminals actually do, not a plain sum of per code point widths:
//! a flag is 2 columns, an emoji with a skin tone modifier is 2 columns, a pictograph
//! followed by `U+FE0E` is 1 column. East Asian Ambiguous characters are narrow unless a
//! [`WidthConfig`] says otherwise (see [`WidthConfig::from_env()`]).
//!
//! ```
//! use gc_scan::{byte_index, clusters, decode_before, str_width};
//!
//! let text = "Ne\u{301}e 🇯🇵!";
//!
//! assert_eq!(clusters(text).count(), 6);
//! assert_eq!(str_width(text).as_usize(), 7);
//!
//! // The cluster right before the flag's end, found going backwards.
//! let flag = decode_before(text, byte_index(14));
//! assert_eq!(flag.base, '\u{1F1EF}');
//! assert_eq!(flag.combining.as_slice(), &['\u{1F1F5}']);
//! assert_eq!(flag.width.as_usize(), 2);
//! ```
//!
//! ## Logging
//!
//! The scanners emit [`tracing`] events at the `trace` level. Nothing is printed unless
//! a subscriber is installed, e.g. with [`log::try_initialize_logging_global`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod common;
pub mod config;
pub mod decl_macros;
pub mod log;
pub mod scanner;
pub mod segmentation;
pub mod source;
pub mod units;

// Re-export. `log` is left namespaced.
pub use common::*;
pub use config::*;
pub use scanner::*;
pub use segmentation::*;
pub use source::*;
pub use units::*;
