// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per code point building blocks: the boundary class of a code point, the UAX #29
//! rule machine that consumes those classes one at a time, and the display width of a
//! single code point.

// Attach sources.
pub mod break_state;
pub mod char_width;
pub mod grapheme_property;

// Re-export.
pub use break_state::*;
pub use char_width::*;
pub use grapheme_property::*;
