// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod gap_buffer;
pub mod grapheme_source;

// Re-export.
pub use gap_buffer::*;
pub use grapheme_source::*;
