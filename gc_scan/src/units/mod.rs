// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod byte_index;
pub mod byte_length;
pub mod col_width;

// Re-export.
pub use byte_index::*;
pub use byte_length::*;
pub use col_width::*;
