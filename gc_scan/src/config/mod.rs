// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod width_config;

// Re-export.
pub use width_config::*;
