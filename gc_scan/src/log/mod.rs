// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`tracing`] subscriber setup for binaries and tests that want to see what the scanners are
//! doing. The library itself only emits events; it never installs a subscriber.

// Attach sources.
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
