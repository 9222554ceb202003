// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Where the formatted log output goes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

/// Configuration for [`crate::log::try_initialize_logging_global`] and
/// [`crate::log::try_initialize_logging_thread_local`].
///
/// Logging is **DISABLED** by **default** ([`LevelFilter::OFF`]). Anything that
/// converts into a [`TracingConfig`] can be passed to the init functions:
/// - a [`LevelFilter`] (output goes to `stderr`),
/// - a `(LevelFilter, DisplayPreference)` tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub display_preference: DisplayPreference,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            display_preference: DisplayPreference::default(),
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_display_preference(&self) -> DisplayPreference { self.display_preference }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..Default::default()
        }
    }
}

impl From<(LevelFilter, DisplayPreference)> for TracingConfig {
    fn from((level_filter, display_preference): (LevelFilter, DisplayPreference)) -> Self {
        Self {
            level_filter,
            display_preference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_is_off() {
        let it = TracingConfig::default();
        assert_eq2!(it.get_level_filter(), LevelFilter::OFF);
        assert_eq2!(it.get_display_preference(), DisplayPreference::Stderr);
    }

    #[test]
    fn test_conversions() {
        let it: TracingConfig = LevelFilter::DEBUG.into();
        assert_eq2!(it.get_level_filter(), LevelFilter::DEBUG);
        assert_eq2!(it.get_display_preference(), DisplayPreference::Stderr);

        let it: TracingConfig = (LevelFilter::TRACE, DisplayPreference::Stdout).into();
        assert_eq2!(it.get_level_filter(), LevelFilter::TRACE);
        assert_eq2!(it.get_display_preference(), DisplayPreference::Stdout);
    }
}
