// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig};
use crate::ok;

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    display_preference: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_names(false);

    match display_preference {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps, like `gc_inspect`.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// Logging is **DISABLED** by **default**. If you don't call this function w/ a value
/// other than [`LevelFilter::OFF`], then the [`tracing::trace!`] events emitted by the
/// scanners go nowhere.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    tracing_subscriber::registry()
        .with(create_display_layer(
            it.get_level_filter(),
            it.get_display_preference(),
        ))
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Logging stays active until the returned guard is dropped. Returns `None` when the
/// level filter is [`LevelFilter::OFF`].
#[must_use]
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> Option<tracing::subscriber::DefaultGuard> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return None;
    }

    let subscriber = tracing_subscriber::registry().with(create_display_layer(
        it.get_level_filter(),
        it.get_display_preference(),
    ));
    Some(tracing::subscriber::set_default(subscriber))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_does_not_install_anything() {
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
        assert!(try_initialize_logging_thread_local(LevelFilter::OFF).is_none());
    }

    #[test]
    fn test_thread_local_guard() {
        let guard = try_initialize_logging_thread_local(LevelFilter::TRACE);
        assert!(guard.is_some());
        tracing::trace!(message = "thread local logging is active");
        drop(guard);
    }
}
