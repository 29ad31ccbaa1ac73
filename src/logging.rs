//! # Structured Logging Module
//!
//! Console logging setup for the workfile build core. Hosting applications
//! that already install their own `tracing` subscriber keep it; this
//! initializer backs off when a global subscriber exists.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured console logging.
///
/// The filter comes from `RUST_LOG` when set and defaults to `info`.
/// Safe to call multiple times.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_filter(filter),
        );

        // Another subscriber may already be installed, keep it.
        let _ = subscriber.try_init();
    });
}
