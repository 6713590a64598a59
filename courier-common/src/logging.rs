//! Logging setup for courier binaries and tests.

use tracing_subscriber::{
    EnvFilter, Layer, fmt::time::ChronoUtc, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Initialise the global tracing subscriber.
///
/// Honours `LOG_LEVEL` as an env-filter directive; by default only `courier`
/// targets are logged, at TRACE in debug builds and INFO otherwise.
pub fn init() {
    let default = if cfg!(debug_assertions) {
        "courier=trace"
    } else {
        "courier=info"
    };

    let filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_file(false)
                .with_line_number(false)
                .with_ansi(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_filter(filter),
        )
        .init();
}
