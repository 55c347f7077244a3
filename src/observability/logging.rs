//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the embedding process
//! - Respect RUST_LOG, falling back to the configured filter

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_filter` is used when RUST_LOG is unset, e.g.
/// `"proxy_reconciler=info"`. Call once at process start; a second call
/// panics, so this belongs in the embedding binary, not the library.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
