//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the reconciler.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    /// Names of the two well-known entry frontends.
    pub entry_frontends: EntryFrontendsConfig,

    /// Reserved backend used as a rate-limiting target. Always kept
    /// alive by the garbage collector even though no rule targets it.
    pub rate_limit_backend: String,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            entry_frontends: EntryFrontendsConfig::default(),
            rate_limit_backend: default_rate_limit_backend(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// The proxy's HTTP and HTTPS ingress points.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EntryFrontendsConfig {
    pub http: String,
    pub https: String,
}

impl Default for EntryFrontendsConfig {
    fn default() -> Self {
        Self {
            http: "http".to_string(),
            https: "https".to_string(),
        }
    }
}

fn default_rate_limit_backend() -> String {
    "RateLimit".to_string()
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter used when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "proxy_reconciler=info".to_string(),
        }
    }
}
