//! Wire shapes exchanged with the proxy configuration API.
//!
//! These mirror what a dataplane API serializes, so all types derive
//! Serde traits.

use serde::{Deserialize, Serialize};

/// Traffic mode of a frontend listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontendMode {
    Http,
    Tcp,
}

/// A proxy entry point (listener).
///
/// Read-only from the engine's perspective except `default_backend`,
/// which [`set_default_backend`](crate::reconcile::set_default_backend)
/// rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Frontend {
    pub name: String,
    pub mode: FrontendMode,
    /// Backend that receives traffic when no switching rule matches.
    pub default_backend: String,
}

/// A named pool of upstream servers that can be a rule's target.
///
/// The engine only decides whether a backend name is still referenced;
/// it never creates backends.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Backend {
    pub name: String,
}

/// A conditional use-backend directive published to one frontend.
///
/// The proxy evaluates switching rules top to bottom and stops at the
/// first match, so `index` fixes the rule's position within the
/// frontend's list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SwitchingRule {
    /// Condition verb; the engine only ever emits the positive form `"if"`.
    pub cond: String,
    /// Compiled condition text, e.g. `{ req.hdr(host) -i example.com } { path_beg /a }`.
    pub cond_test: String,
    /// Destination backend name.
    pub backend: String,
    /// Zero-based insertion position within the frontend's rule list.
    pub index: i64,
}
