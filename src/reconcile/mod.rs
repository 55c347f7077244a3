//! Reconciliation of the rule store against live proxy configuration.
//!
//! # Data Flow
//! ```text
//! RuleStore (dirty frontends)
//!     → pass.rs (recompile + republish switching rules per dirty frontend,
//!       accumulate the active-backend set across ALL frontends)
//!     → gc.rs (delete configured backends absent from the active set)
//!     → Return: reload required? (bool)
//!
//! defaults.rs rewrites the fallback target of the two entry frontends,
//! outside the pass.
//! ```
//!
//! # Design Decisions
//! - One synchronous pass, no internal parallelism; dirty frontends are
//!   independent so their iteration order does not matter
//! - Failed list/fetch is transient: the pass returns unchanged and the
//!   dirty set is kept so the next pass retries
//! - Failed create/delete after a successful list is fatal: continuing
//!   would leave the proxy in an unknown partial configuration

pub mod defaults;
pub mod gc;
pub mod pass;

use thiserror::Error;

use crate::proxy::ProxyError;

pub use defaults::set_default_backend;
pub use gc::clear_backends;
pub use pass::Reconciler;

/// Fatal failure that aborts a reconciliation pass.
///
/// Transient conditions (failed lists, rules with no usable condition)
/// never surface here; they are logged and skipped inside the pass.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// A switching-rule write failed mid-publication. Rules already
    /// republished for earlier frontends remain applied.
    #[error("publishing switching rules for frontend {frontend} failed: {source}")]
    Publish {
        frontend: String,
        source: ProxyError,
    },

    /// Deleting a stale backend failed.
    #[error("deleting stale backend {backend} failed: {source}")]
    BackendDelete {
        backend: String,
        source: ProxyError,
    },
}
