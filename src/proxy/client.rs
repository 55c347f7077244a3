//! Client trait for driving the proxy's configuration surface.
//!
//! # Responsibilities
//! - List and edit frontends
//! - List and delete backends
//! - Replace a frontend's switching-rule list
//!
//! # Design Decisions
//! - Synchronous calls; timeouts and retries belong to the implementation
//! - One opaque error type: the reconciler decides per call site whether a
//!   failure is transient (skip the pass) or fatal (abort)

use thiserror::Error;

use crate::proxy::models::{Backend, Frontend, SwitchingRule};

/// Error returned by a [`ProxyClient`] operation.
#[derive(Debug, Clone, Error)]
#[error("proxy api error: {message}")]
pub struct ProxyError {
    pub message: String,
}

impl ProxyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Configuration operations the reconciler needs from the proxy.
///
/// Implemented by the concrete transport (dataplane API client, admin
/// socket) outside this crate, and by the mock in the test suite.
pub trait ProxyClient {
    /// All frontends currently configured in the proxy.
    fn list_frontends(&self) -> Result<Vec<Frontend>, ProxyError>;

    /// Fetch a single frontend by name.
    fn get_frontend(&self, name: &str) -> Result<Frontend, ProxyError>;

    /// Write back an edited frontend.
    fn update_frontend(&mut self, frontend: Frontend) -> Result<(), ProxyError>;

    /// All backends currently configured in the proxy.
    fn list_backends(&self) -> Result<Vec<Backend>, ProxyError>;

    /// Remove a backend by name.
    fn delete_backend(&mut self, name: &str) -> Result<(), ProxyError>;

    /// Drop every switching rule published for a frontend.
    fn delete_all_switching_rules(&mut self, frontend: &str) -> Result<(), ProxyError>;

    /// Publish one switching rule at `rule.index` within the frontend's list.
    fn create_switching_rule(
        &mut self,
        frontend: &str,
        rule: SwitchingRule,
    ) -> Result<(), ProxyError>;
}
