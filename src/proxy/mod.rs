//! Proxy configuration collaborator.
//!
//! # Data Flow
//! ```text
//! Reconciler
//!     → client.rs (ProxyClient trait: list/get/update frontends,
//!       list/delete backends, replace switching rules)
//!     → models.rs (Frontend, Backend, SwitchingRule wire shapes)
//!
//! Concrete transports (dataplane HTTP API, admin socket) implement
//! ProxyClient outside this crate.
//! ```
//!
//! # Design Decisions
//! - The engine never talks to the proxy directly; everything goes
//!   through the trait so tests can substitute a mock
//! - Calls are synchronous and not retried here; a failure aborts the pass
//! - This crate deletes backends but never creates them

pub mod client;
pub mod models;

pub use client::{ProxyClient, ProxyError};
pub use models::{Backend, Frontend, FrontendMode, SwitchingRule};
