//! Proxy rule reconciler.
//!
//! Keeps a reverse proxy's backend-switching rules in sync with a
//! declarative rule set, and garbage-collects backends no longer
//! referenced by any rule or frontend default.
//!
//! # Architecture Overview
//!
//! ```text
//!   Mutations (add/delete rule)        One reconciliation pass
//!   ──────────────────────────┐      ┌────────────────────────────────┐
//!                             ▼      ▼                                │
//!                        ┌──────────────┐   dirty    ┌─────────────┐  │
//!                        │    rules     │──────────▶│  reconcile  │  │
//!                        │ store + key  │  rule sets │    pass     │  │
//!                        │  + compile   │◀──────────│             │  │
//!                        └──────────────┘  compiled  └──────┬──────┘  │
//!                                                           │         │
//!                                         active backends   ▼         │
//!                                                    ┌─────────────┐  │
//!                                                    │  backend GC │  │
//!                                                    └──────┬──────┘  │
//!                                                           │         │
//!                        ┌──────────────┐   ProxyClient     ▼         │
//!                        │    proxy     │◀──────────────────┴─────────┘
//!                        │ trait+models │        reload required? (bool)
//!                        └──────────────┘
//! ```
//!
//! The proxy evaluates switching rules top to bottom and stops at the
//! first match, so rule keys encode specificity: longer path prefixes
//! are published before shorter ones. The pass accumulates every
//! backend still referenced (frontend defaults, rule targets, the
//! reserved rate-limit backend) and deletes the rest.
//!
//! Single-threaded by design: apply a batch of mutations, then run one
//! pass. The boolean result tells the caller whether to reload the
//! proxy.

// Core subsystems
pub mod config;
pub mod proxy;
pub mod reconcile;
pub mod rules;

// Cross-cutting concerns
pub mod observability;

pub use config::ReconcilerConfig;
pub use proxy::{ProxyClient, ProxyError};
pub use reconcile::{ReconcileError, Reconciler};
pub use rules::{RoutingRule, RuleKey, RuleStore};
