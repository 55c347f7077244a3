//! Declarative routing rules.
//!
//! # Data Flow
//! ```text
//! Mutation (add/delete rule)
//!     → store.rs (per-frontend rule sets, dirty set)
//!     → key.rs (total order: more specific rules sort first)
//!
//! Reconciliation pass:
//!     store.rs (one frontend's rule set, in key order)
//!     → compile.rs (ordered proxy match conditions)
//!     → published as switching rules
//! ```
//!
//! # Design Decisions
//! - Rule sets are BTreeMaps keyed by RuleKey, so evaluation order is the
//!   map's iteration order, not a sort bolted onto an unordered container
//! - First match wins in the proxy, so the key encoding puts longer path
//!   prefixes before shorter ones
//! - Deterministic: the same rule set always compiles to identical output

pub mod compile;
pub mod key;
pub mod store;

pub use compile::{compile_switching_rules, CompiledRule};
pub use key::RuleKey;
pub use store::{RoutingRule, RuleStore};
