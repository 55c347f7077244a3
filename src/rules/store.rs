//! In-memory rule store with dirty tracking.
//!
//! # Responsibilities
//! - Own one rule set per frontend (created lazily, kept for its lifetime)
//! - Mark a frontend dirty on any mutation
//! - Hand the reconciler each rule set in evaluation order
//!
//! # Design Decisions
//! - Mutations take `&mut self`; callers running from multiple threads
//!   wrap the store (or the controller owning it) in their own mutex
//!   covering the full mutate-and-mark-dirty operation
//! - Dirty entries are cleared per frontend once its rules are
//!   republished, never wholesale

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::rules::key::RuleKey;

/// One declarative routing rule: traffic matching host/path (HTTP) or
/// host-as-SNI (TCP) goes to `backend`.
///
/// Immutable once stored; an update replaces the whole rule under the
/// same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingRule {
    pub host: String,
    pub path: String,
    pub backend: String,
    /// Origin namespace of the rule, carried for log context only.
    pub namespace: String,
}

/// Per-frontend rule sets plus the set of frontends needing republication.
#[derive(Debug, Default)]
pub struct RuleStore {
    rules: HashMap<String, BTreeMap<RuleKey, RoutingRule>>,
    dirty: HashSet<String>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `rule` under `key` for each named frontend and
    /// mark them dirty. Always succeeds.
    pub fn add_rule(&mut self, key: &RuleKey, rule: &RoutingRule, frontends: &[&str]) {
        for name in frontends {
            self.rules
                .entry((*name).to_owned())
                .or_default()
                .insert(key.clone(), rule.clone());
            self.dirty.insert((*name).to_owned());
        }
    }

    /// Remove `key` from each named frontend's rule set, if present, and
    /// mark them dirty either way.
    pub fn delete_rule(&mut self, key: &RuleKey, frontends: &[&str]) {
        for name in frontends {
            if let Some(set) = self.rules.get_mut(*name) {
                set.remove(key);
            }
            self.dirty.insert((*name).to_owned());
        }
    }

    /// The rule set for one frontend, in evaluation order.
    pub fn rules_for(&self, frontend: &str) -> Option<&BTreeMap<RuleKey, RoutingRule>> {
        self.rules.get(frontend)
    }

    /// Whether any frontend needs republication.
    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn is_dirty(&self, frontend: &str) -> bool {
        self.dirty.contains(frontend)
    }

    /// Clear the dirty flag after a successful republication.
    pub fn clear_dirty(&mut self, frontend: &str) {
        self.dirty.remove(frontend);
    }
}
