//! The reconciliation pass.
//!
//! # Responsibilities
//! - Republish switching rules for every dirty frontend
//! - Accumulate the set of backends still referenced anywhere
//! - Report whether the proxy needs a reload
//!
//! # Design Decisions
//! - The active-backend set is computed over ALL frontends, not just
//!   dirty ones; the cleanup in gc.rs must see every live reference
//! - Replace-all semantics per frontend: existing rules are dropped and
//!   the freshly compiled list is published in order
//! - A publish failure aborts the pass before the dirty flag is cleared,
//!   so the frontend is retried on the next pass

use std::collections::HashSet;

use crate::config::ReconcilerConfig;
use crate::proxy::{ProxyClient, SwitchingRule};
use crate::reconcile::{gc, ReconcileError};
use crate::rules::{compile_switching_rules, RoutingRule, RuleKey, RuleStore};

/// Condition verb for every published rule; only positive matches are
/// ever emitted.
const COND_IF: &str = "if";

/// Owns the rule store and drives reconciliation against a proxy.
///
/// Designed for a single control loop: apply a batch of rule mutations,
/// then call [`run`](Reconciler::run) once. Concurrent callers must
/// wrap the whole controller in a mutex.
#[derive(Debug)]
pub struct Reconciler {
    store: RuleStore,
    entry_http: String,
    entry_https: String,
    rate_limit_backend: String,
}

impl Reconciler {
    pub fn new(config: &ReconcilerConfig) -> Self {
        Self {
            store: RuleStore::new(),
            entry_http: config.entry_frontends.http.clone(),
            entry_https: config.entry_frontends.https.clone(),
            rate_limit_backend: config.rate_limit_backend.clone(),
        }
    }

    /// Insert or overwrite a rule for each named frontend and mark them
    /// dirty.
    pub fn add_rule(&mut self, key: &RuleKey, rule: &RoutingRule, frontends: &[&str]) {
        self.store.add_rule(key, rule, frontends);
    }

    /// Delete a rule from each named frontend (no-op if absent) and mark
    /// them dirty.
    pub fn delete_rule(&mut self, key: &RuleKey, frontends: &[&str]) {
        self.store.delete_rule(key, frontends);
    }

    /// Read access to the rule store, mainly for inspection.
    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Run one reconciliation pass.
    ///
    /// Returns whether the proxy needs a reload to activate the new
    /// configuration. A transient listing failure returns `Ok(false)`
    /// with nothing changed; a write failure aborts with a
    /// [`ReconcileError`], leaving already-completed frontends applied.
    pub fn run(&mut self, client: &mut dyn ProxyClient) -> Result<bool, ReconcileError> {
        if !self.store.has_dirty() {
            return Ok(false);
        }
        let frontends = match client.list_frontends() {
            Ok(frontends) => frontends,
            Err(err) => {
                tracing::warn!(error = %err, "Listing frontends failed, abandoning pass");
                return Ok(false);
            }
        };

        let mut needs_reload = false;
        let mut active_backends: HashSet<String> =
            HashSet::from([self.rate_limit_backend.clone()]);

        for frontend in &frontends {
            active_backends.insert(frontend.default_backend.clone());
            let Some(rules) = self.store.rules_for(&frontend.name) else {
                continue;
            };
            for rule in rules.values() {
                active_backends.insert(rule.backend.clone());
            }
            if !self.store.is_dirty(&frontend.name) {
                continue;
            }

            let compiled = compile_switching_rules(frontend, rules);
            client
                .delete_all_switching_rules(&frontend.name)
                .map_err(|source| ReconcileError::Publish {
                    frontend: frontend.name.clone(),
                    source,
                })?;
            let rule_count = compiled.len();
            for (index, rule) in compiled.into_iter().enumerate() {
                client
                    .create_switching_rule(
                        &frontend.name,
                        SwitchingRule {
                            cond: COND_IF.to_owned(),
                            cond_test: rule.cond_test,
                            backend: rule.backend,
                            index: index as i64,
                        },
                    )
                    .map_err(|source| ReconcileError::Publish {
                        frontend: frontend.name.clone(),
                        source,
                    })?;
            }
            tracing::debug!(
                frontend = %frontend.name,
                rules = rule_count,
                "Republished switching rules"
            );
            needs_reload = true;
            self.store.clear_dirty(&frontend.name);
        }

        let deleted = gc::clear_backends(client, &active_backends)?;
        Ok(needs_reload || deleted)
    }

    /// Point the fallback target of both entry frontends at `backend`.
    /// Best-effort across the two; see
    /// [`set_default_backend`](crate::reconcile::set_default_backend).
    pub fn set_default_backend(
        &self,
        client: &mut dyn ProxyClient,
        backend: &str,
    ) -> Result<(), crate::proxy::ProxyError> {
        crate::reconcile::defaults::set_default_backend(
            client,
            &self.entry_http,
            &self.entry_https,
            backend,
        )
    }
}
