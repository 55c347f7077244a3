//! Shared test double for the proxy configuration collaborator.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use proxy_reconciler::proxy::{
    Backend, Frontend, FrontendMode, ProxyClient, ProxyError, SwitchingRule,
};

/// In-memory proxy configuration with per-operation failure switches.
#[derive(Debug, Default)]
pub struct MockProxy {
    pub frontends: BTreeMap<String, Frontend>,
    pub backends: BTreeSet<String>,
    pub switching_rules: HashMap<String, Vec<SwitchingRule>>,
    /// Number of replace-all publications seen per frontend.
    pub publish_count: HashMap<String, usize>,

    pub fail_list_frontends: bool,
    pub fail_list_backends: bool,
    pub fail_delete_all_rules: bool,
    pub fail_create_rule: bool,
    pub fail_delete_backend: bool,
    pub fail_update_frontend: bool,
    /// Frontend names whose fetch fails.
    pub fail_get_frontend: HashSet<String>,
}

impl MockProxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_frontend(&mut self, name: &str, mode: FrontendMode, default_backend: &str) {
        self.frontends.insert(
            name.to_owned(),
            Frontend {
                name: name.to_owned(),
                mode,
                default_backend: default_backend.to_owned(),
            },
        );
    }

    #[allow(dead_code)]
    pub fn add_backend(&mut self, name: &str) {
        self.backends.insert(name.to_owned());
    }

    /// Published rules for one frontend, in evaluation order.
    #[allow(dead_code)]
    pub fn rules_for(&self, frontend: &str) -> &[SwitchingRule] {
        self.switching_rules
            .get(frontend)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl ProxyClient for MockProxy {
    fn list_frontends(&self) -> Result<Vec<Frontend>, ProxyError> {
        if self.fail_list_frontends {
            return Err(ProxyError::new("frontend listing unavailable"));
        }
        Ok(self.frontends.values().cloned().collect())
    }

    fn get_frontend(&self, name: &str) -> Result<Frontend, ProxyError> {
        if self.fail_get_frontend.contains(name) {
            return Err(ProxyError::new(format!("frontend {name} unavailable")));
        }
        self.frontends
            .get(name)
            .cloned()
            .ok_or_else(|| ProxyError::new(format!("no such frontend {name}")))
    }

    fn update_frontend(&mut self, frontend: Frontend) -> Result<(), ProxyError> {
        if self.fail_update_frontend {
            return Err(ProxyError::new("frontend update rejected"));
        }
        self.frontends.insert(frontend.name.clone(), frontend);
        Ok(())
    }

    fn list_backends(&self) -> Result<Vec<Backend>, ProxyError> {
        if self.fail_list_backends {
            return Err(ProxyError::new("backend listing unavailable"));
        }
        Ok(self
            .backends
            .iter()
            .map(|name| Backend { name: name.clone() })
            .collect())
    }

    fn delete_backend(&mut self, name: &str) -> Result<(), ProxyError> {
        if self.fail_delete_backend {
            return Err(ProxyError::new("backend deletion rejected"));
        }
        self.backends.remove(name);
        Ok(())
    }

    fn delete_all_switching_rules(&mut self, frontend: &str) -> Result<(), ProxyError> {
        if self.fail_delete_all_rules {
            return Err(ProxyError::new("switching rule wipe rejected"));
        }
        self.switching_rules.remove(frontend);
        *self.publish_count.entry(frontend.to_owned()).or_default() += 1;
        Ok(())
    }

    fn create_switching_rule(
        &mut self,
        frontend: &str,
        rule: SwitchingRule,
    ) -> Result<(), ProxyError> {
        if self.fail_create_rule {
            return Err(ProxyError::new("switching rule rejected"));
        }
        let rules = self.switching_rules.entry(frontend.to_owned()).or_default();
        let index = (rule.index as usize).min(rules.len());
        rules.insert(index, rule);
        Ok(())
    }
}
