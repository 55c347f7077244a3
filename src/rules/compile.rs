//! Compilation of routing rules into proxy match conditions.
//!
//! # Responsibilities
//! - Turn one frontend's rule set into an ordered condition list
//! - Render HTTP rules as host-header + path-prefix conditions
//! - Render TCP rules as TLS server-name conditions
//!
//! # Design Decisions
//! - Input iterates in key order, so output order is the evaluation
//!   order the proxy will use (longest path prefix first, see key.rs)
//! - A rule with no usable condition is skipped with a warning rather
//!   than failing the pass; publishing it would match all traffic

use std::collections::BTreeMap;

use crate::proxy::models::{Frontend, FrontendMode};
use crate::rules::key::RuleKey;
use crate::rules::store::RoutingRule;

/// One compiled switching directive, in publication order.
///
/// The condition verb is always the positive `if`; the reconciler adds
/// it together with the position index when publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    pub cond_test: String,
    pub backend: String,
}

/// Compile a frontend's rule set into an ordered condition list.
///
/// Deterministic: the same rule set always produces byte-identical
/// output.
pub fn compile_switching_rules(
    frontend: &Frontend,
    rules: &BTreeMap<RuleKey, RoutingRule>,
) -> Vec<CompiledRule> {
    let mut compiled = Vec::with_capacity(rules.len());

    for (key, rule) in rules {
        let cond_test = match frontend.mode {
            FrontendMode::Http => {
                let mut cond_test = String::new();
                if !rule.host.is_empty() {
                    cond_test = format!("{{ req.hdr(host) -i {} }} ", rule.host);
                }
                if !rule.path.is_empty() {
                    cond_test = format!("{cond_test}{{ path_beg {} }}", rule.path);
                }
                if cond_test.is_empty() {
                    tracing::warn!(
                        frontend = %frontend.name,
                        backend = %rule.backend,
                        namespace = %rule.namespace,
                        key = %key,
                        "Both host and path are empty, skipping rule"
                    );
                    continue;
                }
                cond_test
            }
            FrontendMode::Tcp => {
                if rule.host.is_empty() {
                    tracing::warn!(
                        frontend = %frontend.name,
                        backend = %rule.backend,
                        namespace = %rule.namespace,
                        key = %key,
                        "Empty SNI, skipping rule"
                    );
                    continue;
                }
                format!("{{ req_ssl_sni -i {} }} ", rule.host)
            }
        };
        compiled.push(CompiledRule {
            cond_test,
            backend: rule.backend.clone(),
        });
    }

    compiled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_frontend() -> Frontend {
        Frontend {
            name: "web".into(),
            mode: FrontendMode::Http,
            default_backend: "fallback".into(),
        }
    }

    fn tcp_frontend() -> Frontend {
        Frontend {
            name: "web-tls".into(),
            mode: FrontendMode::Tcp,
            default_backend: "fallback".into(),
        }
    }

    fn rule(host: &str, path: &str, backend: &str) -> RoutingRule {
        RoutingRule {
            host: host.into(),
            path: path.into(),
            backend: backend.into(),
            namespace: "default".into(),
        }
    }

    fn rule_set(rules: &[RoutingRule]) -> BTreeMap<RuleKey, RoutingRule> {
        rules
            .iter()
            .map(|r| (RuleKey::new(&r.host, &r.path), r.clone()))
            .collect()
    }

    #[test]
    fn test_longest_prefix_compiles_first() {
        let rules = rule_set(&[
            rule("example.com", "/a", "svc-a"),
            rule("example.com", "/a/b/c", "svc-abc"),
            rule("example.com", "/a/b", "svc-ab"),
        ]);

        let compiled = compile_switching_rules(&http_frontend(), &rules);
        let backends: Vec<&str> = compiled.iter().map(|c| c.backend.as_str()).collect();
        assert_eq!(backends, vec!["svc-abc", "svc-ab", "svc-a"]);
        assert_eq!(
            compiled[0].cond_test,
            "{ req.hdr(host) -i example.com } { path_beg /a/b/c }"
        );
    }

    #[test]
    fn test_compilation_is_deterministic() {
        let rules = rule_set(&[
            rule("a.example.com", "/x", "svc-1"),
            rule("b.example.com", "/x/y", "svc-2"),
            rule("b.example.com", "", "svc-3"),
        ]);

        let first = compile_switching_rules(&http_frontend(), &rules);
        let second = compile_switching_rules(&http_frontend(), &rules);
        assert_eq!(first, second);
    }

    #[test]
    fn test_http_host_only_and_path_only() {
        let rules = rule_set(&[rule("example.com", "", "svc-host")]);
        let compiled = compile_switching_rules(&http_frontend(), &rules);
        assert_eq!(compiled[0].cond_test, "{ req.hdr(host) -i example.com } ");

        let rules = rule_set(&[rule("", "/a", "svc-path")]);
        let compiled = compile_switching_rules(&http_frontend(), &rules);
        assert_eq!(compiled[0].cond_test, "{ path_beg /a }");
    }

    #[test]
    fn test_http_empty_rule_skipped() {
        let rules = rule_set(&[rule("", "", "svc-none"), rule("example.com", "/a", "svc-a")]);
        let compiled = compile_switching_rules(&http_frontend(), &rules);
        assert_eq!(compiled.len(), 1);
        assert_eq!(compiled[0].backend, "svc-a");
    }

    #[test]
    fn test_tcp_uses_sni_and_skips_empty_host() {
        let rules = rule_set(&[rule("example.com", "", "svc-tls"), rule("", "", "svc-none")]);
        let compiled = compile_switching_rules(&tcp_frontend(), &rules);
        assert_eq!(compiled.len(), 1);
        assert_eq!(compiled[0].cond_test, "{ req_ssl_sni -i example.com } ");
        assert_eq!(compiled[0].backend, "svc-tls");
    }
}
