//! Rule identity and precedence encoding.
//!
//! # Responsibilities
//! - Identify a rule uniquely within one frontend's rule set
//! - Encode match specificity so ascending key order is evaluation order
//!
//! # Design Decisions
//! - The proxy stops at the first matching switching rule, so a longer
//!   path prefix must be published before any prefix of it. Sorting raw
//!   paths ascending gives the opposite (`/a` before `/a/b`), so the key
//!   embeds a descending path-length field between host and path
//! - Keys are opaque strings; callers with non-path rules can still
//!   supply their own via `from_raw` and join the same total order

use std::fmt;

/// Field separator inside an encoded key. Hostnames never contain it.
const SEP: char = '|';

/// Width of the zero-padded length field; paths longer than this many
/// bytes are clamped for ordering purposes only.
const LEN_WIDTH: usize = 4;
const LEN_CEILING: usize = 9999;

/// Identifier and sort key for one routing rule within a frontend.
///
/// Ordering is plain lexicographic on the encoded string. Keys built by
/// [`RuleKey::new`] group by host and, within a host, place longer paths
/// first:
///
/// ```
/// use proxy_reconciler::rules::RuleKey;
///
/// let a = RuleKey::new("example.com", "/a");
/// let ab = RuleKey::new("example.com", "/a/b");
/// assert!(ab < a);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleKey(String);

impl RuleKey {
    /// Encode a host/path pair. Injective for any host without `'|'`,
    /// so keys are unique per (host, path) within a frontend.
    pub fn new(host: &str, path: &str) -> Self {
        let clamped = path.len().min(LEN_CEILING);
        RuleKey(format!(
            "{host}{SEP}{:0width$}{SEP}{path}",
            LEN_CEILING - clamped,
            width = LEN_WIDTH,
        ))
    }

    /// Wrap a caller-chosen opaque key. It participates in the same
    /// lexicographic order as encoded keys.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        RuleKey(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
