//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check names are non-empty and entry frontends are distinct
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: ReconcilerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::ReconcilerConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &ReconcilerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.entry_frontends.http.is_empty() {
        errors.push(ValidationError {
            field: "entry_frontends.http",
            message: "must not be empty".into(),
        });
    }
    if config.entry_frontends.https.is_empty() {
        errors.push(ValidationError {
            field: "entry_frontends.https",
            message: "must not be empty".into(),
        });
    }
    if !config.entry_frontends.http.is_empty()
        && config.entry_frontends.http == config.entry_frontends.https
    {
        errors.push(ValidationError {
            field: "entry_frontends",
            message: format!(
                "http and https entry frontends must be distinct, both are {:?}",
                config.entry_frontends.http
            ),
        });
    }
    if config.rate_limit_backend.is_empty() {
        errors.push(ValidationError {
            field: "rate_limit_backend",
            message: "must not be empty".into(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
