//! Manifest validation rules.
//!
//! This module validates a manifest for correctness:
//! - Requirement names must be non-empty and unique
//! - Version rules must name a requirement and list at least one prefix
//! - Tools and the kernel must be named
//! - Lab extension identifiers must be unique

use crate::config::schema::AuditConfig;
use crate::error::{AuditError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.rule, self.message)
    }
}

/// Validate a manifest and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &AuditConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.tutorial_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-tutorial-name",
            "'tutorial_name' must not be empty".to_string(),
        ));
    }

    if config.python.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-python",
            "'python' must name an interpreter".to_string(),
        ));
    }

    errors.extend(validate_requirements(config));
    errors.extend(validate_version_rules(config));
    errors.extend(validate_tools(config));

    if config.kernel.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-kernel-name",
            "'kernel.name' must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for ext in &config.lab_extensions {
        if !seen.insert(ext.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-extension",
                format!("Lab extension '{}' is listed more than once", ext),
            ));
        }
    }

    errors
}

fn validate_requirements(config: &AuditConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for name in &config.requirements {
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-requirement",
                "Requirement names must not be empty".to_string(),
            ));
        } else if !seen.insert(name.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-requirement",
                format!("Requirement '{}' is listed more than once", name),
            ));
        }
    }

    errors
}

fn validate_version_rules(config: &AuditConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for rule in &config.version_rules {
        if !config.requirements.contains(&rule.package) {
            errors.push(ValidationError::new(
                "unknown-version-package",
                format!(
                    "Version rule for '{}' does not match any requirement",
                    rule.package
                ),
            ));
        }
        if rule.acceptable_prefixes.is_empty() {
            errors.push(ValidationError::new(
                "empty-version-prefixes",
                format!(
                    "Version rule for '{}' must list at least one acceptable prefix",
                    rule.package
                ),
            ));
        }
        if !seen.insert(rule.package.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-version-rule",
                format!("Package '{}' has more than one version rule", rule.package),
            ));
        }
    }

    errors
}

fn validate_tools(config: &AuditConfig) -> Vec<ValidationError> {
    config
        .tools
        .iter()
        .filter(|tool| tool.name.trim().is_empty())
        .map(|_| {
            ValidationError::new("empty-tool-name", "Tool names must not be empty".to_string())
        })
        .collect()
}

/// Validate a manifest, failing with every problem joined into one error.
pub fn validate(config: &AuditConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(ValidationError::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(AuditError::ConfigValidationError { message })
}
