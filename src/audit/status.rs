//! Presence results for requirement checks.
//!
//! Each requirement produces exactly one [`PackageCheck`]; an
//! [`ImportReport`] keeps them in the order the requirements were listed.

use indexmap::IndexMap;
use serde::Serialize;

/// Whether a requirement could be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Presence {
    /// Loaded successfully.
    Present,
    /// Not importable in this environment.
    Absent {
        /// Message from the failed import.
        reason: String,
    },
}

impl Presence {
    /// Whether the requirement is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present)
    }
}

/// The result of checking a single requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageCheck {
    /// Whether the package imported.
    #[serde(flatten)]
    pub presence: Presence,
    /// Version string the package exposes, when it imported and has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PackageCheck {
    /// A package that imported, with its version if readable.
    pub fn present(version: Option<String>) -> Self {
        Self {
            presence: Presence::Present,
            version,
        }
    }

    /// A package that did not import.
    pub fn absent(reason: impl Into<String>) -> Self {
        Self {
            presence: Presence::Absent {
                reason: reason.into(),
            },
            version: None,
        }
    }
}

/// Per-requirement presence results, in requirement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImportReport {
    entries: IndexMap<String, PackageCheck>,
}

impl ImportReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result for `name`.
    ///
    /// The first record for a name wins, so every requirement keeps exactly
    /// one entry at its first position.
    pub fn record(&mut self, name: &str, check: PackageCheck) {
        if self.entries.contains_key(name) {
            tracing::debug!("Ignoring repeated result for {}", name);
            return;
        }
        self.entries.insert(name.to_string(), check);
    }

    /// Logical AND over every entry. An empty report is satisfied.
    pub fn all_satisfied(&self) -> bool {
        self.entries.values().all(|c| c.presence.is_present())
    }

    /// Names that failed to import, in requirement order.
    pub fn missing(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, c)| !c.presence.is_present())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Whether `name` was checked and imported.
    pub fn is_imported(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|c| c.presence.is_present())
    }

    /// The version `name` exposed, if it imported with one.
    pub fn version(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(|c| c.version.as_deref())
    }

    /// Iterate over results in requirement order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PackageCheck)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of requirements checked.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no requirement was checked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
