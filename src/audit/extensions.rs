//! Lab extension checking.

use serde::Serialize;
use std::collections::HashSet;

use crate::error::Result;
use crate::probe::{ExtensionLookup, ExtensionRegistry};

/// What the extension check found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtensionReport {
    /// The extension registry is not installed; no identifier was checked.
    RegistryUnavailable {
        /// Why the registry could not be loaded.
        reason: String,
    },
    /// Every identifier was looked up.
    Checked {
        /// Identifiers the registry does not know, in input order.
        missing: Vec<String>,
    },
}

impl ExtensionReport {
    /// Whether the registry was available and nothing is missing.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Checked { missing } if missing.is_empty())
    }
}

/// Look up every expected extension.
pub fn check_extensions(
    ids: &[String],
    registry: &dyn ExtensionRegistry,
) -> Result<ExtensionReport> {
    match registry.lookup(ids)? {
        ExtensionLookup::Unavailable { reason } => {
            tracing::debug!("Extension registry unavailable: {}", reason);
            Ok(ExtensionReport::RegistryUnavailable { reason })
        }
        ExtensionLookup::Available { present } => {
            let present: HashSet<&str> = present.iter().map(String::as_str).collect();
            let missing = ids
                .iter()
                .filter(|id| !present.contains(id.as_str()))
                .cloned()
                .collect();
            Ok(ExtensionReport::Checked { missing })
        }
    }
}
