//! Version compatibility checking.
//!
//! A version is compatible when it starts with one of the rule's accepted
//! prefixes. Prefix matching is plain string matching, so `"7.5"` accepts
//! `"7.5.2"` and also `"7.50.0"`.

use serde::Serialize;

use crate::config::VersionRule;

use super::status::ImportReport;

/// Whether `version` starts with any of `prefixes`.
///
/// Always false for an empty prefix list.
pub fn good_version(version: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|p| version.starts_with(p.as_str()))
}

/// Verdict for one installed version against its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum VersionVerdict {
    /// The installed version is acceptable.
    Good,
    /// The installed version should be replaced.
    Upgrade {
        /// Last prefix of the rule.
        recommended: String,
    },
}

impl VersionVerdict {
    /// Whether no action is needed.
    pub fn is_good(&self) -> bool {
        matches!(self, Self::Good)
    }
}

/// Compare an installed version against its rule.
///
/// A rule with no prefixes never accepts anything and has nothing to
/// recommend, so it yields an upgrade with an empty target; manifest
/// validation rejects such rules before an audit runs.
pub fn evaluate_version(rule: &VersionRule, installed: &str) -> VersionVerdict {
    if good_version(installed, &rule.acceptable_prefixes) {
        VersionVerdict::Good
    } else {
        VersionVerdict::Upgrade {
            recommended: rule.acceptable_prefixes.last().cloned().unwrap_or_default(),
        }
    }
}

/// Outcome of the version check for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VersionOutcome {
    /// The installed version was compared against the rule.
    Checked {
        /// Version the package reported.
        installed: String,
        /// Comparison result.
        #[serde(flatten)]
        verdict: VersionVerdict,
    },
    /// The package imported but exposes no version string.
    Skipped,
}

/// The version check for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    /// Package name.
    pub package: String,
    /// What the check found.
    #[serde(flatten)]
    pub outcome: VersionOutcome,
}

impl VersionCheck {
    /// Whether this check asks for an upgrade.
    pub fn needs_upgrade(&self) -> bool {
        matches!(&self.outcome, VersionOutcome::Checked { verdict, .. } if !verdict.is_good())
    }
}

/// Evaluate every rule whose package imported, in rule order.
///
/// Packages that did not import produce no entry at all.
pub fn check_versions(rules: &[VersionRule], imports: &ImportReport) -> Vec<VersionCheck> {
    rules
        .iter()
        .filter(|rule| imports.is_imported(&rule.package))
        .map(|rule| {
            let outcome = match imports.version(&rule.package) {
                Some(installed) => VersionOutcome::Checked {
                    installed: installed.to_string(),
                    verdict: evaluate_version(rule, installed),
                },
                None => {
                    tracing::debug!("{} exposes no version; skipping", rule.package);
                    VersionOutcome::Skipped
                }
            };
            VersionCheck {
                package: rule.package.clone(),
                outcome,
            }
        })
        .collect()
}
