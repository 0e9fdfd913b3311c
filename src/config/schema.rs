//! Audit manifest schema.
//!
//! These structs map one-to-one onto the YAML manifest, both the one
//! embedded in the binary and any file passed with `--config`.

use serde::{Deserialize, Serialize};

/// Root of an audit manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Tutorial name used in report headings.
    pub tutorial_name: String,

    /// Interpreter used for package, kernel and extension probes.
    #[serde(default = "default_python")]
    pub python: String,

    /// Packages that must be importable.
    pub requirements: Vec<String>,

    /// Accepted version prefixes, checked in this order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub version_rules: Vec<VersionRule>,

    /// Companion executables checked through their version flag.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolConfig>,

    /// Custom kernel that must be registered.
    pub kernel: KernelConfig,

    /// Lab extensions that must be installed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lab_extensions: Vec<String>,
}

/// Acceptable installed-version prefixes for one package.
///
/// A version is acceptable when it starts with any listed prefix. The last
/// prefix is the one recommended when upgrading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionRule {
    /// Package the rule applies to.
    pub package: String,
    /// Ordered prefixes, newest last.
    pub acceptable_prefixes: Vec<String>,
}

impl VersionRule {
    /// Create a rule from a package name and its prefixes.
    pub fn new(package: impl Into<String>, prefixes: &[&str]) -> Self {
        Self {
            package: package.into(),
            acceptable_prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// An external executable whose presence is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Executable name or path.
    pub name: String,

    /// Argument that makes the tool report its version.
    #[serde(default = "default_version_arg")]
    pub version_arg: String,

    /// Alternative install commands shown when the tool is absent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub install_commands: Vec<String>,
}

/// The kernel spec the tutorial notebooks run on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KernelConfig {
    /// Kernel spec name.
    pub name: String,

    /// Command that creates the kernel spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_version_arg() -> String {
    "--version".to_string()
}
