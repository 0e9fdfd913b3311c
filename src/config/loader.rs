//! Manifest loading.
//!
//! The default manifest is compiled into the binary. A file passed with
//! `--config` replaces it wholesale; there is no merging between the two.

use crate::config::schema::AuditConfig;
use crate::error::{AuditError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The manifest compiled into the binary.
pub const DEFAULT_MANIFEST: &str = include_str!("default.yml");

/// Where a loaded manifest came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// The built-in manifest.
    Builtin,
    /// A manifest file on disk.
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in manifest"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse the built-in manifest.
pub fn builtin_config() -> Result<AuditConfig> {
    parse_config(DEFAULT_MANIFEST, Path::new("<built-in>"))
}

/// Load a single manifest file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<AuditConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AuditError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AuditError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into an [`AuditConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<AuditConfig> {
    serde_yaml::from_str(content).map_err(|e| AuditError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the manifest for a run.
///
/// Uses `path` when given, else the built-in manifest. A `python` override
/// replaces the manifest's interpreter.
pub fn load_config(
    path: Option<&Path>,
    python: Option<&str>,
) -> Result<(AuditConfig, ConfigSource)> {
    let (mut config, source) = match path {
        Some(p) => (load_config_file(p)?, ConfigSource::File(p.to_path_buf())),
        None => (builtin_config()?, ConfigSource::Builtin),
    };

    if let Some(interpreter) = python {
        tracing::debug!("Overriding interpreter {} with {}", config.python, interpreter);
        config.python = interpreter.to_string();
    }

    Ok((config, source))
}
