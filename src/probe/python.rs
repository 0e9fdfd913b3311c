//! Python-backed probes.
//!
//! Each probe runs an embedded script with `python -c`. Scripts send anything
//! printed while importing to stderr and answer with one JSON document behind
//! [`REPLY_MARKER`]. The last marked line wins, so stray output before or
//! after the reply (including `atexit` prints) is ignored. A non-zero exit
//! means the script hit an exception it does not handle, which is reported
//! as [`AuditError::ProbeFailed`] with the interpreter's traceback.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{AuditError, Result};

use super::path::{parse_system_path, resolve_program};
use super::{ExtensionLookup, ExtensionRegistry, ImportOutcome, KernelRegistry, PackageImporter};

/// Prefix of the line carrying a probe script's JSON reply.
pub const REPLY_MARKER: &str = "@@nbcheck-reply@@";

const IMPORT_PROBE: &str = include_str!("scripts/import_probe.py");
const KERNEL_PROBE: &str = include_str!("scripts/kernel_probe.py");
const EXTENSION_PROBE: &str = include_str!("scripts/extension_probe.py");

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum ImportReply {
    Ok { version: Option<String> },
    Missing { reason: String },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum ExtensionReply {
    Unavailable { reason: String },
    Available { present: Vec<String> },
}

/// A Python interpreter used to answer package, kernel and extension queries.
#[derive(Debug, Clone)]
pub struct PythonEnvironment {
    interpreter: PathBuf,
}

impl PythonEnvironment {
    /// Locate `interpreter` (a bare name looked up on PATH, or a path).
    ///
    /// # Errors
    ///
    /// Returns `InterpreterNotFound` when nothing executable matches.
    pub fn locate(interpreter: &str) -> Result<Self> {
        let resolved = resolve_program(interpreter, &parse_system_path()).ok_or_else(|| {
            AuditError::InterpreterNotFound {
                interpreter: interpreter.to_string(),
            }
        })?;
        tracing::debug!("Using Python interpreter at {}", resolved.display());
        Ok(Self::with_interpreter(resolved))
    }

    /// Use an already-resolved interpreter path.
    pub fn with_interpreter(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Path of the interpreter in use.
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    fn run_script<T: DeserializeOwned>(
        &self,
        probe: &str,
        script: &str,
        args: &[&str],
    ) -> Result<T> {
        tracing::debug!("Running probe '{}' with {}", probe, self.interpreter.display());

        let output = Command::new(&self.interpreter)
            .arg("-c")
            .arg(script)
            .args(args)
            .env("PYTHONIOENCODING", "utf-8")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| AuditError::ProbeFailed {
                probe: probe.to_string(),
                message: format!("could not start {}: {}", self.interpreter.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                match output.status.code() {
                    Some(code) => format!("interpreter exited with code {}", code),
                    None => "interpreter terminated by a signal".to_string(),
                }
            } else {
                stderr
            };
            return Err(AuditError::ProbeFailed {
                probe: probe.to_string(),
                message,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_reply(probe, &stdout)
    }
}

/// Parse the JSON after the last [`REPLY_MARKER`] in a probe's stdout.
fn parse_reply<T: DeserializeOwned>(probe: &str, stdout: &str) -> Result<T> {
    let line = stdout
        .lines()
        .rev()
        .find_map(|l| l.rfind(REPLY_MARKER).map(|at| &l[at + REPLY_MARKER.len()..]))
        .map(str::trim)
        .ok_or_else(|| AuditError::MalformedProbeOutput {
            probe: probe.to_string(),
            message: "no reply line".to_string(),
        })?;

    serde_json::from_str(line).map_err(|e| AuditError::MalformedProbeOutput {
        probe: probe.to_string(),
        message: format!("{} in {:?}", e, line),
    })
}

impl PackageImporter for PythonEnvironment {
    fn import(&self, name: &str) -> Result<ImportOutcome> {
        let probe = format!("import {}", name);
        let reply: ImportReply = self.run_script(&probe, IMPORT_PROBE, &[name])?;
        Ok(match reply {
            ImportReply::Ok { version } => ImportOutcome::Imported { version },
            ImportReply::Missing { reason } => ImportOutcome::NotFound { reason },
        })
    }
}

impl KernelRegistry for PythonEnvironment {
    fn kernel_names(&self) -> Result<Vec<String>> {
        self.run_script("kernel registry", KERNEL_PROBE, &[])
    }
}

impl ExtensionRegistry for PythonEnvironment {
    fn lookup(&self, ids: &[String]) -> Result<ExtensionLookup> {
        let args: Vec<&str> = ids.iter().map(String::as_str).collect();
        let reply: ExtensionReply = self.run_script("lab extensions", EXTENSION_PROBE, &args)?;
        Ok(match reply {
            ExtensionReply::Unavailable { reason } => ExtensionLookup::Unavailable { reason },
            ExtensionReply::Available { present } => ExtensionLookup::Available { present },
        })
    }
}
