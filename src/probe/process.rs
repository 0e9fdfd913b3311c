//! Direct process spawning for tool version checks.

use regex::Regex;
use std::io::ErrorKind;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use super::{ToolAbsence, ToolRunner, ToolStatus};

/// Runs tools without a shell, capturing their output.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    /// Create a new runner.
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run_version(&self, program: &str, arg: &str) -> ToolStatus {
        tracing::debug!("Running {} {}", program, arg);

        let output = match Command::new(program)
            .arg(arg)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
        {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("{} not found", program);
                return ToolStatus::Absent {
                    reason: ToolAbsence::NotOnPath,
                };
            }
            Err(e) => {
                tracing::warn!("Could not start {}: {}", program, e);
                return ToolStatus::Absent {
                    reason: ToolAbsence::LaunchFailed(e.to_string()),
                };
            }
        };

        if !output.status.success() {
            let reason = match output.status.code() {
                Some(code) => ToolAbsence::ExitCode(code),
                None => ToolAbsence::Terminated,
            };
            tracing::debug!("{} {} failed: {}", program, arg, reason);
            return ToolStatus::Absent { reason };
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let version = extract_version(&stdout).or_else(|| extract_version(&stderr));

        ToolStatus::Present { version }
    }
}

/// Pull the first dotted version number out of a tool's output.
pub fn extract_version(output: &str) -> Option<String> {
    static VERSION_RE: OnceLock<Option<Regex>> = OnceLock::new();
    let re = VERSION_RE
        .get_or_init(|| Regex::new(r"\d+(?:\.\d+)+[^\s,)]*").ok())
        .as_ref()?;
    re.find(output).map(|m| m.as_str().to_string())
}
