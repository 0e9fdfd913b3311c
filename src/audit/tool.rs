//! Companion tool checking.

use serde::Serialize;

use crate::config::ToolConfig;
use crate::probe::{ToolRunner, ToolStatus};

/// The result of checking one external tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCheck {
    /// Executable name.
    pub name: String,
    /// Outcome of the version command.
    #[serde(flatten)]
    pub status: ToolStatus,
}

impl ToolCheck {
    /// Whether the tool ran successfully.
    pub fn is_present(&self) -> bool {
        self.status.is_present()
    }
}

/// Run the tool's version command once.
///
/// Never fails: a missing executable, a launch error and a non-zero exit all
/// classify as absent.
pub fn check_tool(tool: &ToolConfig, runner: &dyn ToolRunner) -> ToolCheck {
    let status = runner.run_version(&tool.name, &tool.version_arg);
    ToolCheck {
        name: tool.name.clone(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ToolAbsence;
    use std::cell::RefCell;

    struct FakeRunner {
        result: ToolStatus,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl ToolRunner for FakeRunner {
        fn run_version(&self, program: &str, arg: &str) -> ToolStatus {
            self.calls
                .borrow_mut()
                .push((program.to_string(), arg.to_string()));
            self.result.clone()
        }
    }

    fn voila() -> ToolConfig {
        ToolConfig {
            name: "voila".to_string(),
            version_arg: "--version".to_string(),
            install_commands: vec![],
        }
    }

    #[test]
    fn zero_exit_reports_present() {
        let runner = FakeRunner {
            result: ToolStatus::Present {
                version: Some("0.2.10".to_string()),
            },
            calls: RefCell::new(Vec::new()),
        };
        let check = check_tool(&voila(), &runner);
        assert!(check.is_present());
        assert_eq!(check.name, "voila");
    }

    #[test]
    fn every_failure_reports_absent() {
        for reason in [
            ToolAbsence::NotOnPath,
            ToolAbsence::ExitCode(2),
            ToolAbsence::Terminated,
            ToolAbsence::LaunchFailed("permission denied".to_string()),
        ] {
            let runner = FakeRunner {
                result: ToolStatus::Absent { reason },
                calls: RefCell::new(Vec::new()),
            };
            assert!(!check_tool(&voila(), &runner).is_present());
        }
    }

    #[test]
    fn runs_exactly_once_with_version_arg() {
        let runner = FakeRunner {
            result: ToolStatus::Absent {
                reason: ToolAbsence::ExitCode(1),
            },
            calls: RefCell::new(Vec::new()),
        };
        check_tool(&voila(), &runner);
        assert_eq!(
            *runner.calls.borrow(),
            vec![("voila".to_string(), "--version".to_string())]
        );
    }

    #[test]
    fn serializes_flat() {
        let check = ToolCheck {
            name: "voila".to_string(),
            status: ToolStatus::Absent {
                reason: ToolAbsence::NotOnPath,
            },
        };
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["name"], "voila");
        assert_eq!(json["status"], "absent");
        assert_eq!(json["reason"]["kind"], "not_on_path");
    }
}
