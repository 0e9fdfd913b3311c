//! Check command implementation.
//!
//! The `nbcheck check` command audits the environment and is what runs when
//! no subcommand is given.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::audit::{AuditReport, Auditor};
use crate::cli::args::CheckArgs;
use crate::config::{load_config, validate};
use crate::error::Result;
use crate::probe::{ProcessToolRunner, PythonEnvironment, SystemEnvironment};
use crate::report::JsonFormatter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_CHECKS_FAILED};

/// The check command implementation.
pub struct CheckCommand {
    config_path: Option<PathBuf>,
    python: Option<String>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config_path: Option<&Path>, python: Option<&str>, args: CheckArgs) -> Self {
        Self {
            config_path: config_path.map(Path::to_path_buf),
            python: python.map(str::to_string),
            args,
        }
    }

    fn finish<W: Write>(&self, report: &AuditReport, out: &mut W) -> Result<CommandResult> {
        if self.args.json {
            JsonFormatter::new().format(report, out)?;
        }

        if report.is_healthy() || self.args.no_fail {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_CHECKS_FAILED))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (config, source) = load_config(self.config_path.as_deref(), self.python.as_deref())?;
        tracing::debug!("Auditing with {}", source);
        validate(&config)?;

        let python = PythonEnvironment::locate(&config.python)?;
        tracing::debug!("Probing {}", python.interpreter().display());
        let env = SystemEnvironment::new(python, ProcessToolRunner::new());

        let report = Auditor::new(&config, &env).run(ui)?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.finish(&report, &mut out)
    }
}
