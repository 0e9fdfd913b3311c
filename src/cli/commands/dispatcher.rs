//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code when the audit completed but at least one check failed.
pub const EXIT_CHECKS_FAILED: i32 = 1;

/// Exit code for faults that stopped a command, including an invalid manifest.
pub const EXIT_FATAL: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Returns a [`CommandResult`] for outcomes the command reports itself;
    /// an `Err` is a fatal fault the caller turns into [`EXIT_FATAL`].
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher {
    config_path: Option<PathBuf>,
    python: Option<String>,
}

impl CommandDispatcher {
    /// Create a dispatcher with the global manifest and interpreter overrides.
    pub fn new(config_path: Option<PathBuf>, python: Option<String>) -> Self {
        Self {
            config_path,
            python,
        }
    }

    /// The manifest override, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The interpreter override, if any.
    pub fn python(&self) -> Option<&str> {
        self.python.as_deref()
    }

    /// Dispatch and execute a command.
    ///
    /// Running without a subcommand is the same as `check` with no flags.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => self.check(args.clone()).execute(ui),
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(
                    self.config_path(),
                    self.python(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => self.check(CheckArgs::default()).execute(ui),
        }
    }

    fn check(&self, args: CheckArgs) -> super::check::CheckCommand {
        super::check::CheckCommand::new(self.config_path(), self.python(), args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn exit_codes_are_distinct() {
        assert_eq!(EXIT_CHECKS_FAILED, 1);
        assert_eq!(EXIT_FATAL, 2);
        assert_eq!(CommandResult::failure(EXIT_FATAL).exit_code, 2);
    }

    #[test]
    fn dispatcher_keeps_overrides() {
        let dispatcher = CommandDispatcher::new(Some("m.yml".into()), Some("python3.11".into()));
        assert_eq!(dispatcher.config_path(), Some(Path::new("m.yml")));
        assert_eq!(dispatcher.python(), Some("python3.11"));
    }

    #[test]
    fn dispatches_config_command() {
        let cli = Cli::try_parse_from(["nbcheck", "config"]).unwrap();
        let dispatcher = CommandDispatcher::default();
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("widgets-tutorial"));
    }

    #[test]
    fn default_command_reports_bad_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yml");
        fs::write(&path, "requirements: [").unwrap();
        let cli = Cli::try_parse_from(["nbcheck"]).unwrap();
        let dispatcher = CommandDispatcher::new(Some(path), None);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui);

        assert!(matches!(
            result,
            Err(crate::error::AuditError::ConfigParseError { .. })
        ));
    }
}
