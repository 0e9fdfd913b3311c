//! Config command implementation.
//!
//! The `nbcheck config` command shows the manifest an audit would use.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, validate_config};
use crate::error::{AuditError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_FATAL};

/// The config command implementation.
pub struct ConfigCommand {
    config_path: Option<PathBuf>,
    python: Option<String>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(config_path: Option<&Path>, python: Option<&str>, args: ConfigArgs) -> Self {
        Self {
            config_path: config_path.map(Path::to_path_buf),
            python: python.map(str::to_string),
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (config, source) = load_config(self.config_path.as_deref(), self.python.as_deref())?;

        if self.args.json {
            tracing::debug!("Showing {}", source);
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| AuditError::Other(e.into()))?;
            ui.message(&json);
        } else {
            ui.message(&format!("# {}", source));
            let yaml = serde_yaml::to_string(&config).map_err(|e| AuditError::Other(e.into()))?;
            ui.message(yaml.trim_end());
        }

        let errors = validate_config(&config);
        for error in &errors {
            ui.warning(&error.to_string());
        }

        if errors.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_FATAL))
        }
    }
}
