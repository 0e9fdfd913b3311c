//! Shell completions generation.
//!
//! The `nbcheck completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        tracing::debug!("Generating {} completions for {}", self.args.shell, bin_name);
        clap_complete::generate(self.args.shell, &mut cmd, bin_name, &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
