//! Command-line interface for nbcheck.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, ConfigArgs};
pub use commands::{
    Command, CommandDispatcher, CommandResult, EXIT_CHECKS_FAILED, EXIT_FATAL,
};
