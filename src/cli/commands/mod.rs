//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], which carries the global manifest and
//! interpreter overrides.

pub mod check;
pub mod completions;
pub mod config;
pub mod dispatcher;

pub use dispatcher::{
    Command, CommandDispatcher, CommandResult, EXIT_CHECKS_FAILED, EXIT_FATAL,
};
