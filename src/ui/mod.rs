//! Terminal output for audit reports.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use nbcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.remediation("Please install bqplot");
//! assert!(ui.has_remediation("bqplot"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, AuditTheme, FIX_PREFIX};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational line.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a line the user has to act on, behind [`FIX_PREFIX`].
    fn remediation(&mut self, msg: &str);

    /// Display a command that fixes the preceding remediation.
    fn suggest_command(&mut self, command: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Start an inline progress line; markers follow on the same line.
    fn start_progress(&mut self, label: &str);

    /// Emit one progress marker.
    fn progress_tick(&mut self);

    /// End the current progress line.
    fn finish_progress(&mut self);
}
