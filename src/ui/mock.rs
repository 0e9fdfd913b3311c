//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion, both per kind and as one ordered transcript.

use super::{OutputMode, UserInterface, FIX_PREFIX};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    remediations: Vec<String>,
    commands: Vec<String>,
    headers: Vec<String>,
    progress_lines: Vec<String>,
    transcript: Vec<String>,
    open_progress: Option<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured remediation lines (without the prefix).
    pub fn remediations(&self) -> &[String] {
        &self.remediations
    }

    /// Get all suggested commands.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Completed progress lines, label followed by one `.` per tick.
    pub fn progress_lines(&self) -> &[String] {
        &self.progress_lines
    }

    /// Every line in output order, remediation lines with their prefix.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific remediation was shown.
    pub fn has_remediation(&self, msg: &str) -> bool {
        self.remediations.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    fn close_progress(&mut self) {
        if let Some(line) = self.open_progress.take() {
            self.progress_lines.push(line.clone());
            self.transcript.push(line);
        }
    }

    fn push_line(&mut self, line: String) {
        self.close_progress();
        self.transcript.push(line);
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.push_line(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.push_line(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.push_line(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.push_line(msg.to_string());
    }

    fn remediation(&mut self, msg: &str) {
        self.remediations.push(msg.to_string());
        self.push_line(format!("{} {}", FIX_PREFIX, msg));
    }

    fn suggest_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
        self.push_line(format!("        {}", command));
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.push_line(title.to_string());
    }

    fn start_progress(&mut self, label: &str) {
        self.close_progress();
        self.open_progress = Some(label.to_string());
    }

    fn progress_tick(&mut self) {
        if let Some(line) = self.open_progress.as_mut() {
            line.push('.');
        }
    }

    fn finish_progress(&mut self) {
        self.close_progress();
    }
}
