//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, AuditTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Report lines go to stdout; errors go to stderr so they survive
/// `--json` and shell redirection.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: AuditTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            AuditTheme::new()
        } else {
            AuditTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_info() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_info() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn remediation(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_remediation(msg)).ok();
        }
    }

    fn suggest_command(&mut self, command: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "        {}", self.theme.command.apply_to(command)).ok();
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn start_progress(&mut self, label: &str) {
        if self.mode.shows_info() {
            write!(self.term, "{}", self.theme.format_header(label)).ok();
            self.term.flush().ok();
        }
    }

    fn progress_tick(&mut self) {
        if self.mode.shows_info() {
            write!(self.term, "{}", self.theme.dim.apply_to(".")).ok();
            self.term.flush().ok();
        }
    }

    fn finish_progress(&mut self) {
        if self.mode.shows_info() {
            writeln!(self.term).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn silent_terminal_ui_accepts_output() {
        let mut ui = TerminalUI::new(OutputMode::Silent);
        ui.start_progress("Checking");
        ui.progress_tick();
        ui.finish_progress();
        ui.message("hidden");
        ui.remediation("hidden");
        ui.suggest_command("pip install voila");
    }
}
