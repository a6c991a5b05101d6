//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, PrereqsTheme, UserInterface};

/// Terminal UI implementation.
///
/// Progress goes to stdout, warnings and errors to stderr, so a calling
/// pipeline can separate them.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PrereqsTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI, picking colours from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PrereqsTheme::new()
        } else {
            PrereqsTheme::plain()
        };
        Self::with_theme(mode, theme)
    }

    /// Create with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: PrereqsTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn dependency(&mut self, name: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "  {}...", self.theme.name.apply_to(name)).ok();
        }
    }

    fn phase(&mut self, phase: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "    {}", phase).ok();
        }
    }

    fn command(&mut self, command: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "      {}", self.theme.command.apply_to(command)).ok();
        }
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
