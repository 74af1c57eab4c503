//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, ObsolintTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Regular output goes to stdout; errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ObsolintTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, use_color: bool) -> Self {
        let theme = if use_color {
            ObsolintTheme::new()
        } else {
            ObsolintTheme::plain()
        };

        Self {
            out: Term::stdout(),
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

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_diagnostics() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn data(&mut self, output: &str) {
        write!(self.out, "{}", output).ok();
        self.out.flush().ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_diagnostics() {
            writeln!(self.out, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}\n", self.theme.format_header(title)).ok();
        }
    }
}

/// Create the terminal UI, honoring `NO_COLOR` and TTY detection.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, !no_color && should_use_colors()))
}
