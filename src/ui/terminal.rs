//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OsfLinterTheme, UserInterface};

/// Terminal UI implementation.
///
/// Listings go to stdout; diagnostics and failures go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: OsfLinterTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    ///
    /// Colors are used only when `colors` is set and stderr supports them.
    pub fn new(colors: bool) -> Self {
        let theme = if colors && should_use_colors() {
            OsfLinterTheme::new()
        } else {
            OsfLinterTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn theme(&self) -> &OsfLinterTheme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn diagnostics(&mut self, text: &str) {
        writeln!(self.err, "{}", text).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_failure(msg)).ok();
    }

    fn detail(&mut self, msg: &str) {
        writeln!(self.err, "{}", msg).ok();
    }
}

/// Create the UI for the current process.
pub fn create_ui(no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(!no_color))
}
