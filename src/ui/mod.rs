//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use osflinter::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("eqeqeq  error");
//! assert!(ui.has_message("eqeqeq"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, OsfLinterTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// The theme used to style output.
    fn theme(&self) -> &OsfLinterTheme;

    /// Display a message on stdout.
    fn message(&mut self, msg: &str);

    /// Display a pre-rendered diagnostics block on stderr.
    fn diagnostics(&mut self, text: &str);

    /// Display a failure headline on stderr, prefixed with `✖`.
    fn error(&mut self, msg: &str);

    /// Display a secondary line under a failure headline.
    fn detail(&mut self, msg: &str);
}
