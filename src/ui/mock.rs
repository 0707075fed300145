//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use osflinter::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("Failed to run eslintClient!");
//! ui.detail("Cannot read src/a.js");
//!
//! assert!(ui.has_error("Failed to run eslintClient!"));
//! assert_eq!(ui.details(), ["Cannot read src/a.js"]);
//! ```

use super::{OsfLinterTheme, UserInterface};

/// Mock UI implementation for testing.
///
/// Always uses the plain theme so captured text has no escape codes.
#[derive(Debug)]
pub struct MockUI {
    theme: OsfLinterTheme,
    messages: Vec<String>,
    diagnostics: Vec<String>,
    errors: Vec<String>,
    details: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self {
            theme: OsfLinterTheme::plain(),
            messages: Vec::new(),
            diagnostics: Vec::new(),
            errors: Vec::new(),
            details: Vec::new(),
        }
    }

    /// Get all captured stdout messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured diagnostic blocks.
    pub fn diagnostic_blocks(&self) -> &[String] {
        &self.diagnostics
    }

    /// Get all captured error headlines (without the icon).
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Check if an error headline was captured.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|e| e == msg)
    }

    /// Check if a stdout message contains `text`.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// Whether nothing at all was written to stderr.
    pub fn stderr_is_empty(&self) -> bool {
        self.diagnostics.is_empty() && self.errors.is_empty() && self.details.is_empty()
    }
}

impl UserInterface for MockUI {
    fn theme(&self) -> &OsfLinterTheme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn diagnostics(&mut self, text: &str) {
        self.diagnostics.push(text.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }
}
