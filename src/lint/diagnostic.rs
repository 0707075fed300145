//! Lint messages.
//!
//! This module provides the [`LintMessage`] type for a single finding in a
//! linted file, mirroring the shape of an ESLint result message.

use super::rule::{RuleId, Severity};
use super::span::Span;

/// A finding produced by a lint rule or by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct LintMessage {
    /// The rule that produced this message; `None` for parse failures.
    pub rule_id: Option<RuleId>,
    /// Severity of this message.
    pub severity: Severity,
    /// Whether the file could not be parsed at all.
    pub fatal: bool,
    /// Human-readable message.
    pub message: String,
    /// Source location.
    pub span: Span,
}

impl LintMessage {
    /// Create a new rule message.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>, span: Span) -> Self {
        Self {
            rule_id: Some(rule_id),
            severity,
            fatal: false,
            message: message.into(),
            span,
        }
    }

    /// Create a fatal parse-failure message.
    pub fn fatal(message: impl Into<String>, span: Span) -> Self {
        Self {
            rule_id: None,
            severity: Severity::Error,
            fatal: true,
            message: message.into(),
            span,
        }
    }

    /// Whether this message counts as an error (fatal or severity 2).
    pub fn is_error(&self) -> bool {
        self.fatal || self.severity == Severity::Error
    }

    /// Rule id as printed in reports; parse failures print `null`.
    pub fn rule_label(&self) -> &str {
        self.rule_id.as_ref().map(RuleId::as_str).unwrap_or("null")
    }
}
