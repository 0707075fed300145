//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for messages (Warning, Error)
//! - [`RuleContext`] - What a rule sees when it runs against one file

use serde_json::Value;

use super::diagnostic::LintMessage;
use super::source::SourceFile;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint messages.
///
/// Numeric levels follow ESLint: 1 is a warning, 2 is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Should be addressed, still fails the run.
    Warning,
    /// Rule violation or parse failure.
    Error,
}

impl Severity {
    /// ESLint numeric level.
    pub fn level(self) -> u8 {
        match self {
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    /// Severity for an ESLint numeric level; 0 (off) and unknown levels yield `None`.
    pub fn from_level(level: u64) -> Option<Self> {
        match level {
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Inputs for a single rule run.
pub struct RuleContext<'a> {
    /// The file being linted.
    pub source: &'a SourceFile,
    /// Severity configured for the rule.
    pub severity: Severity,
    /// Rule options following the level in the baseline (`[level, ...options]`).
    pub options: &'a [Value],
}

impl<'a> RuleContext<'a> {
    /// Look up a numeric option from the first options object.
    pub fn option_usize(&self, key: &str) -> Option<usize> {
        self.options
            .first()
            .and_then(|opts| opts.get(key))
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
    }
}

/// A lint rule checked against JavaScript source.
///
/// Rules see a scanned [`SourceFile`] where string, comment and regex
/// contents are masked out of the code view, so simple textual matching
/// does not trip over literals.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Check one file and return any messages.
    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintMessage>;
}
