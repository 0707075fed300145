//! Lint results.
//!
//! A [`LintReport`] holds one [`FileResult`] per linted file, in the order
//! the files were given to the engine.

use std::path::PathBuf;

use super::diagnostic::LintMessage;
use super::rule::Severity;

/// Messages for a single file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileResult {
    /// Absolute path of the linted file.
    pub file_path: PathBuf,
    /// Messages ordered by position.
    pub messages: Vec<LintMessage>,
}

impl FileResult {
    /// Create a result, sorting messages by line then column.
    pub fn new(file_path: impl Into<PathBuf>, mut messages: Vec<LintMessage>) -> Self {
        messages.sort_by_key(|m| (m.span.start_line, m.span.start_col));
        Self {
            file_path: file_path.into(),
            messages,
        }
    }

    /// Messages counted as errors (fatal or severity 2).
    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_error()).count()
    }

    /// Messages counted as warnings.
    pub fn warning_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| !m.is_error() && m.severity == Severity::Warning)
            .count()
    }
}

/// Results for a whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LintReport {
    /// Per-file results.
    pub results: Vec<FileResult>,
}

impl LintReport {
    /// Create a report from per-file results.
    pub fn new(results: Vec<FileResult>) -> Self {
        Self { results }
    }

    /// Total error count.
    pub fn error_count(&self) -> usize {
        self.results.iter().map(FileResult::error_count).sum()
    }

    /// Total warning count.
    pub fn warning_count(&self) -> usize {
        self.results.iter().map(FileResult::warning_count).sum()
    }

    /// Total number of messages across all files.
    pub fn message_count(&self) -> usize {
        self.results.iter().map(|r| r.messages.len()).sum()
    }

    /// Whether any warning or error was found.
    pub fn has_findings(&self) -> bool {
        self.error_count() > 0 || self.warning_count() > 0
    }
}
