//! Code-review annotations.
//!
//! One [`ReportEntry`] is produced per lint message, shaped for CI systems
//! that render inline annotations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::lint::{LintMessage, LintReport};

/// Annotation level. osflinter only ever emits failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationLevel {
    Failure,
}

/// A single entry of the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// File path relative to the invocation directory, `/`-separated.
    pub path: String,
    pub start_line: usize,
    pub end_line: usize,
    pub annotation_level: AnnotationLevel,
    /// `[error|warning] <text> (<ruleId>)`
    pub message: String,
}

impl ReportEntry {
    /// Build the entry for `msg` found in the file at `path`.
    pub fn new(path: String, msg: &LintMessage) -> Self {
        let kind = if msg.is_error() { "error" } else { "warning" };
        Self {
            path,
            start_line: msg.span.start_line,
            end_line: msg.span.end_line,
            annotation_level: AnnotationLevel::Failure,
            message: format!("[{}] {} ({})", kind, msg.message, msg.rule_label()),
        }
    }
}

/// `file` relative to `cwd`, joined with `/` on every platform.
pub fn relative_path(cwd: &Path, file: &Path) -> String {
    let relative = pathdiff::diff_paths(file, cwd).unwrap_or_else(|| file.to_path_buf());
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Flatten a report into entries, files in order, messages in order.
pub fn build_entries(report: &LintReport, cwd: &Path) -> Vec<ReportEntry> {
    report
        .results
        .iter()
        .flat_map(|result| {
            let path = relative_path(cwd, &result.file_path);
            result
                .messages
                .iter()
                .map(move |msg| ReportEntry::new(path.clone(), msg))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{FileResult, RuleId, Severity, Span};

    #[test]
    fn entry_for_error() {
        let msg = LintMessage::new(
            RuleId::new("no-debugger"),
            Severity::Error,
            "Unexpected 'debugger' statement.",
            Span::on_line(3, 5, 14),
        );
        let entry = ReportEntry::new("src/bad.js".into(), &msg);

        assert_eq!(entry.start_line, 3);
        assert_eq!(entry.end_line, 3);
        assert_eq!(entry.annotation_level, AnnotationLevel::Failure);
        assert_eq!(
            entry.message,
            "[error] Unexpected 'debugger' statement. (no-debugger)"
        );
    }

    #[test]
    fn fatal_entry_uses_null_rule() {
        let msg = LintMessage::fatal("Parsing error: Unexpected token )", Span::point(2, 1));
        let entry = ReportEntry::new("a.js".into(), &msg);

        assert_eq!(
            entry.message,
            "[error] Parsing error: Unexpected token ) (null)"
        );
    }

    #[test]
    fn warning_entry() {
        let msg = LintMessage::new(
            RuleId::new("no-var"),
            Severity::Warning,
            "Unexpected var, use let or const instead.",
            Span::new(1, 1, 2, 3),
        );
        let entry = ReportEntry::new("a.js".into(), &msg);

        assert!(entry.message.starts_with("[warning] "));
        assert_eq!(entry.end_line, 2);
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let msg = LintMessage::fatal("Parsing error: x", Span::point(1, 1));
        let json = serde_json::to_string(&ReportEntry::new("a.js".into(), &msg)).unwrap();

        assert_eq!(
            json,
            r#"{"path":"a.js","start_line":1,"end_line":1,"annotation_level":"failure","message":"[error] Parsing error: x (null)"}"#
        );
    }

    #[test]
    fn relative_paths_use_forward_slashes() {
        let cwd = Path::new("/work/project");

        assert_eq!(
            relative_path(cwd, Path::new("/work/project/src/lib/a.js")),
            "src/lib/a.js"
        );
        assert_eq!(relative_path(cwd, Path::new("/work/other/b.js")), "../other/b.js");
    }

    #[test]
    fn builds_one_entry_per_message() {
        let cwd = Path::new("/w");
        let report = LintReport::new(vec![
            FileResult::new(
                "/w/a.js",
                vec![
                    LintMessage::new(RuleId::new("no-var"), Severity::Warning, "v", Span::point(1, 1)),
                    LintMessage::new(RuleId::new("eqeqeq"), Severity::Error, "e", Span::point(2, 1)),
                ],
            ),
            FileResult::new("/w/clean.js", vec![]),
            FileResult::new(
                "/w/b.js",
                vec![LintMessage::fatal("f", Span::point(1, 1))],
            ),
        ]);

        let entries = build_entries(&report, cwd);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].path, "a.js");
        assert_eq!(entries[1].message, "[error] e (eqeqeq)");
        assert_eq!(entries[2].path, "b.js");
    }
}
