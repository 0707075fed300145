//! In-process lint engine.

use std::fs;
use std::path::{Path, PathBuf};

use super::LintEngine;
use crate::error::{OsfLinterError, Result};
use crate::lint::{
    Baseline, FileResult, LintMessage, LintReport, RuleContext, RuleId, RuleRegistry, SourceFile,
    Span,
};

/// Runs the builtin rules enabled by the baseline.
pub struct BuiltinEngine {
    registry: RuleRegistry,
    baseline: Baseline,
}

impl BuiltinEngine {
    /// Create an engine using every builtin rule.
    pub fn new(baseline: Baseline) -> Self {
        Self::with_registry(RuleRegistry::with_builtins(), baseline)
    }

    /// Create an engine with a specific rule registry.
    pub fn with_registry(registry: RuleRegistry, baseline: Baseline) -> Self {
        Self { registry, baseline }
    }

    /// Lint source text as if it were read from `path`.
    pub fn lint_text(&self, path: &Path, text: &str) -> FileResult {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let source = match SourceFile::parse(path, text) {
            Ok(source) => source,
            Err(fatal) => return FileResult::new(path, vec![fatal]),
        };

        let mut messages = Vec::new();
        for (id, severity, options) in self.baseline.enabled_rules() {
            let Some(rule) = self.registry.get(&RuleId::new(id)) else {
                tracing::warn!("Baseline rule '{}' has no builtin implementation; skipping", id);
                continue;
            };
            messages.extend(rule.check(&RuleContext {
                source: &source,
                severity,
                options,
            }));
        }

        FileResult::new(path, messages)
    }
}

impl LintEngine for BuiltinEngine {
    fn name(&self) -> &str {
        "builtin"
    }

    fn lint_files(&self, files: &[PathBuf]) -> Result<LintReport> {
        let mut results = Vec::with_capacity(files.len());

        for path in files {
            let bytes = fs::read(path).map_err(|e| {
                OsfLinterError::lint_run(format!("Cannot read {}: {}", path.display(), e))
            })?;

            let result = match String::from_utf8(bytes) {
                Ok(text) => self.lint_text(path, &text),
                Err(_) => FileResult::new(
                    path,
                    vec![LintMessage::fatal(
                        "Parsing error: File is not valid UTF-8",
                        Span::point(1, 1),
                    )],
                ),
            };
            tracing::debug!(
                "Linted {} ({} message(s))",
                path.display(),
                result.messages.len()
            );
            results.push(result);
        }

        Ok(LintReport::new(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;
    use tempfile::TempDir;

    fn engine() -> BuiltinEngine {
        BuiltinEngine::new(Baseline::bundled().unwrap())
    }

    #[test]
    fn clean_file_has_no_messages() {
        let result = engine().lint_text(Path::new("/a.js"), "const a = 1;\nexport default a;\n");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn applies_baseline_severities() {
        let result = engine().lint_text(
            Path::new("/a.js"),
            "function f() {\n  debugger;\n  console.log(1);\n}\n",
        );

        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].rule_label(), "no-debugger");
        assert_eq!(result.messages[0].severity, Severity::Error);
        assert_eq!(result.messages[1].rule_label(), "no-console");
        assert_eq!(result.messages[1].severity, Severity::Warning);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn parse_failure_yields_single_fatal_message() {
        let result = engine().lint_text(Path::new("/a.js"), "debugger;\nfoo(;\n");

        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].fatal);
        assert_eq!(result.messages[0].rule_id, None);
    }

    #[test]
    fn disabled_and_unknown_rules_are_skipped() {
        let baseline = Baseline::parse(
            r#"{"rules": {"no-debugger": "off", "no-such-rule": "error", "no-console": "error"}}"#,
        )
        .unwrap();
        let engine = BuiltinEngine::new(baseline);

        let result = engine.lint_text(Path::new("/a.js"), "debugger;\nconsole.log(1);\n");

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].rule_label(), "no-console");
        assert_eq!(result.messages[0].severity, Severity::Error);
    }

    #[test]
    fn strips_byte_order_mark() {
        let result = engine().lint_text(Path::new("/a.js"), "\u{feff}const a = 1;\n");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn lints_files_in_order() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.js");
        let b = temp.path().join("b.js");
        fs::write(&a, "const a = 1;\n").unwrap();
        fs::write(&b, "var b = 2;\n").unwrap();

        let report = engine().lint_files(&[a.clone(), b.clone()]).unwrap();

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].file_path, a);
        assert_eq!(report.results[1].file_path, b);
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn invalid_utf8_is_fatal_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bin.js");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let report = engine().lint_files(&[path]).unwrap();

        assert_eq!(report.error_count(), 1);
        assert!(report.results[0].messages[0].fatal);
    }

    #[test]
    fn unreadable_file_fails_the_run() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone.js");

        let err = engine().lint_files(&[missing]).unwrap_err();

        assert!(matches!(err, OsfLinterError::LintRun { .. }));
    }
}
