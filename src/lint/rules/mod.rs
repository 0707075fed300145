//! Built-in lint rules.
//!
//! This module contains the rules the builtin engine can run. Which of them
//! are enabled, and at what level, is decided by the bundled baseline.

pub mod eol_last;
pub mod eqeqeq;
pub mod no_alert;
pub mod no_console;
pub mod no_debugger;
pub mod no_eval;
pub mod no_multiple_empty_lines;
pub mod no_trailing_spaces;
pub mod no_var;

pub use eol_last::EolLastRule;
pub use eqeqeq::EqeqeqRule;
pub use no_alert::NoAlertRule;
pub use no_console::NoConsoleRule;
pub use no_debugger::NoDebuggerRule;
pub use no_eval::NoEvalRule;
pub use no_multiple_empty_lines::NoMultipleEmptyLinesRule;
pub use no_trailing_spaces::NoTrailingSpacesRule;
pub use no_var::NoVarRule;

use regex::Regex;

use super::source::SourceFile;
use super::span::Span;

/// A regex match in the code view of one line.
pub(crate) struct CodeMatch {
    pub span: Span,
    /// First capture group, or the whole match when there is none.
    pub text: String,
}

/// Find matches of `re` in the code view that are not member accesses or
/// the tail of a longer identifier.
pub(crate) fn standalone_matches(source: &SourceFile, re: &Regex) -> Vec<CodeMatch> {
    let mut found = Vec::new();
    for line in source.lines() {
        for caps in re.captures_iter(&line.code) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let before = &line.code[..whole.start()];
            if before.trim_end().ends_with('.') {
                continue;
            }
            if before
                .chars()
                .last()
                .is_some_and(|c| c.is_alphanumeric() || c == '$' || c == '_')
            {
                continue;
            }

            let target = caps.get(1).unwrap_or(whole);
            let start_col = line.code[..target.start()].chars().count() + 1;
            let end_col = start_col + target.as_str().chars().count();
            found.push(CodeMatch {
                span: Span::on_line(line.number, start_col, end_col),
                text: target.as_str().to_string(),
            });
        }
    }
    found
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::lint::diagnostic::LintMessage;
    use crate::lint::rule::{LintRule, RuleContext, Severity};
    use crate::lint::source::SourceFile;
    use serde_json::Value;

    /// Run `rule` at warning level with no options.
    pub fn run(rule: &dyn LintRule, text: &str) -> Vec<LintMessage> {
        run_with(rule, text, &[])
    }

    /// Run `rule` at warning level with options.
    pub fn run_with(rule: &dyn LintRule, text: &str, options: &[Value]) -> Vec<LintMessage> {
        let source = SourceFile::parse("test.js", text).expect("fixture must parse");
        rule.check(&RuleContext {
            source: &source,
            severity: Severity::Warning,
            options,
        })
    }
}
