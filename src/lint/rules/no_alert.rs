//! Disallow `alert`, `confirm`, and `prompt`.

use regex::Regex;
use std::sync::LazyLock;

use super::standalone_matches;
use crate::lint::source::SourceFile;
use crate::lint::{LintMessage, LintRule, RuleContext, RuleId, Span};

static ALERT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(alert|confirm|prompt)\s*\(").expect("ALERT_REGEX must compile")
});

/// Flags browser dialog calls.
pub struct NoAlertRule;

/// Whether the match at `span` names a function being declared.
fn is_declaration(source: &SourceFile, span: &Span) -> bool {
    let Some(line) = source.lines().get(span.start_line - 1) else {
        return false;
    };
    let before: String = line.code.chars().take(span.start_col - 1).collect();
    before
        .trim_end()
        .strip_suffix("function")
        .is_some_and(|rest| {
            !rest.ends_with(|c: char| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

impl LintRule for NoAlertRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-alert")
    }

    fn description(&self) -> &str {
        "Disallow the use of alert, confirm, and prompt"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintMessage> {
        standalone_matches(ctx.source, &ALERT_REGEX)
            .into_iter()
            .filter(|m| !is_declaration(ctx.source, &m.span))
            .map(|m| {
                LintMessage::new(
                    self.id(),
                    ctx.severity,
                    format!("Unexpected {}.", m.text),
                    m.span,
                )
            })
            .collect()
    }
}
