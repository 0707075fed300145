//! Require a newline at the end of files.

use crate::lint::{LintMessage, LintRule, RuleContext, RuleId, Span};

/// Flags non-empty files that do not end with a line break.
pub struct EolLastRule;

impl LintRule for EolLastRule {
    fn id(&self) -> RuleId {
        RuleId::new("eol-last")
    }

    fn description(&self) -> &str {
        "Require newline at the end of files"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintMessage> {
        let text = ctx.source.text();
        if text.is_empty() || text.ends_with('\n') {
            return Vec::new();
        }

        let Some(last) = ctx.source.lines().last() else {
            return Vec::new();
        };
        let col = last.char_len() + 1;

        vec![LintMessage::new(
            self.id(),
            ctx.severity,
            "Newline required at end of file but not found.",
            Span::point(last.number, col),
        )]
    }
}
