//! Disallow `eval()`.

use regex::Regex;
use std::sync::LazyLock;

use super::standalone_matches;
use crate::lint::{LintMessage, LintRule, RuleContext, RuleId};

static EVAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(eval)\s*\(").expect("EVAL_REGEX must compile"));

/// Flags direct calls to `eval`.
pub struct NoEvalRule;

impl LintRule for NoEvalRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-eval")
    }

    fn description(&self) -> &str {
        "Disallow the use of eval()"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintMessage> {
        standalone_matches(ctx.source, &EVAL_REGEX)
            .into_iter()
            .map(|m| LintMessage::new(self.id(), ctx.severity, "eval can be harmful.", m.span))
            .collect()
    }
}
