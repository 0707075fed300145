//! Disallow `debugger` statements.

use regex::Regex;
use std::sync::LazyLock;

use super::standalone_matches;
use crate::lint::{LintMessage, LintRule, RuleContext, RuleId};

static DEBUGGER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdebugger\b").expect("DEBUGGER_REGEX must compile"));

/// Flags every `debugger` statement.
pub struct NoDebuggerRule;

impl LintRule for NoDebuggerRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-debugger")
    }

    fn description(&self) -> &str {
        "Disallow the use of debugger"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintMessage> {
        standalone_matches(ctx.source, &DEBUGGER_REGEX)
            .into_iter()
            .map(|m| {
                LintMessage::new(
                    self.id(),
                    ctx.severity,
                    "Unexpected 'debugger' statement.",
                    m.span,
                )
            })
            .collect()
    }
}
