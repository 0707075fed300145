//! Disallow `console` calls.

use regex::Regex;
use std::sync::LazyLock;

use super::standalone_matches;
use crate::lint::{LintMessage, LintRule, RuleContext, RuleId};

static CONSOLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(console)\s*\.\s*[A-Za-z_$]").expect("CONSOLE_REGEX must compile")
});

/// Flags member access on the global `console`.
pub struct NoConsoleRule;

impl LintRule for NoConsoleRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-console")
    }

    fn description(&self) -> &str {
        "Disallow the use of console"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintMessage> {
        standalone_matches(ctx.source, &CONSOLE_REGEX)
            .into_iter()
            .map(|m| {
                LintMessage::new(
                    self.id(),
                    ctx.severity,
                    "Unexpected console statement.",
                    m.span,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::run;

    #[test]
    fn flags_console_log() {
        let messages = run(&NoConsoleRule, "console.log('x');\nconsole.error(e);\n");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].span.start_line, 2);
    }

    #[test]
    fn ignores_other_objects() {
        let messages = run(&NoConsoleRule, "logger.console.log(1);\nmyconsole.log(1);\n");
        assert!(messages.is_empty());
    }
}
