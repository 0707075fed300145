//! Require `let` or `const` instead of `var`.

use regex::Regex;
use std::sync::LazyLock;

use super::standalone_matches;
use crate::lint::{LintMessage, LintRule, RuleContext, RuleId, Span};

static VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(var)\s+[A-Za-z_$\[{]").expect("VAR_REGEX must compile"));

/// Flags `var` declarations.
pub struct NoVarRule;

impl LintRule for NoVarRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-var")
    }

    fn description(&self) -> &str {
        "Require let or const instead of var"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintMessage> {
        standalone_matches(ctx.source, &VAR_REGEX)
            .into_iter()
            .map(|m| {
                let span = declaration_span(ctx, m.span);
                LintMessage::new(
                    self.id(),
                    ctx.severity,
                    "Unexpected var, use let or const instead.",
                    span,
                )
            })
            .collect()
    }
}

/// Extend the `var` keyword span to the end of the declaration on that line.
fn declaration_span(ctx: &RuleContext<'_>, keyword: Span) -> Span {
    let Some(line) = ctx
        .source
        .lines()
        .get(keyword.start_line.saturating_sub(1))
    else {
        return keyword;
    };
    let end = line
        .code
        .chars()
        .enumerate()
        .skip(keyword.start_col - 1)
        .find(|(_, c)| *c == ';')
        .map(|(idx, _)| idx + 2)
        .unwrap_or(line.char_len() + 1);
    Span::on_line(keyword.start_line, keyword.start_col, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::run;

    #[test]
    fn flags_var_declaration() {
        let messages = run(&NoVarRule, "var count = 0;\n");

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].span.start_col, 1);
        assert_eq!(messages[0].span.end_col, 15);
    }

    #[test]
    fn ignores_let_const_and_identifiers() {
        let messages = run(&NoVarRule, "let a = 1;\nconst variance = 2;\nobj.var = 3;\n");
        assert!(messages.is_empty());
    }
}
