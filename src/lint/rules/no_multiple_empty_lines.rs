//! Disallow runs of blank lines.

use crate::lint::{LintMessage, LintRule, RuleContext, RuleId, Span};

const DEFAULT_MAX: usize = 2;

/// Flags more than `max` consecutive blank lines (option `{ "max": n }`).
pub struct NoMultipleEmptyLinesRule;

impl LintRule for NoMultipleEmptyLinesRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-multiple-empty-lines")
    }

    fn description(&self) -> &str {
        "Disallow multiple empty lines"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintMessage> {
        let max = ctx.option_usize("max").unwrap_or(DEFAULT_MAX);
        let mut messages = Vec::new();
        let mut run = 0usize;

        for line in ctx.source.lines() {
            if !line.is_blank() {
                run = 0;
                continue;
            }
            run += 1;
            // One report per run, on the first line past the limit.
            if run == max + 1 {
                let noun = if max == 1 { "line" } else { "lines" };
                messages.push(LintMessage::new(
                    self.id(),
                    ctx.severity,
                    format!("More than {} blank {} not allowed.", max, noun),
                    Span::on_line(line.number, 1, 1),
                ));
            }
        }

        messages
    }
}
