//! Disallow trailing whitespace at the end of lines.

use crate::lint::source::Region;
use crate::lint::{LintMessage, LintRule, RuleContext, RuleId, Span};

/// Flags spaces and tabs before a line break.
///
/// Trailing whitespace inside a multi-line template literal is content and
/// is left alone.
pub struct NoTrailingSpacesRule;

impl LintRule for NoTrailingSpacesRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-trailing-spaces")
    }

    fn description(&self) -> &str {
        "Disallow trailing whitespace at the end of lines"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintMessage> {
        let mut messages = Vec::new();

        for line in ctx.source.lines() {
            let len = line.char_len();
            let trimmed = line.raw.trim_end_matches([' ', '\t']).chars().count();
            if trimmed == len {
                continue;
            }
            if line.region_at(trimmed) == Some(Region::Literal) {
                continue;
            }

            messages.push(LintMessage::new(
                self.id(),
                ctx.severity,
                "Trailing spaces not allowed.",
                Span::on_line(line.number, trimmed + 1, len + 1),
            ));
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::run;

    #[test]
    fn flags_trailing_spaces() {
        let messages = run(&NoTrailingSpacesRule, "let a = 1;  \nlet b = 2;\n");

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].span, Span::on_line(1, 11, 13));
    }

    #[test]
    fn flags_whitespace_only_line() {
        let messages = run(&NoTrailingSpacesRule, "a();\n\t\nb();\n");

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].span.start_line, 2);
        assert_eq!(messages[0].span.start_col, 1);
    }

    #[test]
    fn ignores_template_literal_content() {
        let messages = run(&NoTrailingSpacesRule, "const s = `line  \nmore`;\n");
        assert!(messages.is_empty());
    }

    #[test]
    fn ignores_crlf_line_endings() {
        let messages = run(&NoTrailingSpacesRule, "a();\r\nb();\r\n");
        assert!(messages.is_empty());
    }
}
