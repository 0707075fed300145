//! Require `===` and `!==`.

use crate::lint::{LintMessage, LintRule, RuleContext, RuleId, Span};

/// Flags loose equality operators.
pub struct EqeqeqRule;

impl LintRule for EqeqeqRule {
    fn id(&self) -> RuleId {
        RuleId::new("eqeqeq")
    }

    fn description(&self) -> &str {
        "Require the use of === and !=="
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintMessage> {
        let mut messages = Vec::new();

        for line in ctx.source.lines() {
            let chars: Vec<char> = line.code.chars().collect();
            for i in 0..chars.len().saturating_sub(1) {
                let (op, expected) = match (chars[i], chars[i + 1]) {
                    ('=', '=') => ("==", "==="),
                    ('!', '=') => ("!=", "!=="),
                    _ => continue,
                };
                if chars.get(i + 2) == Some(&'=') {
                    continue;
                }
                if i > 0 && matches!(chars[i - 1], '=' | '!' | '<' | '>') {
                    continue;
                }

                messages.push(LintMessage::new(
                    self.id(),
                    ctx.severity,
                    format!("Expected '{}' and instead saw '{}'.", expected, op),
                    Span::on_line(line.number, i + 1, i + 3),
                ));
            }
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::run;

    #[test]
    fn flags_loose_equality() {
        let messages = run(&EqeqeqRule, "if (a == b) {}\n");

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, "Expected '===' and instead saw '=='.");
        assert_eq!(messages[0].span, Span::on_line(1, 7, 9));
    }

    #[test]
    fn flags_loose_inequality() {
        let messages = run(&EqeqeqRule, "while (x != null) {}\n");

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, "Expected '!==' and instead saw '!='.");
    }

    #[test]
    fn allows_strict_and_relational_operators() {
        let src = "if (a === b && c !== d && e <= f && g >= h) {}\nconst f = () => 1;\n";
        assert!(run(&EqeqeqRule, src).is_empty());
    }

    #[test]
    fn ignores_operators_inside_strings() {
        assert!(run(&EqeqeqRule, "const s = 'a == b';\n").is_empty());
    }
}
