//! Rules command implementation.
//!
//! The `osflinter rules` command lists the baseline rule set.

use crate::error::Result;
use crate::lint::{Baseline, RuleId, RuleRegistry};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    registry: RuleRegistry,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_builtins(),
        }
    }
}

impl Default for RulesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let baseline = Baseline::bundled()?;
        let width = baseline.rules.keys().map(|id| id.len()).max().unwrap_or(0);

        for (id, setting) in &baseline.rules {
            let level = match setting.severity {
                Some(severity) => severity.to_string(),
                None => "off".to_string(),
            };
            let description = self
                .registry
                .get(&RuleId::new(id.as_str()))
                .map(|rule| rule.description())
                .unwrap_or("(no builtin implementation)");

            let line = format!(
                "{}  {:<7}  {}",
                ui.theme().key.apply_to(format!("{:<width$}", id)),
                level,
                description
            );
            ui.message(&line);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_every_baseline_rule() {
        let mut ui = MockUI::new();

        let result = RulesCommand::new().execute(&mut ui).unwrap();

        assert!(result.success);
        let baseline = Baseline::bundled().unwrap();
        assert_eq!(ui.messages().len(), baseline.rules.len());
        for id in baseline.rules.keys() {
            assert!(ui.has_message(id));
        }
    }

    #[test]
    fn shows_levels() {
        let mut ui = MockUI::new();
        RulesCommand::new().execute(&mut ui).unwrap();

        let debugger = ui
            .messages()
            .iter()
            .find(|m| m.starts_with("no-debugger"))
            .unwrap();
        assert!(debugger.contains("  error  "));

        let console = ui
            .messages()
            .iter()
            .find(|m| m.starts_with("no-console"))
            .unwrap();
        assert!(console.contains("  warning  "));
    }
}
