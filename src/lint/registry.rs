//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores the rule implementations the builtin engine
//! knows about and provides methods for registering and retrieving them.

use std::collections::HashMap;

use super::rule::{LintRule, RuleId};
use super::rules::{
    EolLastRule, EqeqeqRule, NoAlertRule, NoConsoleRule, NoDebuggerRule, NoEvalRule,
    NoMultipleEmptyLinesRule, NoTrailingSpacesRule, NoVarRule,
};

/// Registry of available lint rules.
pub struct RuleRegistry {
    rules: HashMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(EqeqeqRule));
        registry.register(Box::new(NoDebuggerRule));
        registry.register(Box::new(NoEvalRule));
        registry.register(Box::new(NoAlertRule));
        registry.register(Box::new(NoConsoleRule));
        registry.register(Box::new(NoVarRule));
        registry.register(Box::new(NoTrailingSpacesRule));
        registry.register(Box::new(EolLastRule));
        registry.register(Box::new(NoMultipleEmptyLinesRule));
        registry
    }

    /// Register a lint rule.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
