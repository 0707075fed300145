//! The bundled baseline rule set.
//!
//! The baseline is an ESLint-shaped config document compiled into the
//! binary. Both engines read it: the builtin engine picks the rules it
//! implements, and the ESLint engine forwards it on the command line.
//! Users cannot override it.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::rule::Severity;
use crate::error::{OsfLinterError, Result};

/// Raw baseline document.
pub const BASELINE_JSON: &str = include_str!("baseline.json");

/// Parsed baseline configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    /// Whether this is a root config (no cascading).
    #[serde(default)]
    pub root: bool,
    /// Parser options such as `ecmaVersion`.
    #[serde(default)]
    pub parser_options: BTreeMap<String, Value>,
    /// Predefined global environments.
    #[serde(default)]
    pub env: BTreeMap<String, bool>,
    /// Rule levels keyed by rule id.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,
}

/// Level and options for one rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct RuleSetting {
    /// `None` when the rule is off.
    pub severity: Option<Severity>,
    /// Options following the level.
    pub options: Vec<Value>,
}

impl RuleSetting {
    /// ESLint form of this setting: a numeric level, or `[level, ...options]`.
    pub fn to_eslint_value(&self) -> Value {
        let level = Value::from(self.severity.map(Severity::level).unwrap_or(0));
        if self.options.is_empty() {
            level
        } else {
            let mut items = vec![level];
            items.extend(self.options.iter().cloned());
            Value::Array(items)
        }
    }
}

fn parse_level(value: &Value) -> std::result::Result<Option<Severity>, String> {
    match value {
        Value::String(name) => match name.as_str() {
            "off" => Ok(None),
            "warn" => Ok(Some(Severity::Warning)),
            "error" => Ok(Some(Severity::Error)),
            other => Err(format!("unknown rule level '{}'", other)),
        },
        Value::Number(n) => match n.as_u64() {
            Some(0) => Ok(None),
            Some(level) => Severity::from_level(level)
                .map(Some)
                .ok_or_else(|| format!("unknown rule level {}", level)),
            None => Err(format!("unknown rule level {}", n)),
        },
        other => Err(format!("invalid rule level {}", other)),
    }
}

impl TryFrom<Value> for RuleSetting {
    type Error = String;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Array(mut items) => {
                if items.is_empty() {
                    return Err("rule setting array must start with a level".to_string());
                }
                let severity = parse_level(&items[0])?;
                let options = items.split_off(1);
                Ok(Self { severity, options })
            }
            other => Ok(Self {
                severity: parse_level(&other)?,
                options: Vec::new(),
            }),
        }
    }
}

impl Baseline {
    /// Parse the bundled baseline.
    pub fn bundled() -> Result<Self> {
        Self::parse(BASELINE_JSON)
    }

    /// Parse a baseline document.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| OsfLinterError::lint_run(format!("Invalid baseline rule set: {}", e)))
    }

    /// Rules that are not `off`, in id order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, Severity, &[Value])> {
        self.rules.iter().filter_map(|(id, setting)| {
            setting
                .severity
                .map(|severity| (id.as_str(), severity, setting.options.as_slice()))
        })
    }

    /// The rules map in ESLint `--rule` form.
    pub fn rules_argument(&self) -> String {
        let map: serde_json::Map<String, Value> = self
            .rules
            .iter()
            .map(|(id, setting)| (id.clone(), setting.to_eslint_value()))
            .collect();
        Value::Object(map).to_string()
    }

    /// Parser options as ESLint `--parser-options key:value` arguments.
    pub fn parser_option_arguments(&self) -> Vec<String> {
        self.parser_options
            .iter()
            .map(|(key, value)| match value {
                Value::String(s) => format!("{}:{}", key, s),
                other => format!("{}:{}", key, other),
            })
            .collect()
    }

    /// Enabled environments as a comma-separated ESLint `--env` argument.
    pub fn env_argument(&self) -> Option<String> {
        let names: Vec<&str> = self
            .env
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
            .collect();
        if names.is_empty() {
            None
        } else {
            Some(names.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bundled_baseline_parses() {
        let baseline = Baseline::bundled().unwrap();

        assert!(baseline.root);
        assert!(!baseline.rules.is_empty());
        assert_eq!(
            baseline.rules["no-debugger"].severity,
            Some(Severity::Error)
        );
        assert_eq!(
            baseline.rules["no-console"].severity,
            Some(Severity::Warning)
        );
    }

    #[test]
    fn parses_all_level_forms() {
        let baseline = Baseline::parse(
            r#"{"rules": {"a": "off", "b": 1, "c": ["error", {"max": 3}], "d": 0}}"#,
        )
        .unwrap();

        assert_eq!(baseline.rules["a"].severity, None);
        assert_eq!(baseline.rules["b"].severity, Some(Severity::Warning));
        assert_eq!(baseline.rules["c"].severity, Some(Severity::Error));
        assert_eq!(baseline.rules["c"].options, vec![json!({"max": 3})]);
        assert_eq!(baseline.enabled_rules().count(), 2);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = Baseline::parse(r#"{"rules": {"a": "fatal"}}"#).unwrap_err();
        assert!(matches!(err, OsfLinterError::LintRun { .. }));
    }

    #[test]
    fn numeric_levels_map_to_severity() {
        let baseline = Baseline::parse(r#"{"rules": {"a": 2, "b": [1]}}"#).unwrap();

        assert_eq!(baseline.rules["a"].severity, Some(Severity::Error));
        assert_eq!(baseline.rules["b"].severity, Some(Severity::Warning));
        assert!(Baseline::parse(r#"{"rules": {"c": 3}}"#).is_err());
    }

    #[test]
    fn rules_argument_uses_numeric_levels() {
        let baseline =
            Baseline::parse(r#"{"rules": {"eqeqeq": "error", "x": ["warn", {"max": 2}]}}"#)
                .unwrap();

        let arg: Value = serde_json::from_str(&baseline.rules_argument()).unwrap();

        assert_eq!(arg, json!({"eqeqeq": 2, "x": [1, {"max": 2}]}));
    }

    #[test]
    fn parser_and_env_arguments() {
        let baseline = Baseline::bundled().unwrap();

        let parser = baseline.parser_option_arguments();
        assert!(parser.contains(&"ecmaVersion:2018".to_string()));
        assert!(parser.contains(&"sourceType:module".to_string()));
        assert_eq!(baseline.env_argument().as_deref(), Some("browser,es6"));
    }
}
