//! JavaScript linting.
//!
//! This module runs the baseline rule set against the files matched by
//! `eslintClientPaths`.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Baseline** - The fixed rule set every run uses ([`Baseline`])
//! - **Engines** - In-process or ESLint-backed linting ([`LintEngine`])
//! - **Rules** - Individual checks for the builtin engine ([`LintRule`] trait)
//! - **Registry** - Collection of all builtin rules ([`RuleRegistry`])
//! - **Results** - Per-file messages with severity and position ([`LintReport`])
//!
//! # Example
//!
//! ```
//! use osflinter::lint::{Baseline, BuiltinEngine, Severity};
//! use std::path::Path;
//!
//! let engine = BuiltinEngine::new(Baseline::bundled().unwrap());
//! let result = engine.lint_text(Path::new("/src/app.js"), "debugger;\n");
//!
//! assert_eq!(result.messages.len(), 1);
//! assert_eq!(result.messages[0].severity, Severity::Error);
//! assert_eq!(result.messages[0].rule_label(), "no-debugger");
//! ```

pub mod baseline;
pub mod diagnostic;
pub mod engine;
pub mod registry;
pub mod result;
pub mod rule;
pub mod rules;
pub mod source;
pub mod span;

pub use baseline::{Baseline, RuleSetting};
pub use diagnostic::LintMessage;
pub use engine::{create_engine, BuiltinEngine, EslintEngine, LintEngine};
pub use registry::RuleRegistry;
pub use result::{FileResult, LintReport};
pub use rule::{LintRule, RuleContext, RuleId, Severity};
pub use source::{Region, SourceFile, SourceLine};
pub use span::Span;
