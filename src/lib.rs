#![forbid(missing_docs)]
//! # `rexgen`
//! The `rexgen` crate compiles a declarative lexical-scanner specification, consisting of
//! named pattern macros, scan states and an ordered list of (state, pattern, action) rules,
//! into Rust
//! source code for a runnable tokenizer. The emitted tokenizer repeatedly matches the
//! first applicable rule at the current input cursor and dispatches to that rule's action,
//! optionally switching its scanning state.
//!
//! The crate owns the in-memory rule model and the compilation and emission algorithm.
//! The specification-text reader that populates the model, and the regex engine the
//! emitted scanner runs on, are external collaborators: patterns and code fragments pass
//! through the generator as opaque text and are placed structurally, never interpreted.
//! In particular, no NFA/DFA is built here; the generator only decides which rule's guard
//! is tested, in what order, under which state.
//!
//! Rule order is load-bearing throughout: among all rules visible in a dispatch block, the
//! emitted scanner tests the guards in declaration order and the first match at the cursor
//! wins. This is first-match semantics, not longest-match, and it is deliberate.
//!
//! # Example
//! ```rust
//! use rexgen::{generate, Action, GeneratorConfig, ScannerModel, StateKind};
//!
//! let mut model = ScannerModel::new();
//! model.set_scanner_name("Calculator");
//! model.add_macro("DIGIT", "[0-9]");
//! model.declare_state("COMMENT", StateKind::Exclusive);
//! model.add_rule(None, r"\s+", Action::None);
//! model.add_rule(None, "[0-9]+", Action::NamedCall("number".to_string()));
//! model.add_rule(None, "#", Action::StateTransition(Some("COMMENT".to_string())));
//! model.add_rule(Some("COMMENT"), r"\n", Action::StateTransition(None));
//! model.add_rule(Some("COMMENT"), r"[^\n]+", Action::None);
//! model.add_inner("fn number(&mut self, text: String) -> Option<Vec<String>> {");
//! model.add_inner("    Some(vec![\"number\".to_string(), text])");
//! model.add_inner("}");
//!
//! let code = generate(&model, &GeneratorConfig::new()).unwrap();
//! assert!(code.contains("pub struct Calculator"));
//! ```

#[cfg(test)]
#[macro_use]
extern crate rstest;

/// Module with error definitions
mod errors;
pub use errors::{Result, RexgenError, RexgenErrorKind};

/// Module with the generator configuration and the recognized option set.
mod config;
pub use config::{GeneratorConfig, ScannerOptions};

/// Module with the partitioning of scan states into dispatch groups.
mod dispatch;
pub use dispatch::{partition_states, DispatchGroup};

/// Module with the assembly of the emitted scanner source.
mod generate;
pub use generate::{generate, generate_to_file};

/// Module with the rule, action, state and macro types.
mod rule;
pub use rule::{Action, Macro, Rule, StateKind};

/// Module with the per-rule guard and action synthesis.
pub(crate) mod rule_compiler;

/// Module with the scanner model, the append-only input of the generator.
mod scanner_model;
pub use scanner_model::ScannerModel;
