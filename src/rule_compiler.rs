//! Module with the per-rule guard and action synthesis.

use crate::{Action, DispatchGroup, Rule};

/// Indentation of a guard line inside a dispatch arm of the emitted `next_token`.
const GUARD_INDENT: &str = "                    ";
/// Indentation of an action body line, one level below the guard.
const BODY_INDENT: &str = "                        ";

/// Compiles single rules in the context of one dispatch group.
///
/// For every rule the compiler decides visibility, synthesizes the guard condition and
/// synthesizes the action body from the rule's action kind. The patterns themselves are
/// referenced by their index into the emitted pattern table; the compiler never looks at
/// the pattern text.
pub(crate) struct RuleCompiler<'a> {
    group: &'a DispatchGroup,
}

impl<'a> RuleCompiler<'a> {
    /// Creates a compiler for the given dispatch group.
    pub(crate) fn new(group: &'a DispatchGroup) -> Self {
        Self { group }
    }

    /// Emits the guard and action of one rule into `buf`.
    ///
    /// `index` is the rule's position in the model's rule list and doubles as the index
    /// into the emitted pattern table. `first` selects between opening a new guard chain
    /// and continuing the existing one.
    ///
    /// Returns `false` without emitting anything when the rule is not visible in the
    /// compiler's group.
    pub(crate) fn compile_rule(
        &self,
        buf: &mut String,
        rule: &Rule,
        index: usize,
        first: bool,
    ) -> bool {
        if !self.group.admits(rule) {
            return false;
        }
        let scan_expr = self.scan_expr(rule, index);
        let opener = if first { "if" } else { "} else if" };
        match rule.action() {
            Action::None => {
                buf.push_str(&format!(
                    "{}{} {}.is_some() {{\n{}None\n",
                    GUARD_INDENT, opener, scan_expr, BODY_INDENT
                ));
            }
            Action::StateTransition(target) => {
                let target = match target {
                    Some(state) => format!("\"{}\".to_string()", state),
                    None => "String::new()".to_string(),
                };
                buf.push_str(&format!(
                    "{}{} {}.is_some() {{\n{}Some(vec![\"state\".to_string(), {}])\n",
                    GUARD_INDENT, opener, scan_expr, BODY_INDENT, target
                ));
            }
            Action::InlineBlock(block) => {
                // The block is foreign text and is spliced verbatim, with the full match
                // bound as `text` and the trimmed capture list bound as `matches`.
                buf.push_str(&format!(
                    "{}{} let Some(text) = {} {{\n{}let matches = self.matches();\n{}{}\n",
                    GUARD_INDENT, opener, scan_expr, BODY_INDENT, BODY_INDENT, block
                ));
            }
            Action::NamedCall(name) => {
                buf.push_str(&format!(
                    "{}{} let Some(text) = {} {{\n{}self.{}(text)\n",
                    GUARD_INDENT, opener, scan_expr, BODY_INDENT, name
                ));
            }
        }
        true
    }

    /// Synthesizes the match part of the guard.
    ///
    /// Inside an exclusive group the enclosing match arm has already pinned the active
    /// state, so the guard is a plain scan. The same holds for rules without a selector.
    /// An inclusive-state rule inside the shared group additionally checks the active
    /// state flag before scanning.
    fn scan_expr(&self, rule: &Rule, index: usize) -> String {
        match (self.group, rule.state()) {
            (DispatchGroup::Shared { .. }, Some(state)) => {
                format!("self.scan_in_state({}, \"{}\")", index, state)
            }
            _ => format!("self.scan({})", index),
        }
    }
}
