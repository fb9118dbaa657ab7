//! Module with the scanner model, the append-only input of the generator.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rustc_hash::FxHashMap;

use crate::{Action, Macro, Result, RexgenError, RexgenErrorKind, Rule, StateKind};

/// The in-memory model of one scanner specification.
///
/// The model is populated in specification order by an external reader and then handed to
/// [`crate::generate`]. All operations are pure appends onto their own owned sequence and
/// perform no cross-validation: the model accepts anything and fails lazily at compilation.
///
/// Both the rule order and the macro order are preserved exactly as declared, since both
/// are semantically significant for the emitted scanner.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone)]
pub struct ScannerModel {
    scanner_name: Option<String>,
    header: Vec<String>,
    macros: Vec<Macro>,
    rules: Vec<Rule>,
    start_code: Vec<String>,
    inner: Vec<String>,
    footer: Vec<String>,
    state_kinds: FxHashMap<String, StateKind>,
}

impl ScannerModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the emitted scanner unit. The name becomes the struct name of the
    /// generated scanner and must therefore be a valid Rust type name.
    pub fn set_scanner_name(&mut self, name: &str) {
        self.scanner_name = Some(name.to_string());
    }

    /// Appends a header fragment. Header fragments are injected verbatim between the
    /// generated-file banner and the scanner unit.
    pub fn add_header(&mut self, line: &str) {
        self.header.push(line.to_string());
    }

    /// Appends a named pattern macro. Names are not deduplicated; a duplicate name is kept
    /// and re-emitted, leaving the generated file with conflicting constant definitions.
    pub fn add_macro(&mut self, name: &str, pattern: &str) {
        self.macros.push(Macro::new(name, pattern));
    }

    /// Appends a rule. The declaration order decides the guard test order in the emitted
    /// scanner: the first visible rule whose pattern matches at the cursor wins.
    pub fn add_rule(&mut self, state: Option<&str>, pattern: &str, action: Action) {
        self.rules.push(Rule::new(
            state.map(str::to_string),
            pattern.to_string(),
            action,
        ));
    }

    /// Rejects the removed two-part rule declaration form.
    ///
    /// Earlier grammar versions allowed rules declared as a bare pattern/action pair with
    /// implicit state handling. That form is gone and is refused immediately and
    /// unconditionally; it is never silently accepted or migrated.
    pub fn add_rule_legacy(&mut self, parts: &[&str]) -> Result<()> {
        Err(RexgenError::new(RexgenErrorKind::UnsupportedRuleForm(
            format!("{:?}", parts),
        )))
    }

    /// Appends a start-of-call fragment, injected verbatim at the top of every
    /// `next_token` call of the emitted scanner.
    pub fn add_start_code(&mut self, line: &str) {
        self.start_code.push(line.to_string());
    }

    /// Appends an inner fragment, injected verbatim into the impl block of the emitted
    /// scanner. Inner fragments typically supply the action methods referenced by rules.
    pub fn add_inner(&mut self, line: &str) {
        self.inner.push(line.to_string());
    }

    /// Appends a footer fragment, injected verbatim after the scanner unit.
    pub fn add_footer(&mut self, line: &str) {
        self.footer.push(line.to_string());
    }

    /// Declares the classification of a scan state. Every state referenced by a rule must
    /// be declared before compilation; an undeclared reference is reported by
    /// [`crate::generate`], not here.
    pub fn declare_state(&mut self, name: &str, kind: StateKind) {
        self.state_kinds.insert(name.to_string(), kind);
    }

    /// Get the scanner name, or an error when none was set.
    pub fn scanner_name(&self) -> Result<&str> {
        self.scanner_name
            .as_deref()
            .ok_or_else(|| RexgenError::new(RexgenErrorKind::MissingScannerName))
    }

    /// Get the header fragments.
    #[inline]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Get the macros in declaration order.
    #[inline]
    pub fn macros(&self) -> &[Macro] {
        &self.macros
    }

    /// Get the rules in declaration order.
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Get the start-of-call fragments.
    #[inline]
    pub fn start_code(&self) -> &[String] {
        &self.start_code
    }

    /// Get the inner fragments.
    #[inline]
    pub fn inner(&self) -> &[String] {
        &self.inner
    }

    /// Get the footer fragments.
    #[inline]
    pub fn footer(&self) -> &[String] {
        &self.footer
    }

    /// Get the declared classification of a state, if any.
    #[inline]
    pub fn state_kind(&self, name: &str) -> Option<StateKind> {
        self.state_kinds.get(name).copied()
    }
}
