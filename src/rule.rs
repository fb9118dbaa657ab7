//! Module with the rule types and their methods.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The classification of a scan state.
///
/// Rules bound to an `Exclusive` state are only reachable while exactly that state is active,
/// and the state's dispatch block contains only its own rules plus the default rules.
/// Rules bound to an `Inclusive` state share the dispatch block of the default rule set and
/// are additionally guarded by a check of the active state.
///
/// The classification is declared explicitly on the model via
/// [`crate::ScannerModel::declare_state`]. There is no naming convention involved.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// The state's rules are only visible while the state is active.
    Exclusive,
    /// The state's rules extend the always-visible default rule set.
    Inclusive,
}

/// The action carried out when a rule matches.
///
/// The action kind is decided once, when the rule is added to the model. The generator never
/// re-inspects the textual shape of an action at emission time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// The rule consumes its match but produces no token. Scanning continues at the
    /// position after the match.
    None,
    /// The rule produces a token whose sole payload is a switch of the active scan state.
    /// A payload of `Option::None` switches back to the default state.
    /// The emitted scanner applies the transition itself after the match loop.
    StateTransition(Option<String>),
    /// A braced Rust block spliced verbatim into the emitted scanner. The block is evaluated
    /// with the full match bound as `text` and the capture groups bound as `matches`, and
    /// must evaluate to `Option<Vec<String>>`.
    ///
    /// The block is opaque foreign text to the generator. It is placed structurally, never
    /// parsed or interpreted.
    InlineBlock(String),
    /// A call to a scanner method of the given name with the matched text as its only
    /// argument. The method is expected to be supplied via inner fragments and to return
    /// `Option<Vec<String>>`.
    NamedCall(String),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::None => write!(f, "-"),
            Action::StateTransition(Some(state)) => write!(f, "-> {}", state),
            Action::StateTransition(None) => write!(f, "-> default"),
            Action::InlineBlock(block) => write!(f, "{}", block),
            Action::NamedCall(name) => write!(f, "{} text", name),
        }
    }
}

/// A single scanner rule.
///
/// A rule is a (state-selector, pattern, action) triple. The state selector restricts in
/// which dispatch blocks the rule is visible; `None` means the rule belongs to the default
/// rule set and is visible everywhere.
///
/// The position of a rule in the model is semantically load-bearing: among all rules
/// visible in a dispatch block, the emitted scanner tests the guards in declaration order
/// and the first pattern that matches at the cursor wins. This is first-match semantics,
/// not longest-match, and it is deliberate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    state: Option<String>,
    pattern: String,
    action: Action,
}

impl Rule {
    /// Create a new rule.
    pub fn new(state: Option<String>, pattern: String, action: Action) -> Self {
        Self {
            state,
            pattern,
            action,
        }
    }

    /// Get the state selector.
    #[inline]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Get the pattern. The pattern is an opaque regex fragment for the host engine of the
    /// emitted scanner; the generator only places it, it never interprets it.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get the action.
    #[inline]
    pub fn action(&self) -> &Action {
        &self.action
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            Some(state) => write!(f, "{}  ", state)?,
            None => {}
        }
        write!(f, "/{}/  {}", self.pattern.escape_default(), self.action)
    }
}

/// A named pattern macro.
///
/// Macros are name/pattern pairs kept in declaration order. Macro substitution inside rule
/// patterns happens in the external specification reader before the rules reach the model;
/// the generator only re-emits each macro as a standalone binding in the output.
///
/// Macro names are not deduplicated. Duplicate names are re-emitted as duplicate constant
/// bindings, which the consumer's compiler rejects as conflicting definitions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Macro {
    /// The macro name.
    pub name: String,
    /// The pattern fragment bound to the name.
    pub pattern: String,
}

impl Macro {
    /// Create a new macro.
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
        }
    }
}
