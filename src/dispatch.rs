//! Module with the partitioning of scan states into dispatch groups.

use log::debug;

use crate::{Result, RexgenError, RexgenErrorKind, Rule, ScannerModel, StateKind};

/// One dispatch group of the emitted scanner.
///
/// Each group becomes one arm of the state match in the emitted `next_token`. The shared
/// group is evaluated for the default state and for all inclusive states; every exclusive
/// state gets a singleton group of its own. This decides how many independent dispatch
/// blocks the emitted scanner contains and which rules are reachable from each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchGroup {
    /// The combined group of the default state and all inclusive states.
    Shared {
        /// The inclusive states, in first-appearance order over the rule list.
        inclusive: Vec<String>,
    },
    /// The singleton group of one exclusive state.
    Exclusive {
        /// The state the group represents.
        state: String,
    },
}

impl DispatchGroup {
    /// Decides whether a rule is emitted into this group.
    ///
    /// A rule is visible if its state selector equals the group's represented state, or if
    /// it has no selector at all: default rules are part of every group's visible rule set.
    pub fn admits(&self, rule: &Rule) -> bool {
        match rule.state() {
            None => true,
            Some(selector) => match self {
                DispatchGroup::Shared { inclusive } => {
                    inclusive.iter().any(|state| state == selector)
                }
                DispatchGroup::Exclusive { state } => state == selector,
            },
        }
    }
}

/// Partitions the states referenced by the model's rules into dispatch groups.
///
/// The state set is derived, never stored: it is the set of distinct non-empty state
/// selectors across all rules, in first-occurrence order. Each state is classified by its
/// declared [`StateKind`]; referencing a state that was never declared is a compile-time
/// error, reported here rather than patched over.
///
/// The result always starts with the shared group, followed by one group per exclusive
/// state in first-occurrence order.
pub fn partition_states(model: &ScannerModel) -> Result<Vec<DispatchGroup>> {
    let mut seen: Vec<&str> = Vec::new();
    for rule in model.rules() {
        if let Some(state) = rule.state() {
            if !seen.contains(&state) {
                seen.push(state);
            }
        }
    }

    let mut inclusive = Vec::new();
    let mut exclusive = Vec::new();
    for state in seen {
        match model.state_kind(state) {
            Some(StateKind::Inclusive) => inclusive.push(state.to_string()),
            Some(StateKind::Exclusive) => exclusive.push(state.to_string()),
            None => {
                return Err(RexgenError::new(RexgenErrorKind::UndeclaredState(
                    state.to_string(),
                )))
            }
        }
    }
    debug!(
        "Partitioned states: {} inclusive, {} exclusive",
        inclusive.len(),
        exclusive.len()
    );

    let mut groups = vec![DispatchGroup::Shared { inclusive }];
    groups.extend(
        exclusive
            .into_iter()
            .map(|state| DispatchGroup::Exclusive { state }),
    );
    Ok(groups)
}
