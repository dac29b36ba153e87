//! Action application and one-step successor generation.
//!
//! Applicability is two mask tests:
//! `(state & pre) == pre` and `(state & pre_neg) == 0`.
//! Application clears negative effects first, then sets positive effects:
//! `next = (state & !eff_neg) | eff_pos`. An action whose effect sets overlap
//! therefore leaves the overlapping proposition true.
//!
//! Applying an inapplicable action is not an error; it is simply absent from
//! [`successors`].

use std::rc::Rc;

use crate::carrier::mask::PropMask;
use crate::carrier::state::StateNode;
use crate::operators::action::{ActionTable, EncodedAction};

impl EncodedAction {
    /// Whether every precondition holds in `state`.
    #[must_use]
    pub fn is_applicable(&self, state: &PropMask) -> bool {
        state.contains_all(self.pre_mask()) && state.is_disjoint(self.pre_neg_mask())
    }

    /// The truth assignment after applying this action to `state`.
    ///
    /// Does not check applicability.
    #[must_use]
    pub fn apply(&self, state: &PropMask) -> PropMask {
        state.clear_then_set(self.eff_neg_mask(), self.eff_pos_mask())
    }
}

/// Actions applicable in `state`, in table order.
pub fn applicable<'a>(
    state: &'a PropMask,
    actions: &'a ActionTable,
) -> impl Iterator<Item = &'a EncodedAction> + 'a {
    actions.iter().filter(move |a| a.is_applicable(state))
}

/// Every state reachable from `node` by one applicable action.
///
/// Children are returned in action-table order, each a fresh node whose
/// parent is `node`.
#[must_use]
pub fn successors(node: &Rc<StateNode>, actions: &ActionTable) -> Vec<Rc<StateNode>> {
    applicable(node.mask(), actions)
        .map(|action| StateNode::child(node, action.id(), action.apply(node.mask())))
        .collect()
}
