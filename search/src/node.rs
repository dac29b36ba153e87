//! Best-first search nodes and their frontier ordering key.

use std::rc::Rc;

use strips_kernel::carrier::state::StateNode;

/// A state on the A* open list.
///
/// Ordering for frontier extraction uses `(f_cost, h_cost, creation_order)`
/// where `f_cost = g_cost + h_cost`. Lower is better; ties prefer the node
/// estimated closer to the goal, then the older node.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// The state and its lineage.
    pub state: Rc<StateNode>,
    /// Cumulative path cost under the run's cost model.
    pub g_cost: u64,
    /// Heuristic estimate (always finite on the open list).
    pub h_cost: u32,
    /// Per-run counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl SearchNode {
    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(u64::from(self.h_cost))
    }
}

/// Frontier ordering key derived from a [`SearchNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub h_cost: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.h_cost.cmp(&other.h_cost))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            f_cost: node.f_cost(),
            h_cost: node.h_cost,
            creation_order: node.creation_order,
        }
    }
}
