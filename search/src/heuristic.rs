//! Relaxed cost propagation (`h_max`) over the proposition/action graph.
//!
//! Delete effects are ignored. Starting from the queried state at cost 0,
//! propagation finalizes propositions in cost order; an action fires once
//! all its positive preconditions are final and makes each positive effect
//! available at `1 + max(precondition costs)`. The estimate is the largest
//! finalized cost over the goal propositions.
//!
//! [`HeuristicContext`] holds the per-problem adjacency (proposition →
//! consuming actions) and is built once per run. It borrows the problem, so
//! concurrent runs over different problems never share it.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use fnv::FnvHashMap;
use strips_kernel::carrier::goal::Goal;
use strips_kernel::carrier::index::{ActionId, PropId};
use strips_kernel::carrier::mask::PropMask;
use strips_kernel::operators::action::ActionTable;
use strips_kernel::problem::Problem;

/// Cost assigned to propositions that have not been reached.
const UNREACHED: u32 = u32::MAX;

/// A heuristic estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeuristicValue {
    /// Relaxed actions-to-goal.
    Finite(u32),
    /// Some goal proposition is unreachable even with deletes ignored.
    Unreachable,
}

impl HeuristicValue {
    #[must_use]
    pub fn is_unreachable(self) -> bool {
        matches!(self, Self::Unreachable)
    }
}

impl fmt::Display for HeuristicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(h) => write!(f, "{h}"),
            Self::Unreachable => f.write_str("inf"),
        }
    }
}

/// Per-problem adjacency for relaxed cost propagation.
#[derive(Debug)]
pub struct HeuristicContext<'a> {
    actions: &'a ActionTable,
    width: usize,
    /// Proposition → actions listing it as a positive precondition.
    consumers: Vec<Vec<ActionId>>,
    /// Positive precondition count per action.
    precondition_counts: Vec<u32>,
    /// Actions with no positive preconditions.
    free_actions: Vec<ActionId>,
}

impl<'a> HeuristicContext<'a> {
    /// Build the adjacency for `problem`.
    #[must_use]
    pub fn new(problem: &'a Problem) -> Self {
        Self::from_actions(problem.actions(), problem.width())
    }

    /// Build the adjacency for an action table over `width` propositions.
    ///
    /// # Panics
    ///
    /// Panics if an action's precondition ids are `>= width`.
    #[must_use]
    pub fn from_actions(actions: &'a ActionTable, width: usize) -> Self {
        let mut consumers = vec![Vec::new(); width];
        let mut precondition_counts = Vec::with_capacity(actions.len());
        let mut free_actions = Vec::new();
        for action in actions {
            let pre = action.pre_idx();
            for p in pre {
                consumers[p.index()].push(action.id());
            }
            // pre_idx is deduplicated, so each consumer entry is decremented once.
            precondition_counts.push(u32::try_from(pre.len()).unwrap_or(u32::MAX));
            if pre.is_empty() {
                free_actions.push(action.id());
            }
        }
        Self {
            actions,
            width,
            consumers,
            precondition_counts,
            free_actions,
        }
    }

    /// Relaxed actions-to-goal from `state`.
    ///
    /// Pure in `(self, state, goal)`: repeated queries return the same value.
    #[must_use]
    pub fn estimate(&self, state: &PropMask, goal: &Goal) -> HeuristicValue {
        if goal.is_unsatisfiable() {
            return HeuristicValue::Unreachable;
        }
        if goal.is_satisfied_by(state) {
            return HeuristicValue::Finite(0);
        }

        let mut cost = vec![UNREACHED; self.width];
        let mut unsatisfied = self.precondition_counts.clone();
        let mut enabling = vec![0u32; self.precondition_counts.len()];
        let mut queue: BinaryHeap<Reverse<(u32, PropId)>> = BinaryHeap::new();

        for p in state.iter() {
            cost[p.index()] = 0;
            queue.push(Reverse((0, p)));
        }
        for &action in &self.free_actions {
            self.fire(action, 0, &mut cost, &mut queue);
        }

        let goal_mask = goal.mask();
        let mut open_goals = goal.ids().len();
        let mut worst_goal = 0u32;
        while let Some(Reverse((c, p))) = queue.pop() {
            if c > cost[p.index()] {
                continue;
            }
            if goal_mask.contains(p) {
                worst_goal = worst_goal.max(c);
                open_goals -= 1;
                if open_goals == 0 {
                    // Later pops are never cheaper, so every goal cost is final.
                    return HeuristicValue::Finite(worst_goal);
                }
            }
            for &action in &self.consumers[p.index()] {
                let slot = action.index();
                unsatisfied[slot] -= 1;
                enabling[slot] = enabling[slot].max(c);
                if unsatisfied[slot] == 0 {
                    self.fire(action, enabling[slot], &mut cost, &mut queue);
                }
            }
        }
        HeuristicValue::Unreachable
    }

    fn fire(
        &self,
        action: ActionId,
        enabling: u32,
        cost: &mut [u32],
        queue: &mut BinaryHeap<Reverse<(u32, PropId)>>,
    ) {
        let Some(action) = self.actions.get(action) else {
            return;
        };
        let reached = enabling.saturating_add(1);
        for &p in action.eff_pos_idx() {
            if reached < cost[p.index()] {
                cost[p.index()] = reached;
                queue.push(Reverse((reached, p)));
            }
        }
    }
}

/// Memoized estimates for one run, keyed by state mask.
///
/// The estimate depends only on the mask, so caching it across paths that
/// reach the same state is exact.
#[derive(Debug)]
pub struct HeuristicCache<'a> {
    context: HeuristicContext<'a>,
    goal: &'a Goal,
    values: FnvHashMap<PropMask, HeuristicValue>,
    evaluations: u64,
    hits: u64,
}

impl<'a> HeuristicCache<'a> {
    #[must_use]
    pub fn new(problem: &'a Problem) -> Self {
        Self {
            context: HeuristicContext::new(problem),
            goal: problem.goal(),
            values: FnvHashMap::default(),
            evaluations: 0,
            hits: 0,
        }
    }

    /// Cached estimate for `state`, computing it on first sight.
    pub fn estimate(&mut self, state: &PropMask) -> HeuristicValue {
        if let Some(&value) = self.values.get(state) {
            self.hits += 1;
            return value;
        }
        self.evaluations += 1;
        let value = self.context.estimate(state, self.goal);
        self.values.insert(state.clone(), value);
        value
    }

    /// Number of full propagations run, one per distinct mask.
    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Number of lookups answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }
}
