//! A* over `f = g + h` with lazy deletion.

use fnv::FnvHashMap;
use strips_kernel::carrier::mask::PropMask;
use strips_kernel::operators::action::CostModel;
use strips_kernel::operators::apply::successors;
use strips_kernel::problem::Problem;

use crate::budget::TerminationCondition;
use crate::frontier::OpenList;
use crate::governor::Governor;
use crate::heuristic::{HeuristicCache, HeuristicValue};
use crate::node::SearchNode;
use crate::outcome::{SearchStats, Termination};

/// Best-first search keyed by `f`, `g` accumulated under `cost_model`.
///
/// `best_g` holds the cheapest known cost per mask. An open entry whose `g`
/// exceeds it is stale and skipped on pop. Successors with an unreachable
/// estimate are never pushed.
///
/// Tracked elements: open entries plus `best_g` entries.
pub(crate) fn astar(
    problem: &Problem,
    governor: &mut Governor,
    stats: &mut SearchStats,
    cost_model: CostModel,
) -> Termination {
    let mut heuristic = HeuristicCache::new(problem);
    let termination = best_first(problem, governor, stats, cost_model, &mut heuristic);
    stats.heuristic_evaluations = heuristic.evaluations();
    stats.heuristic_cache_hits = heuristic.hits();
    termination
}

fn best_first(
    problem: &Problem,
    governor: &mut Governor,
    stats: &mut SearchStats,
    cost_model: CostModel,
    heuristic: &mut HeuristicCache<'_>,
) -> Termination {
    let mut open = OpenList::new();
    let mut best_g: FnvHashMap<PropMask, u64> = FnvHashMap::default();
    let mut creation_order = 0u64;

    let root = problem.root();
    best_g.insert(root.mask().clone(), 0);
    match heuristic.estimate(root.mask()) {
        HeuristicValue::Finite(h_cost) => {
            open.push(SearchNode {
                state: root,
                g_cost: 0,
                h_cost,
                creation_order,
            });
            creation_order += 1;
        }
        HeuristicValue::Unreachable => stats.dead_ends += 1,
    }
    governor.record(open.len() + best_g.len());

    loop {
        if governor.should_stop() {
            return Termination::Timeout;
        }
        let Some(current) = open.pop() else {
            return Termination::Exhausted;
        };
        if best_g
            .get(current.state.mask())
            .is_some_and(|&known| current.g_cost > known)
        {
            stats.stale_skipped += 1;
            continue;
        }
        if problem.is_goal(&current.state) {
            return Termination::GoalReached(current.state);
        }

        stats.expansions += 1;
        for child in successors(&current.state, problem.actions()) {
            stats.generated += 1;
            let step = child
                .action_used()
                .and_then(|id| problem.actions().get(id))
                .map_or(1, |action| action.cost(cost_model));
            let g_cost = current.g_cost.saturating_add(step);
            if best_g
                .get(child.mask())
                .is_some_and(|&known| known <= g_cost)
            {
                stats.duplicates_suppressed += 1;
                continue;
            }
            best_g.insert(child.mask().clone(), g_cost);
            match heuristic.estimate(child.mask()) {
                HeuristicValue::Finite(h_cost) => {
                    open.push(SearchNode {
                        state: child,
                        g_cost,
                        h_cost,
                        creation_order,
                    });
                    creation_order += 1;
                }
                HeuristicValue::Unreachable => stats.dead_ends += 1,
            }
        }
        governor.record(open.len() + best_g.len());
    }
}
