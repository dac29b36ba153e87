//! Breadth-first search with a global visited set.

use std::collections::VecDeque;

use fnv::FnvHashSet;
use strips_kernel::carrier::mask::PropMask;
use strips_kernel::operators::apply::successors;
use strips_kernel::problem::Problem;

use crate::budget::TerminationCondition;
use crate::governor::Governor;
use crate::outcome::{SearchStats, Termination};

/// Layer-by-layer search. The first goal dequeued is at minimum depth.
///
/// Tracked elements: queued nodes plus visited masks.
pub(crate) fn breadth_first(
    problem: &Problem,
    governor: &mut Governor,
    stats: &mut SearchStats,
) -> Termination {
    let root = problem.root();
    let mut visited: FnvHashSet<PropMask> = FnvHashSet::default();
    visited.insert(root.mask().clone());
    let mut queue = VecDeque::from([root]);
    governor.record(queue.len() + visited.len());

    loop {
        if governor.should_stop() {
            return Termination::Timeout;
        }
        let Some(current) = queue.pop_front() else {
            return Termination::Exhausted;
        };
        if problem.is_goal(&current) {
            return Termination::GoalReached(current);
        }

        stats.expansions += 1;
        for child in successors(&current, problem.actions()) {
            stats.generated += 1;
            if visited.contains(child.mask()) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            visited.insert(child.mask().clone());
            queue.push_back(child);
        }
        governor.record(queue.len() + visited.len());
    }
}
