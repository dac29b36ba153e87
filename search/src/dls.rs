//! Depth-limited DFS and iterative deepening.
//!
//! Cycle avoidance is per path: a mask is skipped only while it is on the
//! current root-to-node path, so a state may be revisited through a
//! different branch. The path set is restored on every return.

use std::rc::Rc;

use fnv::FnvHashSet;
use log::trace;
use strips_kernel::carrier::mask::PropMask;
use strips_kernel::carrier::state::StateNode;
use strips_kernel::operators::apply::successors;
use strips_kernel::problem::Problem;

use crate::budget::TerminationCondition;
use crate::governor::Governor;
use crate::outcome::{SearchStats, Termination};

/// Result of one bounded pass.
#[derive(Debug)]
enum Pass {
    Found(Rc<StateNode>),
    /// Some branch hit the bound.
    Cutoff,
    /// Every branch was exhausted below the bound.
    NoPlan,
    Timeout,
}

struct BoundedDfs<'a> {
    problem: &'a Problem,
    governor: &'a mut Governor,
    stats: &'a mut SearchStats,
    path: FnvHashSet<PropMask>,
}

impl BoundedDfs<'_> {
    fn visit(&mut self, node: &Rc<StateNode>, remaining: u32) -> Pass {
        if self.governor.should_stop() {
            return Pass::Timeout;
        }
        self.governor.record(self.path.len() + 1);
        if self.problem.is_goal(node) {
            return Pass::Found(Rc::clone(node));
        }
        if remaining == 0 {
            return Pass::Cutoff;
        }

        self.path.insert(node.mask().clone());
        let result = self.expand(node, remaining);
        self.path.remove(node.mask());
        result
    }

    fn expand(&mut self, node: &Rc<StateNode>, remaining: u32) -> Pass {
        self.stats.expansions += 1;
        let mut cutoff = false;
        for child in successors(node, self.problem.actions()) {
            self.stats.generated += 1;
            if self.path.contains(child.mask()) {
                self.stats.duplicates_suppressed += 1;
                continue;
            }
            match self.visit(&child, remaining - 1) {
                Pass::Cutoff => cutoff = true,
                Pass::NoPlan => {}
                done @ (Pass::Found(_) | Pass::Timeout) => return done,
            }
        }
        if cutoff {
            Pass::Cutoff
        } else {
            Pass::NoPlan
        }
    }
}

fn bounded_pass(
    problem: &Problem,
    governor: &mut Governor,
    stats: &mut SearchStats,
    limit: u32,
) -> Pass {
    stats.depth_passes += 1;
    let mut dfs = BoundedDfs {
        problem,
        governor,
        stats,
        path: FnvHashSet::default(),
    };
    let root = problem.root();
    let pass = dfs.visit(&root, limit);
    debug_assert!(dfs.path.is_empty(), "path set must unwind with the recursion");
    pass
}

/// One depth-first pass bounded by `limit`.
///
/// Tracked elements: masks on the current path plus the node being visited.
pub(crate) fn depth_limited(
    problem: &Problem,
    governor: &mut Governor,
    stats: &mut SearchStats,
    limit: u32,
) -> Termination {
    match bounded_pass(problem, governor, stats, limit) {
        Pass::Found(node) => Termination::GoalReached(node),
        Pass::Cutoff => Termination::DepthLimitReached,
        Pass::NoPlan => Termination::Exhausted,
        Pass::Timeout => Termination::Timeout,
    }
}

/// Bounded passes with limits `0..=max_depth`, sharing one governor.
///
/// Returns the plan from the smallest bound that yields one. A pass that
/// ends without any cutoff proves no plan exists.
pub(crate) fn iterative_deepening(
    problem: &Problem,
    governor: &mut Governor,
    stats: &mut SearchStats,
    max_depth: u32,
) -> Termination {
    for limit in 0..=max_depth {
        if governor.should_stop() {
            return Termination::Timeout;
        }
        trace!("iddfs: bound {limit}");
        match bounded_pass(problem, governor, stats, limit) {
            Pass::Found(node) => return Termination::GoalReached(node),
            Pass::Cutoff => {}
            Pass::NoPlan => return Termination::Exhausted,
            Pass::Timeout => return Termination::Timeout,
        }
    }
    Termination::DepthLimitReached
}
