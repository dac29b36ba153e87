//! Problem fixtures and plan checking shared by the lock tests.

use std::time::Duration;

use strips_harness::reader::StripsTask;
use strips_kernel::carrier::state::StateNode;
use strips_kernel::problem::Problem;
use strips_search::algorithm::Algorithm;
use strips_search::outcome::SearchReport;
use strips_search::policy::SearchPolicy;
use strips_search::search::search;

/// Encode a task.
///
/// # Panics
///
/// Panics if the task has duplicate action names. Fixtures never do.
#[must_use]
pub fn encode(task: StripsTask) -> Problem {
    task.into_problem()
        .unwrap_or_else(|e| panic!("fixture task failed to encode: {e}"))
}

/// Default policy with a different time budget.
#[must_use]
pub fn with_budget(time_budget: Duration) -> SearchPolicy {
    SearchPolicy {
        time_budget,
        ..SearchPolicy::default()
    }
}

/// Default policy with a different depth bound.
#[must_use]
pub fn with_depth(max_depth: u32) -> SearchPolicy {
    SearchPolicy {
        max_depth,
        ..SearchPolicy::default()
    }
}

/// Run one algorithm, treating pre-flight errors as test failures.
///
/// # Panics
///
/// Panics if the search is rejected before starting.
#[must_use]
pub fn run(problem: &Problem, algorithm: Algorithm, policy: &SearchPolicy) -> SearchReport {
    search(problem, algorithm, policy, None)
        .unwrap_or_else(|e| panic!("{algorithm} rejected: {e}"))
}

/// Why a plan does not solve a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanDefect {
    UnknownAction { step: usize, name: String },
    NotApplicable { step: usize, name: String },
    GoalNotReached,
}

/// Replay `plan` from the initial state, checking every step.
///
/// # Errors
///
/// Returns the first defect found.
pub fn check_plan(problem: &Problem, plan: &[String]) -> Result<(), PlanDefect> {
    let mut node = problem.root();
    for (step, name) in plan.iter().enumerate() {
        let Some(action) = problem.actions().iter().find(|a| a.name() == name) else {
            return Err(PlanDefect::UnknownAction {
                step,
                name: name.clone(),
            });
        };
        if !action.is_applicable(node.mask()) {
            return Err(PlanDefect::NotApplicable {
                step,
                name: name.clone(),
            });
        }
        let next = action.apply(node.mask());
        node = StateNode::child(&node, action.id(), next);
    }
    if problem.is_goal(&node) {
        Ok(())
    } else {
        Err(PlanDefect::GoalNotReached)
    }
}
