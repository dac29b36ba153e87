//! Search entry point.

use log::debug;
use strips_kernel::problem::Problem;

use crate::algorithm::Algorithm;
use crate::astar::astar;
use crate::bfs::breadth_first;
use crate::budget::CancelToken;
use crate::dls::{depth_limited, iterative_deepening};
use crate::error::SearchError;
use crate::governor::Governor;
use crate::outcome::{Plan, SearchOutcome, SearchReport, SearchStats, Termination};
use crate::policy::SearchPolicy;

/// Run `algorithm` on `problem` under `policy`.
///
/// Every runtime termination (plan, no plan, depth limit, timeout) returns
/// `Ok(SearchReport)` carrying the counters and peak-size estimate. The
/// budget and `cancel` are polled once per node expansion.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] or
/// [`SearchError::MalformedProblem`] for pre-flight validation failures.
/// No report is produced in that case because no search steps were taken.
pub fn search(
    problem: &Problem,
    algorithm: Algorithm,
    policy: &SearchPolicy,
    cancel: Option<&CancelToken>,
) -> Result<SearchReport, SearchError> {
    policy.validate()?;
    problem.validate()?;

    debug!(
        "{algorithm}: start ({} propositions, {} actions, budget {:?}, max depth {}, cost {})",
        problem.width(),
        problem.actions().len(),
        policy.time_budget,
        policy.max_depth,
        policy.cost_model.name(),
    );

    let mut governor = Governor::new(policy.time_budget, cancel.cloned());
    let mut stats = SearchStats::default();
    let termination = match algorithm {
        Algorithm::BreadthFirst => breadth_first(problem, &mut governor, &mut stats),
        Algorithm::DepthLimited => {
            depth_limited(problem, &mut governor, &mut stats, policy.max_depth)
        }
        Algorithm::IterativeDeepening => {
            iterative_deepening(problem, &mut governor, &mut stats, policy.max_depth)
        }
        Algorithm::AStar => astar(problem, &mut governor, &mut stats, policy.cost_model),
    };

    stats.polls = governor.polls();

    let outcome = match termination {
        Termination::GoalReached(node) => SearchOutcome::PlanFound(Plan {
            actions: problem.plan_names(&node),
            cost: problem.plan_cost(&node, policy.cost_model),
        }),
        Termination::Exhausted => SearchOutcome::NoPlan,
        Termination::DepthLimitReached => SearchOutcome::DepthLimitReached {
            max_depth: policy.max_depth,
        },
        Termination::Timeout => SearchOutcome::Timeout,
    };

    let report = SearchReport {
        algorithm,
        outcome,
        stats,
        peak_elements: governor.meter().peak_elements(),
        elapsed: governor.elapsed(),
    };
    debug!(
        "{algorithm}: {} after {} expansions, {} generated, peak {:.3} MB, {:?}",
        report.outcome.label(),
        report.stats.expansions,
        report.stats.generated,
        report.peak_mb(),
        report.elapsed,
    );
    Ok(report)
}
