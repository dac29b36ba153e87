//! Behavioural lock tests: the canonical scenarios every algorithm must
//! satisfy (single-step plan, unreachable goal, depth cutoff, zero budget).

use std::time::Duration;

use lock_tests::fixtures::{check_plan, encode, run, with_budget, with_depth};
use strips_harness::worlds;
use strips_kernel::carrier::literal::Literal;
use strips_kernel::problem::Problem;
use strips_search::algorithm::Algorithm;
use strips_search::heuristic::{HeuristicContext, HeuristicValue};
use strips_search::outcome::SearchOutcome;
use strips_search::policy::SearchPolicy;

// ---------------------------------------------------------------------------
// Single-step plan
// ---------------------------------------------------------------------------

#[test]
fn pickup_is_solved_by_every_algorithm() {
    let problem = encode(worlds::pickup());
    for algorithm in Algorithm::ALL {
        let report = run(&problem, algorithm, &SearchPolicy::default());
        let plan = report
            .outcome
            .plan()
            .unwrap_or_else(|| panic!("{algorithm}: expected a plan, got {:?}", report.outcome));
        assert_eq!(plan.actions, vec!["pickup".to_string()], "{algorithm}");
        assert_eq!(plan.cost, 1, "{algorithm}");
        assert_eq!(check_plan(&problem, &plan.actions), Ok(()));
    }
}

#[test]
fn goal_satisfied_at_root_gives_empty_plan() {
    let problem = encode(worlds::blocks_reversal(1));
    for algorithm in Algorithm::ALL {
        let report = run(&problem, algorithm, &SearchPolicy::default());
        let plan = report.outcome.plan().unwrap();
        assert!(plan.is_empty(), "{algorithm}");
        assert_eq!(report.stats.expansions, 0, "{algorithm}");
    }
}

// ---------------------------------------------------------------------------
// Unreachable goal
// ---------------------------------------------------------------------------

#[test]
fn unreachable_goal_is_no_plan_not_timeout() {
    let problem = encode(worlds::unreachable());
    let context = HeuristicContext::new(&problem);
    assert_eq!(
        context.estimate(problem.initial(), problem.goal()),
        HeuristicValue::Unreachable
    );
    for algorithm in Algorithm::ALL {
        let report = run(&problem, algorithm, &SearchPolicy::default());
        assert_eq!(report.outcome, SearchOutcome::NoPlan, "{algorithm}");
    }
}

#[test]
fn unknown_goal_atom_is_no_plan() {
    let task = worlds::pickup();
    let index = task.index();
    let goal = [Literal::positive("holding"), Literal::positive("ghost")];
    let problem = Problem::encode(index, task.actions, &task.initial, &goal).unwrap();
    assert!(problem.goal().is_unsatisfiable());
    for algorithm in Algorithm::ALL {
        let report = run(&problem, algorithm, &SearchPolicy::default());
        assert_eq!(report.outcome, SearchOutcome::NoPlan, "{algorithm}");
    }
}

// ---------------------------------------------------------------------------
// Depth bound
// ---------------------------------------------------------------------------

#[test]
fn depth_bound_below_plan_length_is_cutoff() {
    let problem = encode(worlds::blocks_reversal(3));
    let policy = with_depth(3);
    for algorithm in [Algorithm::DepthLimited, Algorithm::IterativeDeepening] {
        let report = run(&problem, algorithm, &policy);
        assert_eq!(
            report.outcome,
            SearchOutcome::DepthLimitReached { max_depth: 3 },
            "{algorithm}"
        );
        assert_eq!(report.outcome.label(), "depth-limit");
    }
}

#[test]
fn depth_bound_at_plan_length_finds_plan() {
    let problem = encode(worlds::blocks_reversal(3));
    let report = run(&problem, Algorithm::IterativeDeepening, &with_depth(6));
    assert_eq!(report.outcome.plan().map(|p| p.len()), Some(6));
    assert_eq!(report.stats.depth_passes, 7);
}

// ---------------------------------------------------------------------------
// Time budget
// ---------------------------------------------------------------------------

#[test]
fn zero_budget_times_out_before_any_goal_check() {
    let problem = encode(worlds::blocks_reversal(3));
    let policy = with_budget(Duration::ZERO);
    for algorithm in Algorithm::ALL {
        let report = run(&problem, algorithm, &policy);
        assert_eq!(report.outcome, SearchOutcome::Timeout, "{algorithm}");
        assert_eq!(report.stats.expansions, 0, "{algorithm}");
        assert_eq!(report.outcome.label(), "timeout");
    }
}

#[test]
fn zero_budget_times_out_even_when_root_is_goal() {
    let problem = encode(worlds::blocks_reversal(1));
    for algorithm in Algorithm::ALL {
        let report = run(&problem, algorithm, &with_budget(Duration::ZERO));
        assert_eq!(report.outcome, SearchOutcome::Timeout, "{algorithm}");
    }
}
