//! Plan quality lock tests: BFS, IDDFS and A* return shortest plans; DLS
//! returns a valid plan within its bound; A* is optimal for the weighted
//! cost model.

use lock_tests::fixtures::{check_plan, encode, run, with_depth};
use strips_harness::worlds::{self, BLOCKS_REVERSAL_3_OPTIMUM};
use strips_kernel::operators::action::CostModel;
use strips_search::algorithm::Algorithm;
use strips_search::policy::SearchPolicy;

const OPTIMAL: [Algorithm; 3] = [
    Algorithm::BreadthFirst,
    Algorithm::IterativeDeepening,
    Algorithm::AStar,
];

#[test]
fn optimal_algorithms_agree_on_blocks() {
    let problem = encode(worlds::blocks_reversal(3));
    for algorithm in OPTIMAL {
        let report = run(&problem, algorithm, &SearchPolicy::default());
        let plan = report.outcome.plan().unwrap();
        assert_eq!(plan.len(), BLOCKS_REVERSAL_3_OPTIMUM, "{algorithm}");
        assert_eq!(check_plan(&problem, &plan.actions), Ok(()), "{algorithm}");
    }
}

#[test]
fn dls_plan_is_valid_and_within_bound() {
    let problem = encode(worlds::blocks_reversal(3));
    let report = run(&problem, Algorithm::DepthLimited, &with_depth(12));
    let plan = report.outcome.plan().unwrap();
    assert!(plan.len() >= BLOCKS_REVERSAL_3_OPTIMUM);
    assert!(plan.len() <= 12);
    assert_eq!(check_plan(&problem, &plan.actions), Ok(()));
}

#[test]
fn wide_chain_crosses_word_boundary() {
    // 71 propositions: the mask spans two 64-bit words.
    let problem = encode(worlds::chain(70));
    assert!(problem.width() > 64);
    for algorithm in OPTIMAL {
        let report = run(&problem, algorithm, &with_depth(80));
        let plan = report.outcome.plan().unwrap();
        assert_eq!(plan.len(), 70, "{algorithm}");
        assert_eq!(check_plan(&problem, &plan.actions), Ok(()), "{algorithm}");
    }
}

#[test]
fn weighted_cost_is_reported_consistently() {
    let problem = encode(worlds::blocks_reversal(3));
    let policy = SearchPolicy {
        cost_model: CostModel::EffectWeighted,
        ..SearchPolicy::default()
    };
    let astar = run(&problem, Algorithm::AStar, &policy);
    let bfs = run(&problem, Algorithm::BreadthFirst, &policy);
    let astar_plan = astar.outcome.plan().unwrap();
    let bfs_plan = bfs.outcome.plan().unwrap();
    assert!(astar_plan.cost <= bfs_plan.cost);
    let replayed: u64 = astar_plan
        .actions
        .iter()
        .filter_map(|name| problem.actions().iter().find(|a| a.name() == name))
        .map(|a| a.cost(CostModel::EffectWeighted))
        .sum();
    assert_eq!(replayed, astar_plan.cost);
    assert_eq!(check_plan(&problem, &astar_plan.actions), Ok(()));
}

#[test]
fn astar_expands_fewer_nodes_than_bfs() {
    let problem = encode(worlds::blocks_reversal(4));
    let astar = run(&problem, Algorithm::AStar, &SearchPolicy::default());
    let bfs = run(&problem, Algorithm::BreadthFirst, &SearchPolicy::default());
    assert_eq!(
        astar.outcome.plan().map(|p| p.len()),
        bfs.outcome.plan().map(|p| p.len())
    );
    assert!(astar.stats.expansions <= bfs.stats.expansions);
}
