//! Canonical deduplication and heuristic lock tests.
//!
//! Proves:
//! 1. States reached through different action orders share one mask
//! 2. BFS and A* suppress such duplicates
//! 3. The heuristic is idempotent and never over-estimates on blocks world
//! 4. Concurrent searches over separate problems do not interfere

use std::sync::Arc;
use std::thread;

use lock_tests::fixtures::{encode, run};
use strips_harness::worlds;
use strips_kernel::carrier::state::StateNode;
use strips_kernel::operators::apply::successors;
use strips_search::algorithm::Algorithm;
use strips_search::heuristic::{HeuristicContext, HeuristicValue};
use strips_search::policy::SearchPolicy;

// ---------------------------------------------------------------------------
// 1. Mask identity
// ---------------------------------------------------------------------------

#[test]
fn different_paths_to_same_state_share_mask() {
    let problem = encode(worlds::blocks_reversal(2));
    let root = problem.root();
    // unstack then stack returns exactly to the root mask.
    let unstack = problem
        .actions()
        .iter()
        .find(|a| a.name() == "unstack-b1-b2")
        .unwrap();
    let stack = problem
        .actions()
        .iter()
        .find(|a| a.name() == "stack-b1-b2")
        .unwrap();
    let held = StateNode::child(&root, unstack.id(), unstack.apply(root.mask()));
    let back = StateNode::child(&held, stack.id(), stack.apply(held.mask()));
    assert_eq!(back.mask(), root.mask());
    assert_eq!(back.depth(), 2);
}

#[test]
fn successor_order_follows_action_table() {
    let problem = encode(worlds::blocks_reversal(3));
    let root = problem.root();
    let children = successors(&root, problem.actions());
    let ids: Vec<_> = children.iter().filter_map(|c| c.action_used()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    // Only the top block can be unstacked from the initial tower.
    assert_eq!(children.len(), 1);
}

// ---------------------------------------------------------------------------
// 2. Duplicate suppression
// ---------------------------------------------------------------------------

#[test]
fn graph_searches_suppress_duplicates() {
    let problem = encode(worlds::blocks_reversal(3));
    for algorithm in [Algorithm::BreadthFirst, Algorithm::AStar] {
        let report = run(&problem, algorithm, &SearchPolicy::default());
        assert!(
            report.stats.duplicates_suppressed > 0,
            "{algorithm} should see the root again after unstack/stack"
        );
        assert!(report.stats.generated >= report.stats.expansions);
    }
}

#[test]
fn path_searches_skip_states_on_the_current_path() {
    let problem = encode(worlds::blocks_reversal(3));
    for algorithm in [Algorithm::DepthLimited, Algorithm::IterativeDeepening] {
        let report = run(&problem, algorithm, &SearchPolicy::default());
        // unstack → stack leads straight back to the root, which is on the path.
        assert!(report.stats.duplicates_suppressed > 0, "{algorithm}");
        assert!(report.outcome.plan().is_some(), "{algorithm}");
    }
}

// ---------------------------------------------------------------------------
// 3. Heuristic
// ---------------------------------------------------------------------------

#[test]
fn heuristic_is_idempotent() {
    let problem = encode(worlds::blocks_reversal(3));
    let context = HeuristicContext::new(&problem);
    let first = context.estimate(problem.initial(), problem.goal());
    for _ in 0..5 {
        assert_eq!(context.estimate(problem.initial(), problem.goal()), first);
    }
}

#[test]
fn heuristic_never_exceeds_true_distance() {
    let problem = encode(worlds::blocks_reversal(3));
    let context = HeuristicContext::new(&problem);
    let HeuristicValue::Finite(h) = context.estimate(problem.initial(), problem.goal()) else {
        panic!("blocks world goal is reachable");
    };
    assert!(h >= 1);
    assert!(h as usize <= worlds::BLOCKS_REVERSAL_3_OPTIMUM);
}

#[test]
fn heuristic_is_zero_exactly_at_goal() {
    let problem = encode(worlds::blocks_reversal(1));
    let context = HeuristicContext::new(&problem);
    assert_eq!(
        context.estimate(problem.initial(), problem.goal()),
        HeuristicValue::Finite(0)
    );
}

// ---------------------------------------------------------------------------
// 4. Isolation
// ---------------------------------------------------------------------------

#[test]
fn concurrent_searches_do_not_interfere() {
    let blocks = Arc::new(encode(worlds::blocks_reversal(3)));
    let chain = Arc::new(encode(worlds::chain(12)));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let problem = if i % 2 == 0 {
                Arc::clone(&blocks)
            } else {
                Arc::clone(&chain)
            };
            thread::spawn(move || {
                run(&problem, Algorithm::AStar, &SearchPolicy::default())
                    .outcome
                    .plan()
                    .map(|p| p.len())
            })
        })
        .collect();
    let lengths: Vec<Option<usize>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(lengths, vec![Some(6), Some(12), Some(6), Some(12)]);
}
