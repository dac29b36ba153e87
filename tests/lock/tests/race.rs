//! Race orchestration lock tests: isolation, labelled outcomes, hard
//! deadlines and failure surfacing.

use std::sync::Arc;
use std::time::Duration;

use strips_harness::config::RaceConfig;
use strips_harness::race::{race, RaceOutcome};
use strips_harness::report::to_json;
use strips_harness::worlds;
use strips_kernel::carrier::mask::PropMask;
use strips_kernel::problem::Problem;
use strips_search::algorithm::Algorithm;
use strips_search::outcome::SearchOutcome;

use lock_tests::fixtures::{check_plan, encode};

#[test]
fn race_reports_every_algorithm_on_blocks() {
    let problem = Arc::new(encode(worlds::blocks_reversal(3)));
    let config = RaceConfig::default().resolve().unwrap();
    let report = race(Arc::clone(&problem), &config);

    let order: Vec<Algorithm> = report.entries.iter().map(|e| e.algorithm).collect();
    assert_eq!(order, Algorithm::ALL.to_vec());
    for entry in &report.entries {
        let search = entry.outcome.report().unwrap();
        let plan = search.outcome.plan().unwrap();
        assert_eq!(check_plan(&problem, &plan.actions), Ok(()));
        assert!(search.peak_elements > 0);
    }
    let (_, best) = report.best_plan().unwrap();
    assert_eq!(best.len(), worlds::BLOCKS_REVERSAL_3_OPTIMUM);
}

#[test]
fn race_timeouts_are_cooperative_with_zero_budget() {
    let problem = Arc::new(encode(worlds::blocks_reversal(3)));
    let config = RaceConfig {
        time_budget: Some(Duration::ZERO),
        grace: Some(Duration::from_secs(5)),
        ..RaceConfig::default()
    }
    .resolve()
    .unwrap();
    let report = race(problem, &config);
    for entry in &report.entries {
        assert_eq!(
            entry.outcome.report().map(|r| &r.outcome),
            Some(&SearchOutcome::Timeout),
            "{}",
            entry.algorithm
        );
    }
}

#[test]
fn malformed_problem_fails_every_task() {
    let good = encode(worlds::pickup());
    let broken = Problem::from_parts(
        good.index().clone(),
        good.actions().clone(),
        PropMask::empty(good.width() + 3),
        good.goal().clone(),
    );
    let report = race(Arc::new(broken), &RaceConfig::default().resolve().unwrap());
    for entry in &report.entries {
        match &entry.outcome {
            RaceOutcome::Failed { detail } => {
                assert!(detail.contains("malformed problem"), "{detail}");
            }
            other => panic!("{}: expected Failed, got {other:?}", entry.algorithm),
        }
        assert_eq!(entry.outcome.label(), "failed");
    }
    let doc = to_json(&report);
    assert_eq!(doc["entries"][0]["outcome"], "failed");
}

#[test]
fn cutoff_is_reported_as_depth_limit() {
    let problem = Arc::new(encode(worlds::chain(10)));
    let config = RaceConfig {
        max_depth: Some(4),
        algorithms: vec![Algorithm::DepthLimited, Algorithm::IterativeDeepening],
        ..RaceConfig::default()
    }
    .resolve()
    .unwrap();
    let report = race(problem, &config);
    for entry in &report.entries {
        assert_eq!(entry.outcome.label(), "depth-limit", "{}", entry.algorithm);
    }
    let doc = to_json(&report);
    assert_eq!(doc["entries"][1]["depth_limit"], 4);
}
