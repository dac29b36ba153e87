//! STRIPS text lock tests: files on disk through reader, index building,
//! encoding and search.

use std::io::Write;

use lock_tests::fixtures::{check_plan, run};
use strips_harness::error::HarnessError;
use strips_harness::reader::{read_strips, read_strips_file, ReadError};
use strips_harness::worlds;
use strips_search::algorithm::Algorithm;
use strips_search::policy::SearchPolicy;
use tempfile::NamedTempFile;

fn write_temp(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn blocks_world_survives_disk_round_trip() {
    let task = worlds::blocks_reversal(3);
    let file = write_temp(&task.to_strips_text());
    let read = read_strips_file(file.path()).unwrap();
    assert_eq!(read, task);

    let problem = read.into_problem().unwrap();
    let report = run(&problem, Algorithm::AStar, &SearchPolicy::default());
    let plan = report.outcome.plan().unwrap();
    assert_eq!(plan.len(), worlds::BLOCKS_REVERSAL_3_OPTIMUM);
    assert_eq!(check_plan(&problem, &plan.actions), Ok(()));
}

#[test]
fn handwritten_file_with_negations() {
    // `open` needs the door not locked; `unlock` removes the lock.
    let text = "\
unlock
locked;key
~locked
open
~locked
open

locked;key
open
";
    let file = write_temp(text);
    let problem = read_strips_file(file.path())
        .unwrap()
        .into_problem()
        .unwrap();
    assert_eq!(problem.index().names(), &["key", "locked", "open"]);
    for algorithm in Algorithm::ALL {
        let report = run(&problem, algorithm, &SearchPolicy::default());
        assert_eq!(
            report.outcome.plan().map(|p| p.actions.clone()),
            Some(vec!["unlock".to_string(), "open".to_string()]),
            "{algorithm}"
        );
    }
}

#[test]
fn negative_goal_atoms_are_dropped() {
    let text = "go\na\nb\n\na\nb;~a\n";
    let problem = read_strips(text).unwrap().into_problem().unwrap();
    assert_eq!(problem.goal().ids().len(), 1);
    let report = run(&problem, Algorithm::BreadthFirst, &SearchPolicy::default());
    // `~a` is ignored, so `go` alone satisfies the goal even though `a` stays true.
    assert_eq!(
        report.outcome.plan().map(|p| p.actions.clone()),
        Some(vec!["go".to_string()])
    );
}

#[test]
fn duplicate_action_names_are_rejected() {
    let text = "go\na\nb\ngo\nb\nc\n\na\nc\n";
    let err = read_strips(text).unwrap().into_problem().unwrap_err();
    assert!(err.to_string().contains("go"), "{err}");
}

#[test]
fn truncated_file_reports_line() {
    let file = write_temp("pickup\nhandempty\n");
    match read_strips_file(file.path()) {
        Err(HarnessError::Read { source, .. }) => assert_eq!(
            source,
            ReadError::UnterminatedAction {
                line: 1,
                name: "pickup".into()
            }
        ),
        other => panic!("expected a read error, got {other:?}"),
    }
}
