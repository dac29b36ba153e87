//! Binary that races every algorithm on a built-in world and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `race_fixture <world>`
//!
//! Output: `fingerprint=<hash>` then one `<algo>=<label>:<plan>` line per
//! algorithm, in race order. Timings are omitted.

use std::process::ExitCode;
use std::sync::Arc;

use strips_harness::config::RaceConfig;
use strips_harness::race::race;
use strips_harness::worlds;

fn main() -> ExitCode {
    let Some(name) = std::env::args().nth(1) else {
        eprintln!("usage: race_fixture <world>");
        return ExitCode::FAILURE;
    };
    let Some(task) = worlds::by_name(&name) else {
        eprintln!("unknown world `{name}`");
        return ExitCode::FAILURE;
    };
    let problem = match task.into_problem() {
        Ok(problem) => Arc::new(problem),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let config = match RaceConfig::default().resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let report = race(problem, &config);
    println!("fingerprint={}", report.fingerprint);
    for entry in &report.entries {
        let plan = entry
            .outcome
            .report()
            .and_then(|r| r.outcome.plan())
            .map(|p| p.actions.join(","))
            .unwrap_or_default();
        println!("{}={}:{plan}", entry.algorithm, entry.outcome.label());
    }
    ExitCode::SUCCESS
}
