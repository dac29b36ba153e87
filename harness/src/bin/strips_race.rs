//! `strips-race`: race search algorithms on a STRIPS instance.
//!
//! ```text
//! strips-race <INSTANCE> [-t SECS] [-d DEPTH] [-a ALGO]... [--cost-model MODEL]
//!             [--grace-ms MS] [--json] [-v]
//! ```
//!
//! `INSTANCE` is a STRIPS file path, or `builtin:<name>` for a built-in
//! world (`pickup`, `unreachable`, `chain-<n>`, `blocks-<n>`).

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};
use strips_harness::config::RaceConfig;
use strips_harness::error::HarnessError;
use strips_harness::race::race;
use strips_harness::reader::{read_strips_file, StripsTask};
use strips_harness::report::{render_text, to_json};
use strips_harness::worlds;
use strips_kernel::operators::action::CostModel;
use strips_search::algorithm::Algorithm;

const BUILTIN_PREFIX: &str = "builtin:";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The STRIPS instance to solve, or `builtin:<name>`.
    instance: String,

    /// Cooperative time budget per algorithm, in seconds.
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<f64>,

    /// Depth bound for DLS and IDDFS.
    #[arg(short = 'd', long = "max-depth")]
    max_depth: Option<u32>,

    /// Algorithms to race. Repeat to select several; defaults to all.
    #[arg(short = 'a', long = "algorithm", value_enum)]
    algorithms: Vec<AlgorithmArg>,

    /// Edge weights for A* and reported plan cost.
    #[arg(long = "cost-model", value_enum)]
    cost_model: Option<CostModelArg>,

    /// Slack added to the time budget before a task is abandoned.
    #[arg(long = "grace-ms")]
    grace_ms: Option<u64>,

    /// Print one JSON document instead of the text table.
    #[arg(long)]
    json: bool,

    /// Log search progress.
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Bfs,
    Dls,
    Iddfs,
    Astar,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Bfs => Algorithm::BreadthFirst,
            AlgorithmArg::Dls => Algorithm::DepthLimited,
            AlgorithmArg::Iddfs => Algorithm::IterativeDeepening,
            AlgorithmArg::Astar => Algorithm::AStar,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CostModelArg {
    Unit,
    EffectWeighted,
}

impl From<CostModelArg> for CostModel {
    fn from(value: CostModelArg) -> Self {
        match value {
            CostModelArg::Unit => CostModel::Unit,
            CostModelArg::EffectWeighted => CostModel::EffectWeighted,
        }
    }
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
}

fn load(instance: &str) -> Result<StripsTask, HarnessError> {
    if let Some(name) = instance.strip_prefix(BUILTIN_PREFIX) {
        return worlds::by_name(name).ok_or_else(|| HarnessError::UnknownWorld(name.to_string()));
    }
    read_strips_file(&PathBuf::from(instance))
}

fn run(args: Args) -> Result<(), HarnessError> {
    let time_budget = match args.time_limit {
        Some(secs) => Some(
            Duration::try_from_secs_f64(secs)
                .map_err(|e| HarnessError::InvalidArgument(format!("time limit {secs}: {e}")))?,
        ),
        None => None,
    };
    let config = RaceConfig {
        time_budget,
        max_depth: args.max_depth,
        cost_model: args.cost_model.map(CostModel::from),
        grace: args.grace_ms.map(Duration::from_millis),
        algorithms: args.algorithms.into_iter().map(Algorithm::from).collect(),
    }
    .resolve()?;

    let task = load(&args.instance)?;
    let problem = task.into_problem()?;
    info!(
        "{}: {} propositions, {} actions",
        args.instance,
        problem.width(),
        problem.actions().len()
    );

    let report = race(Arc::new(problem), &config);
    if args.json {
        let text = serde_json::to_string_pretty(&to_json(&report))?;
        println!("{text}");
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    configure_logging(args.verbose);
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
