//! Race orchestrator: one isolated worker thread per algorithm.
//!
//! Every worker owns its node tree, frontier and visited sets; the only
//! shared value is the read-only [`Problem`]. Each task gets a hard deadline
//! of `time_budget + grace`, independent of the search's own polling. On
//! expiry the task is reported as [`RaceOutcome::HardTimeout`] and its
//! [`CancelToken`] is tripped so the abandoned worker exits at its next
//! poll. Panics inside a worker are caught and reported as
//! [`RaceOutcome::Failed`].
//!
//! Entries are reported in configuration order, whatever order the
//! workers finish in.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use strips_kernel::problem::Problem;
use strips_kernel::proof::hash::ContentHash;
use strips_search::algorithm::Algorithm;
use strips_search::budget::CancelToken;
use strips_search::error::SearchError;
use strips_search::outcome::{Plan, SearchReport};
use strips_search::policy::SearchPolicy;
use strips_search::search::search;

use crate::config::ResolvedRace;

/// Stack for worker threads. DLS and IDDFS recurse once per depth level.
const WORKER_STACK_BYTES: usize = 64 * 1024 * 1024;

/// Signature of the per-task search entry point.
pub type SearchFn = fn(
    &Problem,
    Algorithm,
    &SearchPolicy,
    Option<&CancelToken>,
) -> Result<SearchReport, SearchError>;

/// How one raced task ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RaceOutcome {
    /// The search returned a report (plan, no plan, depth limit or timeout).
    Completed(SearchReport),
    /// The search was rejected before starting, panicked, or its worker
    /// could not be started.
    Failed { detail: String },
    /// The task overran its hard deadline and was abandoned.
    HardTimeout { limit: Duration },
}

impl RaceOutcome {
    /// Short stable label used in reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed(report) => report.outcome.label(),
            Self::Failed { .. } => "failed",
            Self::HardTimeout { .. } => "hard-timeout",
        }
    }

    /// The search report, if the task completed.
    #[must_use]
    pub fn report(&self) -> Option<&SearchReport> {
        match self {
            Self::Completed(report) => Some(report),
            _ => None,
        }
    }
}

/// Result of one raced task.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceEntry {
    pub algorithm: Algorithm,
    pub outcome: RaceOutcome,
    /// Wall time observed by the orchestrator.
    pub wall: Duration,
}

/// Results of a whole race.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceReport {
    /// Fingerprint of the raced problem.
    pub fingerprint: ContentHash,
    pub config: ResolvedRace,
    /// One entry per configured algorithm, in configuration order.
    pub entries: Vec<RaceEntry>,
    pub wall: Duration,
}

impl RaceReport {
    /// The entry for `algorithm`, if it was raced.
    #[must_use]
    pub fn entry(&self, algorithm: Algorithm) -> Option<&RaceEntry> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// The cheapest plan found by any task. Earlier entries win ties.
    #[must_use]
    pub fn best_plan(&self) -> Option<(Algorithm, &Plan)> {
        self.entries
            .iter()
            .filter_map(|e| {
                let plan = e.outcome.report()?.outcome.plan()?;
                Some((e.algorithm, plan))
            })
            .min_by_key(|(_, plan)| (plan.cost, plan.len()))
    }
}

/// Race every configured algorithm on `problem` with the real search.
#[must_use]
pub fn race(problem: Arc<Problem>, config: &ResolvedRace) -> RaceReport {
    race_with(problem, config, search)
}

/// Race with an explicit search entry point.
#[must_use]
pub fn race_with(problem: Arc<Problem>, config: &ResolvedRace, run: SearchFn) -> RaceReport {
    let started = Instant::now();
    let fingerprint = problem.fingerprint();
    let hard_timeout = config.hard_timeout();
    let (tx, rx) = mpsc::channel::<Finished>();

    let mut slots: Vec<Option<RaceEntry>> = config.algorithms.iter().map(|_| None).collect();
    let mut tasks = Vec::with_capacity(config.algorithms.len());
    for (slot, &algorithm) in config.algorithms.iter().enumerate() {
        let cancel = CancelToken::new();
        let worker = Worker {
            slot,
            problem: Arc::clone(&problem),
            algorithm,
            policy: config.policy.clone(),
            cancel: cancel.clone(),
            run,
            tx: tx.clone(),
        };
        let task_started = Instant::now();
        let spawned = thread::Builder::new()
            .name(format!("race-{algorithm}"))
            .stack_size(WORKER_STACK_BYTES)
            .spawn(move || worker.run());
        match spawned {
            Ok(handle) => tasks.push(Task {
                slot,
                algorithm,
                cancel,
                started: task_started,
                deadline: task_started.checked_add(hard_timeout),
                handle: Some(handle),
            }),
            Err(err) => {
                warn!("{algorithm}: cannot start worker: {err}");
                slots[slot] = Some(RaceEntry {
                    algorithm,
                    outcome: RaceOutcome::Failed {
                        detail: format!("cannot start worker: {err}"),
                    },
                    wall: Duration::ZERO,
                });
            }
        }
    }
    drop(tx);

    loop {
        let open: Vec<usize> = tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| slots[t.slot].is_none())
            .map(|(i, _)| i)
            .collect();
        if open.is_empty() {
            break;
        }
        let next_deadline = open.iter().filter_map(|&i| tasks[i].deadline).min();
        let received = match next_deadline {
            Some(deadline) => {
                rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(finished) => {
                let Some(task) = tasks.iter_mut().find(|t| t.slot == finished.slot) else {
                    continue;
                };
                if slots[task.slot].is_some() {
                    debug!("{}: late result ignored", task.algorithm);
                    continue;
                }
                let outcome = match finished.result {
                    Ok(Ok(report)) => RaceOutcome::Completed(report),
                    Ok(Err(err)) => RaceOutcome::Failed {
                        detail: err.to_string(),
                    },
                    Err(panic) => RaceOutcome::Failed {
                        detail: format!("search panicked: {panic}"),
                    },
                };
                info!("{}: {}", task.algorithm, outcome.label());
                if let Some(handle) = task.handle.take() {
                    if handle.join().is_err() {
                        warn!("{}: worker exited abnormally", task.algorithm);
                    }
                }
                slots[task.slot] = Some(RaceEntry {
                    algorithm: task.algorithm,
                    outcome,
                    wall: task.started.elapsed(),
                });
            }
            Err(RecvTimeoutError::Timeout) => {
                let now = Instant::now();
                for &i in &open {
                    let task = &mut tasks[i];
                    if task.deadline.is_some_and(|d| d <= now) {
                        info!(
                            "{}: hard timeout after {:?}, cancelling",
                            task.algorithm, hard_timeout
                        );
                        task.cancel.cancel();
                        // Detach: the worker exits at its next poll.
                        task.handle = None;
                        slots[task.slot] = Some(RaceEntry {
                            algorithm: task.algorithm,
                            outcome: RaceOutcome::HardTimeout {
                                limit: hard_timeout,
                            },
                            wall: task.started.elapsed(),
                        });
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                for &i in &open {
                    let task = &tasks[i];
                    warn!("{}: worker exited without reporting", task.algorithm);
                    slots[task.slot] = Some(RaceEntry {
                        algorithm: task.algorithm,
                        outcome: RaceOutcome::Failed {
                            detail: "worker exited without reporting".into(),
                        },
                        wall: task.started.elapsed(),
                    });
                }
            }
        }
    }

    RaceReport {
        fingerprint,
        config: config.clone(),
        entries: slots.into_iter().flatten().collect(),
        wall: started.elapsed(),
    }
}

struct Task {
    slot: usize,
    algorithm: Algorithm,
    cancel: CancelToken,
    started: Instant,
    /// `None` when the hard timeout is too large to represent.
    deadline: Option<Instant>,
    handle: Option<JoinHandle<()>>,
}

struct Finished {
    slot: usize,
    result: Result<Result<SearchReport, SearchError>, String>,
}

struct Worker {
    slot: usize,
    problem: Arc<Problem>,
    algorithm: Algorithm,
    policy: SearchPolicy,
    cancel: CancelToken,
    run: SearchFn,
    tx: Sender<Finished>,
}

impl Worker {
    fn run(self) {
        let result = catch_unwind(AssertUnwindSafe(|| {
            (self.run)(
                &self.problem,
                self.algorithm,
                &self.policy,
                Some(&self.cancel),
            )
        }))
        .map_err(panic_detail);
        let finished = Finished {
            slot: self.slot,
            result,
        };
        if self.tx.send(finished).is_err() {
            debug!("{}: orchestrator gone, result dropped", self.algorithm);
        }
    }
}

fn panic_detail(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
