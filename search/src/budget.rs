//! Termination conditions polled by the search loops.
//!
//! A search asks its condition [`TerminationCondition::should_stop`] once per
//! node expansion. Conditions never interrupt a search from the outside; a
//! search that stops reports [`crate::outcome::SearchOutcome::Timeout`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A condition that tells a running search to give up.
pub trait TerminationCondition {
    /// Whether the search should stop now.
    fn should_stop(&mut self) -> bool;
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        self.as_mut().is_some_and(TerminationCondition::should_stop)
    }
}

/// Wall-clock budget measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    started_at: Instant,
    budget: Duration,
}

impl TimeBudget {
    /// Give the search `budget` starting now.
    #[must_use]
    pub fn starting_now(budget: Duration) -> Self {
        Self {
            started_at: Instant::now(),
            budget,
        }
    }

    /// Time since construction.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }
}

impl TerminationCondition for TimeBudget {
    fn should_stop(&mut self) -> bool {
        // `>=` so a zero budget stops before the first expansion.
        self.started_at.elapsed() >= self.budget
    }
}

/// Shared cancellation flag.
///
/// Clones observe the same flag. The race orchestrator trips it when a
/// worker overruns its hard timeout so the abandoned search unwinds at its
/// next poll instead of running to its own budget.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl TerminationCondition for CancelToken {
    fn should_stop(&mut self) -> bool {
        self.is_cancelled()
    }
}
