//! `Governor`: the resource limits one search run polls.
//!
//! Bundles the wall-clock budget, the optional cancellation token and the
//! peak-size meter so every algorithm checks the same conditions in the
//! same order.

use std::time::Duration;

use crate::budget::{CancelToken, TerminationCondition, TimeBudget};
use crate::meter::PeakMeter;

/// Resource limits and peak accounting for one run.
#[derive(Debug)]
pub struct Governor {
    budget: TimeBudget,
    cancel: Option<CancelToken>,
    meter: PeakMeter,
    polls: u64,
}

impl Governor {
    /// Start the clock for a run with `budget`.
    #[must_use]
    pub fn new(budget: Duration, cancel: Option<CancelToken>) -> Self {
        Self {
            budget: TimeBudget::starting_now(budget),
            cancel,
            meter: PeakMeter::new(),
            polls: 0,
        }
    }

    /// Record the current total element count held by the run.
    pub fn record(&mut self, elements: usize) {
        self.meter.record(elements);
    }

    #[must_use]
    pub fn meter(&self) -> &PeakMeter {
        &self.meter
    }

    /// Time since the run started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.budget.elapsed()
    }

    /// Number of times the run asked whether to stop.
    #[must_use]
    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl TerminationCondition for Governor {
    fn should_stop(&mut self) -> bool {
        self.polls += 1;
        self.budget.should_stop() || self.cancel.should_stop()
    }
}
