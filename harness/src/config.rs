//! Race configuration: optional overrides resolved against defaults.

use std::time::Duration;

use strips_kernel::operators::action::CostModel;
use strips_search::algorithm::Algorithm;
use strips_search::error::SearchError;
use strips_search::policy::{SearchPolicy, DEFAULT_MAX_DEPTH, DEFAULT_TIME_BUDGET};

/// Default slack between a task's cooperative budget and its hard deadline.
pub const DEFAULT_GRACE: Duration = Duration::from_secs(1);

/// Default cost model for raced searches.
pub const DEFAULT_COST_MODEL: CostModel = CostModel::Unit;

/// Default algorithms, in report order.
pub const DEFAULT_ALGORITHMS: [Algorithm; 4] = Algorithm::ALL;

/// User-facing race settings. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceConfig {
    pub time_budget: Option<Duration>,
    pub max_depth: Option<u32>,
    pub cost_model: Option<CostModel>,
    pub grace: Option<Duration>,
    /// Algorithms to race. Empty means all. Duplicates are dropped.
    pub algorithms: Vec<Algorithm>,
}

/// Fully resolved race settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRace {
    /// Policy shared by every task.
    pub policy: SearchPolicy,
    /// Added to the time budget to give each task's hard deadline.
    pub grace: Duration,
    pub algorithms: Vec<Algorithm>,
}

impl ResolvedRace {
    /// Wall-clock ceiling for each task, independent of the search's own
    /// polling. Saturates instead of overflowing.
    #[must_use]
    pub fn hard_timeout(&self) -> Duration {
        self.policy.time_budget.saturating_add(self.grace)
    }
}

impl RaceConfig {
    /// Fill in defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the resolved policy is
    /// invalid (for example `max_depth == 0`).
    pub fn resolve(&self) -> Result<ResolvedRace, SearchError> {
        let policy = SearchPolicy {
            time_budget: self.time_budget.unwrap_or(DEFAULT_TIME_BUDGET),
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            cost_model: self.cost_model.unwrap_or(DEFAULT_COST_MODEL),
        };
        policy.validate()?;

        let mut algorithms = Vec::new();
        let requested = if self.algorithms.is_empty() {
            &DEFAULT_ALGORITHMS[..]
        } else {
            &self.algorithms[..]
        };
        for &algorithm in requested {
            if !algorithms.contains(&algorithm) {
                algorithms.push(algorithm);
            }
        }

        Ok(ResolvedRace {
            policy,
            grace: self.grace.unwrap_or(DEFAULT_GRACE),
            algorithms,
        })
    }
}
