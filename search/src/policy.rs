//! Search policy: budgets and cost model for one run.

use std::time::Duration;

use strips_kernel::operators::action::CostModel;

use crate::error::SearchError;

/// Default wall-clock ceiling per run.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(7200);

/// Default depth bound for DLS and IDDFS.
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// Budget and cost configuration shared by all algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Cooperative wall-clock ceiling, polled at every node expansion.
    pub time_budget: Duration,
    /// Depth bound for DLS (single pass) and IDDFS (largest bound tried).
    pub max_depth: u32,
    /// Edge weights for A* `g` and for reported plan cost.
    pub cost_model: CostModel,
}

impl SearchPolicy {
    /// Validate value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_depth` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_depth == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_depth must be a positive integer".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            max_depth: DEFAULT_MAX_DEPTH,
            cost_model: CostModel::Unit,
        }
    }
}
