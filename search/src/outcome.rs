//! Search outcomes and per-run reports.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use strips_kernel::carrier::state::StateNode;

use crate::algorithm::Algorithm;
use crate::meter::{bytes_to_mb, BYTES_PER_ELEMENT};

/// An ordered action sequence reaching the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Action names, root first. Empty when the initial state is a goal.
    pub actions: Vec<String>,
    /// Total cost under the run's cost model.
    pub cost: u64,
}

impl Plan {
    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A plan was found.
    PlanFound(Plan),
    /// The reachable space was exhausted without reaching the goal.
    NoPlan,
    /// The depth bound stopped the search before the space was exhausted.
    /// Inconclusive: a longer plan may exist.
    DepthLimitReached { max_depth: u32 },
    /// The time budget ran out or the run was cancelled.
    Timeout,
}

impl SearchOutcome {
    /// Short stable label used in reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PlanFound(_) => "plan",
            Self::NoPlan => "no-plan",
            Self::DepthLimitReached { .. } => "depth-limit",
            Self::Timeout => "timeout",
        }
    }

    /// The plan, if one was found.
    #[must_use]
    pub fn plan(&self) -> Option<&Plan> {
        match self {
            Self::PlanFound(plan) => Some(plan),
            _ => None,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlanFound(plan) => {
                write!(f, "plan of {} actions (cost {})", plan.len(), plan.cost)
            }
            Self::NoPlan => f.write_str("no plan exists"),
            Self::DepthLimitReached { max_depth } => {
                write!(f, "no plan found within depth {max_depth}")
            }
            Self::Timeout => f.write_str("time budget exhausted"),
        }
    }
}

/// Work counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expansions: u64,
    /// Successor nodes produced.
    pub generated: u64,
    /// Successors discarded because their mask was already seen (BFS),
    /// already on the current path (DLS/IDDFS) or not strictly cheaper (A*).
    pub duplicates_suppressed: u64,
    /// A* successors discarded because the heuristic found them unreachable.
    pub dead_ends: u64,
    /// A* open-list entries skipped as superseded.
    pub stale_skipped: u64,
    /// IDDFS bounds started (1 for DLS, 0 otherwise).
    pub depth_passes: u32,
    /// Budget and cancellation checks made.
    pub polls: u64,
    /// A* heuristic propagations, one per distinct mask.
    pub heuristic_evaluations: u64,
    /// A* heuristic lookups answered from the per-run cache.
    pub heuristic_cache_hits: u64,
}

/// Result of one search run. Produced for every runtime termination.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    /// Peak count of elements simultaneously held by the run's structures.
    pub peak_elements: u64,
    pub elapsed: Duration,
}

impl SearchReport {
    /// Peak-size estimate in MB.
    ///
    /// A proxy (`peak_elements × 32 bytes`), not a measured allocation.
    #[must_use]
    pub fn peak_mb(&self) -> f64 {
        bytes_to_mb(self.peak_elements.saturating_mul(BYTES_PER_ELEMENT))
    }
}

/// How an algorithm loop stopped, before plan reconstruction.
#[derive(Debug)]
pub(crate) enum Termination {
    GoalReached(Rc<StateNode>),
    Exhausted,
    DepthLimitReached,
    Timeout,
}
