//! The search strategies a run can select.

use std::fmt;

use strips_kernel::operators::action::CostModel;

/// A search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    /// Breadth-first search with a global visited set.
    BreadthFirst,
    /// One depth-first pass bounded by `max_depth`, cycle-free along the path.
    DepthLimited,
    /// Depth-limited passes with bounds `0..=max_depth`.
    IterativeDeepening,
    /// Best-first on `f = g + h` with the relaxed cost heuristic.
    AStar,
}

impl Algorithm {
    /// Every strategy, in report order.
    pub const ALL: [Algorithm; 4] = [
        Self::BreadthFirst,
        Self::DepthLimited,
        Self::IterativeDeepening,
        Self::AStar,
    ];

    /// Short stable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthLimited => "dls",
            Self::IterativeDeepening => "iddfs",
            Self::AStar => "astar",
        }
    }

    /// Inverse of [`Algorithm::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Whether the first plan found is shortest in action count when edges
    /// are weighted by `model`.
    ///
    /// BFS and IDDFS order by depth whatever the model. A* minimizes cost
    /// under `model`, which is action count only for [`CostModel::Unit`].
    #[must_use]
    pub const fn is_length_optimal(self, model: CostModel) -> bool {
        match self {
            Self::BreadthFirst | Self::IterativeDeepening => true,
            Self::DepthLimited => false,
            Self::AStar => matches!(model, CostModel::Unit),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
