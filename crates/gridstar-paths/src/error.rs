use gridstar_core::{Point, Range};
use thiserror::Error;

/// Bad arguments to [`find_path`](crate::find_path). Reported before any
/// search work is done.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("start {pos} is outside the grid {bounds}")]
    StartOutOfBounds { pos: Point, bounds: Range },

    #[error("goal {pos} is outside the grid {bounds}")]
    GoalOutOfBounds { pos: Point, bounds: Range },

    /// The start cell must be walkable.
    #[error("start {0} is not walkable")]
    StartBlocked(Point),

    /// The step budget must be at least 1.
    #[error("step budget must be positive")]
    InvalidBudget,
}

/// Misuse of a [`Frontier`](crate::Frontier).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontierError {
    #[error("frontier is empty")]
    Empty,

    #[error("cell {0} is not in the frontier")]
    NotFound(Point),

    #[error("cell {0} is outside the frontier range")]
    OutOfRange(Point),
}

/// Internal consistency failures. Any of these means the search state is
/// corrupt and the run was aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error(transparent)]
    Frontier(#[from] FrontierError),

    /// No predecessor link at this cell before reaching the start.
    #[error("predecessor chain broken at {0}")]
    BrokenChain(Point),
}

/// Every way a search can fail to produce a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The frontier emptied without reaching the goal. The goal is
    /// unreachable.
    #[error("no path found after expanding {expanded} cells")]
    NoPathFound { expanded: usize },

    /// The step budget ran out first. Says nothing about reachability.
    #[error("step budget of {budget} exhausted before reaching the goal")]
    BudgetExceeded { budget: usize },

    #[error("search invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}

impl SearchError {
    /// Whether this failure is a definite "unreachable" verdict.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}
