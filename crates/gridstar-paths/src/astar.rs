use gridstar_core::Point;
use log::{debug, error, trace, warn};

use crate::costs::CostTable;
use crate::distance::manhattan;
use crate::error::{InputError, InvariantError, SearchError};
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::reconstruct::reconstruct;
use crate::traits::Occupancy;

/// A successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Route from start to goal, both included.
    pub cells: Vec<Point>,
    /// Number of steps, `cells.len() - 1`.
    pub cost: i32,
    /// Cells taken off the frontier and expanded.
    pub expanded: usize,
    /// Final cost table of the run. Read-only; useful for rendering the
    /// explored area or calling [`reconstruct`] again.
    pub costs: CostTable,
}

impl Path {
    /// First cell of the route. `None` only for a hand-built empty path.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.cells.last().copied()
    }
}

/// Outcome of [`find_path`].
pub type PathResult = Result<Path, SearchError>;

/// Compute a shortest orthogonal path from `start` to `goal` with A*.
///
/// Each loop iteration expands one cell and spends one unit of
/// `step_budget`. The search stops on reaching the goal, on an empty frontier
/// ([`SearchError::NoPathFound`]) or when the budget runs out
/// ([`SearchError::BudgetExceeded`]). Inputs are checked before any work:
/// both endpoints must be inside `grid.bounds()`, `start` must be walkable
/// and the budget must be positive. An unwalkable `goal` is accepted and is
/// simply never reached.
pub fn find_path<O: Occupancy + ?Sized>(
    grid: &O,
    start: Point,
    goal: Point,
    step_budget: usize,
) -> PathResult {
    let bounds = grid.bounds();
    if !bounds.contains(start) {
        return Err(InputError::StartOutOfBounds { pos: start, bounds }.into());
    }
    if !bounds.contains(goal) {
        return Err(InputError::GoalOutOfBounds { pos: goal, bounds }.into());
    }
    if step_budget == 0 {
        return Err(InputError::InvalidBudget.into());
    }
    if !grid.is_walkable(start) {
        return Err(InputError::StartBlocked(start).into());
    }

    debug!("astar: {start} -> {goal} on {bounds}, budget {step_budget}");

    let mut costs = CostTable::new(bounds);
    let mut frontier = Frontier::new(bounds);
    let mut nbuf = Neighbors::new();

    costs.seed_start(start, manhattan(start, goal));
    frontier
        .insert_if_absent(start, costs.f(start))
        .map_err(abort)?;

    let mut remaining = step_budget;
    let mut expanded = 0;

    while !frontier.is_empty() && remaining > 0 {
        let current = frontier.extract_min().map_err(abort)?;

        if current == goal {
            let cells = reconstruct(&costs, start, goal).map_err(abort)?;
            let cost = costs.g(goal);
            debug!("astar: reached {goal} at cost {cost} after {expanded} expansions");
            return Ok(Path {
                cells,
                cost,
                expanded,
                costs,
            });
        }

        frontier.remove(current).map_err(abort)?;
        expanded += 1;

        let current_g = costs.g(current);
        trace!("astar: expand {current} g={current_g} open={}", frontier.len());

        let passable = |p: Point| bounds.contains(p) && grid.is_walkable(p);
        for &n in nbuf.cardinal(current, passable) {
            let tentative_g = current_g + 1;
            if costs.relax(n, current, tentative_g, manhattan(n, goal)) {
                frontier.insert_if_absent(n, costs.f(n)).map_err(abort)?;
            }
        }

        remaining -= 1;
    }

    if frontier.is_empty() {
        debug!("astar: {goal} unreachable from {start} ({expanded} expansions)");
        Err(SearchError::NoPathFound { expanded })
    } else {
        warn!(
            "astar: budget of {step_budget} exhausted with {} cells still open",
            frontier.len()
        );
        Err(SearchError::BudgetExceeded {
            budget: step_budget,
        })
    }
}

/// Log an internal failure and turn it into a fatal search error.
fn abort(e: impl Into<InvariantError>) -> SearchError {
    let e = e.into();
    error!("astar: aborting search: {e}");
    SearchError::Invariant(e)
}
