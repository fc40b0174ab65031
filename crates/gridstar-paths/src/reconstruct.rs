use gridstar_core::Point;

use crate::costs::CostTable;
use crate::error::InvariantError;

/// Follow predecessor links from `goal` back to `start`.
///
/// Returns the route from `start` to `goal`, both included. The table is not
/// modified, so repeated calls give the same route.
pub fn reconstruct(
    costs: &CostTable,
    start: Point,
    goal: Point,
) -> Result<Vec<Point>, InvariantError> {
    // A chain longer than the table has a cycle in it.
    let limit = costs.range().len();
    let mut path = vec![goal];
    let mut pos = goal;
    while pos != start {
        let Some(prev) = costs.predecessor(pos) else {
            return Err(InvariantError::BrokenChain(pos));
        };
        if path.len() > limit {
            return Err(InvariantError::BrokenChain(pos));
        }
        path.push(prev);
        pos = prev;
    }
    path.reverse();
    Ok(path)
}
