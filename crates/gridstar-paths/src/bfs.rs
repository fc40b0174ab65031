use std::collections::VecDeque;

use gridstar_core::Point;

use crate::costs::UNREACHABLE;
use crate::neighbors::Neighbors;
use crate::traits::Occupancy;

/// Unweighted shortest distance from `start` to `goal` by breadth-first
/// search over orthogonal, walkable, in-bounds cells.
///
/// Returns `None` if either endpoint is outside the grid, `start` is blocked,
/// or `goal` cannot be reached.
pub fn bfs_distance<O: Occupancy + ?Sized>(grid: &O, start: Point, goal: Point) -> Option<i32> {
    let bounds = grid.bounds();
    let si = bounds.index_of(start)?;
    let gi = bounds.index_of(goal)?;
    if !grid.is_walkable(start) {
        return None;
    }

    let mut dist = vec![UNREACHABLE; bounds.len()];
    let mut queue: VecDeque<Point> = VecDeque::new();
    let mut nb = Neighbors::new();
    dist[si] = 0;
    queue.push_back(start);

    while let Some(cp) = queue.pop_front() {
        let Some(ci) = bounds.index_of(cp) else {
            continue;
        };
        if ci == gi {
            return Some(dist[ci]);
        }
        let nd = dist[ci] + 1;
        for &np in nb.cardinal(cp, |q| bounds.contains(q) && grid.is_walkable(q)) {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(np);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::WalkGrid;

    #[test]
    fn open_grid_is_manhattan() {
        let g = WalkGrid::new(6, 4);
        assert_eq!(bfs_distance(&g, Point::new(0, 0), Point::new(5, 3)), Some(8));
        assert_eq!(bfs_distance(&g, Point::new(2, 2), Point::new(2, 2)), Some(0));
    }

    #[test]
    fn detour_around_wall() {
        let g = WalkGrid::from_ascii(
            "\
...
##.
...",
        )
        .unwrap();
        assert_eq!(bfs_distance(&g, Point::new(0, 0), Point::new(0, 2)), Some(6));
    }

    #[test]
    fn unreachable_and_invalid() {
        let g = WalkGrid::from_ascii(".#.").unwrap();
        assert_eq!(bfs_distance(&g, Point::new(0, 0), Point::new(2, 0)), None);
        assert_eq!(bfs_distance(&g, Point::new(1, 0), Point::new(1, 0)), None);
        assert_eq!(bfs_distance(&g, Point::new(0, 0), Point::new(9, 0)), None);
    }
}
