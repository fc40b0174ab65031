//! Plain-text rendering of a grid and a found path.
//!
//! `X` is a wall, a space is open floor, `.` is a path cell and `+` an
//! explored cell that is not on the path. Every row ends with a newline.

use std::collections::HashSet;

use gridstar_core::{Point, WalkGrid};
use gridstar_paths::CostTable;
use log::warn;

const WALL: char = 'X';
const FLOOR: char = ' ';
const PATH: char = '.';
const EXPLORED: char = '+';

/// Draw `grid`, overlaying `path` if given.
pub fn render(grid: &WalkGrid, path: Option<&[Point]>) -> String {
    draw(grid, path, |_| false)
}

/// Like [`render`], also marking every cell the search assigned a cost to.
pub fn render_explored(grid: &WalkGrid, costs: &CostTable, path: Option<&[Point]>) -> String {
    draw(grid, path, |p| costs.is_reached(p))
}

fn draw(grid: &WalkGrid, path: Option<&[Point]>, explored: impl Fn(Point) -> bool) -> String {
    let on_path: HashSet<Point> = path.unwrap_or_default().iter().copied().collect();
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let walkable = grid.is_walkable(p);
            let ch = if on_path.contains(&p) {
                if !walkable {
                    warn!("render: path crosses obstacle at {p}");
                }
                PATH
            } else if !walkable {
                WALL
            } else if explored(p) {
                EXPLORED
            } else {
                FLOOR
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_paths::find_path;

    #[test]
    fn renders_walls_and_floor() {
        let g = WalkGrid::from_ascii("X X\n   ").unwrap();
        assert_eq!(render(&g, None), "X X\n   \n");
    }

    #[test]
    fn overlays_path_including_endpoints() {
        let g = WalkGrid::from_ascii(
            "\
XXXXX
X   X
XXX X
X   X
XXXXX",
        )
        .unwrap();
        let path = find_path(&g, Point::new(1, 1), Point::new(1, 3), 100).unwrap();
        let text = render(&g, Some(&path.cells));
        assert_eq!(
            text,
            "\
XXXXX
X...X
XXX.X
X...X
XXXXX
"
        );
    }

    #[test]
    fn path_over_wall_is_still_drawn() {
        let g = WalkGrid::from_ascii("X").unwrap();
        assert_eq!(render(&g, Some(&[Point::new(0, 0)])), ".\n");
    }

    #[test]
    fn explored_cells_are_marked() {
        let g = WalkGrid::from_ascii("....\n.XX.").unwrap();
        let path = find_path(&g, Point::new(0, 0), Point::new(3, 0), 100).unwrap();
        let text = render_explored(&g, &path.costs, Some(&path.cells));
        // (0, 1) was reached from the start; (3, 1) never was.
        assert!(path.costs.is_reached(Point::new(0, 1)));
        assert!(!path.costs.is_reached(Point::new(3, 1)));
        assert_eq!(text, "....\n+XX \n");
    }

    #[test]
    fn explored_marks_without_path() {
        let g = WalkGrid::from_ascii("....\n.XX.").unwrap();
        let path = find_path(&g, Point::new(0, 0), Point::new(3, 0), 100).unwrap();
        assert_eq!(render_explored(&g, &path.costs, None), "++++\n+XX \n");
        assert_eq!(render(&g, None), "    \n XX \n");
    }
}
