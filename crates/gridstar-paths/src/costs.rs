use gridstar_core::{Point, Range};

/// Sentinel `g` / `f` for cells that have not been reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Cost bookkeeping for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeCost {
    /// Best known cost from the start.
    pub g: i32,
    /// `g` plus the heuristic estimate to the goal.
    pub f: i32,
    /// Cell this one was reached from on its current best path.
    pub predecessor: Option<Point>,
}

impl Default for NodeCost {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            predecessor: None,
        }
    }
}

/// Per-cell `g`, `f` and predecessor for one search run.
///
/// Only the search writes to it. Once `g` is finite it only ever decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostTable {
    range: Range,
    nodes: Vec<NodeCost>,
}

impl CostTable {
    /// A table covering `range` with every cell unreached.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            nodes: vec![NodeCost::default(); range.len()],
        }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// The record for `p`, or `None` if outside the table.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&NodeCost> {
        self.range.index_of(p).map(|i| &self.nodes[i])
    }

    /// Best known cost from the start, or [`UNREACHABLE`].
    #[inline]
    pub fn g(&self, p: Point) -> i32 {
        self.get(p).map_or(UNREACHABLE, |n| n.g)
    }

    #[inline]
    pub fn f(&self, p: Point) -> i32 {
        self.get(p).map_or(UNREACHABLE, |n| n.f)
    }

    #[inline]
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        self.get(p).and_then(|n| n.predecessor)
    }

    /// Whether `p` has a finite cost.
    #[inline]
    pub fn is_reached(&self, p: Point) -> bool {
        self.g(p) != UNREACHABLE
    }

    /// Cells with a finite cost, in row-major order.
    pub fn explored(&self) -> impl Iterator<Item = (Point, &NodeCost)> + '_ {
        let range = self.range;
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.g != UNREACHABLE)
            .map(move |(i, n)| (range.point_at(i), n))
    }

    /// Give the start cell `g = 0`, `f = h`. Returns `false` if out of range.
    pub(crate) fn seed_start(&mut self, p: Point, h: i32) -> bool {
        match self.range.index_of(p) {
            Some(i) => {
                self.nodes[i] = NodeCost {
                    g: 0,
                    f: h,
                    predecessor: None,
                };
                true
            }
            None => false,
        }
    }

    /// Record `from` as the predecessor of `p` if `tentative_g` strictly
    /// improves on the known cost. Returns whether anything changed.
    pub(crate) fn relax(&mut self, p: Point, from: Point, tentative_g: i32, h: i32) -> bool {
        let Some(i) = self.range.index_of(p) else {
            return false;
        };
        let n = &mut self.nodes[i];
        if tentative_g >= n.g {
            return false;
        }
        n.g = tentative_g;
        n.f = tentative_g + h;
        n.predecessor = Some(from);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_table_is_unreached() {
        let t = CostTable::new(Range::new(0, 0, 3, 3));
        let p = Point::new(1, 1);
        assert_eq!(t.g(p), UNREACHABLE);
        assert_eq!(t.predecessor(p), None);
        assert!(!t.is_reached(p));
        assert_eq!(t.explored().count(), 0);
    }

    #[test]
    fn relax_only_on_strict_improvement() {
        let mut t = CostTable::new(Range::new(0, 0, 4, 4));
        let p = Point::new(2, 2);
        assert!(t.relax(p, Point::new(1, 2), 5, 3));
        assert_eq!((t.g(p), t.f(p)), (5, 8));

        // Equal and worse costs leave the record untouched.
        assert!(!t.relax(p, Point::new(2, 1), 5, 3));
        assert!(!t.relax(p, Point::new(2, 1), 9, 3));
        assert_eq!(t.predecessor(p), Some(Point::new(1, 2)));

        assert!(t.relax(p, Point::new(3, 2), 4, 3));
        assert_eq!(t.g(p), 4);
        assert_eq!(t.predecessor(p), Some(Point::new(3, 2)));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut t = CostTable::new(Range::new(0, 0, 2, 2));
        let p = Point::new(5, 0);
        assert!(!t.seed_start(p, 0));
        assert!(!t.relax(p, Point::ZERO, 1, 0));
        assert_eq!(t.g(p), UNREACHABLE);
        assert!(t.get(p).is_none());
    }

    #[test]
    fn explored_lists_reached_cells() {
        let mut t = CostTable::new(Range::new(0, 0, 3, 2));
        t.seed_start(Point::new(0, 0), 3);
        t.relax(Point::new(0, 1), Point::new(0, 0), 1, 2);
        let cells: Vec<Point> = t.explored().map(|(p, _)| p).collect();
        assert_eq!(cells, vec![Point::new(0, 0), Point::new(0, 1)]);
    }
}
