use gridstar_core::{Point, Range, WalkGrid};

/// Read-only occupancy query interface consumed by the search.
pub trait Occupancy {
    /// The grid rectangle. Cells outside it are never produced by a search.
    fn bounds(&self) -> Range;

    /// Whether `p` can be stepped on.
    fn is_walkable(&self, p: Point) -> bool;
}

impl Occupancy for WalkGrid {
    #[inline]
    fn bounds(&self) -> Range {
        WalkGrid::bounds(self)
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        WalkGrid::is_walkable(self, p)
    }
}
