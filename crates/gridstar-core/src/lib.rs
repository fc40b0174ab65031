//! **gridstar-core** — geometry and occupancy types shared by the gridstar
//! crates.
//!
//! This crate provides the integer [`Point`] / [`Range`] primitives and the
//! owned [`WalkGrid`] that path searches borrow read-only.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{GridParseError, GridSizeError, WalkGrid};
