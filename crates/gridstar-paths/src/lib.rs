//! A* shortest-path search on 4-connected occupancy grids.
//!
//! The entry point is [`find_path`], which runs one self-contained search over
//! any [`Occupancy`] implementation and returns a [`PathResult`]. Each call
//! allocates its own [`CostTable`] and [`Frontier`]; nothing is shared between
//! calls, so several searches may borrow the same grid at once.
//!
//! | Piece | Role |
//! |---|---|
//! | [`CostTable`] | per-cell `g`, `f` and predecessor |
//! | [`Frontier`] | open set, an indexed binary min-heap keyed by `f` |
//! | [`find_path`] | the expansion / relaxation loop |
//! | [`reconstruct`] | walks predecessor links back from the goal |
//! | [`bfs_distance`] | unweighted breadth-first baseline |
//!
//! Movement is orthogonal with unit cost and the heuristic is
//! [`manhattan`] distance, which is admissible and consistent on such grids,
//! so the first time the goal is taken from the frontier its cost is optimal.

mod astar;
mod bfs;
mod costs;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod reconstruct;
mod traits;

pub use astar::{Path, PathResult, find_path};
pub use bfs::bfs_distance;
pub use costs::{CostTable, NodeCost, UNREACHABLE};
pub use distance::manhattan;
pub use error::{FrontierError, InputError, InvariantError, SearchError};
pub use frontier::Frontier;
pub use neighbors::Neighbors;
pub use reconstruct::reconstruct;
pub use traits::Occupancy;
