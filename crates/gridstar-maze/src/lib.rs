//! Maze generation and text rendering around the gridstar search.

pub mod mapgen;
pub mod render;

pub use mapgen::{MazeConfig, MazeError, MazeGen};
pub use render::{render, render_explored};
