//! Random maze generation.
//!
//! The maze is a walled rectangle whose interior cells are independently
//! blocked with a fixed probability. The two corners just inside the wall,
//! `(1, 1)` and `(W-2, H-2)`, are always open so they can serve as start and
//! goal.

use gridstar_core::{Point, WalkGrid};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Errors from [`MazeGen::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A maze needs room for a border and at least one interior cell.
    #[error("maze size {width}x{height} is too small, need at least 3x3")]
    TooSmall { width: i32, height: i32 },

    #[error("maze size {width}x{height} exceeds {max} cells", max = WalkGrid::MAX_CELLS)]
    TooLarge { width: i32, height: i32 },

    #[error("wall percentage {0} is above 100")]
    WallPercent(u32),
}

/// Parameters for [`MazeGen`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,
    /// Chance, in percent, that an interior cell is a wall.
    pub wall_percent: u32,
    pub seed: u64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 15,
            wall_percent: 26,
            seed: 4,
        }
    }
}

impl MazeConfig {
    /// The always-open top-left interior cell.
    pub fn start(&self) -> Point {
        Point::new(1, 1)
    }

    /// The always-open bottom-right interior cell.
    pub fn goal(&self) -> Point {
        Point::new(self.width - 2, self.height - 2)
    }
}

/// Seeded maze generator.
pub struct MazeGen {
    config: MazeConfig,
    rng: StdRng,
}

impl MazeGen {
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        if config.width < 3 || config.height < 3 {
            return Err(MazeError::TooSmall {
                width: config.width,
                height: config.height,
            });
        }
        let cells = (config.width as usize).checked_mul(config.height as usize);
        if cells.is_none_or(|n| n > WalkGrid::MAX_CELLS) {
            return Err(MazeError::TooLarge {
                width: config.width,
                height: config.height,
            });
        }
        if config.wall_percent > 100 {
            return Err(MazeError::WallPercent(config.wall_percent));
        }
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Produce the next maze from the generator's random stream.
    pub fn generate(&mut self) -> WalkGrid {
        let MazeConfig {
            width,
            height,
            wall_percent,
            ..
        } = self.config;
        let start = self.config.start();
        let goal = self.config.goal();
        let rng = &mut self.rng;

        let mut grid = WalkGrid::new(width, height);
        grid.fill_fn(|p| {
            if p.x == 0 || p.y == 0 || p.x == width - 1 || p.y == height - 1 {
                false
            } else if p == start || p == goal {
                true
            } else {
                rng.random_range(0..100) >= wall_percent
            }
        });

        debug!(
            "mapgen: {width}x{height} maze, {} of {} cells open",
            grid.count_walkable(),
            grid.bounds().len()
        );
        grid
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_fills_missing_fields_with_defaults() {
        let cfg: MazeConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.width, 30);
        assert_eq!(cfg.wall_percent, 26);
    }
}
