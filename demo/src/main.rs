//! Generate a random maze and find a path from its top-left to its
//! bottom-right interior corner.
//!
//! Run: cargo run --bin gridstar -- --seed 7 --explored
//! Set `RUST_LOG=debug` (or `trace`) to follow the search.

use std::process::ExitCode;

use clap::Parser;
use gridstar_maze::{MazeConfig, MazeGen, render, render_explored};
use gridstar_paths::{SearchError, find_path};
use log::info;

#[derive(Debug, Parser)]
#[command(name = "gridstar", version, about = "A* path search over a random maze")]
struct Cli {
    /// Maze width, including the outer wall.
    #[arg(long, default_value_t = 30)]
    width: i32,

    /// Maze height, including the outer wall.
    #[arg(long, default_value_t = 15)]
    height: i32,

    /// Chance, in percent, that an interior cell is a wall.
    #[arg(long, default_value_t = 26)]
    walls: u32,

    /// Random seed for maze generation.
    #[arg(long, default_value_t = 4)]
    seed: u64,

    /// Maximum number of cells to expand before giving up.
    #[arg(long, default_value_t = 9999)]
    budget: usize,

    /// Also mark every cell the search reached.
    #[arg(long)]
    explored: bool,
}

impl Cli {
    fn maze_config(&self) -> MazeConfig {
        MazeConfig {
            width: self.width,
            height: self.height,
            wall_percent: self.walls,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.maze_config();

    let mut mapgen = match MazeGen::new(config.clone()) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };
    let grid = mapgen.generate();
    println!("{}", render(&grid, None));

    let (start, goal) = (config.start(), config.goal());
    info!("searching {start} -> {goal} with budget {}", cli.budget);

    match find_path(&grid, start, goal, cli.budget) {
        Ok(path) => {
            println!("Found a path to the goal.");
            info!(
                "path of {} steps, {} cells expanded",
                path.cost, path.expanded
            );
            let text = if cli.explored {
                render_explored(&grid, &path.costs, Some(&path.cells))
            } else {
                render(&grid, Some(&path.cells))
            };
            println!("\n{text}");
            ExitCode::SUCCESS
        }
        Err(e @ SearchError::InvalidInput(_)) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            if matches!(e, SearchError::BudgetExceeded { .. }) {
                println!("Bailed out.");
            }
            println!("Failed to find a path: {e}");
            ExitCode::FAILURE
        }
    }
}
