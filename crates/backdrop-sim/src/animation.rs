//! Dispatch over the available simulations.

use crate::life::SparseLife;
use crate::maze::MazeCarver;
use backdrop_core::{AlgorithmChoice, DriverConfig, Result, Steppable};
use rand::Rng;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    Life,
    Maze,
}

impl AnimationKind {
    pub fn all() -> [AnimationKind; 2] {
        [AnimationKind::Life, AnimationKind::Maze]
    }

    /// Resolve a configured choice, drawing uniformly for `Random`
    pub fn pick<R: Rng>(choice: AlgorithmChoice, rng: &mut R) -> Self {
        match choice {
            AlgorithmChoice::Life => AnimationKind::Life,
            AlgorithmChoice::Maze => AnimationKind::Maze,
            AlgorithmChoice::Random => Self::all()[rng.gen_range(0..2)],
        }
    }

    /// Milliseconds between steps
    pub fn tick_rate_ms(&self, config: &DriverConfig) -> u64 {
        match self {
            AnimationKind::Life => config.life.tick_rate_ms,
            AnimationKind::Maze => config.maze.tick_rate_ms,
        }
    }
}

pub enum Animation {
    Life(SparseLife),
    Maze(MazeCarver),
}

impl Animation {
    /// Build and seed a simulation sized to the configured viewport
    pub fn new(kind: AnimationKind, config: &DriverConfig, seed: u64) -> Result<Self> {
        let viewport = config.viewport.viewport();

        match kind {
            AnimationKind::Life => {
                let life_config = &config.life;
                let mut life = SparseLife::new(seed);
                match &life_config.pattern {
                    Some(pattern) => life.seed_wide(pattern)?,
                    None => {
                        let (width, height) =
                            viewport.life_window(life_config.cell_width, life_config.cell_height)?;
                        life.seed_random(
                            width,
                            height,
                            life_config.divisor_min..life_config.divisor_max,
                        )?;
                    }
                }
                info!(population = life.population(), "Life simulation ready");
                Ok(Animation::Life(life))
            }
            AnimationKind::Maze => {
                let (width, height) =
                    viewport.maze_dimensions(config.maze.cell_width, config.maze.cell_height)?;
                let maze = MazeCarver::new(width, height, seed)?;
                info!(width, height, "Maze simulation ready");
                Ok(Animation::Maze(maze))
            }
        }
    }

    pub fn kind(&self) -> AnimationKind {
        match self {
            Animation::Life(_) => AnimationKind::Life,
            Animation::Maze(_) => AnimationKind::Maze,
        }
    }
}

impl Steppable for Animation {
    fn name(&self) -> &'static str {
        match self {
            Animation::Life(life) => life.name(),
            Animation::Maze(maze) => maze.name(),
        }
    }

    fn step(&mut self) {
        match self {
            Animation::Life(life) => life.step(),
            Animation::Maze(maze) => maze.step(),
        }
    }

    fn steps_taken(&self) -> u64 {
        match self {
            Animation::Life(life) => Steppable::steps_taken(life),
            Animation::Maze(maze) => Steppable::steps_taken(maze),
        }
    }

    fn is_completed(&self) -> bool {
        match self {
            Animation::Life(life) => Steppable::is_completed(life),
            Animation::Maze(maze) => maze.is_completed(),
        }
    }
}
