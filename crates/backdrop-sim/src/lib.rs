//! Simulation engines.
//!
//! A sparse Game of Life on an unbounded grid and a step-by-step
//! depth-first maze carver, both driven one step at a time.

pub mod animation;
pub mod grid;
pub mod life;
pub mod maze;

pub use animation::{Animation, AnimationKind};
pub use grid::Grid;
pub use life::SparseLife;
pub use maze::{CarveOutcome, MazeCarver, MazeCell, MazeGrid, Walls};
