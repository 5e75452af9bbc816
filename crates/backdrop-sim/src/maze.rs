//! Randomized depth-first maze carving, one cell per step.

use crate::grid::Grid;
use backdrop_core::{Direction, Neighborhood, Position, Result, Steppable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// Wall flags of a single cell; `true` means the wall is standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walls {
    pub north: bool,
    pub west: bool,
    pub south: bool,
    pub east: bool,
}

impl Walls {
    /// All four walls standing
    pub fn enclosed() -> Self {
        Self {
            north: true,
            west: true,
            south: true,
            east: true,
        }
    }

    pub fn has(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::West => self.west,
            Direction::South => self.south,
            Direction::East => self.east,
        }
    }

    pub fn remove(&mut self, dir: Direction) {
        match dir {
            Direction::North => self.north = false,
            Direction::West => self.west = false,
            Direction::South => self.south = false,
            Direction::East => self.east = false,
        }
    }

    /// Number of walls still standing
    pub fn standing(&self) -> usize {
        Direction::all().iter().filter(|dir| self.has(**dir)).count()
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::enclosed()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MazeCell {
    pub visited: bool,
    pub walls: Walls,
}

pub type MazeGrid = Grid<MazeCell>;

/// What a single carve step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarveOutcome {
    /// Opened the wall between two cells and moved into `to`
    Carved { from: Position, to: Position },
    /// Returned to a previously visited cell
    Backtracked { to: Position },
    /// The stack emptied; the maze is done
    Completed,
    /// Already completed; nothing happened
    Idle,
}

pub struct MazeCarver {
    grid: MazeGrid,
    current: Position,
    stack: Vec<Position>,
    completed: bool,
    rng: ChaCha8Rng,
    steps: u64,
    visited: usize,
}

impl MazeCarver {
    /// Create a fully walled `width x height` maze with a deterministic random source
    pub fn new(width: i32, height: i32, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy(width: i32, height: i32) -> Result<Self> {
        Self::with_rng(width, height, ChaCha8Rng::from_entropy())
    }

    pub fn with_rng(width: i32, height: i32, mut rng: ChaCha8Rng) -> Result<Self> {
        let mut grid = MazeGrid::from_fn(width, height, |_| MazeCell::default())?;

        let start = Position::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if let Some(cell) = grid.get_mut(start) {
            cell.visited = true;
        }
        debug!(width, height, start = %start, "Maze carver ready");

        Ok(Self {
            grid,
            current: start,
            stack: Vec::new(),
            completed: false,
            rng,
            steps: 0,
            visited: 1,
        })
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn cell(&self, pos: Position) -> Option<&MazeCell> {
        self.grid.get(pos)
    }

    /// The cursor cell of the search
    pub fn current(&self) -> Position {
        self.current
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn visited_count(&self) -> usize {
        self.visited
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// Advance the carve by one visit or one backtrack
    pub fn advance(&mut self) -> CarveOutcome {
        if self.completed {
            return CarveOutcome::Idle;
        }
        self.steps += 1;

        let candidates = self.unvisited_neighbors(self.current);
        if !candidates.is_empty() {
            let from = self.current;
            let to = candidates[self.rng.gen_range(0..candidates.len())];

            self.remove_wall_between(from, to);
            self.stack.push(from);
            if let Some(cell) = self.grid.get_mut(to) {
                cell.visited = true;
            }
            self.visited += 1;
            self.current = to;

            trace!(from = %from, to = %to, depth = self.stack.len(), "Carved");
            return CarveOutcome::Carved { from, to };
        }

        match self.stack.pop() {
            Some(previous) => {
                self.current = previous;
                trace!(to = %previous, depth = self.stack.len(), "Backtracked");
                CarveOutcome::Backtracked { to: previous }
            }
            None => {
                self.completed = true;
                info!(
                    width = self.grid.width(),
                    height = self.grid.height(),
                    steps = self.steps,
                    "Maze completed"
                );
                CarveOutcome::Completed
            }
        }
    }

    /// Step until completed; returns the number of steps this call took
    pub fn run_to_completion(&mut self) -> u64 {
        let before = self.steps;
        while !self.completed {
            self.advance();
        }
        self.steps - before
    }

    fn unvisited_neighbors(&self, pos: Position) -> Vec<Position> {
        self.grid
            .neighbors(pos, Neighborhood::VonNeumann)
            .filter(|neighbor| matches!(self.grid.get(*neighbor), Some(cell) if !cell.visited))
            .collect()
    }

    /// Open the wall shared by two orthogonally adjacent cells, on both sides
    fn remove_wall_between(&mut self, a: Position, b: Position) {
        let Some(dir) = Direction::between(a, b) else {
            return;
        };
        if let Some((cell_a, cell_b)) = self.grid.get_pair_mut(a, b) {
            cell_a.walls.remove(dir);
            cell_b.walls.remove(dir.opposite());
        }
    }
}

impl Steppable for MazeCarver {
    fn name(&self) -> &'static str {
        "Maze DFS"
    }

    fn step(&mut self) {
        self.advance();
    }

    fn steps_taken(&self) -> u64 {
        self.steps
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}
