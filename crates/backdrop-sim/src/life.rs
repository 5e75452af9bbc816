//! Sparse Game of Life (B3/S23) on an unbounded integer grid.
//!
//! Only cells adjacent to a live cell are ever evaluated, so the cost of a
//! generation scales with the population rather than with any bounding box.

use backdrop_core::{CellSet, Error, Neighborhood, Position, Result, Steppable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;
use tracing::{debug, info, instrument, trace};

/// Upper bound on cells reserved up front when seeding
const MAX_PREALLOCATED_CELLS: usize = 1 << 20;

pub struct SparseLife {
    alive: CellSet,
    rng: ChaCha8Rng,
    generation: u64,
}

impl SparseLife {
    /// Create an empty engine with a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            alive: CellSet::new(),
            rng,
            generation: 0,
        }
    }

    /// Replace the live set with random cells inside `[0, width) x [0, height)`.
    ///
    /// The density divisor is drawn from `divisors`; returns the number of
    /// draws made. Duplicate draws collapse, so the population may be lower.
    #[instrument(skip(self))]
    pub fn seed_random(&mut self, width: i32, height: i32, divisors: Range<i32>) -> Result<usize> {
        if divisors.start <= 0 || divisors.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "density divisor range {}..{} must be non-empty and positive",
                divisors.start, divisors.end
            )));
        }
        let divisor = self.rng.gen_range(divisors);
        self.seed_random_with_divisor(width, height, divisor)
    }

    /// Like [`seed_random`](Self::seed_random) with a fixed density divisor
    pub fn seed_random_with_divisor(&mut self, width: i32, height: i32, divisor: i32) -> Result<usize> {
        if width <= 0 || height <= 0 {
            return Err(Error::invalid_dimensions(width, height));
        }
        if divisor <= 0 {
            return Err(Error::InvalidConfig(format!(
                "density divisor must be positive, got {}",
                divisor
            )));
        }

        let area = i64::from(width) * i64::from(height);
        let divisor = i64::from(divisor);
        let target = ((area + divisor - 1) / divisor) as usize;

        let mut alive = CellSet::with_capacity(initial_capacity(target));
        for _ in 0..target {
            let x = self.rng.gen_range(0..width);
            let y = self.rng.gen_range(0..height);
            alive.insert(Position::new(x, y));
        }

        info!(
            width,
            height,
            divisor,
            target,
            population = alive.len(),
            "Seeded random live cells"
        );

        self.alive = alive;
        Ok(target)
    }

    /// Replace the live set with exactly the given cells
    pub fn seed_pattern<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Position>,
    {
        self.alive = cells.into_iter().collect();
        debug!(population = self.alive.len(), "Seeded pattern");
    }

    /// Replace the live set from wide coordinates.
    ///
    /// On error the current live set is kept unchanged.
    pub fn seed_wide(&mut self, cells: &[(i64, i64)]) -> Result<()> {
        let mut alive = CellSet::with_capacity(cells.len());
        for &(x, y) in cells {
            alive.try_insert(x, y)?;
        }
        self.alive = alive;
        debug!(population = self.alive.len(), "Seeded pattern");
        Ok(())
    }

    pub fn set_alive(&mut self, pos: Position, alive: bool) {
        if alive {
            self.alive.insert(pos);
        } else {
            self.alive.remove(&pos);
        }
    }

    pub fn is_alive(&self, pos: Position) -> bool {
        self.alive.contains(&pos)
    }

    pub fn live_cells(&self) -> &CellSet {
        &self.alive
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        self.generation += 1;
        if self.alive.is_empty() {
            return;
        }

        let mut candidates = CellSet::with_capacity(self.alive.len() * 8);
        for cell in &self.alive {
            candidates.extend(cell.neighbors(Neighborhood::Moore));
        }

        let next: CellSet = candidates
            .into_iter()
            .filter(|cell| {
                let count = self.alive_neighbor_count(*cell);
                count == 3 || (count == 2 && self.alive.contains(cell))
            })
            .collect();

        trace!(
            generation = self.generation,
            before = self.alive.len(),
            after = next.len(),
            "Life generation"
        );

        self.alive = next;
    }

    fn alive_neighbor_count(&self, pos: Position) -> usize {
        pos.neighbors(Neighborhood::Moore)
            .filter(|neighbor| self.alive.contains(neighbor))
            .count()
    }
}

fn initial_capacity(target: usize) -> usize {
    target.min(MAX_PREALLOCATED_CELLS)
}

impl Steppable for SparseLife {
    fn name(&self) -> &'static str {
        "Game of life"
    }

    fn step(&mut self) {
        SparseLife::step(self);
    }

    fn steps_taken(&self) -> u64 {
        self.generation
    }
}
