//! Value-keyed set of cell positions.

use crate::error::Result;
use crate::types::Position;
use serde::{Deserialize, Serialize};
use std::collections::hash_set::{self, HashSet};

/// Set of positions, unique by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSet {
    cells: HashSet<Position>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    /// Returns true if the position was not already present.
    pub fn insert(&mut self, pos: Position) -> bool {
        self.cells.insert(pos)
    }

    /// Insert a position given as wide coordinates.
    ///
    /// Fails with `NonSerializableKey` when the coordinates do not fit a
    /// `Position`; the set is left untouched in that case.
    pub fn try_insert(&mut self, x: i64, y: i64) -> Result<bool> {
        let pos = Position::from_wide(x, y)?;
        Ok(self.cells.insert(pos))
    }

    pub fn remove(&mut self, pos: &Position) -> bool {
        self.cells.remove(pos)
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.cells.contains(pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Position> {
        self.cells.iter()
    }

    /// Positions in row-major order (by `y`, then `x`)
    pub fn sorted(&self) -> Vec<Position> {
        let mut cells: Vec<Position> = self.cells.iter().copied().collect();
        cells.sort_unstable_by_key(|p| (p.y, p.x));
        cells
    }
}

impl FromIterator<Position> for CellSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Position> for CellSet {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl IntoIterator for CellSet {
    type Item = Position;
    type IntoIter = hash_set::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Position;
    type IntoIter = hash_set::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
