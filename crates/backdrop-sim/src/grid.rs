//! Fixed-size dense 2D grid.

use backdrop_core::{Error, Neighborhood, Position, Result};
use serde::{Deserialize, Serialize};

/// A bounded rectangular grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid, filling each cell from its position
    pub fn from_fn(width: i32, height: i32, mut init: impl FnMut(Position) -> T) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::invalid_dimensions(width, height));
        }
        // Index math runs in i32, so the cell count must fit it.
        let size = width
            .checked_mul(height)
            .ok_or_else(|| Error::invalid_dimensions(width, height))? as usize;

        let mut cells = Vec::with_capacity(size);
        for y in 0..height {
            for x in 0..width {
                cells.push(init(Position::new(x, y)));
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Get cell at position, `None` when out of bounds
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.pos_to_index(pos).map(|index| &self.cells[index])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        match self.pos_to_index(pos) {
            Some(index) => Some(&mut self.cells[index]),
            None => None,
        }
    }

    /// Mutable access to two distinct cells at once
    pub fn get_pair_mut(&mut self, a: Position, b: Position) -> Option<(&mut T, &mut T)> {
        let ia = self.pos_to_index(a)?;
        let ib = self.pos_to_index(b)?;
        if ia == ib {
            return None;
        }

        if ia < ib {
            let (lo, hi) = self.cells.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.cells.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }

    /// In-bounds neighbors of a position
    pub fn neighbors(
        &self,
        pos: Position,
        neighborhood: Neighborhood,
    ) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors(neighborhood)
            .filter(move |&neighbor| self.contains(neighbor))
    }

    fn pos_to_index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }

    /// Get position from index
    pub fn index_to_pos(&self, index: usize) -> Position {
        let x = (index as i32) % self.width;
        let y = (index as i32) / self.width;
        Position::new(x, y)
    }

    /// Iterator over all positions
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| self.index_to_pos(i))
    }

    /// Iterator over all cells with positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.index_to_pos(i), cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::from_fn(10, 4, |_| 0u8).unwrap();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.len(), 40);
    }

    #[test]
    fn test_invalid_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (-1, 3), (0, 0)] {
            let err = Grid::from_fn(w, h, |_| ()).unwrap_err();
            assert!(matches!(err, Error::InvalidDimensions { .. }));
        }
    }

    #[test]
    fn test_cell_count_must_fit_index() {
        let err = Grid::from_fn(i32::MAX, 2, |_| ()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimensions { width, height: 2 } if width == i64::from(i32::MAX)
        ));
        assert!(Grid::from_fn(65_536, 65_536, |_| ()).is_err());
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::from_fn(3, 2, |p| p).unwrap();
        assert_eq!(grid.get(Position::new(2, 1)), Some(&Position::new(2, 1)));
        assert!(grid.get(Position::new(3, 0)).is_none());
        assert!(grid.get(Position::new(0, -1)).is_none());
    }

    #[test]
    fn test_index_round_trip() {
        let grid = Grid::from_fn(7, 5, |p| p).unwrap();
        for (pos, cell) in grid.iter() {
            assert_eq!(pos, *cell);
        }
        assert_eq!(grid.positions().count(), 35);
    }

    #[test]
    fn test_neighbors_clipped_at_edges() {
        let grid = Grid::from_fn(10, 10, |_| ()).unwrap();
        assert_eq!(grid.neighbors(Position::new(0, 0), Neighborhood::VonNeumann).count(), 2);
        assert_eq!(grid.neighbors(Position::new(0, 5), Neighborhood::VonNeumann).count(), 3);
        assert_eq!(grid.neighbors(Position::new(5, 5), Neighborhood::VonNeumann).count(), 4);
        assert_eq!(grid.neighbors(Position::new(5, 5), Neighborhood::Moore).count(), 8);
    }

    #[test]
    fn test_get_pair_mut() {
        let mut grid = Grid::from_fn(3, 3, |_| 0).unwrap();
        {
            let (a, b) = grid
                .get_pair_mut(Position::new(2, 2), Position::new(0, 0))
                .unwrap();
            *a = 1;
            *b = 2;
        }
        assert_eq!(grid.get(Position::new(2, 2)), Some(&1));
        assert_eq!(grid.get(Position::new(0, 0)), Some(&2));

        let same = Position::new(1, 1);
        assert!(grid.get_pair_mut(same, same).is_none());
    }
}
