//! Core type definitions shared by the simulations.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moore neighborhood offsets, in the order candidates are generated.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

const VON_NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// 2D cell position on the integer grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a position from wide coordinates, failing when either axis
    /// falls outside the `i32` range.
    pub fn from_wide(x: i64, y: i64) -> Result<Self> {
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => Ok(Self { x, y }),
            _ => Err(Error::NonSerializableKey { x, y }),
        }
    }

    /// Offset this position, or `None` if the result is not representable.
    pub fn checked_add(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Positions at each of `offsets` relative to this one.
    ///
    /// Offsets that would leave the representable range are skipped.
    pub fn offset_by(self, offsets: &[(i32, i32)]) -> impl Iterator<Item = Position> + '_ {
        offsets
            .iter()
            .filter_map(move |&(dx, dy)| self.checked_add(dx, dy))
    }

    /// Neighbors of this position in the given neighborhood
    pub fn neighbors(self, neighborhood: Neighborhood) -> impl Iterator<Item = Position> {
        self.offset_by(neighborhood.offsets())
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which set of neighbor offsets a caller needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighborhood {
    /// 8-connected: orthogonal and diagonal
    Moore,
    /// 4-connected: orthogonal only
    VonNeumann,
}

impl Neighborhood {
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Neighborhood::Moore => &MOORE_OFFSETS,
            Neighborhood::VonNeumann => &VON_NEUMANN_OFFSETS,
        }
    }
}

/// Cardinal direction. North is toward decreasing `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
        }
    }

    /// Direction of the step from `from` to `to`, if they are orthogonally adjacent.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (-1, 0) => Some(Direction::West),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            _ => None,
        }
    }

    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::West,
            Direction::South,
            Direction::East,
        ]
    }
}
