//! Viewport sizing in cell units.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Size of the drawable surface, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Seeding window for the life simulation: whole cells that fit the
    /// viewport, at least one per axis.
    pub fn life_window(&self, cell_width: u32, cell_height: u32) -> Result<(i32, i32)> {
        check_pitch(cell_width, cell_height)?;
        Ok((
            to_cells(self.width / cell_width),
            to_cells(self.height / cell_height),
        ))
    }

    /// Maze dimensions: enough cells to cover the viewport, partial cells
    /// included, at least one per axis.
    pub fn maze_dimensions(&self, cell_width: u32, cell_height: u32) -> Result<(i32, i32)> {
        check_pitch(cell_width, cell_height)?;
        Ok((
            to_cells(self.width.div_ceil(cell_width)),
            to_cells(self.height.div_ceil(cell_height)),
        ))
    }

    /// True when the viewport is both narrower and shorter than the minimum.
    pub fn is_too_small(&self, min_width: u32, min_height: u32) -> bool {
        self.width < min_width && self.height < min_height
    }
}

fn check_pitch(cell_width: u32, cell_height: u32) -> Result<()> {
    if cell_width == 0 || cell_height == 0 {
        return Err(Error::InvalidConfig(format!(
            "cell pitch must be non-zero, got {}x{}",
            cell_width, cell_height
        )));
    }
    Ok(())
}

fn to_cells(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX).max(1)
}
