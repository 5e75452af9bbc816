//! Plain-text frames for a terminal.

use backdrop_core::{CellSet, Position};
use backdrop_sim::{Animation, MazeCarver};
use std::fmt::Write;

const LIVE: char = '#';
const DEAD: char = ' ';
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const MAX_PREALLOCATED_BYTES: usize = 1 << 20;

/// Render the current state of an animation.
///
/// `window` bounds the life frame, in cells.
pub fn frame(animation: &Animation, window: (i32, i32)) -> String {
    let body = match animation {
        Animation::Life(life) => life_frame(life.live_cells(), window.0, window.1),
        Animation::Maze(maze) => maze_frame(maze),
    };
    format!("{CLEAR_SCREEN}{body}")
}

/// Live cells inside `[0, width) x [0, height)`, one row per line
pub fn life_frame(cells: &CellSet, width: i32, height: i32) -> String {
    let columns = usize::try_from(width).unwrap_or(0) + 1;
    let rows = usize::try_from(height).unwrap_or(0);
    let mut out = String::with_capacity(columns.saturating_mul(rows).min(MAX_PREALLOCATED_BYTES));
    for y in 0..height {
        for x in 0..width {
            out.push(if cells.contains(&Position::new(x, y)) {
                LIVE
            } else {
                DEAD
            });
        }
        out.push('\n');
    }
    out
}

/// Walls as `+--+` / `|` art; `@@` marks the cursor, `..` visited cells
pub fn maze_frame(maze: &MazeCarver) -> String {
    let grid = maze.grid();
    let mut out = String::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let north = grid.get(Position::new(x, y)).map_or(true, |c| c.walls.north);
            out.push_str(if north { "+--" } else { "+  " });
        }
        out.push_str("+\n");

        for x in 0..grid.width() {
            let pos = Position::new(x, y);
            let Some(cell) = grid.get(pos) else {
                continue;
            };
            out.push(if cell.walls.west { '|' } else { ' ' });
            out.push_str(if pos == maze.current() {
                "@@"
            } else if cell.visited {
                ".."
            } else {
                "  "
            });
        }
        let east = grid
            .get(Position::new(grid.width() - 1, y))
            .map_or(true, |c| c.walls.east);
        out.push(if east { '|' } else { ' ' });
        out.push('\n');
    }

    let last = grid.height() - 1;
    for x in 0..grid.width() {
        let south = grid.get(Position::new(x, last)).map_or(true, |c| c.walls.south);
        out.push_str(if south { "+--" } else { "+  " });
    }
    out.push_str("+\n");

    let _ = write!(
        out,
        "visited {}/{}  depth {}",
        maze.visited_count(),
        grid.len(),
        maze.stack_depth()
    );
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_frame() {
        let cells: CellSet = [(0, 0), (2, 1), (9, 9)]
            .into_iter()
            .map(Position::from)
            .collect();
        assert_eq!(life_frame(&cells, 3, 2), "#  \n  #\n");
    }

    #[test]
    fn test_life_frame_wide_window_without_rows() {
        let cells = CellSet::new();
        assert_eq!(life_frame(&cells, i32::MAX, 0), "");
        assert_eq!(life_frame(&cells, -3, -3), "");
    }

    #[test]
    fn test_single_cell_maze_frame() {
        let maze = MazeCarver::new(1, 1, 0).unwrap();
        let text = maze_frame(&maze);
        assert!(text.starts_with("+--+\n|@@|\n+--+\n"));
        assert!(text.contains("visited 1/1"));
    }

    #[test]
    fn test_completed_maze_frame_shape() {
        let mut maze = MazeCarver::new(4, 3, 8).unwrap();
        maze.run_to_completion();
        let text = maze_frame(&maze);

        let lines: Vec<&str> = text.lines().collect();
        // 3 rows of cells, 4 wall lines, 1 status line
        assert_eq!(lines.len(), 8);
        assert!(lines[..7].iter().all(|line| line.len() == 13));
        assert_eq!(lines[0], "+--+--+--+--+");
        assert_eq!(lines[6], "+--+--+--+--+");
        assert_eq!(text.matches("@@").count(), 1);
    }
}
