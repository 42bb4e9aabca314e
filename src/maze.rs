//! Combined arena assembly.
//!
//! Two independently generated sub-mazes are stitched side by side into one
//! 24x23 bit-packed grid, with a boundary wall between and around them. The
//! single free column between the second sub-maze and the right border is
//! the neutral base strip.

use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH, SUBMAZE_HEIGHT, SUBMAZE_WIDTH, WALL_GLYPH};
use crate::generator::{Backtracker, GlyphSet, MazeGenerator, MazeRequest};
use crate::grid::{BitGrid, Position};

/// The combined arena maze.
///
/// Immutable once constructed; checkpoint selection and path solving only
/// read it, so it is safe to share across concurrent readers.
///
/// # Examples
///
/// ```
/// use drones_arena::maze::Maze;
///
/// let maze = Maze::new().unwrap();
/// assert_eq!(maze.width(), 24);
/// assert_eq!(maze.height(), 23);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    grid: BitGrid,
}

impl Maze {
    /// Builds an arena from two freshly generated sub-mazes, using the
    /// default [`Backtracker`] generator over the thread RNG.
    pub fn new() -> Result<Maze> {
        Maze::generate(&mut Backtracker::new(rand::thread_rng()))
    }

    /// Assembles an arena from two sub-mazes produced by `generator`.
    ///
    /// The generator is invoked twice with 5x11 cell dimensions and opposite
    /// corner start/goal configurations. A rendering whose dimensions do not
    /// match the request is a fatal error; the column offsets used for the
    /// second sub-maze and the borders are derived from the rendered widths,
    /// never hard-coded.
    pub fn generate(generator: &mut dyn MazeGenerator) -> Result<Maze> {
        let glyphs = GlyphSet::walls_only(WALL_GLYPH);
        let a = generator.generate(
            &MazeRequest {
                width: SUBMAZE_WIDTH,
                height: SUBMAZE_HEIGHT,
                start: (0, SUBMAZE_HEIGHT - 1),
                goal: (SUBMAZE_WIDTH - 1, 0),
            },
            &glyphs,
        );
        let b = generator.generate(
            &MazeRequest {
                width: SUBMAZE_WIDTH,
                height: SUBMAZE_HEIGHT,
                start: (0, 0),
                goal: (SUBMAZE_WIDTH - 1, SUBMAZE_HEIGHT - 1),
            },
            &glyphs,
        );
        let rows_a = submaze_rows(&a)?;
        let rows_b = submaze_rows(&b)?;

        let span_a = rows_a[0].len() as u8;
        let seam = 1 + span_a;
        let offset_b = seam + 1;
        let span_b = rows_b[0].len() as u8;
        let right = ARENA_WIDTH - 1;
        // the column left of the right border must stay free: the base strip
        if offset_b + span_b >= right {
            bail!(
                "sub-maze patterns spanning {} columns do not fit a {}-wide arena",
                offset_b + span_b,
                ARENA_WIDTH
            );
        }

        let mut grid = BitGrid::new(ARENA_WIDTH, ARENA_HEIGHT);
        for (i, (row_a, row_b)) in rows_a.iter().zip(rows_b.iter()).enumerate() {
            // renderings run top-down, the grid reads bottom-up
            let y = ARENA_HEIGHT - 2 - i as u8;
            grid.set(0, y);
            for (x, &glyph) in row_a.iter().enumerate() {
                if glyph == glyphs.wall {
                    grid.set(1 + x as u8, y);
                }
            }
            grid.set(seam, y);
            for (x, &glyph) in row_b.iter().enumerate() {
                if glyph == glyphs.wall {
                    grid.set(offset_b + x as u8, y);
                }
            }
            grid.set(right, y);
        }
        for x in 0..ARENA_WIDTH {
            grid.set(x, 0);
            grid.set(x, ARENA_HEIGHT - 1);
        }

        Ok(Maze { grid })
    }

    #[cfg(test)]
    pub(crate) fn from_grid(grid: BitGrid) -> Maze {
        Maze { grid }
    }

    /// Arena width in cells.
    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    /// Arena height in cells.
    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    /// The packed wall storage, 8 cells per byte.
    pub fn walls(&self) -> &[u8] {
        self.grid.bytes()
    }

    /// Returns whether the cell at `(x, y)` is a wall.
    ///
    /// `y` is measured from the bottom row. Panics on out-of-range
    /// coordinates; use [`in_bounds`](Maze::in_bounds) first when the
    /// coordinates are not already known to be valid.
    pub fn is_wall(&self, x: u8, y: u8) -> bool {
        self.grid.get(x, y)
    }

    /// Returns whether `pos` lies inside the arena.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width() && pos.y < self.height()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

/// Strips the outer top border line and each line's outer left border glyph
/// from a sub-maze rendering, returning the remaining wall pattern rows.
fn submaze_rows(rendering: &str) -> Result<Vec<Vec<char>>> {
    let expected_lines = 2 * SUBMAZE_HEIGHT as usize + 1;
    let expected_width = 2 * SUBMAZE_WIDTH as usize + 1;
    let lines: Vec<&str> = rendering.lines().collect();
    if lines.len() != expected_lines {
        bail!(
            "generator produced {} lines, expected {}",
            lines.len(),
            expected_lines
        );
    }
    let mut rows = Vec::with_capacity(expected_lines - 1);
    for line in &lines[1..] {
        let glyphs: Vec<char> = line.chars().collect();
        if glyphs.len() != expected_width {
            bail!(
                "generator produced a {}-glyph line, expected {}",
                glyphs.len(),
                expected_width
            );
        }
        rows.push(glyphs[1..].to_vec());
    }
    Ok(rows)
}
