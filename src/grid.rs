//! Bit-packed wall storage and cell coordinates.

use crate::constants::WALL_GLYPH;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write;

/// A single cell reference.
///
/// `x` counts columns from the left edge, `y` counts rows from the bottom
/// edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, from the left edge.
    pub x: u8,
    /// Row, from the bottom edge.
    pub y: u8,
}

/// A fixed-size wall bitmap, packed 8 cells per byte.
///
/// Both [`set`](BitGrid::set) and [`get`](BitGrid::get) use the same linear
/// index, `(height - 1 - y) * width + x` with `y` measured from the bottom
/// row, so there is a single coordinate orientation for construction and
/// reads.
///
/// # Examples
///
/// ```
/// use drones_arena::grid::BitGrid;
///
/// let mut grid = BitGrid::new(8, 8);
/// grid.set(3, 4);
/// assert!(grid.get(3, 4));
/// assert!(!grid.get(4, 3));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BitGrid {
    width: u8,
    height: u8,
    bits: Vec<u8>,
}

impl BitGrid {
    /// Creates a zero-filled (all-free) grid of the given dimensions.
    pub fn new(width: u8, height: u8) -> Self {
        let cells = width as usize * height as usize;
        BitGrid {
            width,
            height,
            bits: vec![0; (cells + 7) / 8],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The packed wall storage.
    pub fn bytes(&self) -> &[u8] {
        &self.bits
    }

    fn index(&self, x: u8, y: u8) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) is outside the {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (self.height as usize - 1 - y as usize) * self.width as usize + x as usize
    }

    /// Returns whether the bit for cell `(x, y)` is set.
    ///
    /// Panics if the coordinates are out of range; callers are expected to
    /// stay within `[0, width) x [0, height)`.
    pub fn get(&self, x: u8, y: u8) -> bool {
        let i = self.index(x, y);
        self.bits[i / 8] & (1 << (i % 8)) != 0
    }

    /// Sets the bit for cell `(x, y)`.
    ///
    /// Panics if the coordinates are out of range.
    pub fn set(&mut self, x: u8, y: u8) {
        let i = self.index(x, y);
        self.bits[i / 8] |= 1 << (i % 8);
    }
}

impl fmt::Display for BitGrid {
    /// Renders the grid as a checkerboard of wall and blank glyphs, top row
    /// first, matching the read orientation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                f.write_char(if self.get(x, y) { WALL_GLYPH } else { ' ' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
