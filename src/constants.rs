//! Provides constants for the library.

/// Width of the combined arena in cells
pub const ARENA_WIDTH: u8 = 24;
/// Height of the combined arena in cells
pub const ARENA_HEIGHT: u8 = 23;
/// Width in cells of each generated sub-maze
pub const SUBMAZE_WIDTH: u8 = 5;
/// Height in cells of each generated sub-maze
pub const SUBMAZE_HEIGHT: u8 = 11;
/// Glyph that marks a wall in generated renderings and arena printouts
pub const WALL_GLYPH: char = '█';
/// The neutral base cell, outside the generated interior
pub const BASE_CELL: (u8, u8) = (22, 1);
