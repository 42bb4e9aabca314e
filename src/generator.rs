//! Textual sub-maze generation.
//!
//! The assembler only consumes textual renderings, so the generation
//! algorithm sits behind [`MazeGenerator`] and can be swapped for a stub in
//! tests. [`Backtracker`] is the default implementation.

use rand::seq::SliceRandom;
use rand::Rng;

/// Glyph table used when rendering a generated maze to text.
///
/// One glyph per cell category. The assembler blanks every category except
/// walls so markers cannot be mistaken for structure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GlyphSet {
    /// Wall cells.
    pub wall: char,
    /// Carved path cells.
    pub path: char,
    /// The cell generation was carved from.
    pub start: char,
    /// The cell generation aims for.
    pub goal: char,
}

impl GlyphSet {
    /// A table that renders walls with `wall` and every other category
    /// blank.
    pub fn walls_only(wall: char) -> Self {
        GlyphSet {
            wall,
            path: ' ',
            start: ' ',
            goal: ' ',
        }
    }
}

/// Dimensions and endpoints for one generated sub-maze.
///
/// `start` and `goal` are `(column, row)` cell coordinates with row 0 at the
/// top of the rendering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MazeRequest {
    /// Width in cells.
    pub width: u8,
    /// Height in cells.
    pub height: u8,
    /// Cell generation is carved from.
    pub start: (u8, u8),
    /// Cell generation aims for.
    pub goal: (u8, u8),
}

/// Source of textual sub-mazes.
///
/// A rendering of a `width x height` request must be exactly
/// `2 * height + 1` lines of `2 * width + 1` glyphs, with every carved cell
/// reachable from the start cell and the wall glyph taken from the supplied
/// [`GlyphSet`].
pub trait MazeGenerator {
    /// Generates one textual maze.
    fn generate(&mut self, request: &MazeRequest, glyphs: &GlyphSet) -> String;
}

// cell neighbor order: north, east, south, west
const CARVE_DELTAS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const EAST: usize = 1;
const SOUTH: usize = 2;

/// Recursive-backtracker maze generator drawing from an injected RNG.
///
/// Carves a spanning tree of passages over the requested cell grid, so every
/// cell is reachable from every other, then renders it with one glyph row or
/// column between and around cells.
pub struct Backtracker<R: Rng> {
    rng: R,
}

impl<R: Rng> Backtracker<R> {
    /// Creates a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Backtracker { rng }
    }
}

impl<R: Rng> MazeGenerator for Backtracker<R> {
    fn generate(&mut self, request: &MazeRequest, glyphs: &GlyphSet) -> String {
        let (w, h) = (request.width as usize, request.height as usize);
        assert!(w > 0 && h > 0, "degenerate {}x{} maze request", w, h);
        assert!(
            (request.start.0 as usize) < w && (request.start.1 as usize) < h,
            "start cell {:?} outside {}x{} maze",
            request.start,
            w,
            h
        );
        assert!(
            (request.goal.0 as usize) < w && (request.goal.1 as usize) < h,
            "goal cell {:?} outside {}x{} maze",
            request.goal,
            w,
            h
        );

        // open[y][x][d]: passage carved from cell (x, y) towards direction d
        let mut open = vec![vec![[false; 4]; w]; h];
        let mut visited = vec![vec![false; w]; h];
        let mut stack = vec![(request.start.0 as usize, request.start.1 as usize)];
        visited[stack[0].1][stack[0].0] = true;

        while let Some(&(x, y)) = stack.last() {
            let mut unvisited = Vec::new();
            for (d, &(dx, dy)) in CARVE_DELTAS.iter().enumerate() {
                let nx = x as isize + dx as isize;
                let ny = y as isize + dy as isize;
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }
                if !visited[ny as usize][nx as usize] {
                    unvisited.push((d, nx as usize, ny as usize));
                }
            }
            match unvisited.choose(&mut self.rng) {
                Some(&(d, nx, ny)) => {
                    open[y][x][d] = true;
                    open[ny][nx][(d + 2) % 4] = true;
                    visited[ny][nx] = true;
                    stack.push((nx, ny));
                }
                None => {
                    stack.pop();
                }
            }
        }

        render(&open, w, h, request, glyphs)
    }
}

/// Renders carved passages as a `(2h + 1) x (2w + 1)` glyph grid. Cell
/// `(x, y)` sits at glyph `(2x + 1, 2y + 1)`; the glyphs between cell
/// centers open up where a passage was carved.
fn render(open: &[Vec<[bool; 4]>], w: usize, h: usize, request: &MazeRequest, glyphs: &GlyphSet) -> String {
    let mut text = vec![vec![glyphs.wall; 2 * w + 1]; 2 * h + 1];
    for y in 0..h {
        for x in 0..w {
            text[2 * y + 1][2 * x + 1] = glyphs.path;
            if open[y][x][EAST] {
                text[2 * y + 1][2 * x + 2] = glyphs.path;
            }
            if open[y][x][SOUTH] {
                text[2 * y + 2][2 * x + 1] = glyphs.path;
            }
        }
    }
    let (sx, sy) = request.start;
    let (gx, gy) = request.goal;
    text[2 * sy as usize + 1][2 * sx as usize + 1] = glyphs.start;
    text[2 * gy as usize + 1][2 * gx as usize + 1] = glyphs.goal;

    let mut out = String::with_capacity((2 * w + 2) * (2 * h + 1));
    for row in text {
        out.extend(row);
        out.push('\n');
    }
    out
}
