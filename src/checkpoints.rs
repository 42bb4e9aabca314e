//! Fair checkpoint placement.
//!
//! One free cell is sampled from each of the four interior quadrants so
//! spawns stay geometrically balanced instead of clustering the way a
//! global random sample could. A fifth, fixed point marks the neutral base
//! cell outside the generated interior.

use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::BASE_CELL;
use crate::grid::Position;
use crate::maze::Maze;

/// A spawn or objective cell in the arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CheckPoint {
    /// Column, from the left edge.
    pub x: u32,
    /// Row, from the bottom edge.
    pub y: u32,
}

/// Picks five checkpoints: one free cell per interior quadrant, chosen
/// uniformly with `rng`, plus the fixed base cell.
///
/// A quadrant with zero free cells means the maze is corrupt; that is a
/// fatal error, never a silently shorter result.
///
/// # Examples
///
/// ```
/// use drones_arena::checkpoints::check_points;
/// use drones_arena::maze::Maze;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let maze = Maze::new().unwrap();
/// let points = check_points(&maze, &mut StdRng::seed_from_u64(0)).unwrap();
/// assert_eq!(points.len(), 5);
/// ```
pub fn check_points<R: Rng>(maze: &Maze, rng: &mut R) -> Result<[CheckPoint; 5]> {
    let (w, h) = (maze.width(), maze.height());
    let zones = [
        (1, 1, w / 2, h / 2),
        (1, h / 2 + 1, w / 2, h - 1),
        (w / 2 + 1, h / 2 + 1, w - 1, h - 1),
        (w / 2 + 1, 1, w - 1, h / 2),
    ];

    let mut result = [CheckPoint {
        x: BASE_CELL.0 as u32,
        y: BASE_CELL.1 as u32,
    }; 5];
    for (i, &(x1, y1, x2, y2)) in zones.iter().enumerate() {
        let mut available = Vec::new();
        for y in y1..=y2 {
            for x in x1..=x2 {
                if !maze.is_wall(x, y) {
                    available.push(Position { x, y });
                }
            }
        }
        let pos = available
            .choose(rng)
            .ok_or_else(|| anyhow!("no free cell in quadrant {}", i))?;
        result[i] = CheckPoint {
            x: pos.x as u32,
            y: pos.y as u32,
        };
    }

    Ok(result)
}

/// [`check_points`] with the thread RNG.
pub fn random_check_points(maze: &Maze) -> Result<[CheckPoint; 5]> {
    check_points(maze, &mut rand::thread_rng())
}
