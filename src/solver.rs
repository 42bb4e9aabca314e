//! Depth-first path search over the arena.

use std::collections::HashSet;

use crate::grid::Position;
use crate::maze::Maze;

/// Neighbor order tried at every cell.
const NEIGHBOR_DELTAS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

impl Maze {
    /// Finds some path of adjacent free cells from `start` to `goal`,
    /// inclusive.
    ///
    /// Returns the first path found, not the shortest; cells never repeat
    /// within a returned path. `None` means the goal is unreachable, which
    /// is a normal outcome, or that an endpoint lies outside the arena.
    /// All search state is local to one call, so concurrent solves over the
    /// same maze are safe.
    pub fn solve(&self, start: Position, goal: Position) -> Option<Vec<Position>> {
        if !self.in_bounds(start) || !self.in_bounds(goal) {
            return None;
        }
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        if self.walk(goal, start, &mut visited, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn walk(
        &self,
        goal: Position,
        current: Position,
        visited: &mut HashSet<Position>,
        path: &mut Vec<Position>,
    ) -> bool {
        if current == goal {
            path.push(current);
            return true;
        }
        if self.is_wall(current.x, current.y) || visited.contains(&current) {
            return false;
        }
        visited.insert(current);
        path.push(current);

        for (dx, dy) in NEIGHBOR_DELTAS {
            let x = current.x as i16 + dx as i16;
            let y = current.y as i16 + dy as i16;
            if x < 0 || y < 0 || x >= self.width() as i16 || y >= self.height() as i16 {
                continue;
            }
            let next = Position {
                x: x as u8,
                y: y as u8,
            };
            if self.walk(goal, next, visited, path) {
                return true;
            }
        }

        // dead end: give the parent its turn with the next neighbor
        path.pop();
        visited.remove(&current);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Backtracker;
    use crate::grid::BitGrid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pos(x: u8, y: u8) -> Position {
        Position { x, y }
    }

    fn assert_simple_path(path: &[Position]) {
        for pair in path.windows(2) {
            let dx = (pair[0].x as i16 - pair[1].x as i16).abs();
            let dy = (pair[0].y as i16 - pair[1].y as i16).abs();
            assert_eq!(dx + dy, 1, "{:?} and {:?} are not adjacent", pair[0], pair[1]);
        }
        let unique: HashSet<&Position> = path.iter().collect();
        assert_eq!(unique.len(), path.len(), "path repeats a cell");
    }

    #[test]
    fn crosses_a_small_grid_around_one_wall() {
        let mut grid = BitGrid::new(3, 3);
        grid.set(1, 1);
        let maze = Maze::from_grid(grid);

        let path = maze.solve(pos(0, 0), pos(2, 0)).unwrap();
        assert_eq!(path.first(), Some(&pos(0, 0)));
        assert_eq!(path.last(), Some(&pos(2, 0)));
        assert_simple_path(&path);
        for cell in &path {
            assert!(!maze.is_wall(cell.x, cell.y));
        }
    }

    #[test]
    fn start_equals_goal() {
        let maze = Maze::from_grid(BitGrid::new(3, 3));
        assert_eq!(maze.solve(pos(1, 1), pos(1, 1)), Some(vec![pos(1, 1)]));
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let mut grid = BitGrid::new(5, 5);
        for (x, y) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
            grid.set(x, y);
        }
        let maze = Maze::from_grid(grid);
        assert_eq!(maze.solve(pos(0, 0), pos(2, 2)), None);
    }

    #[test]
    fn walled_start_is_unreachable() {
        let mut grid = BitGrid::new(3, 3);
        grid.set(0, 0);
        let maze = Maze::from_grid(grid);
        assert_eq!(maze.solve(pos(0, 0), pos(2, 2)), None);
    }

    #[test]
    fn out_of_bounds_endpoints_are_not_an_error() {
        let maze = Maze::from_grid(BitGrid::new(3, 3));
        assert_eq!(maze.solve(pos(3, 0), pos(1, 1)), None);
        assert_eq!(maze.solve(pos(1, 1), pos(0, 3)), None);
    }

    #[test]
    fn solves_within_a_generated_sub_maze() {
        let maze =
            Maze::generate(&mut Backtracker::new(StdRng::seed_from_u64(11))).unwrap();

        // every free cell left of the seam belongs to sub-maze A, which the
        // generator guarantees is fully connected
        let free: Vec<Position> = (1..11)
            .flat_map(|x| (1..22).map(move |y| pos(x, y)))
            .filter(|p| !maze.is_wall(p.x, p.y))
            .collect();
        assert!(free.len() > 1);

        let (start, goal) = (free[0], *free.last().unwrap());
        let path = maze.solve(start, goal).unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert_simple_path(&path);
        for cell in &path {
            assert!(!maze.is_wall(cell.x, cell.y));
        }
    }
}
