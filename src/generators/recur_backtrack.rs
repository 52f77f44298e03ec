use rand::Rng;

use crate::maze::Maze;

/// Carves a perfect maze into `maze` with an iterative randomized depth-first backtracker.
///
/// Starts at `(0, 0)`. Each step either advances into a uniformly chosen unvisited
/// neighbor of the current cell, removing the wall in between, or backtracks by popping
/// the stack. Exactly `width * height - 1` walls end up removed.
///
/// The maze is expected to be freshly created (all walls up, nothing visited).
pub fn recursive_backtrack<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    if maze.is_empty() {
        return;
    }

    let mut current = (0, 0);
    maze.mark_visited(current);

    // The stack keeps the carved trail so dead ends can be backed out of without recursion
    let mut stack = Vec::with_capacity(maze.len());
    stack.push(current);

    while !stack.is_empty() {
        let neighbors = maze
            .neighbors_by_position(current)
            .filter(|&c| !maze.is_visited(c))
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Backtrack
            match stack.pop() {
                Some(cell) => current = cell,
                None => break,
            }
            continue;
        }

        let next = neighbors[rng.random_range(0..neighbors.len())];
        let carved = maze.remove_wall_between(current, next);
        // `next` comes from the neighbor query, so the pair is always adjacent
        debug_assert_eq!(carved, Ok(true), "carving {:?} -> {:?}", current, next);
        maze.mark_visited(next);
        stack.push(next);
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_every_cell_visited() {
        let mut maze = Maze::new(7, 5).unwrap();
        recursive_backtrack(&mut maze, &mut StdRng::seed_from_u64(1));
        assert!(maze.cells().iter().all(|c| c.is_visited()));
        assert_eq!(maze.passage_count(), 7 * 5 - 1);
    }

    #[test]
    fn test_single_cell() {
        let mut maze = Maze::new(1, 1).unwrap();
        recursive_backtrack(&mut maze, &mut StdRng::seed_from_u64(0));
        assert_eq!(maze.passage_count(), 0);
        assert_eq!(maze[(0, 0)].wall_count(), 4);
    }

    #[test]
    fn test_corridor_is_fully_open() {
        // A 1-wide maze has exactly one spanning tree
        let mut maze = Maze::new(1, 6).unwrap();
        recursive_backtrack(&mut maze, &mut StdRng::seed_from_u64(3));
        for y in 0..5 {
            assert!(maze.open_neighbors((0, y)).any(|c| c == (0, y + 1)));
        }
    }
}
