use std::collections::VecDeque;

use super::{SearchState, Solution};
use crate::maze::Maze;

/// Breadth-first search. The first time the goal is dequeued it has been reached with
/// the fewest possible steps.
pub(super) fn solve_bfs(
    maze: &Maze,
    state: &mut SearchState,
    start: (u16, u16),
    goal: (u16, u16),
) -> Solution {
    let mut visited = Vec::new();
    let mut queue = VecDeque::from([start]);
    state.nodes[maze.ravel_index(start)].visited = true;

    while let Some(current) = queue.pop_front() {
        visited.push(current);
        let current_idx = maze.ravel_index(current);
        if current == goal {
            return Solution {
                path: state.reconstruct_path(maze, current_idx),
                visited,
            };
        }

        for neighbor in maze.open_neighbors(current) {
            let node = &mut state.nodes[maze.ravel_index(neighbor)];
            // Mark on enqueue so a cell never sits in the queue twice
            if !node.visited {
                node.visited = true;
                node.parent = Some(current_idx);
                queue.push_back(neighbor);
            }
        }
    }

    Solution {
        path: Vec::new(),
        visited,
    }
}
