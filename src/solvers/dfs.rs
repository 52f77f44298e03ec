use super::{SearchState, Solution};
use crate::maze::Maze;

/// Depth-first search with an explicit stack.
///
/// Cells are marked when pushed, and neighbors are pushed in up, right, down, left
/// order, so the left neighbor is explored first. The path found is valid but not
/// necessarily the shortest.
pub(super) fn solve_dfs(
    maze: &Maze,
    state: &mut SearchState,
    start: (u16, u16),
    goal: (u16, u16),
) -> Solution {
    let mut visited = Vec::new();
    let mut stack = vec![start];
    state.nodes[maze.ravel_index(start)].visited = true;

    while let Some(current) = stack.pop() {
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
            if !node.visited {
                node.visited = true;
                node.parent = Some(current_idx);
                stack.push(neighbor);
            }
        }
    }

    Solution {
        path: Vec::new(),
        visited,
    }
}
