use super::{SearchState, Solution, dijkstra::best_first, manhattan};
use crate::maze::Maze;

/// A* search guided by the Manhattan distance to `goal`.
///
/// The heuristic never overestimates on a unit-weight 4-connected grid, so the path
/// returned is a shortest one.
pub(super) fn solve_astar(
    maze: &Maze,
    state: &mut SearchState,
    start: (u16, u16),
    goal: (u16, u16),
) -> Solution {
    best_first(maze, state, start, goal, |cell| manhattan(cell, goal))
}
