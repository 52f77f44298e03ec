mod astar;
mod bfs;
mod dfs;
mod dijkstra;

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{error::MazeError, maze::Maze};
use astar::solve_astar;
use bfs::solve_bfs;
use dfs::solve_dfs;
use dijkstra::solve_dijkstra;

/// Tentative distance of a cell nothing has reached yet.
const INFINITY: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 4] = [Solver::Bfs, Solver::Dfs, Solver::Dijkstra, Solver::AStar];

    /// Whether the returned path is guaranteed to have the fewest possible steps.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Solver::Dfs)
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown solver '{0}' (expected bfs, dfs, dijkstra or astar)")]
pub struct UnknownSolver(pub String);

impl FromStr for Solver {
    type Err = UnknownSolver;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Solver::Bfs),
            "dfs" => Ok(Solver::Dfs),
            "dijkstra" => Ok(Solver::Dijkstra),
            "astar" | "a*" => Ok(Solver::AStar),
            _ => Err(UnknownSolver(s.to_string())),
        }
    }
}

/// Result of a solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    /// Cells from start to goal inclusive. Empty if the goal is unreachable.
    pub path: Vec<(u16, u16)>,
    /// Cells in the order the solver expanded them.
    pub visited: Vec<(u16, u16)>,
}

impl Solution {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps (edges) along the path, or `None` if no path was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Solve-scoped bookkeeping for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchNode {
    /// Discovered by BFS/DFS
    visited: bool,
    /// Arena index of the cell this one was reached from
    parent: Option<usize>,
    /// Tentative distance from the start, used by Dijkstra and A*
    distance: u32,
    /// Currently waiting in the Dijkstra/A* frontier
    in_frontier: bool,
    /// Insertion order into the frontier, used to break ties between equal keys
    seq: u64,
}

impl Default for SearchNode {
    fn default() -> Self {
        SearchNode {
            visited: false,
            parent: None,
            distance: INFINITY,
            in_frontier: false,
            seq: 0,
        }
    }
}

/// Transient per-cell solve state, laid out like the maze's cell arena.
#[derive(Debug, Clone)]
struct SearchState {
    nodes: Box<[SearchNode]>,
}

impl SearchState {
    fn new(len: usize) -> Self {
        SearchState {
            nodes: vec![SearchNode::default(); len].into_boxed_slice(),
        }
    }

    /// Back to unvisited, no parent and infinite distance for every cell.
    fn reset(&mut self) {
        self.nodes.fill(SearchNode::default());
    }

    /// Follows parent links from `goal` back to the start and returns the path start-first.
    fn reconstruct_path(&self, maze: &Maze, goal: usize) -> Vec<(u16, u16)> {
        let mut path = Vec::new();
        let mut current = Some(goal);
        while let Some(idx) = current {
            path.push(maze.unravel_index(idx));
            current = self.nodes[idx].parent;
        }
        path.reverse();
        path
    }
}

/// Manhattan distance between two cells.
pub fn manhattan(a: (u16, u16), b: (u16, u16)) -> u32 {
    a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
}

/// Top-left start and bottom-right goal.
pub fn default_endpoints(maze: &Maze) -> ((u16, u16), (u16, u16)) {
    (
        (0, 0),
        (
            maze.width().saturating_sub(1),
            maze.height().saturating_sub(1),
        ),
    )
}

/// Runs solvers against one maze, reusing the solve-state arena between calls.
///
/// Every call to [`MazeSolver::solve`] starts from a clean state, so consecutive solves
/// never see each other's parents or distances.
pub struct MazeSolver<'a> {
    maze: &'a Maze,
    state: SearchState,
}

impl<'a> MazeSolver<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        MazeSolver {
            maze,
            state: SearchState::new(maze.len()),
        }
    }

    pub fn maze(&self) -> &Maze {
        self.maze
    }

    /// Finds a path from `start` to `goal` with the given algorithm.
    ///
    /// Fails with [`MazeError::InvalidEndpoint`] if either endpoint lies outside the maze.
    pub fn solve(
        &mut self,
        start: (u16, u16),
        goal: (u16, u16),
        solver: Solver,
    ) -> Result<Solution, MazeError> {
        for endpoint in [start, goal] {
            if !self.maze.is_in_bounds(endpoint) {
                return Err(MazeError::InvalidEndpoint {
                    x: endpoint.0,
                    y: endpoint.1,
                });
            }
        }

        self.state.reset();
        let solution = match solver {
            Solver::Bfs => solve_bfs(self.maze, &mut self.state, start, goal),
            Solver::Dfs => solve_dfs(self.maze, &mut self.state, start, goal),
            Solver::Dijkstra => solve_dijkstra(self.maze, &mut self.state, start, goal),
            Solver::AStar => solve_astar(self.maze, &mut self.state, start, goal),
        };

        tracing::debug!(
            "[solve] {} from {:?} to {:?}: path of {} cells, {} expanded",
            solver,
            start,
            goal,
            solution.path.len(),
            solution.visited.len()
        );
        Ok(solution)
    }

    /// Tentative distance recorded for `coord` by the last Dijkstra or A* solve.
    pub fn distance(&self, coord: (u16, u16)) -> Option<u32> {
        if !self.maze.is_in_bounds(coord) {
            return None;
        }
        let distance = self.state.nodes[self.maze.ravel_index(coord)].distance;
        (distance != INFINITY).then_some(distance)
    }
}

/// One-shot solve with a fresh [`MazeSolver`].
pub fn solve_maze(
    maze: &Maze,
    start: (u16, u16),
    goal: (u16, u16),
    solver: Solver,
) -> Result<Solution, MazeError> {
    MazeSolver::new(maze).solve(start, goal, solver)
}
