//! Perfect maze generation on a rectangular grid and path finding through it.
//!
//! [`generators::generate`] carves a maze with a randomized depth-first backtracker;
//! [`solvers::MazeSolver`] finds a path between two cells with BFS, DFS, Dijkstra or A*.

pub mod app;
pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::MazeError;
pub use generators::{generate, generate_maze};
pub use maze::{Cell, Direction, Maze};
pub use solvers::{MazeSolver, Solution, Solver, solve_maze};
