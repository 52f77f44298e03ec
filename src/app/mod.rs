mod renderer;

use std::io::Write;

pub use renderer::{Glyph, Renderer};

use crate::{
    config::Config,
    error::MazeError,
    generators::{generate, get_rng},
    maze::Maze,
    solvers::{MazeSolver, Solution, Solver, default_endpoints},
};
use rand::rngs::StdRng;

/// Terminal front end: owns the current maze and hands it to the solvers and renderer.
pub struct App {
    config: Config,
    rng: StdRng,
    maze: Maze,
}

impl App {
    /// Generates the first maze from `config`.
    ///
    /// Unusable dimensions fall back to the default size instead of failing.
    pub fn new(mut config: Config) -> Result<Self, MazeError> {
        let mut rng = get_rng(config.seed);
        let maze = match generate(config.width, config.height, &mut rng) {
            Ok(maze) => maze,
            Err(e) => {
                let fallback = Config::default();
                tracing::warn!(
                    "[app] {}; falling back to {}x{}",
                    e,
                    fallback.width,
                    fallback.height
                );
                config.width = fallback.width;
                config.height = fallback.height;
                generate(config.width, config.height, &mut rng)?
            }
        };
        tracing::info!("[app] generated {}x{} maze", config.width, config.height);
        Ok(App { config, rng, maze })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the current maze with a freshly generated one.
    ///
    /// On invalid dimensions the current maze and size are kept and the error returned.
    pub fn regenerate(&mut self, width: u16, height: u16) -> Result<(), MazeError> {
        match generate(width, height, &mut self.rng) {
            Ok(maze) => {
                self.maze = maze;
                self.config.width = width;
                self.config.height = height;
                tracing::info!("[app] regenerated {}x{} maze", width, height);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    "[app] keeping {}x{} maze: {}",
                    self.config.width,
                    self.config.height,
                    e
                );
                Err(e)
            }
        }
    }

    /// Solves the current maze from the top-left to the bottom-right cell with every
    /// configured solver.
    pub fn solve_all(&self) -> Vec<(Solver, Solution)> {
        let (start, goal) = default_endpoints(&self.maze);
        let mut maze_solver = MazeSolver::new(&self.maze);
        self.config
            .solvers
            .iter()
            .filter_map(|&solver| match maze_solver.solve(start, goal, solver) {
                Ok(solution) => Some((solver, solution)),
                Err(e) => {
                    tracing::error!("[app] {} failed: {}", solver, e);
                    None
                }
            })
            .collect()
    }

    /// Prints the maze once per configured solver, with that solver's path drawn in.
    pub fn run<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let renderer = Renderer::new(self.config.show_visited);
        if self.maze.width().max(self.maze.height()) > Renderer::MAX_SIDE {
            tracing::warn!("[app] maze too large to print, reporting results only");
        }

        for (solver, solution) in self.solve_all() {
            let caption = match solution.steps() {
                Some(steps) => format!(
                    "{}: {} steps, {} cells expanded",
                    solver,
                    steps,
                    solution.visited.len()
                ),
                None => format!("{}: no path found", solver),
            };
            tracing::info!("[app] {}", caption);
            match renderer.frame(&self.maze, Some(&solution)) {
                Some(frame) => renderer.render(out, &frame, &caption)?,
                None => writeln!(out, "{}", caption)?,
            }
        }
        Ok(())
    }

    /// Runs on the first maze, then regenerates at each configured resize and runs again.
    ///
    /// A resize to unusable dimensions is reported and skipped; the previous maze stays.
    pub fn run_session<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        self.run(out)?;
        let resizes = self.config.resizes.clone();
        for size in resizes {
            writeln!(out, "Resizing to {}\r", size)?;
            match self.regenerate(size.width, size.height) {
                Ok(()) => self.run(out)?,
                Err(e) => writeln!(
                    out,
                    "{}; keeping the {}x{} maze\r",
                    e, self.config.width, self.config.height
                )?,
            }
        }
        Ok(())
    }
}
