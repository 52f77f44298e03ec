use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

use crate::{error::MazeError, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Builds and carves a brand-new perfect maze of `width` x `height` cells.
///
/// Any previously generated maze is left untouched, also when this fails with
/// [`MazeError::InvalidDimension`].
pub fn generate<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Result<Maze, MazeError> {
    let mut maze = Maze::new(width, height)?;
    recursive_backtrack(&mut maze, rng);
    tracing::debug!(
        "[generate] carved {}x{} maze with {} passages",
        width,
        height,
        maze.passage_count()
    );
    Ok(maze)
}

/// Same as [`generate`], drawing randomness from [`get_rng`].
pub fn generate_maze(width: u16, height: u16, seed: Option<u64>) -> Result<Maze, MazeError> {
    generate(width, height, &mut get_rng(seed))
}
