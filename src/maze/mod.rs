pub mod cell;
mod direction;
pub mod grid;

pub use cell::Cell;
pub use direction::Direction;
use grid::Grid;

use crate::error::MazeError;

/// A rectangular maze of `width` x `height` cells, each with four walls.
///
/// The maze owns every cell. Two grid-adjacent cells are connected when the wall on
/// their shared edge has been removed, and that edge is always cleared on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Grid<Cell>,
}

impl Maze {
    /// Creates a maze with every wall standing and no cell visited.
    ///
    /// Returns [`MazeError::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Maze {
            cells: Grid::from_fn(width, height, Cell::new),
        })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.cells.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.cells.width()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order; position `i` is the cell at `(i % width, i / width)`.
    pub fn cells(&self) -> &[Cell] {
        self.cells.as_slice()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        self.cells.is_in_bounds(coord)
    }

    /// Arena index of `(x, y)`, or `None` for negative or overflowing coordinates.
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let coord = (u16::try_from(x).ok()?, u16::try_from(y).ok()?);
        self.is_in_bounds(coord)
            .then(|| self.cells.ravel_index(coord))
    }

    /// Cell at `(x, y)`, or `None` for negative or overflowing coordinates.
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|idx| &self.cells.as_slice()[idx])
    }

    pub(crate) fn ravel_index(&self, coord: (u16, u16)) -> usize {
        self.cells.ravel_index(coord)
    }

    pub(crate) fn unravel_index(&self, index: usize) -> (u16, u16) {
        self.cells.unravel_index(index)
    }

    /// Whether the wall on the `direction` side of `coord` is standing.
    ///
    /// Panics if `coord` is out of bounds.
    pub fn has_wall(&self, coord: (u16, u16), direction: Direction) -> bool {
        self.cells[coord].has_wall(direction)
    }

    /// Grid-adjacent cells of `coord` in up, right, down, left order, ignoring walls.
    pub fn neighbors_by_position(
        &self,
        coord: (u16, u16),
    ) -> impl Iterator<Item = (u16, u16)> + '_ {
        let in_bounds = self.is_in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| in_bounds)
            .filter_map(move |dir| dir.step(coord))
            .filter(move |&c| self.is_in_bounds(c))
    }

    /// Grid-adjacent cells of `coord` reachable through a removed wall, in up, right,
    /// down, left order.
    ///
    /// Both sides of the shared edge are checked, so a half-removed wall never counts
    /// as a passage.
    pub fn open_neighbors(&self, coord: (u16, u16)) -> impl Iterator<Item = (u16, u16)> + '_ {
        let in_bounds = self.is_in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| in_bounds)
            .filter_map(move |dir| {
                let next = dir.step(coord).filter(|&c| self.is_in_bounds(c))?;
                let open = !self.cells[coord].has_wall(dir)
                    && !self.cells[next].has_wall(dir.opposite());
                open.then_some(next)
            })
    }

    /// Removes the wall pair on the edge shared by `a` and `b`.
    ///
    /// Returns `Ok(true)` if a wall was removed and `Ok(false)` if the edge was already
    /// open. Fails with [`MazeError::NotAdjacent`] without touching the maze if either
    /// cell is out of bounds or the two are not exactly one orthogonal step apart.
    pub fn remove_wall_between(&mut self, a: (u16, u16), b: (u16, u16)) -> Result<bool, MazeError> {
        let direction = Direction::between(a, b)
            .filter(|_| self.is_in_bounds(a) && self.is_in_bounds(b))
            .ok_or(MazeError::NotAdjacent { from: a, to: b })?;
        let (cell_a, cell_b) = self.cells.pair_mut(a, b);
        let removed = cell_a.has_wall(direction) || cell_b.has_wall(direction.opposite());
        cell_a.clear_wall(direction);
        cell_b.clear_wall(direction.opposite());
        Ok(removed)
    }

    /// Number of edges whose wall pair has been removed.
    pub fn passage_count(&self) -> usize {
        (0..self.height())
            .flat_map(|y| (0..self.width()).map(move |x| (x, y)))
            .map(|coord| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter_map(|dir| dir.step(coord))
                    .filter(|&next| self.open_neighbors(coord).any(|c| c == next))
                    .count()
            })
            .sum()
    }

    pub(crate) fn mark_visited(&mut self, coord: (u16, u16)) {
        self.cells[coord].visited = true;
    }

    pub(crate) fn is_visited(&self, coord: (u16, u16)) -> bool {
        self.cells[coord].visited
    }
}

impl std::ops::Index<(u16, u16)> for Maze {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.cells[index]
    }
}
