use super::Direction;

/// A single maze cell: its position, its four walls and the generator's visited mark.
///
/// Walls are stored per side (`top`, `right`, `bottom`, `left` in [`Direction`] order).
/// The owning [`Maze`](super::Maze) keeps the two sides of every shared edge in sync,
/// so cells only expose read access to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: u16,
    y: u16,
    walls: [bool; 4],
    pub(crate) visited: bool,
}

impl Cell {
    /// A fully walled, unvisited cell at `(x, y)`.
    pub fn new(x: u16, y: u16) -> Self {
        Cell {
            x,
            y,
            walls: [true; 4],
            visited: false,
        }
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    pub fn coord(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.wall_index()]
    }

    /// Whether the generator has already carved into this cell.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Number of walls still standing around this cell.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    pub(crate) fn clear_wall(&mut self, direction: Direction) {
        self.walls[direction.wall_index()] = false;
    }
}
