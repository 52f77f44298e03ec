use std::fmt;

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Enumeration order used by every neighbor query: up, right, down, left.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Coordinate delta `(dx, dy)` of one step in this direction. `y` grows downwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Slot of this side in a cell's wall array.
    pub(crate) fn wall_index(self) -> usize {
        self as usize
    }

    /// The side of `from` facing `to`, if the two are exactly one orthogonal step apart.
    pub fn between(from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        let dx = to.0 as i32 - from.0 as i32;
        let dy = to.1 as i32 - from.1 as i32;
        Direction::ALL
            .into_iter()
            .find(|dir| dir.offset() == (dx, dy))
    }

    /// Step from `coord` in this direction, or `None` on `u16` underflow/overflow.
    /// Bounds against the maze size are checked by the caller.
    pub fn step(self, coord: (u16, u16)) -> Option<(u16, u16)> {
        let (x, y) = coord;
        match self {
            Direction::Up => Some((x, y.checked_sub(1)?)),
            Direction::Right => Some((x.checked_add(1)?, y)),
            Direction::Down => Some((x, y.checked_add(1)?)),
            Direction::Left => Some((x.checked_sub(1)?, y)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        write!(f, "{}", name)
    }
}
