use thiserror::Error;

/// Errors raised by maze construction, wall carving and solving.
///
/// An unreachable goal is not an error: solvers report it as an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: u16, height: u16 },
    #[error("endpoint ({x}, {y}) lies outside the maze")]
    InvalidEndpoint { x: u16, y: u16 },
    #[error("cells {from:?} and {to:?} are not orthogonally adjacent")]
    NotAdjacent { from: (u16, u16), to: (u16, u16) },
}
