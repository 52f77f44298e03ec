use std::{fmt, io::Write};

use crossterm::{
    QueueableCommand, queue,
    style::{self, Attribute, Color, Stylize},
    terminal,
};

use crate::{
    maze::{Direction, Maze, grid::Grid},
    solvers::Solution,
};

/// What one character slot of a rendered maze shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Empty,
    Visited,
    Path,
    Start,
    Goal,
}

impl Glyph {
    /// The width of each glyph when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Glyph::Wall => "⬜".with(Color::White),
            Glyph::Empty => "  ".with(Color::Reset),
            Glyph::Visited => "* ".with(Color::Blue),
            Glyph::Path => "🟨".with(Color::Yellow),
            Glyph::Start => "🟩".with(Color::Green),
            Glyph::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::CELL_WIDTH as usize,
                "Each glyph must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Turns a maze and an optional solution into terminal output.
///
/// `n` cells in a dimension take `2n + 1` glyphs: one per cell plus one per wall line.
pub struct Renderer {
    show_visited: bool,
}

impl Renderer {
    /// Largest maze side that fits a frame: `2n + 1` glyphs of two columns each must
    /// stay within `u16` terminal columns.
    pub const MAX_SIDE: u16 = (u16::MAX / Glyph::CELL_WIDTH - 1) / 2;

    pub fn new(show_visited: bool) -> Self {
        Self { show_visited }
    }

    /// Glyph position of a cell.
    fn cell_slot(coord: (u16, u16)) -> (u16, u16) {
        (coord.0 * 2 + 1, coord.1 * 2 + 1)
    }

    /// Glyph position of the edge between two adjacent cells.
    fn edge_slot(a: (u16, u16), b: (u16, u16)) -> (u16, u16) {
        (a.0 + b.0 + 1, a.1 + b.1 + 1)
    }

    /// Lays out the maze, overlaying the solution if there is one.
    ///
    /// Returns `None` when either side exceeds [`Renderer::MAX_SIDE`].
    pub fn frame(&self, maze: &Maze, solution: Option<&Solution>) -> Option<Grid<Glyph>> {
        if maze.width() > Self::MAX_SIDE || maze.height() > Self::MAX_SIDE {
            return None;
        }
        let mut frame = Grid::from_fn(maze.width() * 2 + 1, maze.height() * 2 + 1, |_, _| {
            Glyph::Wall
        });

        for cell in maze.cells() {
            let coord = cell.coord();
            frame[Self::cell_slot(coord)] = Glyph::Empty;
            // Only right and down, so every passage is drawn once
            for dir in [Direction::Right, Direction::Down] {
                if let Some(next) = dir.step(coord).filter(|&c| maze.is_in_bounds(c)) {
                    if maze.open_neighbors(coord).any(|c| c == next) {
                        frame[Self::edge_slot(coord, next)] = Glyph::Empty;
                    }
                }
            }
        }

        let Some(solution) = solution else {
            return Some(frame);
        };

        if self.show_visited {
            for &coord in &solution.visited {
                frame[Self::cell_slot(coord)] = Glyph::Visited;
            }
        }
        for &coord in &solution.path {
            frame[Self::cell_slot(coord)] = Glyph::Path;
        }
        for pair in solution.path.windows(2) {
            frame[Self::edge_slot(pair[0], pair[1])] = Glyph::Path;
        }
        if let (Some(&first), Some(&last)) = (solution.path.first(), solution.path.last()) {
            frame[Self::cell_slot(first)] = Glyph::Start;
            frame[Self::cell_slot(last)] = Glyph::Goal;
        }
        Some(frame)
    }

    /// Writes a frame followed by a one-line caption.
    ///
    /// A frame wider or taller than the terminal is still written, after a warning line.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        frame: &Grid<Glyph>,
        caption: &str,
    ) -> std::io::Result<()> {
        let needed = (frame.width() * Glyph::CELL_WIDTH, frame.height());
        if let Ok((term_width, term_height)) = terminal::size() {
            if term_width < needed.0 || term_height < needed.1 {
                tracing::warn!(
                    "[render] terminal {}x{} is smaller than the {}x{} frame",
                    term_width,
                    term_height,
                    needed.0,
                    needed.1
                );
                out.queue(style::PrintStyledContent(
                    format!(
                        "Terminal size ({}x{}) is too small for the maze ({}x{}); output will wrap.\r\n",
                        term_width, term_height, needed.0, needed.1
                    )
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold),
                ))?;
            }
        }

        for y in 0..frame.height() {
            for x in 0..frame.width() {
                out.queue(style::Print(frame[(x, y)]))?;
            }
            out.queue(style::Print("\r\n"))?;
        }
        queue!(
            out,
            style::PrintStyledContent(
                format!("{}\r\n", caption)
                    .with(Color::Green)
                    .attribute(Attribute::Bold)
            )
        )?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{Solver, solve_maze};

    fn corridor() -> Maze {
        let mut maze = Maze::new(2, 1).unwrap();
        maze.remove_wall_between((0, 0), (1, 0)).unwrap();
        maze
    }

    #[test]
    fn test_frame_without_solution() {
        let frame = Renderer::new(false).frame(&corridor(), None).unwrap();
        assert_eq!((frame.width(), frame.height()), (5, 3));
        let middle = (0..5).map(|x| frame[(x, 1)]).collect::<Vec<_>>();
        assert_eq!(
            middle,
            vec![Glyph::Wall, Glyph::Empty, Glyph::Empty, Glyph::Empty, Glyph::Wall]
        );
        assert!((0..5).all(|x| frame[(x, 0)] == Glyph::Wall && frame[(x, 2)] == Glyph::Wall));
    }

    #[test]
    fn test_frame_overlays_path() {
        let maze = corridor();
        let solution = solve_maze(&maze, (0, 0), (1, 0), Solver::Bfs).unwrap();
        let frame = Renderer::new(true).frame(&maze, Some(&solution)).unwrap();
        assert_eq!(frame[(1, 1)], Glyph::Start);
        assert_eq!(frame[(2, 1)], Glyph::Path);
        assert_eq!(frame[(3, 1)], Glyph::Goal);
    }

    #[test]
    fn test_frame_size_limit() {
        let renderer = Renderer::new(false);
        let widest = Maze::new(Renderer::MAX_SIDE, 1).unwrap();
        let frame = renderer.frame(&widest, None).unwrap();
        assert_eq!(frame.width(), Renderer::MAX_SIDE * 2 + 1);
        assert!(frame.width().checked_mul(Glyph::CELL_WIDTH).is_some());

        let too_wide = Maze::new(Renderer::MAX_SIDE + 1, 1).unwrap();
        assert!(renderer.frame(&too_wide, None).is_none());
        let too_tall = Maze::new(1, u16::MAX).unwrap();
        assert!(renderer.frame(&too_tall, None).is_none());
    }

    #[test]
    fn test_glyph_width() {
        for glyph in [
            Glyph::Wall,
            Glyph::Empty,
            Glyph::Visited,
            Glyph::Path,
            Glyph::Start,
            Glyph::Goal,
        ] {
            // Display asserts the width in debug builds
            assert!(!glyph.to_string().is_empty());
        }
    }
}
