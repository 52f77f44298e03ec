use std::{fmt, path::PathBuf, str::FromStr};

use clap::Parser;
use thiserror::Error;

use crate::solvers::Solver;

/// A `WIDTHxHEIGHT` pair given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid size '{0}' (expected WIDTHxHEIGHT, e.g. 20x10)")]
pub struct InvalidSize(pub String);

impl FromStr for Size {
    type Err = InvalidSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSize(s.to_string());
        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        Ok(Size {
            width: width.parse().map_err(|_| invalid())?,
            height: height.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Parser, Debug)]
#[command(version, about, name = "mazepath")]
struct Args {
    #[arg(help = "Maze width in cells", requires = "height")]
    width: Option<u16>,
    #[arg(help = "Maze height in cells")]
    height: Option<u16>,
    #[arg(long, help = "Seed for maze generation")]
    seed: Option<u64>,
    #[arg(long = "solver", help = "Solver to run: bfs, dfs, dijkstra or astar (repeatable)")]
    solvers: Vec<Solver>,
    #[arg(long = "resize", help = "Regenerate at WIDTHxHEIGHT and solve again (repeatable)")]
    resizes: Vec<Size>,
    #[arg(long = "visited", help = "Also draw the cells each solver expanded")]
    show_visited: bool,
    #[arg(long, help = "Directory for the log file")]
    log_dir: Option<PathBuf>,
    #[arg(short, long, help = "Log at debug level")]
    verbose: bool,
}

/// Settings for the terminal viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maze width in cells
    pub width: u16,
    /// Maze height in cells
    pub height: u16,
    /// Seed for the generator; a fresh OS seed is used if absent
    pub seed: Option<u64>,
    /// Solvers to run, in order
    pub solvers: Vec<Solver>,
    /// Sizes to regenerate at after the first maze, in order
    pub resizes: Vec<Size>,
    /// Whether to overlay the expanded cells, not just the path
    pub show_visited: bool,
    /// Directory the log file is written to
    pub log_dir: PathBuf,
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
            seed: None,
            solvers: Solver::ALL.to_vec(),
            resizes: Vec::new(),
            show_visited: false,
            log_dir: PathBuf::from("logs"),
            log_level: tracing::Level::INFO,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let default = Config::default();
        Config {
            width: args.width.unwrap_or(default.width),
            height: args.height.unwrap_or(default.height),
            seed: args.seed,
            solvers: if args.solvers.is_empty() {
                default.solvers
            } else {
                args.solvers
            },
            resizes: args.resizes,
            show_visited: args.show_visited,
            log_dir: args.log_dir.unwrap_or(default.log_dir),
            log_level: if args.verbose {
                tracing::Level::DEBUG
            } else {
                default.log_level
            },
        }
    }
}

impl Config {
    /// Parses the process arguments, exiting with usage on error.
    pub fn parse() -> Self {
        Args::parse().into()
    }

    /// Parses an argument list whose first item is the executable name.
    ///
    /// Dimensions are taken as given, zero included; rejecting them is up to maze
    /// generation. Without any `--solver`, all four run.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Args::try_parse_from(args).map(Config::from)
    }
}
