use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::{Cell, Maze};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No rows at all.
    Empty,
    /// A row whose length differs from the first row. `line` is 1-indexed.
    WidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// No `S` or no `F` in the maze.
    MissingLandmark(Cell),
}

impl ParseError {
    /// Whether the grid itself is malformed, as opposed to missing a landmark.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Empty | Self::WidthMismatch { .. })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty maze"),
            Self::WidthMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "Width mismatch at line {line}, expecting width {expected}, found {found}"
            ),
            Self::MissingLandmark(Cell::Start) => write!(f, "Missing start 'S'"),
            Self::MissingLandmark(Cell::Finish) => write!(f, "Missing finish 'F'"),
            Self::MissingLandmark(cell) => write!(f, "Missing {cell:?}"),
        }
    }
}

impl Error for ParseError {}

impl FromStr for Maze {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().collect::<Vec<_>>();
        while lines.last().map_or(false, |line| line.is_empty()) {
            lines.pop();
        }

        let Some(first) = lines.first() else {
            return Err(ParseError::Empty);
        };
        let width = first.chars().count();

        let mut grid = Vec::with_capacity(width * lines.len());
        for (line, i) in lines.iter().zip(1..) {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::WidthMismatch {
                    line: i,
                    expected: width,
                    found,
                });
            }
            grid.extend(line.chars().map(Cell::from_char));
        }

        Maze::new(width, grid.into())
    }
}
