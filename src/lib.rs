use std::ops::Index;

use arrayvec::ArrayVec;

mod fmt;
mod parse;
pub mod route;
pub mod solve;

pub use parse::ParseError;
pub use route::{Route, Step};

/// A cell coordinate, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Open,
    Rock,
    Start,
    Finish,
}

impl Cell {
    pub fn from_char(ch: char) -> Self {
        match ch {
            '0' => Self::Rock,
            'S' => Self::Start,
            'F' => Self::Finish,
            _ => Self::Open,
        }
    }

    /// Only rocks stop a slide. Start and finish are passed over.
    pub fn is_blocking(self) -> bool {
        self == Self::Rock
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order of the search. When several routes have the same
    /// number of slides, the one discovered first in this order is returned.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn delta(self) -> (isize, isize) {
        const DELTAS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        DELTAS[self as usize]
    }

    /// Direction of a straight move, comparing rows before columns.
    pub fn between(from: Pos, to: Pos) -> Option<Self> {
        Some(if from.row < to.row {
            Self::Down
        } else if from.row > to.row {
            Self::Up
        } else if from.col < to.col {
            Self::Right
        } else if from.col > to.col {
            Self::Left
        } else {
            return None;
        })
    }
}

/// An immutable rectangular maze with its start and finish located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    height: usize,
    width: usize,
    grid: Box<[Cell]>,
    start: Pos,
    finish: Pos,
}

impl Index<Pos> for Maze {
    type Output = Cell;
    fn index(&self, pos: Pos) -> &Self::Output {
        assert!(pos.col < self.width, "column {} out of bound", pos.col);
        &self.grid[pos.row * self.width + pos.col]
    }
}

impl Maze {
    /// Builds a maze from row-major cells. `grid.len()` must be a multiple of `width`.
    fn new(width: usize, grid: Box<[Cell]>) -> Result<Self, ParseError> {
        if grid.is_empty() {
            return Err(ParseError::Empty);
        }
        let height = grid.len() / width;
        let mut maze = Self {
            height,
            width,
            grid,
            start: Pos::new(0, 0),
            finish: Pos::new(0, 0),
        };
        maze.start = maze
            .position_of(Cell::Start)
            .ok_or(ParseError::MissingLandmark(Cell::Start))?;
        maze.finish = maze
            .position_of(Cell::Finish)
            .ok_or(ParseError::MissingLandmark(Cell::Finish))?;
        Ok(maze)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn finish(&self) -> Pos {
        self.finish
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        (pos.row < self.height && pos.col < self.width).then(|| self[pos])
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let idx_iter = std::iter::successors(Some(Pos::new(0, 0)), |&Pos { row, col }| {
            Some(if col + 1 < self.width {
                Pos::new(row, col + 1)
            } else {
                Pos::new(row + 1, 0)
            })
        });
        idx_iter.zip(self.grid.iter().copied())
    }

    /// The first position holding `cell`, in row-major order.
    pub fn position_of(&self, cell: Cell) -> Option<Pos> {
        self.cells().find(|&(_, c)| c == cell).map(|(pos, _)| pos)
    }

    fn sibling_pos(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let (drow, dcol) = dir.delta();
        let row = pos.row.checked_add_signed(drow)?;
        let col = pos.col.checked_add_signed(dcol)?;
        if self.height <= row || self.width <= col {
            return None;
        }
        Some(Pos::new(row, col))
    }

    /// Where a slide from `from` towards `dir` comes to rest.
    ///
    /// Returns `from` itself when the first step is already blocked.
    pub fn slide(&self, from: Pos, dir: Direction) -> Pos {
        let mut pos = from;
        while let Some(next) = self
            .sibling_pos(pos, dir)
            .filter(|&next| !self[next].is_blocking())
        {
            pos = next;
        }
        pos
    }

    /// Slide results from `from` in all directions, following [`Direction::ALL`].
    pub fn slides(&self, from: Pos) -> ArrayVec<(Direction, Pos), 4> {
        Direction::ALL
            .into_iter()
            .map(|dir| (dir, self.slide(from, dir)))
            .collect()
    }
}
