use std::fmt;

use crate::{Cell, Direction, Maze, Pos, Route, Step};

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, cell) in self.cells() {
            if pos.col == 0 && pos.row != 0 {
                f.write_str("\n")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Open => f.write_str("."),
            Cell::Rock => f.write_str("0"),
            Cell::Start => f.write_str("S"),
            Cell::Finish => f.write_str("F"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

// Shown 1-indexed, column first.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col + 1, self.row + 1)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Start(pos) => write!(f, "Start at {pos}"),
            Step::Move(Some(dir), pos) => write!(f, "Move {dir} to {pos}"),
            Step::Move(None, pos) => write!(f, "Move  to {pos}"),
            Step::Done => f.write_str("Done!"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (step, i) in self.steps().zip(1..) {
            writeln!(f, "{i}. {step}")?;
        }
        Ok(())
    }
}
