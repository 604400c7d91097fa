use crate::solve::Parents;
use crate::{Direction, Pos};

/// Resting positions from start to finish inclusive, one slide apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    positions: Vec<Pos>,
}

/// One line of the rendered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Start(Pos),
    /// `None` only if two consecutive positions coincide.
    Move(Option<Direction>, Pos),
    Done,
}

impl Route {
    /// Walks `parents` back from `finish` to the root and reverses the walk.
    pub fn reconstruct(parents: &Parents, start: Pos, finish: Pos) -> Self {
        let mut positions = std::iter::successors(Some(finish), |pos| {
            parents.get(pos).copied().flatten()
        })
        .collect::<Vec<_>>();
        positions.reverse();
        debug_assert_eq!(positions.first(), Some(&start), "Route must begin at the root");
        Self { positions }
    }

    pub fn positions(&self) -> &[Pos] {
        &self.positions
    }

    pub fn start(&self) -> Pos {
        self.positions[0]
    }

    pub fn finish(&self) -> Pos {
        self.positions[self.positions.len() - 1]
    }

    pub fn slide_count(&self) -> usize {
        self.positions.len() - 1
    }

    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        let moves = self
            .positions
            .windows(2)
            .map(|w| Step::Move(Direction::between(w[0], w[1]), w[1]));
        std::iter::once(Step::Start(self.start()))
            .chain(moves)
            .chain(std::iter::once(Step::Done))
    }

    /// Numbered step lines, e.g. `2. Move right to (4, 1)`.
    pub fn lines(&self) -> Vec<String> {
        self.steps()
            .zip(1..)
            .map(|(step, i)| format!("{i}. {step}"))
            .collect()
    }
}
