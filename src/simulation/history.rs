use super::board::Board;

/// What a generation matched in the history
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    /// Same as the previous generation
    FixedPoint,
    /// Same as the generation before that
    PeriodTwo,
}

/// The two most recent board states, held as independent copies.
#[derive(Clone, Debug)]
pub struct History {
    previous: Board,
    before_previous: Board,
}

impl History {
    /// Start with both slots holding copies of `initial`
    pub fn new(initial: &Board) -> Self {
        Self {
            previous: initial.clone(),
            before_previous: initial.clone(),
        }
    }

    /// Compare `board` against both slots, most recent first
    pub fn check(&self, board: &Board) -> Option<Repeat> {
        if *board == self.previous {
            Some(Repeat::FixedPoint)
        } else if *board == self.before_previous {
            Some(Repeat::PeriodTwo)
        } else {
            None
        }
    }

    /// Drop the oldest slot and record a copy of `board`
    pub fn push(&mut self, board: &Board) {
        self.before_previous = std::mem::replace(&mut self.previous, board.clone());
    }
}
