use super::*;
use crate::model::{Direction, Transition};

impl<'c> QuizSession<'c> {
    /// Moves the cursor one step, clamped to the working set. Works in any phase.
    pub fn advance(&mut self, direction: Direction) -> Transition {
        let Some(last) = self.working_set.len().checked_sub(1) else {
            return Transition::Ignored;
        };
        let target = match direction {
            Direction::Prev => self.cursor.saturating_sub(1),
            Direction::Next => (self.cursor + 1).min(last),
        };
        if target == self.cursor {
            return Transition::Ignored;
        }
        self.cursor = target;
        Transition::Applied
    }

    pub fn go_prev(&mut self) -> Transition {
        self.advance(Direction::Prev)
    }

    pub fn go_next(&mut self) -> Transition {
        self.advance(Direction::Next)
    }

    pub fn can_go_prev(&self) -> bool {
        !self.working_set.is_empty() && self.cursor > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.cursor + 1 < self.working_set.len()
    }
}
