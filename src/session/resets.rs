use super::*;
use crate::model::Transition;

impl<'c> QuizSession<'c> {
    /// Back to NotStarted. Progress is cleared; filters, shuffle and the
    /// current ordering of the working set are kept.
    pub fn reset(&mut self) -> Transition {
        self.started = false;
        self.finished = false;
        self.cursor = 0;
        self.responses.clear();
        self.revealed.clear();
        self.countdown.disarm();
        log::debug!("session reset");
        Transition::Applied
    }
}
