use super::*;
use crate::model::{FeedbackMode, Transition};

impl<'c> QuizSession<'c> {
    /// Ends an exam run and reveals every question in the working set.
    pub fn submit(&mut self) -> Transition {
        if !self.started || self.finished {
            return Transition::Ignored;
        }
        if self.feedback_mode() != FeedbackMode::Deferred {
            log::debug!("submit ignored in practice mode");
            return Transition::Ignored;
        }
        self.finish_run();
        log::debug!(
            "exam submitted: {}/{} correct",
            self.correct_count(),
            self.working_set.len()
        );
        Transition::Applied
    }

    /// Running -> Finished: freezes answers, reveals everything, tears the
    /// countdown down.
    pub(crate) fn finish_run(&mut self) {
        self.finished = true;
        self.countdown.disarm();
        self.revealed = self.working_set.iter().map(|q| q.id).collect();
    }
}
