use super::*;
use crate::error::SessionError;
use crate::model::{FeedbackMode, OPTION_COUNT, Transition};

impl<'c> QuizSession<'c> {
    /// NotStarted -> Running. Arms the countdown when a duration is configured.
    pub fn start(&mut self) -> Transition {
        if self.started {
            return Transition::Ignored;
        }
        self.started = true;
        self.sync_countdown();
        log::debug!(
            "session started: {} questions, {} mode, timer {}s",
            self.working_set.len(),
            self.feedback_mode().label(),
            self.countdown.total_seconds()
        );
        Transition::Applied
    }

    /// Records `option` as the answer for `question_id`. In practice mode the
    /// question is revealed right away.
    pub fn select_option(&mut self, question_id: u32, option: u8) -> Result<Transition, SessionError> {
        if usize::from(option) >= OPTION_COUNT {
            return Err(SessionError::OptionOutOfRange { index: option });
        }
        self.ensure_in_working_set(question_id)?;
        if self.finished {
            log::debug!("answer for question {question_id} ignored, session finished");
            return Ok(Transition::Ignored);
        }

        self.responses.insert(question_id, option);
        if self.feedback_mode() == FeedbackMode::Instant {
            self.revealed.insert(question_id);
        }
        Ok(Transition::Applied)
    }

    /// Shows answer and explanation without requiring an answer. Practice mode only.
    pub fn reveal(&mut self, question_id: u32) -> Result<Transition, SessionError> {
        self.ensure_in_working_set(question_id)?;
        if self.feedback_mode() == FeedbackMode::Deferred || self.finished {
            return Ok(Transition::Ignored);
        }
        self.revealed.insert(question_id);
        Ok(Transition::Applied)
    }

    fn ensure_in_working_set(&self, question_id: u32) -> Result<(), SessionError> {
        if self.working_set.iter().any(|q| q.id == question_id) {
            Ok(())
        } else {
            Err(SessionError::NotInWorkingSet(question_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{ordered, small_catalog};
    use super::*;

    #[test]
    fn practice_mode_reveals_on_answer() {
        let catalog = small_catalog();
        let mut session = ordered(&catalog, false, 0);
        session.start();
        assert!(session.select_option(3, 2).unwrap().is_applied());
        assert_eq!(session.response(3), Some(2));
        assert!(session.is_revealed(3));
        assert!(!session.is_revealed(4));
    }

    #[test]
    fn exam_mode_defers_reveal_until_submit() {
        let catalog = small_catalog();
        let mut session = ordered(&catalog, true, 0);
        session.start();
        session.select_option(3, 2).unwrap();
        session.select_option(4, 3).unwrap();
        assert!(session.revealed_ids().is_empty());

        assert!(session.submit().is_applied());
        let revealed = session.revealed_ids();
        assert_eq!(revealed.len(), 6);
        assert!((1..=6).all(|id| revealed.contains(&id)));
    }

    #[test]
    fn answers_can_change_until_finished() {
        let catalog = small_catalog();
        let mut session = ordered(&catalog, true, 0);
        session.start();
        session.select_option(1, 0).unwrap();
        session.select_option(1, 1).unwrap();
        assert_eq!(session.response(1), Some(1));

        session.submit();
        assert_eq!(session.select_option(1, 3), Ok(Transition::Ignored));
        assert_eq!(session.response(1), Some(1));
    }

    #[test]
    fn out_of_range_option_is_rejected_and_not_stored() {
        let catalog = small_catalog();
        let mut session = ordered(&catalog, false, 0);
        assert_eq!(
            session.select_option(1, 4),
            Err(SessionError::OptionOutOfRange { index: 4 })
        );
        assert_eq!(session.response(1), None);
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn unknown_question_is_rejected() {
        let catalog = small_catalog();
        let mut session = ordered(&catalog, false, 0);
        assert_eq!(
            session.select_option(99, 0),
            Err(SessionError::NotInWorkingSet(99))
        );
        session.only_topic(crate::model::Topic::Qam);
        assert_eq!(session.reveal(1), Err(SessionError::NotInWorkingSet(1)));
    }

    #[test]
    fn manual_reveal_only_in_practice_mode() {
        let catalog = small_catalog();
        let mut practice = ordered(&catalog, false, 0);
        assert!(practice.reveal(5).unwrap().is_applied());
        assert!(practice.is_revealed(5));
        assert_eq!(practice.response(5), None);

        let mut exam = ordered(&catalog, true, 0);
        assert_eq!(exam.reveal(5), Ok(Transition::Ignored));
        assert!(!exam.is_revealed(5));
    }

    #[test]
    fn start_arms_the_timer_only_with_a_duration() {
        let catalog = small_catalog();
        let mut untimed = ordered(&catalog, false, 0);
        untimed.start();
        assert!(!untimed.is_timer_armed());

        let mut timed = ordered(&catalog, false, 30);
        assert!(timed.start().is_applied());
        assert!(timed.is_timer_armed());
        assert_eq!(timed.timer_remaining_seconds(), 30);
        assert_eq!(timed.start(), Transition::Ignored);
    }
}
