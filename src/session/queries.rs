use super::*;
use crate::model::{FeedbackMode, SessionPhase};

impl<'c> QuizSession<'c> {
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn phase(&self) -> SessionPhase {
        if self.finished {
            SessionPhase::Finished
        } else if self.started {
            SessionPhase::Running
        } else {
            SessionPhase::NotStarted
        }
    }

    pub fn feedback_mode(&self) -> FeedbackMode {
        FeedbackMode::from_exam_mode(self.exam_mode)
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn exam_mode(&self) -> bool {
        self.exam_mode
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle_enabled
    }

    pub fn filter_topic(&self) -> TopicFilter {
        self.filter_topic
    }

    pub fn filter_difficulty(&self) -> DifficultyFilter {
        self.filter_difficulty
    }

    pub fn working_set(&self) -> &[&'c Question] {
        &self.working_set
    }

    pub fn len(&self) -> usize {
        self.working_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working_set.is_empty()
    }

    /// `None` when the working set is empty.
    pub fn cursor(&self) -> Option<usize> {
        (!self.working_set.is_empty()).then_some(self.cursor)
    }

    pub fn current_question(&self) -> Option<&'c Question> {
        self.working_set.get(self.cursor).copied()
    }

    pub fn response(&self, question_id: u32) -> Option<u8> {
        self.responses.get(&question_id).copied()
    }

    pub fn is_revealed(&self, question_id: u32) -> bool {
        self.revealed.contains(&question_id)
    }

    pub fn revealed_ids(&self) -> &HashSet<u32> {
        &self.revealed
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    /// Answers matching the correct option, counted over the working set only.
    pub fn correct_count(&self) -> usize {
        self.working_set
            .iter()
            .filter(|q| self.responses.get(&q.id) == Some(&q.correct_index))
            .count()
    }

    /// Answered share of the working set, 0.0 for an empty set.
    pub fn progress_fraction(&self) -> f32 {
        if self.working_set.is_empty() {
            0.0
        } else {
            self.answered_count() as f32 / self.working_set.len() as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{ordered, small_catalog};
    use super::*;
    use crate::data::tests::question;
    use crate::model::{Difficulty, Topic};

    #[test]
    fn correct_count_compares_against_the_catalog_answer() {
        let catalog = Catalog::new(vec![
            question(1, Topic::Psk, Difficulty::Easy, 1),
            question(2, Topic::Psk, Difficulty::Easy, 1),
        ])
        .unwrap();
        let mut session = ordered(&catalog, true, 0);
        session.select_option(1, 1).unwrap();
        session.select_option(2, 2).unwrap();
        assert_eq!(session.answered_count(), 2);
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn progress_fraction_tracks_answers() {
        let catalog = small_catalog();
        let mut session = ordered(&catalog, false, 0);
        assert_eq!(session.progress_fraction(), 0.0);
        session.select_option(1, 0).unwrap();
        session.select_option(2, 0).unwrap();
        session.select_option(3, 0).unwrap();
        assert!((session.progress_fraction() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn phase_follows_the_lifecycle() {
        let catalog = small_catalog();
        let mut session = ordered(&catalog, true, 0);
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        session.start();
        assert_eq!(session.phase(), SessionPhase::Running);
        session.submit();
        assert_eq!(session.phase(), SessionPhase::Finished);
        session.reset();
        assert_eq!(session.phase(), SessionPhase::NotStarted);
    }

    #[test]
    fn defaults_match_a_fresh_quiz() {
        let session = QuizSession::new(Catalog::embedded());
        assert!(session.shuffle_enabled());
        assert!(!session.exam_mode());
        assert_eq!(session.timer_total_seconds(), 0);
        assert!(!session.is_started());
        assert_eq!(session.len(), 70);
        assert_eq!(session.feedback_mode(), FeedbackMode::Instant);
    }
}
