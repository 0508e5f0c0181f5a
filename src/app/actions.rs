use super::*;
use crate::error::SessionError;
use crate::model::{Direction, DifficultyFilter, TopicFilter};

impl QuizApp {
    pub fn start_quiz(&mut self) {
        self.session.set_timer_minutes(self.timer_minutes);
        if self.session.start().is_applied() {
            self.ticker.reset();
            self.message.clear();
        }
    }

    pub fn reset_quiz(&mut self) {
        self.session.reset();
        self.ticker.reset();
        self.message.clear();
    }

    pub fn change_topic(&mut self, topic: TopicFilter) {
        if self.session.set_topic(topic).is_applied() {
            self.message.clear();
        }
    }

    pub fn change_difficulty(&mut self, difficulty: DifficultyFilter) {
        if self.session.set_difficulty(difficulty).is_applied() {
            self.message.clear();
        }
    }

    pub fn toggle_shuffle(&mut self, enabled: bool) {
        self.session.set_shuffle(enabled);
    }

    pub fn toggle_exam_mode(&mut self, exam_mode: bool) {
        if !self.session.set_exam_mode(exam_mode).is_applied() && self.session.is_started() {
            self.message = "⚠ Reset the quiz to switch between practice and exam mode.".into();
        }
    }

    pub fn change_timer_minutes(&mut self, minutes: u32) {
        self.timer_minutes = minutes;
        self.session.set_timer_minutes(minutes);
        if self.session.is_timer_armed() {
            self.ticker.reset();
        }
    }

    /// Answer the current question with option `option`.
    pub fn choose_option(&mut self, option: u8) {
        let Some(question) = self.session.current_question() else {
            return;
        };
        let result = self.session.select_option(question.id, option);
        self.report(result.map(|_| ()));
    }

    pub fn reveal_current(&mut self) {
        let Some(question) = self.session.current_question() else {
            return;
        };
        let result = self.session.reveal(question.id);
        self.report(result.map(|_| ()));
    }

    pub fn submit_exam(&mut self) {
        if self.session.submit().is_applied() {
            self.message = format!(
                "Exam finished: {} of {} correct.",
                self.session.correct_count(),
                self.session.len()
            );
        }
    }

    pub fn previous_question(&mut self) {
        self.session.advance(Direction::Prev);
    }

    pub fn next_question(&mut self) {
        self.session.advance(Direction::Next);
    }

    fn report(&mut self, result: Result<(), SessionError>) {
        if let Err(err) = result {
            log::warn!("rejected quiz action: {err}");
            self.message = format!("⚠ {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::ordered_app;
    use crate::model::{Difficulty, Filter, Topic};

    #[test]
    fn choosing_answers_the_current_question() {
        let mut app = ordered_app(false, 0);
        app.start_quiz();
        app.choose_option(1);
        assert_eq!(app.session.response(1), Some(1));
        assert!(app.session.is_revealed(1));
        assert_eq!(app.session.correct_count(), 1);
    }

    #[test]
    fn invalid_option_surfaces_a_message() {
        let mut app = ordered_app(false, 0);
        app.start_quiz();
        app.choose_option(7);
        assert_eq!(app.session.answered_count(), 0);
        assert!(app.message.contains("out of range"));
    }

    #[test]
    fn start_uses_the_configured_minutes() {
        let mut app = ordered_app(true, 0);
        app.change_timer_minutes(3);
        app.start_quiz();
        assert!(app.session.is_timer_armed());
        assert_eq!(app.session.timer_remaining_seconds(), 180);
    }

    #[test]
    fn clearing_the_timer_mid_run_lets_the_quiz_continue() {
        let mut app = ordered_app(false, 1);
        app.start_quiz();
        app.change_timer_minutes(0);
        assert!(!app.session.is_timer_armed());
        assert!(app.timer_vm().is_none());
        for _ in 0..60 {
            app.session.tick();
        }
        assert!(!app.session.is_finished());
    }

    #[test]
    fn exam_toggle_is_refused_mid_run() {
        let mut app = ordered_app(false, 0);
        app.start_quiz();
        app.toggle_exam_mode(true);
        assert!(!app.session.exam_mode());
        assert!(!app.message.is_empty());
        app.reset_quiz();
        app.toggle_exam_mode(true);
        assert!(app.session.exam_mode());
    }

    #[test]
    fn filter_changes_go_through_the_session() {
        let mut app = ordered_app(false, 0);
        app.change_topic(Filter::Only(Topic::Bearers));
        app.change_difficulty(Filter::Only(Difficulty::Medium));
        assert!(
            app.session
                .working_set()
                .iter()
                .all(|q| q.topic == Topic::Bearers && q.difficulty == Difficulty::Medium)
        );
    }

    #[test]
    fn submit_reports_the_score() {
        let mut app = ordered_app(true, 0);
        app.start_quiz();
        app.choose_option(1);
        app.next_question();
        app.choose_option(0);
        app.submit_exam();
        assert!(app.session.is_finished());
        assert_eq!(app.message, "Exam finished: 1 of 70 correct.");
    }
}
