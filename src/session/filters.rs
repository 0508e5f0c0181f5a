use super::*;
use crate::model::{Difficulty, Filter, Topic, Transition};
use crate::shuffle::shuffled;

impl<'c> QuizSession<'c> {
    /// Changes both filters at once. Recomputes the working set and clears
    /// progress when either value actually changes.
    pub fn set_filters(&mut self, topic: TopicFilter, difficulty: DifficultyFilter) -> Transition {
        if topic == self.filter_topic && difficulty == self.filter_difficulty {
            return Transition::Ignored;
        }
        self.filter_topic = topic;
        self.filter_difficulty = difficulty;
        self.rebuild_working_set();
        log::debug!(
            "filters set to {topic} / {difficulty}: {} questions",
            self.working_set.len()
        );
        Transition::Applied
    }

    pub fn set_topic(&mut self, topic: TopicFilter) -> Transition {
        self.set_filters(topic, self.filter_difficulty)
    }

    pub fn set_difficulty(&mut self, difficulty: DifficultyFilter) -> Transition {
        self.set_filters(self.filter_topic, difficulty)
    }

    pub fn only_topic(&mut self, topic: Topic) -> Transition {
        self.set_topic(Filter::Only(topic))
    }

    pub fn only_difficulty(&mut self, difficulty: Difficulty) -> Transition {
        self.set_difficulty(Filter::Only(difficulty))
    }

    pub fn set_shuffle(&mut self, enabled: bool) -> Transition {
        if enabled == self.shuffle_enabled {
            return Transition::Ignored;
        }
        self.shuffle_enabled = enabled;
        self.rebuild_working_set();
        log::debug!("shuffle {}", if enabled { "enabled" } else { "disabled" });
        Transition::Applied
    }

    /// Feedback policy is fixed for a run: only accepted before `start`.
    pub fn set_exam_mode(&mut self, exam_mode: bool) -> Transition {
        if self.started {
            log::debug!("exam mode change ignored, session already started");
            return Transition::Ignored;
        }
        if exam_mode == self.exam_mode {
            return Transition::Ignored;
        }
        self.exam_mode = exam_mode;
        Transition::Applied
    }

    /// Refilters the catalog, reshuffles if enabled and resets progress.
    /// `started` is kept and a running countdown goes on; a timed run that
    /// had already finished gets a fresh countdown.
    pub(crate) fn rebuild_working_set(&mut self) {
        let matching = self.catalog.filtered(self.filter_topic, self.filter_difficulty);
        self.working_set = if self.shuffle_enabled {
            shuffled(&matching, &mut self.rng)
        } else {
            matching
        };
        self.cursor = 0;
        self.responses.clear();
        self.revealed.clear();
        self.finished = false;
        self.sync_countdown();
    }
}
