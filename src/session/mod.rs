//! Quiz session state machine.
//!
//! `QuizSession` owns everything that changes while a quiz is taken: the
//! filtered (and optionally shuffled) working set, the cursor, the chosen
//! options, which questions are revealed, and the countdown. It never renders
//! anything; the egui layer reads it through the query methods and feeds user
//! intents back through the transition methods.

use crate::data::Catalog;
use crate::model::{DifficultyFilter, Question, TopicFilter};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashMap, HashSet};

// Submodules
pub mod actions;
pub mod completion;
pub mod filters;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod timer;

pub use timer::{Countdown, CountdownTick};

/// Initial toggles for a new session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub shuffle: bool,
    pub exam_mode: bool,
    pub timer_seconds: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            shuffle: true,
            exam_mode: false,
            timer_seconds: 0,
        }
    }
}

pub struct QuizSession<'c> {
    catalog: &'c Catalog,
    rng: StdRng,
    filter_topic: TopicFilter,
    filter_difficulty: DifficultyFilter,
    shuffle_enabled: bool,
    exam_mode: bool,
    working_set: Vec<&'c Question>,
    cursor: usize,
    responses: HashMap<u32, u8>,
    revealed: HashSet<u32>,
    started: bool,
    finished: bool,
    countdown: Countdown,
}

impl<'c> QuizSession<'c> {
    /// Session over `catalog` with default settings and OS-seeded randomness.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_settings(catalog, SessionSettings::default())
    }

    pub fn with_settings(catalog: &'c Catalog, settings: SessionSettings) -> Self {
        Self::with_rng(catalog, settings, StdRng::from_os_rng())
    }

    /// Same as `with_settings` but with a caller-provided random source,
    /// which makes shuffles reproducible.
    pub fn with_rng(catalog: &'c Catalog, settings: SessionSettings, rng: StdRng) -> Self {
        let mut session = Self {
            catalog,
            rng,
            filter_topic: TopicFilter::All,
            filter_difficulty: DifficultyFilter::All,
            shuffle_enabled: settings.shuffle,
            exam_mode: settings.exam_mode,
            working_set: Vec::new(),
            cursor: 0,
            responses: HashMap::new(),
            revealed: HashSet::new(),
            started: false,
            finished: false,
            countdown: Countdown::new(settings.timer_seconds),
        };
        session.rebuild_working_set();
        session
    }
}

impl std::fmt::Debug for QuizSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("filter_topic", &self.filter_topic)
            .field("filter_difficulty", &self.filter_difficulty)
            .field("shuffle_enabled", &self.shuffle_enabled)
            .field("exam_mode", &self.exam_mode)
            .field("working_set", &self.working_set.len())
            .field("cursor", &self.cursor)
            .field("answered", &self.responses.len())
            .field("started", &self.started)
            .field("finished", &self.finished)
            .field("countdown", &self.countdown)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::data::tests::question;
    use crate::model::{Difficulty, Topic};

    /// Six questions: ids 1..=6, two topics, mixed difficulties.
    pub(crate) fn small_catalog() -> Catalog {
        Catalog::new(vec![
            question(1, Topic::Psk, Difficulty::Easy, 1),
            question(2, Topic::Psk, Difficulty::Medium, 1),
            question(3, Topic::Psk, Difficulty::Hard, 0),
            question(4, Topic::Qam, Difficulty::Easy, 3),
            question(5, Topic::Qam, Difficulty::Medium, 2),
            question(6, Topic::Qam, Difficulty::Hard, 0),
        ])
        .expect("valid test catalog")
    }

    pub(crate) fn ordered(catalog: &Catalog, exam_mode: bool, timer_seconds: u32) -> QuizSession<'_> {
        QuizSession::with_rng(
            catalog,
            SessionSettings {
                shuffle: false,
                exam_mode,
                timer_seconds,
            },
            StdRng::seed_from_u64(7),
        )
    }
}
