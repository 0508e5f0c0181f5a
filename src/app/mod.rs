use crate::config::QuizConfig;
use crate::data::Catalog;
use crate::session::QuizSession;

// Submodules
pub mod actions;
pub mod exports;
pub mod ticker;
pub mod view_models;

pub use ticker::SecondTicker;

/// Window title, also used for the web page.
pub const APP_TITLE: &str = "FCWMC: Intensive Interactive MCQ Quiz";

/// The egui application: one quiz session plus the bits of UI state the
/// session does not own.
pub struct QuizApp {
    pub session: QuizSession<'static>,
    pub config: QuizConfig,
    pub ticker: SecondTicker,
    pub timer_minutes: u32,
    pub message: String,
}

impl QuizApp {
    pub fn new(config: QuizConfig) -> Self {
        let session = QuizSession::with_settings(Catalog::embedded(), config.session_settings());
        Self::with_session(session, config)
    }

    pub fn with_session(session: QuizSession<'static>, config: QuizConfig) -> Self {
        let timer_minutes = config.timer_minutes;
        Self {
            session,
            config,
            ticker: SecondTicker::default(),
            timer_minutes,
            message: String::new(),
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new(QuizConfig::default())
    }
}
