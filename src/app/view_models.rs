use super::*;
use crate::model::Question;
use crate::session::timer::format_clock;
use crate::view_models::{OptionStatus, OptionVm, ProgressVm, QuestionCardVm, StatsVm, TimerVm};

/// Remaining seconds at which the countdown is drawn as a warning.
const TIMER_WARNING_SECONDS: u32 = 15;

impl QuizApp {
    pub fn question_card(&self) -> Option<QuestionCardVm> {
        let q: &Question = self.session.current_question()?;
        let chosen = self.session.response(q.id);
        let revealed = self.session.is_revealed(q.id);
        let enabled = !self.session.is_finished();

        let options = q
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let index = i as u8;
                OptionVm {
                    index,
                    label: Question::option_label(i),
                    text: text.clone(),
                    status: OptionStatus::for_option(index, chosen, q.correct_index, revealed),
                    enabled,
                }
            })
            .collect();

        Some(QuestionCardVm {
            id: q.id,
            header: format!("{} · {} · {}", q.topic, q.difficulty, q.lecture),
            prompt: q.prompt.clone(),
            options,
            verdict: revealed.then(|| chosen == Some(q.correct_index)),
            explanation: revealed.then(|| q.explanation.clone()),
            position: format!(
                "Question {} of {}",
                self.session.cursor().map_or(0, |c| c + 1),
                self.session.len()
            ),
        })
    }

    pub fn progress_vm(&self) -> ProgressVm {
        ProgressVm {
            fraction: self.session.progress_fraction(),
            label: format!(
                "{}/{} answered",
                self.session.answered_count(),
                self.session.len()
            ),
        }
    }

    /// Shown while the countdown runs, and frozen once a timed run finished.
    pub fn timer_vm(&self) -> Option<TimerVm> {
        let frozen = self.session.is_finished() && self.session.timer_total_seconds() > 0;
        if !self.session.is_timer_armed() && !frozen {
            return None;
        }
        let remaining = self.session.timer_remaining_seconds();
        Some(TimerVm {
            text: format!("Time left: {}", format_clock(remaining)),
            warning: remaining <= TIMER_WARNING_SECONDS,
        })
    }

    pub fn stats_vm(&self) -> StatsVm {
        StatsVm {
            correct: self.session.correct_count(),
            total: self.session.len(),
            mode: self.session.feedback_mode().label(),
            filters: self.filters_label(),
            finished: self.session.is_finished(),
        }
    }

    /// "All, All" / "PSK, hard"
    pub fn filters_label(&self) -> String {
        format!(
            "{}, {}",
            self.session.filter_topic(),
            self.session.filter_difficulty()
        )
    }
}
