use super::*;
use crate::model::Transition;

/// One-second countdown owned by a session. Only counts while armed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    total_seconds: u32,
    remaining_seconds: u32,
    armed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownTick {
    Idle,
    Running(u32),
    Expired,
}

impl Countdown {
    pub fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            remaining_seconds: 0,
            armed: false,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Takes effect on the next `arm`.
    pub fn set_total_seconds(&mut self, total_seconds: u32) {
        self.total_seconds = total_seconds;
    }

    pub fn arm(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.armed = self.total_seconds > 0;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn tick(&mut self) -> CountdownTick {
        if !self.armed {
            return CountdownTick::Idle;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.armed = false;
            CountdownTick::Expired
        } else {
            CountdownTick::Running(self.remaining_seconds)
        }
    }
}

impl<'c> QuizSession<'c> {
    /// One elapsed second. Expiry finishes the run whatever the feedback mode.
    pub fn tick(&mut self) -> Transition {
        if !self.started || self.finished {
            return Transition::Ignored;
        }
        match self.countdown.tick() {
            CountdownTick::Idle => Transition::Ignored,
            CountdownTick::Running(_) => Transition::Applied,
            CountdownTick::Expired => {
                log::info!("time is up, finishing the session");
                self.finish_run();
                Transition::Applied
            }
        }
    }

    /// A new duration during a run restarts the countdown from it; 0 stops it.
    pub fn set_timer_seconds(&mut self, seconds: u32) {
        if seconds == self.countdown.total_seconds() {
            return;
        }
        self.countdown.set_total_seconds(seconds);
        self.countdown.disarm();
        self.sync_countdown();
    }

    pub fn set_timer_minutes(&mut self, minutes: u32) {
        self.set_timer_seconds(minutes.saturating_mul(60));
    }

    pub fn timer_total_seconds(&self) -> u32 {
        self.countdown.total_seconds()
    }

    pub fn timer_remaining_seconds(&self) -> u32 {
        self.countdown.remaining_seconds()
    }

    pub fn is_timer_armed(&self) -> bool {
        self.countdown.is_armed()
    }

    /// Armed exactly while a timed run is in progress. An idle countdown that
    /// should be running starts over from the full duration.
    pub(crate) fn sync_countdown(&mut self) {
        let should_run = self.started && !self.finished && self.countdown.total_seconds() > 0;
        if !should_run {
            self.countdown.disarm();
        } else if !self.countdown.is_armed() {
            self.countdown.arm();
            log::debug!("countdown armed at {}s", self.countdown.total_seconds());
        }
    }
}

/// `m:ss` rendering of a second count.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
