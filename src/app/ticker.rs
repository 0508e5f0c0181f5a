use std::time::Duration;

use super::*;

/// Turns a monotonic clock (seconds as `f64`, e.g. egui's `input.time`) into
/// whole elapsed seconds. Sub-second remainders carry over to the next poll.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SecondTicker {
    anchor: Option<f64>,
}

impl SecondTicker {
    /// Forget the anchor; the next poll starts counting from scratch.
    pub fn reset(&mut self) {
        self.anchor = None;
    }

    pub fn poll(&mut self, now: f64) -> u32 {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(now);
            return 0;
        };
        let elapsed = (now - anchor).max(0.0).floor();
        if elapsed >= 1.0 {
            self.anchor = Some(anchor + elapsed);
        }
        elapsed as u32
    }

    /// Time left until the next whole second, for repaint scheduling.
    pub fn until_next(&self, now: f64) -> Duration {
        let since = self.anchor.map_or(0.0, |anchor| (now - anchor).max(0.0));
        Duration::from_secs_f64((1.0 - since.fract()).clamp(0.01, 1.0))
    }
}

impl QuizApp {
    /// Feeds elapsed seconds into the session countdown. Returns when the
    /// next repaint is needed while a countdown is armed, `None` otherwise.
    pub fn drive_timer(&mut self, now: f64) -> Option<Duration> {
        if !self.session.is_timer_armed() {
            self.ticker.reset();
            return None;
        }
        for _ in 0..self.ticker.poll(now) {
            self.session.tick();
            if !self.session.is_timer_armed() {
                break;
            }
        }
        if self.session.is_timer_armed() {
            Some(self.ticker.until_next(now))
        } else {
            self.ticker.reset();
            if self.session.is_finished() {
                self.message = "⏰ Time is up!".into();
            }
            None
        }
    }
}
