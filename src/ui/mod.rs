mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, stats_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Countdown: one tick per elapsed second, repaint on the next boundary
        let now = ctx.input(|i| i.time);
        if let Some(wait) = self.drive_timer(now) {
            ctx.request_repaint_after(wait);
        }

        // HEADER: filters and modes
        top_panel(self, ctx);

        // BOTTOM PANEL: dark / light theme
        bottom_panel(ctx);

        stats_panel(self, ctx);

        views::quiz::ui_quiz(self, ctx);
    }
}
