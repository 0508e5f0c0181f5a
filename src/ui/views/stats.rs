use crate::QuizApp;
use egui::{RichText, Ui};

pub fn ui_stats(app: &mut QuizApp, ui: &mut Ui) {
    let stats = app.stats_vm();

    ui.add_space(8.0);
    ui.label("📊 Quiz Stats");
    ui.label(RichText::new(stats.score()).size(28.0).strong());
    ui.label(RichText::new("Correct · total").weak());
    ui.add_space(6.0);
    ui.label(format!("Mode: {}", stats.mode));
    ui.label(format!("Filters: {}", stats.filters));

    if stats.finished {
        ui.add_space(10.0);
        ui.label(RichText::new("Exam finished!").strong());
    }
}
