use egui::{RichText, Ui};

/// Instructions shown before the first Start.
pub fn ui_welcome(ui: &mut Ui) {
    ui.add_space(12.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Select filters, set the timer (optional), then press ");
        ui.label(RichText::new("Start").strong());
        ui.label(". Use ");
        ui.label(RichText::new("Exam mode").strong());
        ui.label(" for a timed mock test.");
    });
}

/// Shown after Start when the filters match nothing.
pub fn ui_empty_selection(ui: &mut Ui) {
    ui.add_space(12.0);
    ui.label("No questions for the selected filters.");
}
