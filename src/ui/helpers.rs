// src/ui/helpers.rs
use crate::view_models::{OptionStatus, OptionVm};
use egui::{Button, Color32, RichText, Stroke, TextWrapMode, Ui, Vec2};

const GREEN: Color32 = Color32::from_rgb(22, 101, 52);
const RED: Color32 = Color32::from_rgb(153, 27, 27);
const BLUE: Color32 = Color32::from_rgb(30, 64, 175);

/// Full-width answer button coloured by status. Returns true when clicked.
pub fn option_button(ui: &mut Ui, option: &OptionVm, width: f32) -> bool {
    let text = RichText::new(option.caption());
    let (text, fill) = match option.status {
        OptionStatus::Idle => (text, None),
        OptionStatus::Selected => (text.color(Color32::WHITE), Some(BLUE)),
        OptionStatus::Correct => (text.color(Color32::WHITE).strong(), Some(GREEN)),
        OptionStatus::Incorrect => (text.color(Color32::WHITE), Some(RED)),
        OptionStatus::Dimmed => (text.weak(), None),
    };

    let mut button = Button::new(text)
        .min_size(Vec2::new(width, 36.0))
        .wrap_mode(TextWrapMode::Wrap);
    if let Some(fill) = fill {
        button = button.fill(fill).stroke(Stroke::new(1.0, fill));
    }
    ui.add_enabled(option.enabled, button).clicked()
}

/// Correct / incorrect badge drawn next to a revealed question.
pub fn verdict_badge(ui: &mut Ui, correct: bool) {
    let (icon, color) = if correct {
        ("✔ Correct", GREEN)
    } else {
        ("✖ Incorrect", RED)
    };
    ui.label(RichText::new(icon).color(color).strong());
}

/// Time-left label, red when the countdown is about to expire.
pub fn timer_label(ui: &mut Ui, text: &str, warning: bool) {
    let rich = RichText::new(text).strong();
    ui.label(if warning { rich.color(Color32::RED) } else { rich });
}
