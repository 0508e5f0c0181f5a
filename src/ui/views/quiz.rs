use crate::QuizApp;
use crate::model::FeedbackMode;
use crate::ui::helpers::{option_button, timer_label, verdict_badge};
use crate::ui::layout::controls_row;
use crate::ui::views::welcome::{ui_empty_selection, ui_welcome};
use crate::view_models::QuestionCardVm;
use egui::{Align, Button, CentralPanel, Context, Frame, Layout, ProgressBar, RichText, ScrollArea, Ui};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 760.0;
        let panel_width = ui.available_width().min(max_width);

        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.set_width(panel_width);
            controls_row(app, ui);
            ui.add_space(8.0);

            let progress = app.progress_vm();
            ui.horizontal(|ui| {
                ui.add(ProgressBar::new(progress.fraction).desired_width(panel_width * 0.75));
                ui.label(progress.label);
            });
            ui.add_space(8.0);

            if !app.session.is_started() {
                ui_welcome(ui);
            } else if app.session.is_empty() {
                ui_empty_selection(ui);
            } else {
                if let Some(timer) = app.timer_vm() {
                    timer_label(ui, &timer.text, timer.warning);
                    ui.add_space(4.0);
                }
                if let Some(card) = app.question_card() {
                    question_card(app, ui, &card, panel_width);
                    ui.add_space(8.0);
                    navigation_row(app, ui, &card);
                }
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}

fn question_card(app: &mut QuizApp, ui: &mut Ui, card: &QuestionCardVm, width: f32) {
    Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(width - 24.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&card.header).small().weak());
                    ui.label(RichText::new(&card.prompt).heading());
                });
                if let Some(correct) = card.verdict {
                    ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                        verdict_badge(ui, correct);
                    });
                }
            });
            ui.add_space(8.0);

            // Options A-D
            let button_width = width - 24.0;
            let mut clicked = None;
            for option in &card.options {
                if option_button(ui, option, button_width) {
                    clicked = Some(option.index);
                }
            }
            if let Some(index) = clicked {
                app.choose_option(index);
            }

            if let Some(explanation) = &card.explanation {
                ui.add_space(8.0);
                ui.label(RichText::new("Explanation").strong());
                ui.label(explanation);
            }
        });
}

fn navigation_row(app: &mut QuizApp, ui: &mut Ui, card: &QuestionCardVm) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(app.session.can_go_prev(), Button::new("◀ Prev"))
            .clicked()
        {
            app.previous_question();
        }
        if ui
            .add_enabled(app.session.can_go_next(), Button::new("Next ▶"))
            .clicked()
        {
            app.next_question();
        }

        match app.session.feedback_mode() {
            FeedbackMode::Instant => {
                if ui.button("👁 Reveal").clicked() {
                    app.reveal_current();
                }
            }
            FeedbackMode::Deferred => {
                if !app.session.is_finished()
                    && ui
                        .add(Button::new("Submit Exam").fill(egui::Color32::DARK_RED))
                        .clicked()
                {
                    app.submit_exam();
                }
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(&card.position).weak());
        });
    });
}
