use super::views;
use crate::QuizApp;
use crate::export::ExportFormat;
use crate::model::{Difficulty, DifficultyFilter, Filter, Topic, TopicFilter};
use egui::{Align, ComboBox, Context, Layout, RichText, SidePanel, TopBottomPanel, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.heading(crate::app::APP_TITLE);
        ui.label(
            RichText::new(
                "Practice mode shows instant feedback. Exam mode hides answers until you submit.",
            )
            .weak(),
        );
        ui.add_space(4.0);

        ui.horizontal_wrapped(|ui| {
            let mut topic = app.session.filter_topic();
            ComboBox::from_id_salt("topic_filter")
                .width(200.0)
                .selected_text(topic_text(topic))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut topic, Filter::All, "All Topics");
                    for t in Topic::ALL {
                        ui.selectable_value(&mut topic, Filter::Only(t), t.label());
                    }
                });
            if topic != app.session.filter_topic() {
                app.change_topic(topic);
            }

            let mut difficulty = app.session.filter_difficulty();
            ComboBox::from_id_salt("difficulty_filter")
                .width(140.0)
                .selected_text(difficulty_text(difficulty))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut difficulty, Filter::All, "All Levels");
                    for d in Difficulty::ALL {
                        ui.selectable_value(&mut difficulty, Filter::Only(d), d.label());
                    }
                });
            if difficulty != app.session.filter_difficulty() {
                app.change_difficulty(difficulty);
            }

            ui.separator();

            let mut exam_mode = app.session.exam_mode();
            if ui.checkbox(&mut exam_mode, "Exam mode").changed() {
                app.toggle_exam_mode(exam_mode);
            }

            let mut shuffle = app.session.shuffle_enabled();
            if ui.checkbox(&mut shuffle, "🔀 Shuffle").changed() {
                app.toggle_shuffle(shuffle);
            }
        });
        ui.add_space(6.0);
    });
}

pub fn bottom_panel(ctx: &Context) {
    TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Tip: the export buttons save the whole question bank for use in other tools.")
                    .small()
                    .weak(),
            );
            // ----------- THEME BUTTONS -----------
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

pub fn stats_panel(app: &mut QuizApp, ctx: &Context) {
    SidePanel::right("stats_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            views::stats::ui_stats(app, ui);
        });
}

/// Toolbar below the header: timer, lifecycle buttons and exports.
pub fn controls_row(app: &mut QuizApp, ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        ui.label("⏱ Timer (min):");
        let mut minutes = app.timer_minutes;
        let drag = egui::DragValue::new(&mut minutes).range(0..=240);
        if ui.add(drag).on_hover_text("0 = no timer").changed() {
            app.change_timer_minutes(minutes);
        }

        if ui.button("▶ Start").clicked() {
            app.start_quiz();
        }
        if ui.button("🔄 Reset").clicked() {
            app.reset_quiz();
        }
        if ui.button("💾 Export JSON").clicked() {
            app.export_bank(ExportFormat::Json);
        }
        if ui.button("💾 Export CSV").clicked() {
            app.export_bank(ExportFormat::Csv);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(
                RichText::new(format!(
                    "{} · {}",
                    topic_text(app.session.filter_topic()),
                    difficulty_text(app.session.filter_difficulty())
                ))
                .weak(),
            );
        });
    });
}

fn topic_text(topic: TopicFilter) -> String {
    match topic {
        Filter::All => "All Topics".to_owned(),
        Filter::Only(t) => t.label().to_owned(),
    }
}

fn difficulty_text(difficulty: DifficultyFilter) -> String {
    match difficulty {
        Filter::All => "All Levels".to_owned(),
        Filter::Only(d) => d.label().to_owned(),
    }
}
