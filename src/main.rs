#[cfg(not(target_arch = "wasm32"))]
use fcwmc_quiz::{QuizApp, app::APP_TITLE, config::QuizConfig};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = QuizConfig::from_env();
    log::info!("starting quiz with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(QuizApp::new(config)))),
    )
}

// The browser build starts from `fcwmc_quiz::web::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
