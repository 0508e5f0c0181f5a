pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::QuizApp;
pub use data::Catalog;
pub use session::QuizSession;
