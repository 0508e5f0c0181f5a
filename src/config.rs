// src/config.rs

use crate::session::SessionSettings;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_EXPORT_STEM: &str = "FCWMC_EXPORT_STEM";
pub const ENV_EXPORT_DIR: &str = "FCWMC_EXPORT_DIR";
pub const ENV_TIMER_MINUTES: &str = "FCWMC_TIMER_MINUTES";
pub const ENV_SHUFFLE: &str = "FCWMC_SHUFFLE";
pub const ENV_EXAM_MODE: &str = "FCWMC_EXAM_MODE";

/// Startup defaults for the quiz window. Nothing here is written back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub export_stem: String,
    pub export_dir: PathBuf,
    pub timer_minutes: u32,
    pub shuffle: bool,
    pub exam_mode: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            export_stem: "FCWMC_quiz_bank".to_owned(),
            export_dir: PathBuf::from("."),
            timer_minutes: 0,
            shuffle: true,
            exam_mode: false,
        }
    }
}

impl QuizConfig {
    /// Reads overrides from the process environment (native) or from the
    /// build environment (wasm).
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(|key| {
                let value = match key {
                    ENV_EXPORT_STEM => option_env!("FCWMC_EXPORT_STEM"),
                    ENV_TIMER_MINUTES => option_env!("FCWMC_TIMER_MINUTES"),
                    ENV_SHUFFLE => option_env!("FCWMC_SHUFFLE"),
                    ENV_EXAM_MODE => option_env!("FCWMC_EXAM_MODE"),
                    _ => None,
                };
                value.map(str::to_owned)
            })
        }
    }

    /// Starts from the defaults and applies every key `lookup` knows about.
    /// Values that do not parse are logged and skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(stem) = lookup(ENV_EXPORT_STEM).and_then(non_empty) {
            config.export_stem = stem;
        }
        if let Some(dir) = lookup(ENV_EXPORT_DIR).and_then(non_empty) {
            config.export_dir = PathBuf::from(dir);
        }
        if let Some(minutes) = parse_var(&lookup, ENV_TIMER_MINUTES) {
            config.timer_minutes = minutes;
        }
        if let Some(flag) = lookup(ENV_SHUFFLE).and_then(|v| parse_flag(ENV_SHUFFLE, &v)) {
            config.shuffle = flag;
        }
        if let Some(flag) = lookup(ENV_EXAM_MODE).and_then(|v| parse_flag(ENV_EXAM_MODE, &v)) {
            config.exam_mode = flag;
        }

        config
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            shuffle: self.shuffle,
            exam_mode: self.exam_mode,
            timer_seconds: self.timer_minutes.saturating_mul(60),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

fn parse_flag(key: &str, raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            log::warn!("ignoring {key}={raw:?}: expected true/false");
            None
        }
    }
}
