//! Configuration loading for the word-list explorer.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! sensible defaults so the UI can still launch.

mod defaults;
mod io;
mod models;

pub use io::{load_config, parse_config};
pub use models::{AppConfig, LogLevel, ThemeMode};
