mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use iced::{Size, Theme, window};
use std::path::PathBuf;

/// Helper to launch the app, optionally opening a book right away.
pub fn run_app(config: AppConfig, initial_book: Option<PathBuf>) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Word List Explorer", App::update, App::view)
        .window(window_settings)
        .theme(|app: &App| {
            if matches!(app.config.theme, crate::config::ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || App::bootstrap(config, initial_book))
}
