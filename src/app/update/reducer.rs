use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use crate::config::ThemeMode;
use crate::epub_loader::{FileKind, classify};
use crate::wordlist::{SortMode, count_and_sort};
use std::path::PathBuf;
use tracing::{info, warn};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::OpenPathInputChanged(path) => self.open_path_input = path,
            Message::OpenPathRequested => self.handle_open_path_requested(&mut effects),
            Message::OpenBookRequested(path) => self.handle_open_book_requested(path, &mut effects),
            Message::BookLoaded { path, book } => self.apply_loaded_book(path, book),
            Message::BookLoadFailed { path, error } => self.handle_book_load_failed(path, error),
            Message::FilterSelected(label) => self.handle_filter_selected(label),
            Message::SortModeSelected { label, mode } => {
                self.handle_sort_mode_selected(label, mode)
            }
            Message::ToggleTheme => {
                self.config.theme = match self.config.theme {
                    ThemeMode::Day => ThemeMode::Night,
                    ThemeMode::Night => ThemeMode::Day,
                };
            }
        }

        effects
    }

    fn handle_open_path_requested(&mut self, effects: &mut Vec<Effect>) {
        if self.book_loading {
            return;
        }
        let candidate = PathBuf::from(self.open_path_input.trim());
        if candidate.as_os_str().is_empty() {
            return;
        }
        if !candidate.exists() {
            self.book_loading_error = Some(format!("File not found: {}", candidate.display()));
            return;
        }
        self.handle_open_book_requested(candidate, effects);
    }

    fn handle_open_book_requested(&mut self, path: PathBuf, effects: &mut Vec<Effect>) {
        // One load at a time; a second selection while one is in flight is
        // dropped rather than interleaved.
        if self.book_loading {
            return;
        }
        match classify(&path) {
            FileKind::Epub => {
                self.book_loading = true;
                self.book_loading_error = None;
                info!(path = %path.display(), "Opening EPUB");
                effects.push(Effect::LoadBook(path));
            }
            FileKind::Pdf => {
                info!(path = %path.display(), "PDF extraction is not implemented yet");
            }
            FileKind::Other => {
                info!(path = %path.display(), "Ignoring unsupported file type");
            }
        }
    }

    fn handle_book_load_failed(&mut self, path: PathBuf, error: String) {
        self.book_loading = false;
        self.book_loading_error = Some(format!("Failed to open {}: {}", path.display(), error));
        warn!(path = %path.display(), "Failed to load book: {error}");
    }

    fn handle_filter_selected(&mut self, label: String) {
        self.wordlist.filter = label;
    }

    fn handle_sort_mode_selected(&mut self, label: String, mode: SortMode) {
        let Some(section) = self
            .book
            .sections
            .iter()
            .find(|section| section.label == label)
        else {
            return;
        };
        let counts = count_and_sort(&section.words, mode);
        self.wordlist.sorted.insert(label.clone(), counts);
        self.wordlist.sort_choice.insert(label, mode);
    }
}
