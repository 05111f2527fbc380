mod book;
mod constants;
mod wordlist;

use crate::config::AppConfig;
use crate::epub_loader::LoadedBook;
use crate::extractor::SectionKind;
use crate::wordlist::{ALL_SECTIONS, SortMode, count_and_sort, filter_sections};
use iced::Task;
use iced::widget::image;
use std::collections::HashMap;
use std::path::PathBuf;

use super::messages::Message;

pub(in crate::app) use book::BookState;
pub(crate) use constants::*;
pub(in crate::app) use wordlist::WordListState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) book: BookState,
    pub(super) wordlist: WordListState,
    pub(super) open_path_input: String,
    pub(super) book_loading: bool,
    pub(super) book_loading_error: Option<String>,
}

impl App {
    pub(super) fn bootstrap(
        mut config: AppConfig,
        initial_book: Option<PathBuf>,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let app = App {
            config,
            book: BookState {
                sections: Vec::new(),
                cover: None,
                source_path: None,
            },
            wordlist: WordListState {
                filter: ALL_SECTIONS.to_string(),
                sorted: HashMap::new(),
                sort_choice: HashMap::new(),
            },
            open_path_input: String::new(),
            book_loading: false,
            book_loading_error: None,
        };

        let init_task = match initial_book {
            Some(path) => Task::done(Message::OpenBookRequested(path)),
            None => Task::none(),
        };
        (app, init_task)
    }

    /// Replace the whole book wholesale; never mutate sections in place.
    pub(super) fn apply_loaded_book(&mut self, path: PathBuf, book: LoadedBook) {
        self.book_loading = false;
        self.book_loading_error = None;
        self.book.cover = book
            .cover
            .map(|cover| image::Handle::from_bytes(cover.data));
        self.wordlist.filter = ALL_SECTIONS.to_string();
        self.wordlist.sort_choice.clear();
        self.wordlist.sorted = book
            .sections
            .iter()
            .filter(|section| section.kind != SectionKind::Cover)
            .map(|section| {
                (
                    section.label.clone(),
                    count_and_sort(&section.words, SortMode::default()),
                )
            })
            .collect();
        self.book.sections = book.sections;
        self.book.source_path = Some(path.clone());

        tracing::info!(
            path = %path.display(),
            sections = self.book.sections.len(),
            "Loaded book into viewer state"
        );
    }

    pub(super) fn filtered_sections(&self) -> Vec<&crate::extractor::Section> {
        filter_sections(&self.book.sections, &self.wordlist.filter)
    }

    pub(super) fn sort_choice_for(&self, label: &str) -> SortMode {
        self.wordlist
            .sort_choice
            .get(label)
            .copied()
            .unwrap_or_default()
    }
}

fn clamp_config(config: &mut AppConfig) {
    config.font_size = config.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
}
