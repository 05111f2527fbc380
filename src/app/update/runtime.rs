use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use crate::epub_loader::load_book;
use iced::Task;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            // Extraction runs off the UI thread; hrefs are loaded strictly
            // sequentially inside load_book, so navigation order is kept and
            // failures stay attributable to a specific href.
            Effect::LoadBook(path) => Task::perform(
                async move {
                    match load_book(&path) {
                        Ok(book) => Message::BookLoaded { path, book },
                        Err(err) => Message::BookLoadFailed {
                            path,
                            error: format!("{err:#}"),
                        },
                    }
                },
                |message| message,
            ),
        }
    }
}
