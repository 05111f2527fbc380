mod reducer;
mod runtime;

use super::messages::Message;
use super::state::App;
use iced::Task;
use std::path::PathBuf;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    LoadBook(PathBuf),
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
