use crate::epub_loader::LoadedBook;
use crate::wordlist::SortMode;
use std::path::PathBuf;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    OpenPathInputChanged(String),
    OpenPathRequested,
    OpenBookRequested(PathBuf),
    BookLoaded {
        path: PathBuf,
        book: LoadedBook,
    },
    BookLoadFailed {
        path: PathBuf,
        error: String,
    },
    FilterSelected(String),
    SortModeSelected {
        label: String,
        mode: SortMode,
    },
    ToggleTheme,
}
