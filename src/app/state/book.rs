use crate::extractor::Section;
use iced::widget::image;
use std::path::PathBuf;

/// The currently opened book, replaced wholesale on each successful load.
pub struct BookState {
    pub(in crate::app) sections: Vec<Section>,
    pub(in crate::app) cover: Option<image::Handle>,
    pub(in crate::app) source_path: Option<PathBuf>,
}
