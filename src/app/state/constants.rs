/// Limits and fixed dimensions for the viewer chrome.
pub(crate) const MIN_FONT_SIZE: u32 = 10;
pub(crate) const MAX_FONT_SIZE: u32 = 48;
pub(crate) const COVER_WIDTH_PX: f32 = 200.0;
pub(crate) const SECTION_LABEL_SCALE: f32 = 1.5;
