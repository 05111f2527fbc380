pub(crate) fn default_font_size() -> u32 {
    18
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}
