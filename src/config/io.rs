use super::models::AppConfig;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read the config file, falling back to defaults when it is missing.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(raw) => {
            info!(path = %path.display(), "Loaded configuration file");
            parse_config(&raw)
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Could not read config ({err}); using defaults"
            );
            AppConfig::default()
        }
    }
}

/// Parse TOML into an [`AppConfig`], falling back to defaults on error.
pub fn parse_config(raw: &str) -> AppConfig {
    toml::from_str::<AppConfig>(raw).unwrap_or_else(|err| {
        warn!("Failed to parse config ({err}); using defaults");
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(Path::new("/nonexistent/wordleaf-config.toml"));
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn garbage_input_yields_defaults() {
        let config = parse_config("not == valid { toml");
        assert_eq!(config.font_size, AppConfig::default().font_size);
    }

    #[test]
    fn partial_config_fills_missing_fields_with_defaults() {
        let config = parse_config("theme = \"day\"\nlog_level = \"info\"\n");
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.font_size, AppConfig::default().font_size);
        assert_eq!(config.window_width, AppConfig::default().window_width);
    }
}
