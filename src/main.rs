//! Entry point for the word-list explorer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments (an optional book to open at startup).
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI application.

mod app;
mod config;
mod epub_loader;
mod extractor;
mod tokenizer;
mod wordlist;

use crate::app::run_app;
use crate::config::load_config;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let initial_book = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        book = ?initial_book.as_ref().map(|p| p.display().to_string()),
        "Starting word-list explorer"
    );
    run_app(config, initial_book).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    match args.next() {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(anyhow!("File not found: {}", path.as_path().display()));
            }
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
