//! EPUB loading utilities.
//!
//! This module is intentionally small: it knows how to open an EPUB, adapt it
//! to the extractor's [`BookSource`] seam (navigation entries, per-href plain
//! text, cover presence), and hand back the finished section list plus cover
//! bytes. Keeping it isolated makes it easy to swap out or enhance parsing
//! later (e.g., adding the PDF path once that exists).

use crate::extractor::{BookSource, NavEntry, Section, extract_sections};
use anyhow::{Context, Result};
use epub::doc::EpubDoc;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info, warn};

/// Everything the UI needs from one opened book.
#[derive(Debug, Clone)]
pub struct LoadedBook {
    pub sections: Vec<Section>,
    pub cover: Option<CoverImage>,
}

/// Raw cover bytes as stored in the archive.
#[derive(Debug, Clone)]
pub struct CoverImage {
    pub data: Vec<u8>,
    pub mime: String,
}

/// File classification by extension. PDF is reserved but inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Epub,
    Pdf,
    Other,
}

pub fn classify(path: &Path) -> FileKind {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
    {
        Some(ext) if ext == "epub" => FileKind::Epub,
        Some(ext) if ext == "pdf" => FileKind::Pdf,
        _ => FileKind::Other,
    }
}

/// Load an EPUB from disk and extract its section list.
pub fn load_book(path: &Path) -> Result<LoadedBook> {
    info!(path = %path.display(), "Loading EPUB content");
    let mut book = EpubBook::open(path)?;
    let cover = book.cover.clone();
    match &cover {
        Some(image) => debug!(mime = %image.mime, bytes = image.data.len(), "Found cover image"),
        None => debug!(path = %path.display(), "No cover image exposed by this EPUB"),
    }

    let sections = extract_sections(&mut book)
        .with_context(|| format!("Failed to extract sections from {}", path.display()))?;

    info!(
        sections = sections.len(),
        has_cover = cover.is_some(),
        "Finished extracting sections"
    );
    Ok(LoadedBook { sections, cover })
}

/// [`BookSource`] implementation over the `epub` crate.
struct EpubBook {
    doc: EpubDoc<BufReader<File>>,
    cover: Option<CoverImage>,
}

impl EpubBook {
    fn open(path: &Path) -> Result<Self> {
        let mut doc = EpubDoc::new(path)
            .with_context(|| format!("Failed to open EPUB at {}", path.display()))?;
        // Cover lookup is best-effort; an absent cover is not an error.
        let cover = doc
            .get_cover()
            .map(|(data, mime)| CoverImage { data, mime });
        Ok(EpubBook { doc, cover })
    }
}

impl BookSource for EpubBook {
    fn has_cover(&mut self) -> bool {
        self.cover.is_some()
    }

    fn navigation(&self) -> Vec<NavEntry> {
        self.doc
            .toc
            .iter()
            .map(|nav| NavEntry {
                label: nav.label.clone(),
                href: nav.content.to_string_lossy().into_owned(),
            })
            .collect()
    }

    fn load_document(&mut self, href: &str) -> Option<String> {
        let html = self.doc.get_resource_str_by_path(href)?;
        // Use a very large width so we do not bake in hard line breaks; the
        // tokenizer collapses runs of whitespace anyway.
        match html2text::from_read(html.as_bytes(), 10_000) {
            Ok(plain) => Some(plain),
            Err(err) => {
                warn!(href, "html2text failed: {err}");
                Some(html)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn classifies_by_extension_case_insensitively() {
        assert_eq!(classify(&PathBuf::from("/tmp/book.epub")), FileKind::Epub);
        assert_eq!(classify(&PathBuf::from("/tmp/BOOK.EPUB")), FileKind::Epub);
        assert_eq!(classify(&PathBuf::from("/tmp/paper.pdf")), FileKind::Pdf);
        assert_eq!(classify(&PathBuf::from("/tmp/notes.txt")), FileKind::Other);
        assert_eq!(classify(&PathBuf::from("/tmp/noext")), FileKind::Other);
    }
}
