//! Section extraction.
//!
//! Turns a parsed book (navigation entries plus loadable per-href documents
//! and an optional cover) into an ordered list of labeled sections, each
//! carrying normalized text and a tokenized word list. Chapters additionally
//! get a heading-strip pass that drops the chapter's own title words from the
//! front of the word list.
//!
//! The extractor only talks to [`BookSource`], so the whole pipeline can be
//! exercised against a synthetic book in tests.

use crate::tokenizer::normalize;
use thiserror::Error;
use tracing::debug;

pub const COVER_LABEL: &str = "Cover Image";
pub const TOC_LABEL: &str = "Table of Contents";

/// One labeled unit of extracted content. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub kind: SectionKind,
    pub text: String,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Cover,
    Toc,
    Chapter,
}

/// A single navigation entry: human-readable label plus document reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
}

/// Seam over the external e-book parsing library.
pub trait BookSource {
    /// Best-effort cover lookup; a failed lookup reads as `false`.
    fn has_cover(&mut self) -> bool;

    /// The navigation table of contents, in reading order.
    fn navigation(&self) -> Vec<NavEntry>;

    /// Plain text of the document behind `href`, or `None` on load failure.
    fn load_document(&mut self, href: &str) -> Option<String>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("failed to load chapter document '{href}'")]
    LoadFailure { href: String },
}

/// Extract the ordered section list from a parsed book.
///
/// Output order is: cover (only when the book exposes a cover image), table
/// of contents, then one chapter per navigation entry in navigation order.
/// Any chapter document that fails to load aborts the whole extraction.
pub fn extract_sections(source: &mut impl BookSource) -> Result<Vec<Section>, ExtractError> {
    let mut sections = Vec::new();

    if source.has_cover() {
        sections.push(Section {
            label: COVER_LABEL.to_string(),
            kind: SectionKind::Cover,
            text: String::new(),
            words: Vec::new(),
        });
    }

    let nav = source.navigation();
    let joined_labels = nav
        .iter()
        .map(|entry| entry.label.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let toc = normalize(&joined_labels);
    sections.push(Section {
        label: TOC_LABEL.to_string(),
        kind: SectionKind::Toc,
        text: toc.text,
        words: toc.words,
    });

    for entry in &nav {
        // Drop any in-document fragment; the loader wants the document itself.
        let href = entry.href.split('#').next().unwrap_or(&entry.href);
        let raw = source
            .load_document(href)
            .ok_or_else(|| ExtractError::LoadFailure {
                href: href.to_string(),
            })?;
        let body = normalize(&raw);
        let label = normalize(&entry.label);
        let words = strip_heading(body.words, &label.words);
        debug!(
            label = %label.text,
            href,
            words = words.len(),
            "Extracted chapter section"
        );
        sections.push(Section {
            label: label.text,
            kind: SectionKind::Chapter,
            text: body.text,
            words,
        });
    }

    Ok(sections)
}

/// Remove the chapter's own heading words from the front of its token list.
///
/// Falls back to the untouched list whenever no credible heading occurrence
/// is found; under-stripping is preferred over eating real content.
fn strip_heading(mut body: Vec<String>, label_words: &[String]) -> Vec<String> {
    match heading_end_index(&body, label_words) {
        Some(end) => {
            body.drain(..=end);
            body
        }
        None => body,
    }
}

/// Locate the index of the heading's final word inside the body token list.
///
/// The heading is anchored at the first occurrence of the label's last word.
/// When the label's first word only shows up after that anchor, the anchor is
/// assumed to be a stray early match of the last word and the search restarts
/// strictly after it. A failed restart means no stripping at all.
fn heading_end_index(body: &[String], label_words: &[String]) -> Option<usize> {
    let first = label_words.first()?;
    let last = label_words.last()?;

    let start = body.iter().position(|word| word == last)?;
    match body.iter().position(|word| word == first) {
        Some(first_idx) if first_idx > start => body
            .iter()
            .skip(start + 1)
            .position(|word| word == last)
            .map(|offset| start + 1 + offset),
        _ => Some(start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeBook {
        cover: bool,
        nav: Vec<NavEntry>,
        docs: HashMap<String, String>,
    }

    impl FakeBook {
        fn new(cover: bool, chapters: &[(&str, &str, &str)]) -> Self {
            FakeBook {
                cover,
                nav: chapters
                    .iter()
                    .map(|(label, href, _)| NavEntry {
                        label: label.to_string(),
                        href: href.to_string(),
                    })
                    .collect(),
                docs: chapters
                    .iter()
                    .map(|(_, href, body)| {
                        let doc = href.split('#').next().unwrap_or(href);
                        (doc.to_string(), body.to_string())
                    })
                    .collect(),
            }
        }
    }

    impl BookSource for FakeBook {
        fn has_cover(&mut self) -> bool {
            self.cover
        }

        fn navigation(&self) -> Vec<NavEntry> {
            self.nav.clone()
        }

        fn load_document(&mut self, href: &str) -> Option<String> {
            self.docs.get(href).cloned()
        }
    }

    fn words(section: &Section) -> Vec<&str> {
        section.words.iter().map(String::as_str).collect()
    }

    #[test]
    fn book_without_cover_starts_with_toc() {
        let mut book = FakeBook::new(false, &[("Chapter One", "c1.xhtml", "Body text.")]);
        let sections = extract_sections(&mut book).expect("extraction");
        assert_eq!(sections[0].kind, SectionKind::Toc);
        assert!(sections.iter().all(|s| s.kind != SectionKind::Cover));
    }

    #[test]
    fn cover_section_is_first_and_empty_when_cover_exposed() {
        let mut book = FakeBook::new(true, &[("Chapter One", "c1.xhtml", "Body text.")]);
        let sections = extract_sections(&mut book).expect("extraction");
        assert_eq!(sections[0].kind, SectionKind::Cover);
        assert_eq!(sections[0].label, COVER_LABEL);
        assert!(sections[0].text.is_empty());
        assert!(sections[0].words.is_empty());
    }

    #[test]
    fn toc_section_concatenates_all_labels() {
        let mut book = FakeBook::new(
            false,
            &[
                ("Chapter One", "c1.xhtml", "One fish."),
                ("Chapter Two!", "c2.xhtml", "Two fish."),
            ],
        );
        let sections = extract_sections(&mut book).expect("extraction");
        let toc = &sections[0];
        assert_eq!(toc.text, "Chapter One Chapter Two");
        assert_eq!(words(toc), vec!["Chapter", "One", "Chapter", "Two"]);
    }

    #[test]
    fn chapter_heading_is_stripped_from_word_list() {
        let mut book = FakeBook::new(
            false,
            &[("Chapter One", "c1.xhtml", "Chapter One This is the story.")],
        );
        let sections = extract_sections(&mut book).expect("extraction");
        let chapter = &sections[1];
        assert_eq!(chapter.kind, SectionKind::Chapter);
        assert_eq!(chapter.label, "Chapter One");
        assert_eq!(chapter.text, "Chapter One This is the story");
        assert_eq!(words(chapter), vec!["This", "is", "the", "story"]);
    }

    #[test]
    fn chapters_follow_navigation_order() {
        let mut book = FakeBook::new(
            false,
            &[
                ("Beta", "b.xhtml", "Beta body."),
                ("Alpha", "a.xhtml", "Alpha body."),
            ],
        );
        let sections = extract_sections(&mut book).expect("extraction");
        let labels: Vec<&str> = sections[1..].iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Beta", "Alpha"]);
    }

    #[test]
    fn missing_document_fails_with_stripped_href() {
        let mut book = FakeBook::new(
            false,
            &[("Chapter One", "c1.xhtml", "Chapter One text.")],
        );
        book.nav.push(NavEntry {
            label: "Chapter Two".to_string(),
            href: "c2.xhtml#part-2".to_string(),
        });
        let err = extract_sections(&mut book).expect_err("load should fail");
        assert_eq!(
            err,
            ExtractError::LoadFailure {
                href: "c2.xhtml".to_string()
            }
        );
    }

    #[test]
    fn fragment_suffix_is_ignored_when_loading() {
        let mut book = FakeBook::new(
            false,
            &[("Intro", "c1.xhtml#top", "Intro Welcome aboard.")],
        );
        let sections = extract_sections(&mut book).expect("extraction");
        assert_eq!(words(&sections[1]), vec!["Welcome", "aboard"]);
    }

    #[test]
    fn heading_end_found_at_first_anchor() {
        let body: Vec<String> = ["Chapter", "One", "text", "starts"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let label: Vec<String> = ["Chapter", "One"].iter().map(|s| s.to_string()).collect();
        assert_eq!(heading_end_index(&body, &label), Some(1));
    }

    #[test]
    fn heading_search_restarts_after_stray_early_match() {
        // Last label word "One" appears before the heading proper.
        let body: Vec<String> = ["One", "day", "Chapter", "One", "begins", "here"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let label: Vec<String> = ["Chapter", "One"].iter().map(|s| s.to_string()).collect();
        assert_eq!(heading_end_index(&body, &label), Some(3));
    }

    #[test]
    fn failed_restart_keeps_full_body() {
        let body: Vec<String> = ["One", "day", "the", "Chapter", "starts"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let label: Vec<String> = ["Chapter", "One"].iter().map(|s| s.to_string()).collect();
        assert_eq!(heading_end_index(&body, &label), None);

        let mut book = FakeBook::new(
            false,
            &[("Chapter One", "c1.xhtml", "One day the Chapter starts")],
        );
        let sections = extract_sections(&mut book).expect("extraction");
        assert_eq!(
            words(&sections[1]),
            vec!["One", "day", "the", "Chapter", "starts"]
        );
    }

    #[test]
    fn absent_label_words_keep_full_body() {
        let mut book = FakeBook::new(
            false,
            &[("Epilogue", "e.xhtml", "The story simply ends here.")],
        );
        let sections = extract_sections(&mut book).expect("extraction");
        assert_eq!(
            words(&sections[1]),
            vec!["The", "story", "simply", "ends", "here"]
        );
    }

    #[test]
    fn single_word_label_strips_through_first_occurrence() {
        let body: Vec<String> = ["Prologue", "It", "was", "night"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let label: Vec<String> = vec!["Prologue".to_string()];
        assert_eq!(heading_end_index(&body, &label), Some(0));
    }

    #[test]
    fn empty_label_keeps_full_body() {
        let mut book = FakeBook::new(false, &[("***", "x.xhtml", "Some body text.")]);
        let sections = extract_sections(&mut book).expect("extraction");
        assert_eq!(sections[1].label, "");
        assert_eq!(words(&sections[1]), vec!["Some", "body", "text"]);
    }
}
