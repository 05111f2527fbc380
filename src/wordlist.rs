//! Word frequency counting, sort modes, and section filtering.
//!
//! Everything here is derived data: counting scans a section's word list once
//! and each sort request produces a fresh ordered list without touching its
//! input.

use crate::extractor::Section;
use std::collections::HashMap;
use std::fmt;

/// Sentinel filter value that selects every section.
pub const ALL_SECTIONS: &str = "All Sections";

/// A lowercase word and how often it appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    AtoZ,
    ZtoA,
    LongestFirst,
    ShortestFirst,
    MostUsed,
    LeastUsed,
}

impl SortMode {
    pub const ALL: [SortMode; 6] = [
        SortMode::AtoZ,
        SortMode::ZtoA,
        SortMode::LongestFirst,
        SortMode::ShortestFirst,
        SortMode::MostUsed,
        SortMode::LeastUsed,
    ];
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::AtoZ
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortMode::AtoZ => "A to Z",
            SortMode::ZtoA => "Z to A",
            SortMode::LongestFirst => "Longest to Shortest",
            SortMode::ShortestFirst => "Shortest to Longest",
            SortMode::MostUsed => "Most Used",
            SortMode::LeastUsed => "Least Used",
        };
        write!(f, "{}", label)
    }
}

/// Count case-insensitive occurrences, keeping first-occurrence order.
pub fn count_words(words: &[String]) -> Vec<WordCount> {
    let mut counts: Vec<WordCount> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for word in words {
        let lower = word.to_lowercase();
        match slots.get(&lower) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                slots.insert(lower.clone(), counts.len());
                counts.push(WordCount {
                    word: lower,
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Order a counted list under the given mode.
///
/// The sort is stable, so ties keep their first-occurrence order.
pub fn sort_word_counts(mut counts: Vec<WordCount>, mode: SortMode) -> Vec<WordCount> {
    match mode {
        SortMode::AtoZ => counts.sort_by(|a, b| a.word.cmp(&b.word)),
        SortMode::ZtoA => counts.sort_by(|a, b| b.word.cmp(&a.word)),
        SortMode::LongestFirst => {
            counts.sort_by(|a, b| b.word.chars().count().cmp(&a.word.chars().count()))
        }
        SortMode::ShortestFirst => {
            counts.sort_by(|a, b| a.word.chars().count().cmp(&b.word.chars().count()))
        }
        SortMode::MostUsed => counts.sort_by(|a, b| b.count.cmp(&a.count)),
        SortMode::LeastUsed => counts.sort_by(|a, b| a.count.cmp(&b.count)),
    }
    counts
}

/// Count and sort in one pass; the shape every UI request takes.
pub fn count_and_sort(words: &[String], mode: SortMode) -> Vec<WordCount> {
    sort_word_counts(count_words(words), mode)
}

/// Sections whose label contains `filter` case-insensitively, in original
/// order. The [`ALL_SECTIONS`] sentinel returns the whole list.
pub fn filter_sections<'a>(sections: &'a [Section], filter: &str) -> Vec<&'a Section> {
    if filter == ALL_SECTIONS {
        return sections.iter().collect();
    }
    let needle = filter.to_lowercase();
    sections
        .iter()
        .filter(|section| section.label.to_lowercase().contains(&needle))
        .collect()
}
