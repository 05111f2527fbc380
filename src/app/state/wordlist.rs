use crate::wordlist::{SortMode, WordCount};
use std::collections::HashMap;

/// Derived word-list state: the active filter plus per-section sort results,
/// keyed by section label.
pub struct WordListState {
    pub(in crate::app) filter: String,
    pub(in crate::app) sorted: HashMap<String, Vec<WordCount>>,
    pub(in crate::app) sort_choice: HashMap<String, SortMode>,
}
