//! Word list filtering and ordering.

use serde::{Deserialize, Serialize};

use crate::normalize::search_key;
use crate::types::Word;

/// Word list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Newest created first, the store's natural order.
    #[default]
    Newest,
    Oldest,
    Portuguese,
    French,
}

/// Keep words whose Portuguese or French text contains `query`,
/// ignoring case and accents. A blank query keeps everything.
pub fn search_words(words: Vec<Word>, query: &str) -> Vec<Word> {
    let needle = search_key(query);
    if needle.is_empty() {
        return words;
    }

    words
        .into_iter()
        .filter(|w| {
            search_key(&w.portuguese).contains(&needle) || search_key(&w.french).contains(&needle)
        })
        .collect()
}

/// Sort words in place. Alphabetical orders ignore case and accents.
pub fn sort_words(words: &mut [Word], order: SortOrder) {
    match order {
        SortOrder::Newest => words.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => words.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Portuguese => words.sort_by_cached_key(|w| search_key(&w.portuguese)),
        SortOrder::French => words.sort_by_cached_key(|w| search_key(&w.french)),
    }
}
