//! Word store boundary.
//!
//! The store owns the word list: ids and timestamps are assigned here and the
//! list is always returned newest-created first.

pub mod feed;
pub mod memory;

use async_trait::async_trait;
use chrono::Utc;
use palavras_core::{NewWord, Word, WordPatch};
use uuid::Uuid;

use crate::error::Result;

pub use feed::{FeedSnapshot, Subscription, WordFeed};
pub use memory::MemoryWordStore;

/// Persistent collection of words keyed by id.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// All words, newest created first.
    async fn list(&self) -> Result<Vec<Word>>;

    async fn get(&self, id: &str) -> Result<Option<Word>>;

    /// Validate and store a new word with a fresh id.
    async fn create(&self, word: NewWord) -> Result<Word>;

    /// Apply a partial update. Fails with `NotFound` for unknown ids.
    async fn update(&self, id: &str, patch: WordPatch) -> Result<Word>;

    /// Remove a word. Fails with `NotFound` for unknown ids.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Swap the whole list in one step. Readers never see a partial list.
    async fn replace_all(&self, words: Vec<Word>) -> Result<()>;

    /// Change notifications for this store.
    fn feed(&self) -> &WordFeed;
}

/// Current time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub(crate) fn new_word_id() -> String {
    Uuid::new_v4().to_string()
}

/// Timestamps never move backwards, even if the clock does.
pub(crate) fn next_updated_at(previous: i64) -> i64 {
    now_ms().max(previous)
}

/// Newest created first; ties keep their current order.
pub(crate) fn sort_newest_first(words: &mut [Word]) {
    words.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
