//! In-memory word store for development and tests.

use async_trait::async_trait;
use palavras_core::{NewWord, Word, WordPatch};
use tokio::sync::RwLock;

use super::{new_word_id, next_updated_at, now_ms, sort_newest_first, WordFeed, WordStore};
use crate::error::{ApiError, Result};

/// Word list held behind a single lock.
#[derive(Debug, Default)]
pub struct MemoryWordStore {
    words: RwLock<Vec<Word>>,
    feed: WordFeed,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing words.
    pub fn with_words(mut words: Vec<Word>) -> Self {
        sort_newest_first(&mut words);
        let store = Self {
            words: RwLock::new(words.clone()),
            feed: WordFeed::new(),
        };
        store.feed.publish(words);
        store
    }
}

#[async_trait]
impl WordStore for MemoryWordStore {
    async fn list(&self) -> Result<Vec<Word>> {
        Ok(self.words.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Word>> {
        Ok(self.words.read().await.iter().find(|w| w.id == id).cloned())
    }

    async fn create(&self, word: NewWord) -> Result<Word> {
        word.validate()?;
        let word = word.into_word(new_word_id(), now_ms());

        let mut words = self.words.write().await;
        words.push(word.clone());
        sort_newest_first(&mut words);
        self.feed.publish(words.clone());

        Ok(word)
    }

    async fn update(&self, id: &str, patch: WordPatch) -> Result<Word> {
        patch.validate()?;

        let mut words = self.words.write().await;
        let word = words
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Word {id}")))?;
        word.apply(patch);
        word.updated_at = next_updated_at(word.updated_at);
        let updated = word.clone();
        self.feed.publish(words.clone());

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut words = self.words.write().await;
        let before = words.len();
        words.retain(|w| w.id != id);
        if words.len() == before {
            return Err(ApiError::NotFound(format!("Word {id}")));
        }
        self.feed.publish(words.clone());
        Ok(())
    }

    async fn replace_all(&self, mut replacement: Vec<Word>) -> Result<()> {
        sort_newest_first(&mut replacement);
        let mut words = self.words.write().await;
        *words = replacement;
        self.feed.publish(words.clone());
        Ok(())
    }

    fn feed(&self) -> &WordFeed {
        &self.feed
    }
}
