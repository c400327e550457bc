//! Database models and API types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub use palavras_core::{
    AnswerFeedback, MatchResult, NewWord, QuizDirection, Segment, SortOrder, StoryResult,
    VocabPair, Word, WordPatch,
};

// === Database Entity Types ===

/// Word row stored in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct DbWord {
    pub id: String,
    pub portuguese: String,
    pub french: String,
    pub examples: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl DbWord {
    /// Convert to the shared word type
    pub fn into_word(self) -> Word {
        Word {
            id: self.id,
            portuguese: self.portuguese,
            french: self.french,
            examples: self.examples,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// === Word API Types ===

/// Query parameters for GET /api/words
#[derive(Debug, Default, Deserialize)]
pub struct WordListQuery {
    pub q: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordListResponse {
    pub words: Vec<Word>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExamplesResponse {
    pub word: Word,
    pub examples: Vec<String>,
}

// === Backup API Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
}

// === Quiz API Types ===

/// Free-form answer check against any expected text
#[derive(Debug, Deserialize)]
pub struct CheckAnswerRequest {
    pub answer: String,
    pub correct_answer: String,
}

/// Answer check against a stored word
#[derive(Debug, Deserialize)]
pub struct CheckWordRequest {
    pub answer: String,
    #[serde(default)]
    pub direction: QuizDirection,
}

// === Story API Types ===

/// A story with its highlighted segments
#[derive(Debug, Serialize, Deserialize)]
pub struct StoryResponse {
    pub story: String,
    pub used_words: Vec<VocabPair>,
    pub segments: Vec<Segment>,
}

impl From<StoryResult> for StoryResponse {
    fn from(result: StoryResult) -> Self {
        let segments = palavras_core::segment(&result.story, &result.used_words);
        Self {
            story: result.story,
            used_words: result.used_words,
            segments,
        }
    }
}
