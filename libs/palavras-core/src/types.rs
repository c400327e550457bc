//! Core types for the vocabulary list.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A Portuguese/French word pair owned by the word store.
///
/// `french` and `portuguese` may hold several acceptable answers separated by `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    pub portuguese: String,
    pub french: String,
    #[serde(default)]
    pub examples: Vec<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds.
    pub updated_at: i64,
}

impl Word {
    /// The pair handed to story generation and highlighting.
    pub fn pair(&self) -> VocabPair {
        VocabPair {
            portuguese: self.portuguese.clone(),
            french: self.french.clone(),
        }
    }

    /// Apply a partial update. Timestamps are left to the store.
    pub fn apply(&mut self, patch: WordPatch) {
        if let Some(portuguese) = patch.portuguese {
            self.portuguese = portuguese.trim().to_string();
        }
        if let Some(french) = patch.french {
            self.french = french.trim().to_string();
        }
        if let Some(examples) = patch.examples {
            self.examples = examples;
        }
    }
}

/// Fields for a word that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWord {
    pub portuguese: String,
    pub french: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl NewWord {
    /// Check that both translations are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("portuguese", &self.portuguese)?;
        require("french", &self.french)
    }

    /// Build the stored record.
    pub fn into_word(self, id: String, now_ms: i64) -> Word {
        Word {
            id,
            portuguese: self.portuguese.trim().to_string(),
            french: self.french.trim().to_string(),
            examples: self.examples,
            created_at: now_ms,
            updated_at: now_ms,
        }
    }
}

/// Partial update for a stored word (all fields optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portuguese: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub french: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

impl WordPatch {
    /// Check that provided translations are not blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(portuguese) = &self.portuguese {
            require("portuguese", portuguese)?;
        }
        if let Some(french) = &self.french {
            require("french", french)?;
        }
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

/// Verbatim copy of a word's translations at story generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabPair {
    pub portuguese: String,
    pub french: String,
}

impl VocabPair {
    pub fn new(portuguese: impl Into<String>, french: impl Into<String>) -> Self {
        Self {
            portuguese: portuguese.into(),
            french: french.into(),
        }
    }
}

/// A generated reading passage and the vocabulary it was asked to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryResult {
    pub story: String,
    pub used_words: Vec<VocabPair>,
}
