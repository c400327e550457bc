//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

use palavras_core::Word;

/// A stored word with the given id and creation time.
pub fn word(id: &str, portuguese: &str, french: &str, created_at: i64) -> Word {
    Word {
        id: id.to_string(),
        portuguese: portuguese.to_string(),
        french: french.to_string(),
        examples: vec![],
        created_at,
        updated_at: created_at,
    }
}

/// A small vocabulary list, oldest first.
pub fn vocabulary() -> Vec<Word> {
    [
        ("casa", "maison"),
        ("o gato", "le chat"),
        ("a água", "l'eau"),
        ("pão", "pain"),
        ("o livro", "le livre"),
        ("a praia", "la plage"),
        ("comer", "manger"),
        ("a escola", "l'école"),
        ("o comboio", "le train"),
        ("a rua", "la rue"),
        ("feliz", "heureux/heureuse"),
        ("o mar", "la mer"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (pt, fr))| word(&format!("w{i}"), pt, fr, 1_000 + i as i64))
    .collect()
}

/// Generate `count` distinct words.
pub fn numbered_words(count: usize) -> Vec<Word> {
    (0..count)
        .map(|i| word(&format!("n{i}"), &format!("palavra{i}"), &format!("mot{i}"), i as i64))
        .collect()
}

/// JSON body for POST /api/words.
pub fn new_word_body(portuguese: &str, french: &str) -> Value {
    json!({
        "portuguese": portuguese,
        "french": french,
        "examples": []
    })
}

/// A version 1 backup document.
pub fn backup_document(words: Value) -> Value {
    json!({
        "version": 1,
        "exportedAt": "2024-05-01T10:00:00.000Z",
        "words": words
    })
}
