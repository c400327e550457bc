//! Backup documents for exporting and importing the whole word list.
//!
//! # Format
//! ```json
//! {
//!   "version": 1,
//!   "exportedAt": "2024-05-01T10:00:00.000Z",
//!   "words": [
//!     { "id": "a1", "portuguese": "casa", "french": "maison",
//!       "examples": [], "createdAt": 1714557600000, "updatedAt": 1714557600000 }
//!   ]
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::error::{BackupError, Result};
use crate::types::Word;

/// Current backup format version.
pub const BACKUP_VERSION: i64 = 1;

/// Serialized form of an exported word list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub version: i64,
    pub exported_at: String,
    pub words: Vec<Word>,
}

/// Wrap the current word list in a backup document.
pub fn export_backup(words: Vec<Word>, now: DateTime<Utc>) -> BackupDocument {
    BackupDocument {
        version: BACKUP_VERSION,
        exported_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        words,
    }
}

/// Parse and validate a backup document.
///
/// Every word must carry a non-empty `id`, `portuguese` and `french`. Missing
/// `examples` become empty and missing timestamps default to `now_ms`. Nothing is
/// returned unless the whole list is valid.
pub fn parse_backup(json: &str, now_ms: i64) -> Result<Vec<Word>> {
    let root: Value = serde_json::from_str(json)?;
    let root = root.as_object().ok_or(BackupError::NotAnObject)?;

    if let Some(version) = root.get("version") {
        match version.as_i64() {
            Some(BACKUP_VERSION) => {}
            Some(other) => return Err(BackupError::UnsupportedVersion(other)),
            None => return Err(BackupError::InvalidVersion(version.to_string())),
        }
    }

    let entries = root
        .get("words")
        .and_then(Value::as_array)
        .ok_or(BackupError::MissingWords)?;

    let mut seen_ids = HashSet::new();
    let mut words = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let word = parse_word(entry, index, now_ms)?;
        if !seen_ids.insert(word.id.clone()) {
            return Err(BackupError::DuplicateId {
                id: word.id,
                index,
            });
        }
        words.push(word);
    }

    Ok(words)
}

fn parse_word(entry: &Value, index: usize, now_ms: i64) -> Result<Word> {
    let fields = entry
        .as_object()
        .ok_or(BackupError::InvalidWord { index })?;

    let examples = match fields.get("examples") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    let created_at = fields
        .get("createdAt")
        .and_then(Value::as_i64)
        .unwrap_or(now_ms);
    let updated_at = fields
        .get("updatedAt")
        .and_then(Value::as_i64)
        .unwrap_or(now_ms);

    Ok(Word {
        id: required(fields, "id", index)?,
        portuguese: required(fields, "portuguese", index)?,
        french: required(fields, "french", index)?,
        examples,
        created_at,
        updated_at,
    })
}

fn required(fields: &Map<String, Value>, field: &'static str, index: usize) -> Result<String> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(BackupError::MissingField { index, field })
}
