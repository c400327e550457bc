//! Local file holding the last generated story.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use palavras_core::StoryResult;

use crate::error::{ApiError, Result};

/// The most recent story, kept as one JSON file.
pub struct StoryCache {
    path: PathBuf,
}

impl StoryCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached story. A missing file means no story yet.
    pub async fn load(&self) -> Result<Option<StoryResult>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_error(&self.path, e)),
        };

        let story = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::Storage(format!("{} is not a cached story: {e}", self.path.display()))
        })?;
        Ok(Some(story))
    }

    /// Replace the cached story.
    ///
    /// Written to a sibling temp file and renamed, so readers see either the
    /// old story or the new one.
    pub async fn save(&self, story: &StoryResult) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error(parent, e))?;
        }

        let json = serde_json::to_vec_pretty(story)
            .map_err(|e| ApiError::Internal(format!("Failed to encode story: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| storage_error(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| storage_error(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), "Saved story");
        Ok(())
    }
}

fn storage_error(path: &Path, e: std::io::Error) -> ApiError {
    ApiError::Storage(format!("{}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use palavras_core::VocabPair;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn story() -> StoryResult {
        StoryResult {
            story: "A casa é bonita.".to_string(),
            used_words: vec![VocabPair::new("casa", "maison")],
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let cache = StoryCache::new(dir.path().join("story.json"));
        assert_eq!(cache.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let cache = StoryCache::new(dir.path().join("nested").join("story.json"));

        cache.save(&story()).await.unwrap();
        assert_eq!(cache.load().await.unwrap(), Some(story()));
        assert!(!dir.path().join("nested").join("story.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let cache = StoryCache::new(dir.path().join("story.json"));

        cache.save(&story()).await.unwrap();
        let newer = StoryResult {
            story: "Outra história.".to_string(),
            used_words: vec![],
        };
        cache.save(&newer).await.unwrap();
        assert_eq!(cache.load().await.unwrap(), Some(newer));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("story.json");
        std::fs::write(&path, "not json").unwrap();

        let cache = StoryCache::new(path);
        assert!(matches!(cache.load().await, Err(ApiError::Storage(_))));
    }

    #[tokio::test]
    async fn test_file_uses_camel_case() {
        let dir = TempDir::new().unwrap();
        let cache = StoryCache::new(dir.path().join("story.json"));
        cache.save(&story()).await.unwrap();

        let raw = std::fs::read_to_string(cache.path()).unwrap();
        assert!(raw.contains("\"usedWords\""));
    }
}
