//! Story and example sentence generation.

use palavras_core::story::{
    examples_prompt, parse_examples, story_prompt, strip_markdown_emphasis,
};
use palavras_core::{select_used_words, StoryResult, Word, WordPatch, MIN_STORY_WORDS};

use crate::error::{ApiError, Result};
use crate::services::generator::{GenerateError, TextGenerator};
use crate::services::story_cache::StoryCache;
use crate::store::WordStore;

/// Generate a story from a random selection of the stored words and cache it.
pub async fn generate_story(
    store: &dyn WordStore,
    generator: &dyn TextGenerator,
    cache: &StoryCache,
) -> Result<StoryResult> {
    let words = store.list().await?;
    if words.len() < MIN_STORY_WORDS {
        return Err(ApiError::BadRequest(format!(
            "At least {MIN_STORY_WORDS} words are needed for a story, you have {}",
            words.len()
        )));
    }

    let used_words = select_used_words(&words, &mut rand::thread_rng());
    tracing::info!(
        total = words.len(),
        used = used_words.len(),
        "Generating story"
    );

    let text = generator.complete(&story_prompt(&used_words)).await?;
    let result = StoryResult {
        story: strip_markdown_emphasis(&text),
        used_words,
    };

    cache.save(&result).await?;
    Ok(result)
}

/// Generate example sentences for one word and store them on it.
pub async fn generate_examples(
    store: &dyn WordStore,
    generator: &dyn TextGenerator,
    id: &str,
) -> Result<Word> {
    let word = store
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Word {id}")))?;

    let text = generator.complete(&examples_prompt(&word)).await?;
    let examples = parse_examples(&text);
    if examples.is_empty() {
        return Err(GenerateError::MalformedResponse.into());
    }

    tracing::info!(word_id = %id, count = examples.len(), "Generated examples");
    let patch = WordPatch {
        examples: Some(examples),
        ..Default::default()
    };
    store.update(id, patch).await
}
