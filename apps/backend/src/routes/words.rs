//! Word list endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use palavras_core::{search_words, sort_words};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::story;
use crate::AppState;

/// GET /api/words?q=&sort=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<WordListQuery>,
) -> Result<Json<WordListResponse>> {
    let words = state.store.list().await?;
    let mut words = search_words(words, query.q.as_deref().unwrap_or_default());
    sort_words(&mut words, query.sort);

    Ok(Json(WordListResponse {
        total: words.len(),
        words,
    }))
}

/// POST /api/words
pub async fn create(
    State(state): State<AppState>,
    Json(word): Json<NewWord>,
) -> Result<(StatusCode, Json<Word>)> {
    let word = state.store.create(word).await?;
    tracing::info!(word_id = %word.id, "Created word");
    Ok((StatusCode::CREATED, Json(word)))
}

/// GET /api/words/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Word>> {
    state
        .store
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Word {id}")))
}

/// PUT /api/words/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<WordPatch>,
) -> Result<Json<Word>> {
    let word = state.store.update(&id, patch).await?;
    Ok(Json(word))
}

/// DELETE /api/words/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    state.store.delete(&id).await?;
    tracing::info!(word_id = %id, "Deleted word");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/words/:id/examples
pub async fn generate_examples(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExamplesResponse>> {
    let word =
        story::generate_examples(state.store.as_ref(), state.generator.as_ref(), &id).await?;
    Ok(Json(ExamplesResponse {
        examples: word.examples.clone(),
        word,
    }))
}
