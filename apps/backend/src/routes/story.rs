//! Story endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::StoryResponse;
use crate::services::story;
use crate::AppState;

/// POST /api/story
pub async fn generate(State(state): State<AppState>) -> Result<Json<StoryResponse>> {
    let result = story::generate_story(
        state.store.as_ref(),
        state.generator.as_ref(),
        &state.stories,
    )
    .await?;
    Ok(Json(result.into()))
}

/// GET /api/story
///
/// The last generated story, or `null` before the first one.
pub async fn latest(State(state): State<AppState>) -> Result<Json<Option<StoryResponse>>> {
    let cached = state.stories.load().await?;
    Ok(Json(cached.map(StoryResponse::from)))
}
