//! Quiz answer checking

use axum::{
    extract::{Path, State},
    Json,
};
use palavras_core::{check_word, compare_answers};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/quiz/check
pub async fn check(Json(req): Json<CheckAnswerRequest>) -> Result<Json<MatchResult>> {
    require_answer(&req.answer)?;
    Ok(Json(compare_answers(&req.answer, &req.correct_answer)))
}

/// POST /api/quiz/words/:id/check
pub async fn check_stored(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CheckWordRequest>,
) -> Result<Json<AnswerFeedback>> {
    require_answer(&req.answer)?;

    let word = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Word {id}")))?;

    let result = check_word(&word, req.direction, &req.answer);
    Ok(Json(AnswerFeedback {
        correct: result.is_correct,
        expected: req.direction.expected(&word).to_string(),
        result,
    }))
}

fn require_answer(answer: &str) -> Result<()> {
    if answer.trim().is_empty() {
        return Err(ApiError::BadRequest("Answer must not be empty".to_string()));
    }
    Ok(())
}
