//! Backup export and import

use axum::{extract::State, Json};
use chrono::Utc;
use palavras_core::{export_backup, parse_backup, BackupDocument};

use crate::error::Result;
use crate::models::ImportResponse;
use crate::store::now_ms;
use crate::AppState;

/// GET /api/backup
pub async fn export(State(state): State<AppState>) -> Result<Json<BackupDocument>> {
    let words = state.store.list().await?;
    Ok(Json(export_backup(words, Utc::now())))
}

/// POST /api/backup
///
/// Takes the raw document so validation errors name the offending word
/// instead of surfacing as a generic body rejection. Replaces every word.
pub async fn import(State(state): State<AppState>, body: String) -> Result<Json<ImportResponse>> {
    let words = parse_backup(&body, now_ms())?;
    let imported = words.len();

    state.store.replace_all(words).await?;
    tracing::info!(imported, "Imported backup");

    Ok(Json(ImportResponse { imported }))
}
