//! Comment saving endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::api::ApiError;
use crate::AppState;

/// One filename → comment update from the UI
#[derive(Debug, Deserialize)]
pub struct CommentUpdate {
    pub filename: String,
    #[serde(default)]
    pub comment: String,
}

/// POST /api/comments
///
/// Upserts every entry into the comment store (last write wins), then
/// persists the full store plus a timestamped snapshot. The batch is
/// validated before any mutation, so a bad entry leaves the store untouched.
pub async fn save_comments(
    State(state): State<AppState>,
    Json(updates): Json<Vec<CommentUpdate>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if updates.iter().any(|u| u.filename.is_empty()) {
        return Err(ApiError::BadRequest(
            "comment entry with empty filename".to_string(),
        ));
    }

    let mut store = state.comments.write().await;
    for update in &updates {
        store.upsert(&update.filename, &update.comment);
    }
    let snapshot = store.save()?;

    info!(
        "Saved {} comment(s), snapshot {}",
        updates.len(),
        snapshot.display()
    );

    Ok(Json(json!({
        "status": "success",
        "file": snapshot.display().to_string(),
    })))
}
