//! Paged clip listing

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{pagination, AppState};

/// Query parameters for the clip listing
#[derive(Debug, Deserialize)]
pub struct ClipsQuery {
    /// Page index (zero-based)
    #[serde(default)]
    pub page: i64,
}

/// One clip as shown in the review grid
#[derive(Debug, Serialize)]
pub struct ClipView {
    pub video_path: String,
    pub filename: String,
    /// Pre-joined metadata display string: `"col: value | col: value"`
    pub metadata: String,
    /// Whether the comment store has an entry for this clip
    pub reviewed: bool,
    /// Stored comment text, or "" when none exists
    pub comment: String,
}

/// Clip page response
#[derive(Debug, Serialize)]
pub struct ClipsResponse {
    pub clips: Vec<ClipView>,
    /// Page index actually served (out-of-range requests are clamped)
    pub page: i64,
    pub total_pages: i64,
    pub total_clips: usize,
    pub clips_per_page: usize,
}

/// GET /api/clips?page=N
///
/// Returns one page of clips joined with their stored comments.
pub async fn get_clips(
    State(state): State<AppState>,
    Query(query): Query<ClipsQuery>,
) -> Json<ClipsResponse> {
    let clips_per_page = state.settings.clips_per_page;
    let page = pagination::paginate(state.table.len(), clips_per_page, query.page);

    let comments = state.comments.read().await;
    let clips = state.table.clips()[page.start..page.end]
        .iter()
        .map(|clip| ClipView {
            video_path: clip.video_path.clone(),
            filename: clip.filename.clone(),
            metadata: clip.metadata_line(),
            reviewed: comments.contains(&clip.filename),
            comment: comments.get(&clip.filename).unwrap_or("").to_string(),
        })
        .collect();

    Json(ClipsResponse {
        clips,
        page: page.index,
        total_pages: page.total_pages,
        total_clips: state.table.len(),
        clips_per_page,
    })
}
