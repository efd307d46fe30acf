//! clipreview-ui library - web UI for reviewing labeled video clips
//!
//! Pages through a clip dataset loaded from CSV, shows per-clip metadata, and
//! lets a reviewer attach free-text comments that persist to disk.

use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::{services::ServeDir, trace::TraceLayer};

use clipreview_common::comments::CommentStore;
use clipreview_common::config::Settings;
use clipreview_common::dataset::ClipTable;

pub mod api;
pub mod pagination;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Clip dataset, immutable after load
    pub table: Arc<ClipTable>,
    /// Comment store; writes take the write lock and persist inside it
    pub comments: Arc<RwLock<CommentStore>>,
    /// Resolved runtime settings
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create new application state
    pub fn new(table: ClipTable, comments: CommentStore, settings: Settings) -> Self {
        Self {
            table: Arc::new(table),
            comments: Arc::new(RwLock::new(comments)),
            settings: Arc::new(settings),
        }
    }
}

/// Build application router
///
/// `/video` serves files straight out of the configured video base directory
/// with byte-range support and path traversal protection.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let video_dir = ServeDir::new(&state.settings.video_base);

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/clips", get(api::get_clips))
        .route("/api/comments", post(api::save_comments))
        .merge(api::health_routes())
        .nest_service("/video", video_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
