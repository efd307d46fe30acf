//! HTTP API handlers for clipreview-ui

pub mod clips;
pub mod comments;
pub mod error;
pub mod health;
pub mod ui;

pub use clips::get_clips;
pub use comments::save_comments;
pub use error::ApiError;
pub use health::health_routes;
pub use ui::{serve_app_js, serve_index};
