//! clipreview-ui - Main entry point
//!
//! Loads the clip dataset and comment store, then serves the review UI over
//! HTTP until interrupted.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clipreview_common::comments::CommentStore;
use clipreview_common::config::{Overrides, Settings, TomlConfig};
use clipreview_common::dataset::ClipTable;
use clipreview_ui::{build_router, AppState};

/// Number of leading dataset rows whose video files are checked at startup
const VIDEO_SAMPLE_CHECK: usize = 10;

/// Command-line arguments for clipreview-ui
#[derive(Parser, Debug)]
#[command(name = "clipreview-ui")]
#[command(about = "Web UI for reviewing labeled video clips")]
#[command(version)]
struct Args {
    /// CSV file listing clips, one row per clip
    csv_path: PathBuf,

    /// Directory where comment CSVs are written
    comments_path: PathBuf,

    /// Port to listen on
    #[arg(short, long, env = "CLIPREVIEW_PORT")]
    port: Option<u16>,

    /// Base directory clip video paths are resolved against
    #[arg(long, env = "CLIPREVIEW_VIDEO_BASE")]
    video_base: Option<PathBuf>,

    /// CSV column holding each clip's video path
    #[arg(long, env = "CLIPREVIEW_PATH_COLUMN")]
    path_column: Option<String>,

    /// Comma-separated metadata columns to display per clip
    #[arg(long, env = "CLIPREVIEW_METADATA_COLUMNS", value_delimiter = ',')]
    metadata_columns: Option<Vec<String>>,

    /// Clips shown per page
    #[arg(long, env = "CLIPREVIEW_CLIPS_PER_PAGE")]
    clips_per_page: Option<usize>,

    /// TOML config file (defaults to <config dir>/clipreview/config.toml)
    #[arg(long, env = "CLIPREVIEW_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clipreview_ui=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!(
        "Starting Clip Review UI (clipreview-ui) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let file_config =
        TomlConfig::load(args.config.as_deref()).context("Failed to load config file")?;
    let settings = Settings::resolve(
        Overrides {
            port: args.port,
            clips_per_page: args.clips_per_page,
            path_column: args.path_column,
            metadata_columns: args.metadata_columns,
            video_base: args.video_base,
        },
        file_config,
    )?;

    info!("Dataset: {}", args.csv_path.display());
    info!("Comments directory: {}", args.comments_path.display());
    info!("Video base: {}", settings.video_base.display());

    let table = ClipTable::load(
        &args.csv_path,
        &settings.path_column,
        &settings.metadata_columns,
    )
    .context("Failed to load clip dataset")?;
    info!("Loaded {} clips", table.len());

    table
        .check_video_files(&settings.video_base, VIDEO_SAMPLE_CHECK)
        .context("Video file check failed")?;

    let comments = CommentStore::open(&args.comments_path).context("Failed to open comment store")?;
    if !comments.is_empty() {
        info!("Loaded {} existing comment(s)", comments.len());
    }

    let port = settings.port;
    let state = AppState::new(table, comments, settings);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("clipreview-ui listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        }
    }
}
