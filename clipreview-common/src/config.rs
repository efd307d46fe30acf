//! Configuration resolution for the clip review tool
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (surfaced through clap's `env` attribute)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing or unreadable default config file degrades to compiled defaults
//! with a warning; an explicitly requested config file that cannot be loaded
//! is an error.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8889;
pub const DEFAULT_CLIPS_PER_PAGE: usize = 6;
pub const DEFAULT_PATH_COLUMN: &str = "avipath";
pub const DEFAULT_VIDEO_BASE: &str = "/";

/// Metadata columns shown per clip when nothing else is configured
pub fn default_metadata_columns() -> Vec<String> {
    ["gt_labels", "split", "study_type"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Optional settings loaded from a TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub clips_per_page: Option<usize>,
    pub path_column: Option<String>,
    pub metadata_columns: Option<Vec<String>>,
    pub video_base: Option<String>,
}

impl TomlConfig {
    /// Load config from `explicit` if given, otherwise from the default
    /// location (`<os config dir>/clipreview/config.toml`).
    pub fn load(explicit: Option<&Path>) -> Result<TomlConfig> {
        if let Some(path) = explicit {
            let text = std::fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("cannot read config {}: {}", path.display(), e))
            })?;
            return toml::from_str(&text).map_err(|e| {
                Error::Config(format!("invalid config {}: {}", path.display(), e))
            });
        }

        if let Some(path) = Self::default_location() {
            if path.is_file() {
                match std::fs::read_to_string(&path) {
                    Ok(text) => match toml::from_str(&text) {
                        Ok(config) => return Ok(config),
                        Err(e) => warn!("Ignoring invalid config {}: {}", path.display(), e),
                    },
                    Err(e) => warn!("Ignoring unreadable config {}: {}", path.display(), e),
                }
            }
        }

        Ok(TomlConfig::default())
    }

    /// Default config file path for the platform
    pub fn default_location() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("clipreview").join("config.toml"))
    }
}

/// Command-line overrides (None = not given on the command line)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub clips_per_page: Option<usize>,
    pub path_column: Option<String>,
    pub metadata_columns: Option<Vec<String>>,
    pub video_base: Option<PathBuf>,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Clips shown per page
    pub clips_per_page: usize,
    /// CSV column holding each clip's video path
    pub path_column: String,
    /// CSV columns displayed as per-clip metadata, in display order
    pub metadata_columns: Vec<String>,
    /// Base directory video paths are served relative to
    pub video_base: PathBuf,
}

impl Settings {
    /// Merge command-line overrides, file config, and compiled defaults
    pub fn resolve(cli: Overrides, file: TomlConfig) -> Result<Settings> {
        let clips_per_page = cli
            .clips_per_page
            .or(file.clips_per_page)
            .unwrap_or(DEFAULT_CLIPS_PER_PAGE);
        if clips_per_page == 0 {
            return Err(Error::InvalidInput(
                "clips_per_page must be at least 1".to_string(),
            ));
        }

        Ok(Settings {
            port: cli.port.or(file.port).unwrap_or(DEFAULT_PORT),
            clips_per_page,
            path_column: cli
                .path_column
                .or(file.path_column)
                .unwrap_or_else(|| DEFAULT_PATH_COLUMN.to_string()),
            metadata_columns: cli
                .metadata_columns
                .or(file.metadata_columns)
                .unwrap_or_else(default_metadata_columns),
            video_base: cli
                .video_base
                .or(file.video_base.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_VIDEO_BASE)),
        })
    }
}
