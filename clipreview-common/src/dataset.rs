//! In-memory clip dataset loaded from a CSV file
//!
//! One `ClipRecord` per source row. Records are immutable after load and keep
//! their source-row order; rows without a video path are dropped.

use crate::{Error, Result};
use std::path::Path;

/// One clip from the source table
#[derive(Debug, Clone)]
pub struct ClipRecord {
    /// Raw value of the path column, relative to the video base directory
    pub video_path: String,
    /// Final path component of `video_path`; keys the comment store
    pub filename: String,
    /// Configured metadata columns as (column, value) pairs, in display order
    pub metadata: Vec<(String, String)>,
}

impl ClipRecord {
    /// Display string for the metadata pairs: `"col: value | col: value"`
    pub fn metadata_line(&self) -> String {
        self.metadata
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// The full clip table held in memory
#[derive(Debug)]
pub struct ClipTable {
    clips: Vec<ClipRecord>,
}

impl ClipTable {
    /// Load the table from a CSV file.
    ///
    /// Validates that `path_column` and every metadata column exist in the
    /// header. Rows whose path cell is empty are skipped.
    pub fn load(csv_path: &Path, path_column: &str, metadata_columns: &[String]) -> Result<Self> {
        if !csv_path.is_file() {
            return Err(Error::NotFound(format!(
                "dataset CSV not found: {}",
                csv_path.display()
            )));
        }

        let mut reader = csv::Reader::from_path(csv_path)?;
        let headers = reader.headers()?.clone();

        let missing: Vec<&str> = std::iter::once(path_column)
            .chain(metadata_columns.iter().map(|c| c.as_str()))
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(Error::InvalidInput(format!(
                "CSV is missing required columns: {}",
                missing.join(", ")
            )));
        }

        let column_index = |name: &str| headers.iter().position(|h| h == name);
        // Unwraps cannot fail: columns were validated above
        let path_index = column_index(path_column).unwrap();
        let metadata_indices: Vec<(String, usize)> = metadata_columns
            .iter()
            .map(|name| (name.clone(), column_index(name).unwrap()))
            .collect();

        let mut clips = Vec::new();
        for record in reader.records() {
            let record = record?;
            let video_path = record.get(path_index).unwrap_or("");
            if video_path.is_empty() {
                continue;
            }

            let filename = video_path
                .rsplit('/')
                .next()
                .unwrap_or(video_path)
                .to_string();
            let metadata = metadata_indices
                .iter()
                .map(|(name, index)| {
                    (name.clone(), record.get(*index).unwrap_or("").to_string())
                })
                .collect();

            clips.push(ClipRecord {
                video_path: video_path.to_string(),
                filename,
                metadata,
            });
        }

        Ok(ClipTable { clips })
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn clips(&self) -> &[ClipRecord] {
        &self.clips
    }

    /// Check that the video files for the first `sample` clips exist under
    /// `base`. Catches a misconfigured video base before the server starts.
    pub fn check_video_files(&self, base: &Path, sample: usize) -> Result<()> {
        for clip in self.clips.iter().take(sample) {
            let full_path = base.join(clip.video_path.trim_start_matches('/'));
            if !full_path.is_file() {
                return Err(Error::NotFound(format!(
                    "video file not found: {}",
                    full_path.display()
                )));
            }
        }
        Ok(())
    }
}
