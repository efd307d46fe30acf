//! CSV-backed comment store
//!
//! Maps clip filename to the latest comment text. The backing `comments.csv`
//! is rewritten in full after every save (last write wins); each save also
//! leaves a timestamped snapshot alongside it.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Name of the live comments file inside the comments directory
pub const COMMENTS_FILE: &str = "comments.csv";

/// One filename → comment association
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEntry {
    pub filename: String,
    #[serde(rename = "comments")]
    pub comment: String,
}

/// In-memory comment store persisted to CSV
///
/// Entries keep first-insertion order in the persisted file. Empty-string
/// comments are legal values and survive a load/save round trip.
#[derive(Debug)]
pub struct CommentStore {
    dir: PathBuf,
    entries: Vec<CommentEntry>,
    index: HashMap<String, usize>,
}

impl CommentStore {
    /// Open the store rooted at `dir`, creating the directory if missing and
    /// loading an existing `comments.csv` if present.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;

        let mut store = CommentStore {
            dir,
            entries: Vec::new(),
            index: HashMap::new(),
        };

        let file = store.comments_file();
        if file.is_file() {
            let mut reader = csv::Reader::from_path(&file)?;
            for entry in reader.deserialize::<CommentEntry>() {
                store.insert(entry?);
            }
        }

        Ok(store)
    }

    /// Path of the live comments file
    pub fn comments_file(&self) -> PathBuf {
        self.dir.join(COMMENTS_FILE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.index.contains_key(filename)
    }

    /// Latest comment text for `filename`, if any
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.index
            .get(filename)
            .map(|&i| self.entries[i].comment.as_str())
    }

    /// Insert or overwrite the comment for `filename` (in memory only)
    pub fn upsert(&mut self, filename: &str, comment: &str) {
        self.insert(CommentEntry {
            filename: filename.to_string(),
            comment: comment.to_string(),
        });
    }

    fn insert(&mut self, entry: CommentEntry) {
        match self.index.get(&entry.filename) {
            Some(&i) => self.entries[i].comment = entry.comment,
            None => {
                self.index.insert(entry.filename.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Persist the full store: rewrite `comments.csv`, then write a
    /// timestamped snapshot. Returns the snapshot path.
    pub fn save(&self) -> Result<PathBuf> {
        self.write_to(&self.comments_file())?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let snapshot = self.dir.join(format!("comments_{}.csv", timestamp));
        self.write_to(&snapshot)?;

        Ok(snapshot)
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        // Header is written explicitly so an empty store still produces a
        // well-formed file
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(["filename", "comments"])?;
        for entry in &self.entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }
}
