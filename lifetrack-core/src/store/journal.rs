//! Journal-file persistence: one versioned JSON document on disk.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{LifeTrackError, LifeTrackResult};
use crate::journal::{JOURNAL_VERSION, Journal};

/// Saves above this size are worth flagging to the user; the document is
/// loaded whole on every run.
pub const SIZE_WARN_BYTES: u64 = 4 * 1024 * 1024;

/// Reads and writes the journal document at a fixed path.
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JournalStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the journal, creating a default document on first run.
    ///
    /// Documents written by older versions load permissively: missing
    /// sections deserialize to their defaults, and the upgraded document is
    /// written back with the current version.
    pub fn load(&self) -> LifeTrackResult<Journal> {
        if !self.path.exists() {
            let journal = Journal::default();
            self.save(&journal)?;
            return Ok(journal);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let mut journal: Journal = serde_json::from_str(&content)
            .map_err(|e| LifeTrackError::Serialization(e.to_string()))?;

        if journal.version != JOURNAL_VERSION {
            journal.version = JOURNAL_VERSION.to_string();
            self.save(&journal)?;
        }

        Ok(journal)
    }

    /// Write the journal, returning the document size in bytes so callers
    /// can warn once it grows past `SIZE_WARN_BYTES`.
    pub fn save(&self, journal: &Journal) -> LifeTrackResult<u64> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string(journal)
            .map_err(|e| LifeTrackError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, &content)?;

        Ok(content.len() as u64)
    }

    /// Export a pretty-printed backup (`lifetrack-backup-YYYY-MM-DD.json`)
    /// into `dir`, returning the created path.
    pub fn export_to(&self, dir: &Path, today: NaiveDate) -> LifeTrackResult<PathBuf> {
        let journal = self.load()?;
        let content = serde_json::to_string_pretty(&journal)
            .map_err(|e| LifeTrackError::Serialization(e.to_string()))?;

        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("lifetrack-backup-{}.json", today.format("%Y-%m-%d")));
        std::fs::write(&path, content)?;

        Ok(path)
    }

    /// Import a backup file, replacing the current journal.
    ///
    /// The file must at least carry `version` and `settings` keys; anything
    /// else is rejected before the current journal is touched.
    pub fn import_from(&self, file: &Path) -> LifeTrackResult<Journal> {
        let content = std::fs::read_to_string(file)?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| LifeTrackError::Serialization(e.to_string()))?;

        if value.get("version").is_none() || value.get("settings").is_none() {
            return Err(LifeTrackError::InvalidData(
                "not a lifetrack backup (missing version/settings)".into(),
            ));
        }

        let journal: Journal = serde_json::from_value(value)
            .map_err(|e| LifeTrackError::Serialization(e.to_string()))?;
        self.save(&journal)?;

        Ok(journal)
    }

    /// Delete the journal file. A missing file is not an error.
    pub fn clear(&self) -> LifeTrackResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
