//! A loaded journal plus the bookkeeping to save it back.

use std::time::Instant;

use anyhow::{Context, Result};
use lifetrack_core::config::Lifetrack;
use lifetrack_core::journal::Journal;
use lifetrack_core::store::{DebouncedSaver, JournalStore, SIZE_WARN_BYTES};
use owo_colors::OwoColorize;

pub struct Session {
    pub journal: Journal,
    store: JournalStore,
    saver: DebouncedSaver,
}

impl Session {
    pub fn open() -> Result<Self> {
        let lifetrack = Lifetrack::load()?;
        let store = JournalStore::new(lifetrack.journal_path());
        let journal = store.load().context("Failed to load journal")?;

        Ok(Session {
            journal,
            store,
            saver: DebouncedSaver::default(),
        })
    }

    /// Apply one edit to the journal. Edits coalesce; nothing hits disk
    /// until `commit`.
    pub fn edit(&mut self, f: impl FnOnce(&mut Journal)) {
        f(&mut self.journal);
        self.saver.mark_dirty(Instant::now());
    }

    /// Flush pending edits, warning once the document grows large.
    pub fn commit(&mut self) -> Result<()> {
        if !self.saver.take_pending() {
            return Ok(());
        }

        let bytes = self
            .store
            .save(&self.journal)
            .context("Failed to save journal")?;

        if bytes > SIZE_WARN_BYTES {
            eprintln!(
                "{}",
                format!(
                    "Journal is {} KB. Consider exporting a backup and pruning old entries.",
                    bytes / 1024
                )
                .yellow()
            );
        }

        Ok(())
    }
}
