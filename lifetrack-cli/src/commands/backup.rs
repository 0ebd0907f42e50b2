use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use dialoguer::Confirm;
use lifetrack_core::config::Lifetrack;
use lifetrack_core::store::JournalStore;
use owo_colors::OwoColorize;

#[derive(Subcommand)]
pub enum BackupCmd {
    /// Write a dated backup file
    Export {
        /// Directory to write into (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Replace the journal with a backup file
    Import { file: PathBuf },
    /// Delete the journal
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run(cmd: BackupCmd) -> Result<()> {
    let lifetrack = Lifetrack::load()?;
    let store = JournalStore::new(lifetrack.journal_path());

    match cmd {
        BackupCmd::Export { dir } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            let today = chrono::Local::now().date_naive();

            let path = store
                .export_to(&dir, today)
                .context("Failed to export backup")?;

            println!("{}", format!("Exported: {}", path.display()).green());
        }

        BackupCmd::Import { file } => {
            if store.path().exists()
                && !Confirm::new()
                    .with_prompt("This replaces your current journal. Continue?")
                    .default(false)
                    .interact()?
            {
                return Ok(());
            }

            let journal = store
                .import_from(&file)
                .context("Failed to import backup")?;

            println!(
                "{}",
                format!(
                    "Imported {} ({} events, {} habits)",
                    file.display(),
                    journal.calendar.events.len(),
                    journal.habits.habits.len()
                )
                .green()
            );
        }

        BackupCmd::Clear { yes } => {
            if !yes
                && !Confirm::new()
                    .with_prompt("Delete your entire journal?")
                    .default(false)
                    .interact()?
            {
                return Ok(());
            }

            store.clear().context("Failed to clear journal")?;
            println!("{}", "Journal cleared".red());
        }
    }

    Ok(())
}
