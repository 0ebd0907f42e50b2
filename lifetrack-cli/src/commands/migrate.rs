use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use lifetrack_core::config::Lifetrack;
use lifetrack_core::store::{JournalStore, TABLES, TableStore, migrate_to_tables};
use owo_colors::OwoColorize;

use crate::render::pluralize;

pub fn run() -> Result<()> {
    let lifetrack = Lifetrack::load()?;
    let store = JournalStore::new(lifetrack.journal_path());
    let journal = store.load().context("Failed to load journal")?;
    let tables = TableStore::new(lifetrack.tables_path());

    let bar = ProgressBar::new(TABLES.len() as u64);
    bar.set_style(ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")?);

    let report = migrate_to_tables(&journal, &tables, |table| {
        bar.set_message(table.to_string());
        bar.inc(1);
    })
    .context("Migration failed")?;

    bar.finish_and_clear();

    println!("{}", "Migrated journal to tables:".bold());
    for (table, rows) in &report.tables {
        println!(
            "  {:<22} {}",
            table,
            format!("{} {}", rows, pluralize("row", *rows)).dimmed()
        );
    }
    println!(
        "{}",
        format!(
            "{} rows written to {}",
            report.total_rows(),
            lifetrack.tables_path().display()
        )
        .green()
    );

    Ok(())
}
