use std::path::PathBuf;

use anyhow::Result;
use lifetrack_core::config::{Lifetrack, LifetrackConfig};
use owo_colors::OwoColorize;

pub fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let mut lifetrack = Lifetrack::load()?;

    if let Some(dir) = data_dir {
        lifetrack.set_data_dir(dir)?;
        println!("{}", "Updated data directory".green());
    }

    let config_path = LifetrackConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!(
        "  Data:     {} {}",
        lifetrack.display_path().display(),
        format!("({})", lifetrack.data_path().display()).dimmed()
    );
    println!("  Journal:  {}", lifetrack.journal_path().display());
    println!("  Tables:   {}", lifetrack.tables_path().display());

    Ok(())
}
