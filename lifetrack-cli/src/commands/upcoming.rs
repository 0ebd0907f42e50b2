use anyhow::Result;
use lifetrack_core::reminders::upcoming_events;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};
use crate::session::Session;

pub fn run() -> Result<()> {
    let session = Session::open()?;
    let today = chrono::Local::now().date_naive();

    let upcoming = upcoming_events(&session.journal.calendar.events, today);

    println!("{}", "Tomorrow".bold());

    if upcoming.is_empty() {
        println!("  {}", "Nothing scheduled".dimmed());
        return Ok(());
    }

    for event in &upcoming {
        println!("  {}", event.render());
    }
    println!(
        "{}",
        format!("  {} {}", upcoming.len(), pluralize("event", upcoming.len())).dimmed()
    );

    Ok(())
}
