use std::time::Duration;

use anyhow::{Context, Result};
use lifetrack_core::config::Lifetrack;
use lifetrack_core::event::Event;
use lifetrack_core::reminders::ReminderLedger;
use lifetrack_core::store::JournalStore;
use notify_rust::Notification;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(watch: bool, interval: u64, enable: bool, disable: bool) -> Result<()> {
    if enable || disable {
        let mut session = Session::open()?;
        session.edit(|journal| journal.settings.reminders_enabled = enable);
        session.commit()?;

        if disable {
            println!("Reminders disabled");
            return Ok(());
        }
        println!("{}", "Reminders enabled".green());
    }

    let lifetrack = Lifetrack::load()?;
    let store = JournalStore::new(lifetrack.journal_path());

    let journal = store.load()?;
    if !journal.settings.reminders_enabled {
        println!(
            "{}",
            "Reminders are off. Enable them with: lifetrack remind --enable".dimmed()
        );
        return Ok(());
    }

    // The ledger lives for this run only: each event is announced at most
    // once per invocation, and a fresh run may announce again.
    let mut ledger = ReminderLedger::new();

    loop {
        let journal = store.load()?;
        let today = chrono::Local::now().date_naive();

        let due = ledger.due(&journal.calendar.events, today);
        for event in due {
            notify(event).context("Failed to post desktop notification")?;
            println!("Reminded: {}", event.title);
        }

        if !watch {
            break;
        }
        std::thread::sleep(Duration::from_secs(interval * 60));
    }

    Ok(())
}

fn notify(event: &Event) -> Result<()> {
    let mut body = format!("Date: {}", event.date.format("%Y-%m-%d"));
    if let Some(start) = &event.start_time {
        body.push_str(&format!(" at {}", start));
    }
    if let Some(location) = &event.location {
        body.push_str(&format!("\nLocation: {}", location));
    }

    Notification::new()
        .summary(&event.title)
        .body(&body)
        .show()?;

    Ok(())
}
