use anyhow::Result;
use clap::Subcommand;
use lifetrack_core::date::relative_label;
use lifetrack_core::diary::{DiaryEntry, add_entry, set_day_summary};
use owo_colors::OwoColorize;

use crate::dateparse;
use crate::session::Session;

#[derive(Subcommand)]
pub enum DiaryCmd {
    /// Add an entry
    Add {
        text: String,

        /// Mood label (e.g. "good", "tired")
        #[arg(short, long)]
        mood: Option<String>,

        /// Day to write to (default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show a day's entries
    Show {
        /// Date to show (default today)
        date: Option<String>,
    },
    /// Set the day's one-line summary
    Summary {
        text: String,

        /// Day to summarize (default today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

pub fn run(cmd: DiaryCmd) -> Result<()> {
    let mut session = Session::open()?;

    match cmd {
        DiaryCmd::Add { text, mood, date } => {
            let date = dateparse::date_or_today(date.as_deref())?;
            let entry = DiaryEntry::new(text, mood);

            session.edit(|journal| add_entry(&mut journal.diary, date, entry));
            session.commit()?;

            println!("{}", "Entry added".green());
        }

        DiaryCmd::Show { date } => {
            let date = dateparse::date_or_today(date.as_deref())?;
            let today = chrono::Local::now().date_naive();

            println!("{}", relative_label(date, today).bold());

            let Some(day) = session.journal.diary.get(&date) else {
                println!("  {}", "Nothing written".dimmed());
                return Ok(());
            };

            for entry in &day.entries {
                let time = entry.timestamp.format("%H:%M");
                match &entry.mood {
                    Some(mood) => println!(
                        "  {} {} {}",
                        time.dimmed(),
                        entry.text,
                        format!("[{}]", mood).dimmed()
                    ),
                    None => println!("  {} {}", time.dimmed(), entry.text),
                }
            }
            if let Some(summary) = &day.day_summary {
                println!("  {} {}", "Summary:".bold(), summary);
            }
        }

        DiaryCmd::Summary { text, date } => {
            let date = dateparse::date_or_today(date.as_deref())?;

            session.edit(|journal| set_day_summary(&mut journal.diary, date, text));
            session.commit()?;

            println!("{}", "Summary saved".green());
        }
    }

    Ok(())
}
