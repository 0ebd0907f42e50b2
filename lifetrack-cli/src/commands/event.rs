use anyhow::Result;
use clap::Subcommand;
use dialoguer::Confirm;
use lifetrack_core::date::relative_label;
use lifetrack_core::event::{Event, Recurrence, RecurrenceKind};
use lifetrack_core::recurrence::events_on;
use owo_colors::OwoColorize;

use crate::dateparse;
use crate::render::{Render, pluralize};
use crate::session::Session;

#[derive(Subcommand)]
pub enum EventCmd {
    /// Add an event
    Add {
        title: String,

        /// Event date (YYYY-MM-DD or natural language, default today)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long)]
        end: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Repeat: daily, weekly, monthly or yearly
        #[arg(short, long)]
        repeat: Option<String>,

        /// Repeat every N periods
        #[arg(long, default_value_t = 1)]
        every: i32,

        /// Last date the repeat may fall on
        #[arg(long)]
        until: Option<String>,
    },
    /// Replace fields on an event (for recurring events, the whole series)
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// New anchor date
        #[arg(short, long)]
        date: Option<String>,

        /// New start time (HH:MM)
        #[arg(long)]
        start: Option<String>,

        /// New end time (HH:MM)
        #[arg(long)]
        end: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        /// New repeat kind, or "none" to stop the series
        #[arg(short, long)]
        repeat: Option<String>,

        /// Repeat every N periods
        #[arg(long)]
        every: Option<i32>,

        /// Last date the repeat may fall on
        #[arg(long)]
        until: Option<String>,
    },
    /// List events on a day
    List {
        /// Date to list (default today)
        date: Option<String>,
    },
    /// Delete an event (for recurring events, the whole series)
    Rm {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run(cmd: EventCmd) -> Result<()> {
    let mut session = Session::open()?;

    match cmd {
        EventCmd::Add {
            title,
            date,
            start,
            end,
            location,
            description,
            color,
            category,
            repeat,
            every,
            until,
        } => {
            let date = dateparse::date_or_today(date.as_deref())?;

            let mut event = Event::new(title, date);
            event.start_time = start;
            event.end_time = end;
            event.location = location;
            event.description = description;
            event.color = color;
            event.category = category;

            if let Some(repeat) = repeat {
                let kind = RecurrenceKind::parse(&repeat);
                if matches!(kind, RecurrenceKind::Unknown | RecurrenceKind::None) {
                    anyhow::bail!(
                        "Unknown repeat '{}'. Use daily, weekly, monthly or yearly.",
                        repeat
                    );
                }
                if every < 1 {
                    anyhow::bail!("Repeat interval must be at least 1");
                }

                let mut recurrence = Recurrence::new(kind, every);
                recurrence.end_date = until
                    .as_deref()
                    .map(dateparse::parse_date_arg)
                    .transpose()?;
                event.recurrence = Some(recurrence);
            }

            let created = event.title.clone();
            session.edit(|journal| journal.calendar.add(event));
            session.commit()?;

            println!("{}", format!("Created: {}", created).green());
        }

        EventCmd::Edit {
            id,
            title,
            date,
            start,
            end,
            location,
            repeat,
            every,
            until,
        } => {
            if session.journal.calendar.find(&id).is_none() {
                anyhow::bail!("No event with id '{}'", id);
            }

            let date = date.as_deref().map(dateparse::parse_date_arg).transpose()?;
            let until = until
                .as_deref()
                .map(dateparse::parse_date_arg)
                .transpose()?;
            let kind = repeat
                .as_deref()
                .map(|r| {
                    let kind = RecurrenceKind::parse(r);
                    if kind == RecurrenceKind::Unknown {
                        anyhow::bail!(
                            "Unknown repeat '{}'. Use none, daily, weekly, monthly or yearly.",
                            r
                        );
                    }
                    Ok(kind)
                })
                .transpose()?;
            if let Some(every) = every
                && every < 1
            {
                anyhow::bail!("Repeat interval must be at least 1");
            }

            session.edit(|journal| {
                let Some(event) = journal.calendar.find_mut(&id) else {
                    return;
                };
                if let Some(title) = title {
                    event.title = title;
                }
                if let Some(date) = date {
                    event.date = date;
                }
                if let Some(start) = start {
                    event.start_time = Some(start);
                }
                if let Some(end) = end {
                    event.end_time = Some(end);
                }
                if let Some(location) = location {
                    event.location = Some(location);
                }

                if let Some(kind) = kind {
                    if kind == RecurrenceKind::None {
                        event.recurrence = None;
                    } else {
                        let recurrence = event
                            .recurrence
                            .get_or_insert_with(|| Recurrence::new(kind, 1));
                        recurrence.kind = kind;
                    }
                }
                if let Some(recurrence) = &mut event.recurrence {
                    if let Some(every) = every {
                        recurrence.interval = every;
                    }
                    if let Some(until) = until {
                        recurrence.end_date = Some(until);
                    }
                }
            });
            session.commit()?;

            println!("{}", "Updated".green());
        }

        EventCmd::List { date } => {
            let date = dateparse::date_or_today(date.as_deref())?;
            let today = chrono::Local::now().date_naive();
            let events = events_on(&session.journal.calendar.events, date);

            println!("{}", relative_label(date, today).bold());

            if events.is_empty() {
                println!("  {}", "No events".dimmed());
                return Ok(());
            }

            for event in &events {
                println!("  {}", event.render());
                println!("             {}", event.id.dimmed());
            }
            println!(
                "{}",
                format!("  {} {}", events.len(), pluralize("event", events.len())).dimmed()
            );
        }

        EventCmd::Rm { id, yes } => {
            let Some(event) = session.journal.calendar.find(&id) else {
                anyhow::bail!("No event with id '{}'", id);
            };
            let title = event.title.clone();
            let recurring = event.is_recurring();

            if !yes {
                let prompt = if recurring {
                    format!("Delete '{}' and its whole series?", title)
                } else {
                    format!("Delete '{}'?", title)
                };
                if !Confirm::new().with_prompt(prompt).default(false).interact()? {
                    return Ok(());
                }
            }

            session.edit(|journal| {
                journal.calendar.remove(&id);
            });
            session.commit()?;

            println!("{}", format!("Deleted: {}", title).red());
        }
    }

    Ok(())
}
