use anyhow::Result;
use clap::Subcommand;
use lifetrack_core::habit::{Habit, HabitLog, log_habit};
use lifetrack_core::streak::streaks;
use owo_colors::OwoColorize;

use crate::dateparse;
use crate::render::Render;
use crate::session::Session;

#[derive(Subcommand)]
pub enum HabitCmd {
    /// Add a habit
    Add {
        name: String,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        color: Option<String>,

        /// Target completions per week
        #[arg(long, default_value_t = 7)]
        goal: u32,
    },
    /// List habits with their streaks
    List {
        /// Include retired habits
        #[arg(long)]
        all: bool,
    },
    /// Mark habits done (by name or id)
    Done {
        #[arg(required = true)]
        names: Vec<String>,

        /// Day to log (default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Unmark a habit
    Undo {
        name: String,

        /// Day to unmark (default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Deactivate a habit, keeping its history
    Retire { name: String },
}

pub fn run(cmd: HabitCmd) -> Result<()> {
    let mut session = Session::open()?;

    match cmd {
        HabitCmd::Add {
            name,
            icon,
            color,
            goal,
        } => {
            if session.journal.habits.find(&name).is_some() {
                anyhow::bail!("Habit '{}' already exists", name);
            }

            let mut habit = Habit::new(&name);
            habit.icon = icon;
            habit.color = color;
            habit.weekly_goal = goal;

            session.edit(|journal| journal.habits.habits.push(habit));
            session.commit()?;

            println!("{}", format!("Added habit: {}", name).green());
        }

        HabitCmd::List { all } => {
            let today = chrono::Local::now().date_naive();
            let journal = &session.journal;

            for habit in &journal.habits.habits {
                if !habit.active && !all {
                    continue;
                }
                let summary = streaks(&journal.habits.logs, &habit.id, today);
                println!("  {}  {}", habit.render(), summary.render());
            }
        }

        HabitCmd::Done { names, date } => {
            let date = dateparse::date_or_today(date.as_deref())?;

            for name in &names {
                let Some(habit) = session.journal.habits.find(name) else {
                    anyhow::bail!("No habit named '{}'", name);
                };
                let id = habit.id.clone();
                let label = habit.name.clone();

                session.edit(|journal| {
                    log_habit(&mut journal.habits.logs, date, &id, HabitLog::completed());
                });
                println!("{}", format!("✓ {}", label).green());
            }
            session.commit()?;
        }

        HabitCmd::Undo { name, date } => {
            let date = dateparse::date_or_today(date.as_deref())?;
            let Some(habit) = session.journal.habits.find(&name) else {
                anyhow::bail!("No habit named '{}'", name);
            };
            let id = habit.id.clone();
            let label = habit.name.clone();

            session.edit(|journal| {
                log_habit(&mut journal.habits.logs, date, &id, HabitLog::default());
            });
            session.commit()?;

            println!("Unmarked {} for {}", label, date);
        }

        HabitCmd::Retire { name } => {
            let Some(habit) = session.journal.habits.find(&name) else {
                anyhow::bail!("No habit named '{}'", name);
            };
            let id = habit.id.clone();
            let label = habit.name.clone();

            session.edit(|journal| {
                if let Some(habit) = journal.habits.habits.iter_mut().find(|h| h.id == id) {
                    habit.active = false;
                }
            });
            session.commit()?;

            println!("Retired habit: {}", label);
        }
    }

    Ok(())
}
