use anyhow::Result;
use clap::Subcommand;
use chrono::Datelike;
use owo_colors::OwoColorize;

use lifetrack_core::reflection::PeriodicReflection;

use crate::dateparse;
use crate::session::Session;

#[derive(Subcommand)]
pub enum ReflectCmd {
    /// Write (or show) the daily reflection
    Daily {
        /// Day to reflect on (default today)
        #[arg(short, long)]
        date: Option<String>,

        #[arg(long)]
        went_well: Option<String>,

        #[arg(long)]
        improve: Option<String>,

        #[arg(long)]
        gratitude: Option<String>,
    },
    /// Add a weekly reflection
    Weekly {
        text: String,

        /// Period label, e.g. "2026-W12" (default: the current ISO week)
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Add a monthly reflection
    Monthly {
        text: String,

        /// Period label, e.g. "2026-03" (default: the current month)
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Show recent weekly and monthly reflections
    List,
}

pub fn run(cmd: ReflectCmd) -> Result<()> {
    let mut session = Session::open()?;

    match cmd {
        ReflectCmd::Daily {
            date,
            went_well,
            improve,
            gratitude,
        } => {
            let date = dateparse::date_or_today(date.as_deref())?;

            if went_well.is_none() && improve.is_none() && gratitude.is_none() {
                // Nothing to write: show what's there
                match session.journal.reflections.daily.get(&date) {
                    Some(daily) => {
                        println!("{}", date.to_string().bold());
                        if let Some(text) = &daily.went_well {
                            println!("  {} {}", "Went well:".green(), text);
                        }
                        if let Some(text) = &daily.could_improve {
                            println!("  {} {}", "Improve:".yellow(), text);
                        }
                        if let Some(text) = &daily.gratitude {
                            println!("  {} {}", "Grateful:".blue(), text);
                        }
                    }
                    None => println!("{}", "No reflection for that day".dimmed()),
                }
                return Ok(());
            }

            session.edit(|journal| {
                journal
                    .reflections
                    .upsert_daily(date, went_well, improve, gratitude);
            });
            session.commit()?;

            println!("{}", "Reflection saved".green());
        }

        ReflectCmd::Weekly { text, period } => {
            let period = period.unwrap_or_else(current_week_label);
            let reflection = PeriodicReflection::new(&period, text);

            session.edit(|journal| journal.reflections.weekly.push(reflection));
            session.commit()?;

            println!("{}", format!("Weekly reflection saved ({})", period).green());
        }

        ReflectCmd::Monthly { text, period } => {
            let period = period.unwrap_or_else(current_month_label);
            let reflection = PeriodicReflection::new(&period, text);

            session.edit(|journal| journal.reflections.monthly.push(reflection));
            session.commit()?;

            println!("{}", format!("Monthly reflection saved ({})", period).green());
        }

        ReflectCmd::List => {
            let reflections = &session.journal.reflections;

            if !reflections.weekly.is_empty() {
                println!("{}", "Weekly".bold());
                for reflection in reflections.weekly.iter().rev().take(8) {
                    println!("  {} {}", reflection.period.dimmed(), reflection.text);
                }
            }
            if !reflections.monthly.is_empty() {
                println!("{}", "Monthly".bold());
                for reflection in reflections.monthly.iter().rev().take(6) {
                    println!("  {} {}", reflection.period.dimmed(), reflection.text);
                }
            }
            if reflections.weekly.is_empty() && reflections.monthly.is_empty() {
                println!("{}", "No reflections yet".dimmed());
            }
        }
    }

    Ok(())
}

fn current_week_label() -> String {
    let today = chrono::Local::now().date_naive();
    let week = today.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

fn current_month_label() -> String {
    let today = chrono::Local::now().date_naive();
    format!("{}-{:02}", today.year(), today.month())
}
