use anyhow::Result;
use lifetrack_core::recurrence::events_on;
use lifetrack_core::reminders::upcoming_events;
use lifetrack_core::streak::{completion_rate, streaks};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::session::Session;

pub fn run() -> Result<()> {
    let session = Session::open()?;
    let journal = &session.journal;
    let today = chrono::Local::now().date_naive();

    println!("{}", today.format("%A, %B %-d").to_string().bold());

    // Events
    let events = events_on(&journal.calendar.events, today);
    println!("\n{}", "Events".bold());
    if events.is_empty() {
        println!("  {}", "Nothing scheduled".dimmed());
    } else {
        for event in &events {
            println!("  {}", event.render());
        }
    }
    let tomorrow = upcoming_events(&journal.calendar.events, today);
    if !tomorrow.is_empty() {
        println!("  {}", format!("({} tomorrow)", tomorrow.len()).dimmed());
    }

    // Habits
    let day_logs = journal.habits.logs.get(&today);
    let rate = completion_rate(&journal.habits.habits, day_logs);
    println!("\n{} {}", "Habits".bold(), format!("{}%", rate).green());
    for habit in journal.habits.active() {
        let done = day_logs
            .and_then(|logs| logs.get(&habit.id))
            .is_some_and(|l| l.completed);
        let mark = if done {
            "✓".green().to_string()
        } else {
            "·".dimmed().to_string()
        };
        let summary = streaks(&journal.habits.logs, &habit.id, today);
        println!("  {} {}  {}", mark, habit.name, summary.render());
    }

    // Kcal
    let total = journal.nutrition.day_total(today);
    let target = journal.nutrition.target_kcal;
    let kcal = format!("{}/{} kcal", total, target);
    let kcal = if total > target {
        kcal.red().to_string()
    } else {
        kcal.green().to_string()
    };
    println!("\n{} {}", "Nutrition".bold(), kcal);

    // Open goals
    let open: Vec<_> = journal.goals.goals.iter().filter(|g| !g.completed).collect();
    if !open.is_empty() {
        println!("\n{}", "Goals".bold());
        for goal in open {
            println!("  {}", goal.render());
        }
    }

    Ok(())
}
