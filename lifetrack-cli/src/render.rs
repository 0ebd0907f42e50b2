//! Terminal rendering traits for lifetrack types.
//!
//! Extension traits that add colored terminal rendering to core types using
//! owo_colors, so the core crates stay presentation-free.

use lifetrack_core::event::Event;
use lifetrack_core::goal::Goal;
use lifetrack_core::habit::Habit;
use lifetrack_core::streak::StreakSummary;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = match (&self.start_time, &self.end_time) {
            (Some(start), Some(end)) => format!("{}-{}", start, end),
            (Some(start), None) => start.clone(),
            _ => "all-day".to_string(),
        };

        let mut line = format!("{:>11}  {}", time.dimmed(), self.title);

        if let Some(recurrence) = &self.recurrence
            && self.is_recurring()
        {
            let tag = if recurrence.interval > 1 {
                format!("[{} x{}]", recurrence.kind.as_str(), recurrence.interval)
            } else {
                format!("[{}]", recurrence.kind.as_str())
            };
            line.push_str(&format!(" {}", tag.blue()));
        }

        if let Some(location) = &self.location {
            line.push_str(&format!(" {}", format!("@ {}", location).dimmed()));
        }

        line
    }
}

impl Render for Habit {
    fn render(&self) -> String {
        let goal = format!("({}/week)", self.weekly_goal);
        if self.active {
            format!("{} {}", self.name, goal.dimmed())
        } else {
            format!("{} {}", self.name.dimmed(), "(retired)".dimmed())
        }
    }
}

impl Render for StreakSummary {
    fn render(&self) -> String {
        let current = format!("{} day streak", self.current);
        let colored = if self.current > 0 {
            current.green().to_string()
        } else {
            current.dimmed().to_string()
        };
        format!("{} {}", colored, format!("(best {})", self.longest).dimmed())
    }
}

impl Render for Goal {
    fn render(&self) -> String {
        let (done, total) = self.milestone_progress();
        let marker = if self.completed {
            "✓".green().to_string()
        } else {
            "·".dimmed().to_string()
        };

        let mut line = format!("{} {}", marker, self.title);
        if total > 0 {
            line.push_str(&format!(" {}", format!("[{}/{}]", done, total).dimmed()));
        }
        if let Some(target) = self.target_date {
            line.push_str(&format!(" {}", format!("by {}", target).dimmed()));
        }
        line
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            "row" => "rows",
            "entry" => "entries",
            "meal" => "meals",
            _ => word,
        }
    }
}
