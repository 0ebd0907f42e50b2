//! Habit types and day-keyed completion logs.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub frequency: HabitFrequency,
    /// Target completions per week (7 for strict daily habits).
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_weekly_goal() -> u32 {
    7
}

impl Habit {
    pub fn new(name: impl Into<String>) -> Self {
        Habit {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            icon: None,
            color: None,
            frequency: HabitFrequency::Daily,
            weekly_goal: 7,
            active: true,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitFrequency {
    #[default]
    Daily,
    Weekly,
}

/// One habit's log for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitLog {
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HabitLog {
    pub fn completed() -> Self {
        HabitLog {
            completed: true,
            ..HabitLog::default()
        }
    }
}

/// Habits seeded into a fresh journal.
pub fn default_habits() -> Vec<Habit> {
    let seed = |name: &str, icon: &str, color: &str, weekly_goal: u32| {
        let mut habit = Habit::new(name);
        habit.icon = Some(icon.to_string());
        habit.color = Some(color.to_string());
        habit.weekly_goal = weekly_goal;
        habit
    };

    vec![
        seed("Read", "book-open", "#10B981", 7),
        seed("Exercise", "dumbbell", "#EF4444", 4),
        seed("Meditate", "brain", "#14B8A6", 7),
    ]
}

/// Logs for one calendar day, keyed by habit id.
pub type DayLogs = HashMap<String, HabitLog>;

/// All habit logs, keyed by day. A `BTreeMap` keeps serialized output and
/// iteration in date order.
pub type HabitLogs = BTreeMap<NaiveDate, DayLogs>;

/// Set or replace one habit's log on one day.
pub fn log_habit(logs: &mut HabitLogs, date: NaiveDate, habit_id: &str, log: HabitLog) {
    logs.entry(date).or_default().insert(habit_id.to_string(), log);
}

/// Toggle one habit's completion on one day, returning the new state.
pub fn toggle_habit(logs: &mut HabitLogs, date: NaiveDate, habit_id: &str) -> bool {
    let entry = logs
        .entry(date)
        .or_default()
        .entry(habit_id.to_string())
        .or_default();
    entry.completed = !entry.completed;
    entry.completed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn toggle_flips_and_preserves_other_fields() {
        let mut logs = HabitLogs::new();
        log_habit(
            &mut logs,
            d(2024, 5, 1),
            "h1",
            HabitLog {
                completed: true,
                duration_min: Some(30),
                notes: None,
            },
        );

        assert!(!toggle_habit(&mut logs, d(2024, 5, 1), "h1"));
        let log = &logs[&d(2024, 5, 1)]["h1"];
        assert!(!log.completed);
        assert_eq!(log.duration_min, Some(30));
    }

    #[test]
    fn toggle_creates_missing_log_as_completed() {
        let mut logs = HabitLogs::new();
        assert!(toggle_habit(&mut logs, d(2024, 5, 1), "h1"));
        assert!(logs[&d(2024, 5, 1)]["h1"].completed);
    }

    #[test]
    fn logs_serialize_with_date_keys() {
        let mut logs = HabitLogs::new();
        log_habit(&mut logs, d(2024, 5, 1), "h1", HabitLog::completed());
        let json = serde_json::to_string(&logs).unwrap();
        assert!(json.contains("\"2024-05-01\""));
    }
}
