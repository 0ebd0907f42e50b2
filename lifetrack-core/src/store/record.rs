//! Table records: the snake_case row shapes of the table store.
//!
//! Domain types serialize camelCase inside the journal document; the table
//! store uses flat snake_case rows instead. These records and their
//! conversion functions are the only place that knows the at-rest column
//! names, so nothing in the core depends on storage-specific naming.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::{Category, CollectionItem};
use crate::diary::{DayDiary, Diary, DiaryEntry};
use crate::error::{LifeTrackError, LifeTrackResult};
use crate::event::{Event, Recurrence, RecurrenceKind};
use crate::goal::{Goal, Milestone, ProgressPoint};
use crate::habit::{Habit, HabitFrequency, HabitLog, HabitLogs};
use crate::idea::{Idea, IdeaStatus};
use crate::nutrition::{Meal, MealType, Nutrition};
use crate::reflection::{DailyReflection, PeriodicReflection, Reflections};
use crate::settings::Settings;

/// Wall-clock fallback for events stored without a time of day; the
/// `start_time` column is non-nullable.
const DEFAULT_START_TIME: &str = "09:00";

// =============================================================================
// Events
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    /// Combined date and wall-clock time, `YYYY-MM-DDTHH:MM:SS`.
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub recurrence_type: Option<String>,
    #[serde(default)]
    pub recurrence_interval: Option<i32>,
    #[serde(default)]
    pub recurrence_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub fn event_to_record(event: &Event) -> EventRecord {
    let time = event.start_time.as_deref().unwrap_or(DEFAULT_START_TIME);
    let start_time = format!("{}T{}:00", event.date.format("%Y-%m-%d"), time);

    let (recurrence_type, recurrence_interval, recurrence_end_date) = match &event.recurrence {
        Some(r) => (
            Some(r.kind.as_str().to_string()),
            Some(r.interval),
            r.end_date,
        ),
        None => (None, None, None),
    };

    EventRecord {
        id: event.id.clone(),
        title: event.title.clone(),
        start_time,
        end_time: event.end_time.clone(),
        recurrence_type,
        recurrence_interval,
        recurrence_end_date,
        color: event.color.clone(),
        category: event.category.clone(),
        location: event.location.clone(),
        description: event.description.clone(),
        created_at: event.created_at,
    }
}

/// Rebuild an event from its row.
///
/// The combined `start_time` column splits back into the anchor date and an
/// `HH:MM` time of day. An event stored through the 09:00 fallback comes
/// back with an explicit 09:00 start; the fallback is not reversible.
pub fn event_from_record(record: EventRecord) -> LifeTrackResult<Event> {
    let (date_part, time_part) = record
        .start_time
        .split_once('T')
        .ok_or_else(|| bad_column("events", &record.id, "start_time", &record.start_time))?;

    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| bad_column("events", &record.id, "start_time", &record.start_time))?;
    let start_time = Some(time_part.chars().take(5).collect::<String>());

    let recurrence = record.recurrence_type.map(|kind| Recurrence {
        kind: RecurrenceKind::parse(&kind),
        interval: record.recurrence_interval.unwrap_or(1),
        end_date: record.recurrence_end_date,
    });

    Ok(Event {
        id: record.id,
        title: record.title,
        date,
        start_time,
        end_time: record.end_time,
        recurrence,
        color: record.color,
        category: record.category,
        location: record.location,
        description: record.description,
        created_at: record.created_at,
    })
}

fn bad_column(table: &str, id: &str, column: &str, value: &str) -> LifeTrackError {
    LifeTrackError::InvalidData(format!("{table}.{column} for '{id}': '{value}'"))
}

// =============================================================================
// Habits
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub frequency: String,
    pub weekly_goal: u32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

pub fn habit_to_record(habit: &Habit) -> HabitRecord {
    HabitRecord {
        id: habit.id.clone(),
        name: habit.name.clone(),
        icon: habit.icon.clone(),
        color: habit.color.clone(),
        frequency: match habit.frequency {
            HabitFrequency::Daily => "daily".to_string(),
            HabitFrequency::Weekly => "weekly".to_string(),
        },
        weekly_goal: habit.weekly_goal,
        active: habit.active,
        created_at: habit.created_at,
    }
}

pub fn habit_from_record(record: HabitRecord) -> Habit {
    Habit {
        id: record.id,
        name: record.name,
        icon: record.icon,
        color: record.color,
        frequency: match record.frequency.as_str() {
            "weekly" => HabitFrequency::Weekly,
            _ => HabitFrequency::Daily,
        },
        weekly_goal: record.weekly_goal,
        active: record.active,
        created_at: record.created_at,
    }
}

/// One habit-log row: the nested day map flattened for storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitLogRecord {
    pub date: NaiveDate,
    pub habit_id: String,
    pub completed: bool,
    #[serde(default)]
    pub duration_min: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

pub fn flatten_habit_logs(logs: &HabitLogs) -> Vec<HabitLogRecord> {
    let mut rows = Vec::new();
    for (date, day) in logs {
        for (habit_id, log) in day {
            rows.push(HabitLogRecord {
                date: *date,
                habit_id: habit_id.clone(),
                completed: log.completed,
                duration_min: log.duration_min,
                notes: log.notes.clone(),
            });
        }
    }
    rows
}

pub fn rebuild_habit_logs(rows: Vec<HabitLogRecord>) -> HabitLogs {
    let mut logs = HabitLogs::new();
    for row in rows {
        logs.entry(row.date).or_default().insert(
            row.habit_id,
            HabitLog {
                completed: row.completed,
                duration_min: row.duration_min,
                notes: row.notes,
            },
        );
    }
    logs
}

// =============================================================================
// Diary
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntryRecord {
    pub id: String,
    pub date: NaiveDate,
    pub text: String,
    #[serde(default)]
    pub mood: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySummaryRecord {
    pub date: NaiveDate,
    pub summary: String,
}

pub fn flatten_diary(diary: &Diary) -> (Vec<DiaryEntryRecord>, Vec<DaySummaryRecord>) {
    let mut entries = Vec::new();
    let mut summaries = Vec::new();

    for (date, day) in diary {
        for entry in &day.entries {
            entries.push(DiaryEntryRecord {
                id: entry.id.clone(),
                date: *date,
                text: entry.text.clone(),
                mood: entry.mood.clone(),
                timestamp: entry.timestamp,
            });
        }
        if let Some(summary) = &day.day_summary {
            summaries.push(DaySummaryRecord {
                date: *date,
                summary: summary.clone(),
            });
        }
    }

    (entries, summaries)
}

pub fn rebuild_diary(entries: Vec<DiaryEntryRecord>, summaries: Vec<DaySummaryRecord>) -> Diary {
    let mut diary = Diary::new();
    for row in entries {
        diary
            .entry(row.date)
            .or_insert_with(DayDiary::default)
            .entries
            .push(DiaryEntry {
                id: row.id,
                text: row.text,
                mood: row.mood,
                timestamp: row.timestamp,
            });
    }
    for row in summaries {
        diary.entry(row.date).or_default().day_summary = Some(row.summary);
    }
    diary
}

// =============================================================================
// Collection & ideas
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionItemRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn collection_item_to_record(item: &CollectionItem) -> CollectionItemRecord {
    CollectionItemRecord {
        id: item.id.clone(),
        title: item.title.clone(),
        url: item.url.clone(),
        notes: item.notes.clone(),
        category_id: item.category.clone(),
        tags: item.tags.clone(),
        created_at: item.created_at,
        updated_at: item.updated_at,
    }
}

pub fn collection_item_from_record(record: CollectionItemRecord) -> CollectionItem {
    CollectionItem {
        id: record.id,
        title: record.title,
        url: record.url,
        notes: record.notes,
        category: record.category_id,
        tags: record.tags,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

pub fn category_to_record(category: &Category) -> CategoryRecord {
    CategoryRecord {
        id: category.id.clone(),
        name: category.name.clone(),
        color: category.color.clone(),
        icon: category.icon.clone(),
    }
}

pub fn category_from_record(record: CategoryRecord) -> Category {
    Category {
        id: record.id,
        name: record.name,
        color: record.color,
        icon: record.icon,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn idea_to_record(idea: &Idea) -> IdeaRecord {
    IdeaRecord {
        id: idea.id.clone(),
        title: idea.title.clone(),
        description: idea.description.clone(),
        category_id: idea.category.clone(),
        status: idea.status.as_str().to_string(),
        notes: idea.notes.clone(),
        created_at: idea.created_at,
        updated_at: idea.updated_at,
    }
}

pub fn idea_from_record(record: IdeaRecord) -> Idea {
    Idea {
        id: record.id,
        title: record.title,
        description: record.description,
        category: record.category_id,
        status: IdeaStatus::parse(&record.status).unwrap_or_default(),
        notes: record.notes,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

// =============================================================================
// Goals
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    pub completed: bool,
    /// Stored as a nested JSON column, like the milestones jsonb upstream.
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub progress_history: Vec<ProgressPoint>,
    pub created_at: DateTime<Utc>,
}

pub fn goal_to_record(goal: &Goal) -> GoalRecord {
    GoalRecord {
        id: goal.id.clone(),
        title: goal.title.clone(),
        description: goal.description.clone(),
        target_date: goal.target_date,
        completed: goal.completed,
        milestones: goal.milestones.clone(),
        progress_history: goal.progress_history.clone(),
        created_at: goal.created_at,
    }
}

pub fn goal_from_record(record: GoalRecord) -> Goal {
    Goal {
        id: record.id,
        title: record.title,
        description: record.description,
        target_date: record.target_date,
        completed: record.completed,
        milestones: record.milestones,
        progress_history: record.progress_history,
        created_at: record.created_at,
    }
}

// =============================================================================
// Reflections
// =============================================================================

/// One reflections row; `kind` discriminates daily/weekly/monthly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionRecord {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub went_well: Option<String>,
    #[serde(default)]
    pub could_improve: Option<String>,
    #[serde(default)]
    pub gratitude: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

pub fn flatten_reflections(reflections: &Reflections) -> Vec<ReflectionRecord> {
    let mut rows = Vec::new();

    for (date, daily) in &reflections.daily {
        rows.push(ReflectionRecord {
            id: Uuid::new_v4().to_string(),
            kind: "daily".to_string(),
            date: Some(*date),
            period: None,
            went_well: daily.went_well.clone(),
            could_improve: daily.could_improve.clone(),
            gratitude: daily.gratitude.clone(),
            text: None,
            created_at: daily.created_at,
            updated_at: Some(daily.updated_at),
        });
    }

    for (kind, list) in [("weekly", &reflections.weekly), ("monthly", &reflections.monthly)] {
        for reflection in list {
            rows.push(ReflectionRecord {
                id: reflection.id.clone(),
                kind: kind.to_string(),
                date: None,
                period: Some(reflection.period.clone()),
                went_well: None,
                could_improve: None,
                gratitude: None,
                text: Some(reflection.text.clone()),
                created_at: reflection.created_at,
                updated_at: None,
            });
        }
    }

    rows
}

pub fn rebuild_reflections(rows: Vec<ReflectionRecord>) -> Reflections {
    let mut reflections = Reflections::default();

    for row in rows {
        match row.kind.as_str() {
            "daily" => {
                let Some(date) = row.date else { continue };
                reflections.daily.insert(
                    date,
                    DailyReflection {
                        went_well: row.went_well,
                        could_improve: row.could_improve,
                        gratitude: row.gratitude,
                        created_at: row.created_at,
                        updated_at: row.updated_at.unwrap_or(row.created_at),
                    },
                );
            }
            kind @ ("weekly" | "monthly") => {
                let reflection = PeriodicReflection {
                    id: row.id,
                    period: row.period.unwrap_or_default(),
                    text: row.text.unwrap_or_default(),
                    created_at: row.created_at,
                };
                if kind == "weekly" {
                    reflections.weekly.push(reflection);
                } else {
                    reflections.monthly.push(reflection);
                }
            }
            // Unrecognized kinds are legacy noise; skip them
            _ => {}
        }
    }

    reflections
}

// =============================================================================
// Nutrition & settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: String,
    pub date: NaiveDate,
    pub name: String,
    pub kcal: u32,
    pub meal_type: String,
    pub timestamp: DateTime<Utc>,
}

pub fn flatten_meals(nutrition: &Nutrition) -> Vec<MealRecord> {
    let mut rows = Vec::new();
    for (date, day) in &nutrition.meals {
        for meal in &day.meals {
            rows.push(MealRecord {
                id: meal.id.clone(),
                date: *date,
                name: meal.name.clone(),
                kcal: meal.kcal,
                meal_type: meal.meal_type.as_str().to_string(),
                timestamp: meal.timestamp,
            });
        }
    }
    rows
}

pub fn rebuild_meals(rows: Vec<MealRecord>, target_kcal: u32) -> Nutrition {
    let mut nutrition = Nutrition {
        target_kcal,
        ..Nutrition::default()
    };
    for row in rows {
        nutrition.add_meal(
            row.date,
            Meal {
                id: row.id,
                name: row.name,
                kcal: row.kcal,
                meal_type: MealType::parse(&row.meal_type).unwrap_or_default(),
                timestamp: row.timestamp,
            },
        );
    }
    nutrition
}

/// The single settings row, kcal target included (it lives next to the other
/// user preferences at rest).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRecord {
    pub reminders_enabled: bool,
    pub default_view: String,
    pub target_kcal: u32,
}

pub fn settings_to_record(settings: &Settings, target_kcal: u32) -> SettingsRecord {
    SettingsRecord {
        reminders_enabled: settings.reminders_enabled,
        default_view: settings.default_view.clone(),
        target_kcal,
    }
}

pub fn settings_from_record(record: SettingsRecord) -> (Settings, u32) {
    (
        Settings {
            reminders_enabled: record.reminders_enabled,
            default_view: record.default_view,
        },
        record.target_kcal,
    )
}
