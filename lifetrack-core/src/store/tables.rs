//! Table-store persistence: one JSON array file per entity.
//!
//! The relational-style backend. Every entity lives in its own
//! `<data_dir>/tables/<name>.json` file as a flat list of snake_case rows
//! (see `record`); a missing file reads as an empty table.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{LifeTrackError, LifeTrackResult};
use crate::journal::Journal;
use crate::store::record::{
    self, CategoryRecord, CollectionItemRecord, DaySummaryRecord, DiaryEntryRecord, EventRecord,
    GoalRecord, HabitLogRecord, HabitRecord, IdeaRecord, MealRecord, ReflectionRecord,
    SettingsRecord,
};

/// Every table, in write order.
pub const TABLES: &[&str] = &[
    "settings",
    "events",
    "habits",
    "habit_logs",
    "diary_entries",
    "day_summaries",
    "collection_items",
    "collection_categories",
    "ideas",
    "goals",
    "reflections",
    "meals",
];

pub struct TableStore {
    dir: PathBuf,
}

impl TableStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        TableStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn table_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    fn read_table<T: DeserializeOwned>(&self, name: &str) -> LifeTrackResult<Vec<T>> {
        let path = self.table_path(name);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| LifeTrackError::Serialization(format!("table {name}: {e}")))
    }

    fn write_table<T: Serialize>(&self, name: &str, rows: &[T]) -> LifeTrackResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let content = serde_json::to_string_pretty(rows)
            .map_err(|e| LifeTrackError::Serialization(format!("table {name}: {e}")))?;
        std::fs::write(self.table_path(name), content)?;

        Ok(())
    }

    /// Write one journal section to its table, returning the row count.
    pub fn write_section(&self, journal: &Journal, table: &str) -> LifeTrackResult<usize> {
        match table {
            "settings" => {
                let rows = vec![record::settings_to_record(
                    &journal.settings,
                    journal.nutrition.target_kcal,
                )];
                self.write_table(table, &rows)?;
                Ok(rows.len())
            }
            "events" => {
                let rows: Vec<EventRecord> = journal
                    .calendar
                    .events
                    .iter()
                    .map(record::event_to_record)
                    .collect();
                self.write_table(table, &rows)?;
                Ok(rows.len())
            }
            "habits" => {
                let rows: Vec<HabitRecord> = journal
                    .habits
                    .habits
                    .iter()
                    .map(record::habit_to_record)
                    .collect();
                self.write_table(table, &rows)?;
                Ok(rows.len())
            }
            "habit_logs" => {
                let rows = record::flatten_habit_logs(&journal.habits.logs);
                self.write_table(table, &rows)?;
                Ok(rows.len())
            }
            "diary_entries" => {
                let (entries, _) = record::flatten_diary(&journal.diary);
                self.write_table(table, &entries)?;
                Ok(entries.len())
            }
            "day_summaries" => {
                let (_, summaries) = record::flatten_diary(&journal.diary);
                self.write_table(table, &summaries)?;
                Ok(summaries.len())
            }
            "collection_items" => {
                let rows: Vec<CollectionItemRecord> = journal
                    .collection
                    .items
                    .iter()
                    .map(record::collection_item_to_record)
                    .collect();
                self.write_table(table, &rows)?;
                Ok(rows.len())
            }
            "collection_categories" => {
                let rows: Vec<CategoryRecord> = journal
                    .collection
                    .categories
                    .iter()
                    .map(record::category_to_record)
                    .collect();
                self.write_table(table, &rows)?;
                Ok(rows.len())
            }
            "ideas" => {
                let rows: Vec<IdeaRecord> =
                    journal.ideas.items.iter().map(record::idea_to_record).collect();
                self.write_table(table, &rows)?;
                Ok(rows.len())
            }
            "goals" => {
                let rows: Vec<GoalRecord> =
                    journal.goals.goals.iter().map(record::goal_to_record).collect();
                self.write_table(table, &rows)?;
                Ok(rows.len())
            }
            "reflections" => {
                let rows = record::flatten_reflections(&journal.reflections);
                self.write_table(table, &rows)?;
                Ok(rows.len())
            }
            "meals" => {
                let rows = record::flatten_meals(&journal.nutrition);
                self.write_table(table, &rows)?;
                Ok(rows.len())
            }
            _ => Err(LifeTrackError::Store(format!("unknown table '{table}'"))),
        }
    }

    /// Write every table from the journal.
    pub fn save(&self, journal: &Journal) -> LifeTrackResult<()> {
        for table in TABLES {
            self.write_section(journal, table)?;
        }
        Ok(())
    }

    /// Assemble a journal from the tables. Missing tables read as empty;
    /// missing settings fall back to defaults.
    pub fn load(&self) -> LifeTrackResult<Journal> {
        let mut journal = Journal::default();

        let settings_rows: Vec<SettingsRecord> = self.read_table("settings")?;
        let target_kcal = match settings_rows.into_iter().next() {
            Some(row) => {
                let (settings, target) = record::settings_from_record(row);
                journal.settings = settings;
                target
            }
            None => journal.nutrition.target_kcal,
        };

        let event_rows: Vec<EventRecord> = self.read_table("events")?;
        journal.calendar.events = event_rows
            .into_iter()
            .map(record::event_from_record)
            .collect::<LifeTrackResult<Vec<_>>>()?;

        let habit_rows: Vec<HabitRecord> = self.read_table("habits")?;
        journal.habits.habits = habit_rows.into_iter().map(record::habit_from_record).collect();

        let log_rows: Vec<HabitLogRecord> = self.read_table("habit_logs")?;
        journal.habits.logs = record::rebuild_habit_logs(log_rows);

        let entry_rows: Vec<DiaryEntryRecord> = self.read_table("diary_entries")?;
        let summary_rows: Vec<DaySummaryRecord> = self.read_table("day_summaries")?;
        journal.diary = record::rebuild_diary(entry_rows, summary_rows);

        let item_rows: Vec<CollectionItemRecord> = self.read_table("collection_items")?;
        journal.collection.items = item_rows
            .into_iter()
            .map(record::collection_item_from_record)
            .collect();

        let category_rows: Vec<CategoryRecord> = self.read_table("collection_categories")?;
        if !category_rows.is_empty() {
            journal.collection.categories = category_rows
                .into_iter()
                .map(record::category_from_record)
                .collect();
        }

        let idea_rows: Vec<IdeaRecord> = self.read_table("ideas")?;
        journal.ideas.items = idea_rows.into_iter().map(record::idea_from_record).collect();

        let goal_rows: Vec<GoalRecord> = self.read_table("goals")?;
        journal.goals.goals = goal_rows.into_iter().map(record::goal_from_record).collect();

        let reflection_rows: Vec<ReflectionRecord> = self.read_table("reflections")?;
        journal.reflections = record::rebuild_reflections(reflection_rows);

        let meal_rows: Vec<MealRecord> = self.read_table("meals")?;
        journal.nutrition = record::rebuild_meals(meal_rows, target_kcal);

        Ok(journal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, Recurrence, RecurrenceKind};
    use crate::habit::{Habit, HabitLog, log_habit};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn populated_journal() -> Journal {
        let mut journal = Journal::default();
        journal.habits.habits.clear();

        let mut event = Event::new("Standup", d(2026, 3, 2));
        event.start_time = Some("09:15".to_string());
        event.recurrence = Some(Recurrence::new(RecurrenceKind::Weekly, 1));
        journal.calendar.add(event);

        let habit = Habit::new("Read");
        let habit_id = habit.id.clone();
        journal.habits.habits.push(habit);
        log_habit(
            &mut journal.habits.logs,
            d(2026, 3, 2),
            &habit_id,
            HabitLog::completed(),
        );

        journal.nutrition.target_kcal = 2400;
        journal
    }

    #[test]
    fn save_then_load_rebuilds_the_journal() {
        let dir = tempfile::tempdir().unwrap();
        let store = TableStore::new(dir.path().join("tables"));

        let journal = populated_journal();
        store.save(&journal).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.calendar.events.len(), 1);
        assert_eq!(loaded.calendar.events[0].title, "Standup");
        assert_eq!(
            loaded.calendar.events[0].recurrence.as_ref().unwrap().kind,
            RecurrenceKind::Weekly
        );
        assert_eq!(loaded.habits.habits.len(), 1);
        assert_eq!(loaded.habits.logs.len(), 1);
        assert_eq!(loaded.nutrition.target_kcal, 2400);
    }

    #[test]
    fn empty_directory_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = TableStore::new(dir.path().join("tables"));

        let journal = store.load().unwrap();
        assert!(journal.calendar.events.is_empty());
        assert_eq!(journal.nutrition.target_kcal, 2000);
    }

    #[test]
    fn unknown_section_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = TableStore::new(dir.path());
        let journal = Journal::default();

        assert!(store.write_section(&journal, "nope").is_err());
    }
}
