//! One-shot migration from the journal document to the table store.

use crate::error::LifeTrackResult;
use crate::journal::Journal;
use crate::store::tables::{TABLES, TableStore};

/// Per-table row counts from a completed migration.
#[derive(Debug, Clone, Default)]
pub struct MigrationReport {
    pub tables: Vec<(String, usize)>,
}

impl MigrationReport {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|(_, n)| n).sum()
    }
}

/// Copy every journal section into the table store.
///
/// Re-runnable: target tables are overwritten wholesale, so running twice
/// cannot duplicate rows. `progress` is called with each table name before
/// it is written.
pub fn migrate_to_tables(
    journal: &Journal,
    tables: &TableStore,
    mut progress: impl FnMut(&str),
) -> LifeTrackResult<MigrationReport> {
    let mut report = MigrationReport::default();

    for table in TABLES {
        progress(table);
        let rows = tables.write_section(journal, table)?;
        report.tables.push((table.to_string(), rows));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::habit::{Habit, HabitLog, log_habit};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn report_counts_every_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = TableStore::new(dir.path().join("tables"));

        let mut journal = Journal::default();
        journal.calendar.add(Event::new("One", d(2026, 3, 1)));
        journal.calendar.add(Event::new("Two", d(2026, 3, 2)));
        let habit = Habit::new("Read");
        let habit_id = habit.id.clone();
        journal.habits.habits.push(habit);
        log_habit(
            &mut journal.habits.logs,
            d(2026, 3, 1),
            &habit_id,
            HabitLog::completed(),
        );

        let mut seen = Vec::new();
        let report = migrate_to_tables(&journal, &store, |t| seen.push(t.to_string())).unwrap();

        assert_eq!(seen.len(), TABLES.len());
        let events = report.tables.iter().find(|(t, _)| t == "events").unwrap();
        assert_eq!(events.1, 2);
        let logs = report.tables.iter().find(|(t, _)| t == "habit_logs").unwrap();
        assert_eq!(logs.1, 1);
    }

    #[test]
    fn rerunning_does_not_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let store = TableStore::new(dir.path().join("tables"));

        let mut journal = Journal::default();
        journal.calendar.add(Event::new("One", d(2026, 3, 1)));

        migrate_to_tables(&journal, &store, |_| {}).unwrap();
        migrate_to_tables(&journal, &store, |_| {}).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.calendar.events.len(), 1);
    }
}
