//! Diary entries, grouped per day.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One diary entry within a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl DiaryEntry {
    pub fn new(text: impl Into<String>, mood: Option<String>) -> Self {
        DiaryEntry {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            mood,
            timestamp: Utc::now(),
        }
    }
}

/// A day's entries plus its optional one-line summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayDiary {
    #[serde(default)]
    pub entries: Vec<DiaryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_summary: Option<String>,
}

/// The whole diary, keyed by day.
pub type Diary = BTreeMap<NaiveDate, DayDiary>;

/// Append an entry to a day, creating the day as needed.
pub fn add_entry(diary: &mut Diary, date: NaiveDate, entry: DiaryEntry) {
    diary.entry(date).or_default().entries.push(entry);
}

/// Remove an entry by id. Returns whether anything was removed.
pub fn remove_entry(diary: &mut Diary, date: NaiveDate, entry_id: &str) -> bool {
    let Some(day) = diary.get_mut(&date) else {
        return false;
    };
    let before = day.entries.len();
    day.entries.retain(|e| e.id != entry_id);
    day.entries.len() != before
}

/// Set or replace the day's summary, creating the day as needed.
pub fn set_day_summary(diary: &mut Diary, date: NaiveDate, summary: impl Into<String>) {
    diary.entry(date).or_default().day_summary = Some(summary.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn entries_accumulate_in_order() {
        let mut diary = Diary::new();
        add_entry(&mut diary, d(2024, 3, 1), DiaryEntry::new("morning", None));
        add_entry(&mut diary, d(2024, 3, 1), DiaryEntry::new("evening", None));

        let day = &diary[&d(2024, 3, 1)];
        assert_eq!(day.entries.len(), 2);
        assert_eq!(day.entries[0].text, "morning");
        assert_eq!(day.entries[1].text, "evening");
    }

    #[test]
    fn summary_does_not_touch_entries() {
        let mut diary = Diary::new();
        add_entry(&mut diary, d(2024, 3, 1), DiaryEntry::new("morning", None));
        set_day_summary(&mut diary, d(2024, 3, 1), "a good day");

        let day = &diary[&d(2024, 3, 1)];
        assert_eq!(day.entries.len(), 1);
        assert_eq!(day.day_summary.as_deref(), Some("a good day"));
    }

    #[test]
    fn remove_entry_by_id() {
        let mut diary = Diary::new();
        let entry = DiaryEntry::new("oops", None);
        let id = entry.id.clone();
        add_entry(&mut diary, d(2024, 3, 1), entry);

        assert!(remove_entry(&mut diary, d(2024, 3, 1), &id));
        assert!(!remove_entry(&mut diary, d(2024, 3, 1), &id));
        assert!(diary[&d(2024, 3, 1)].entries.is_empty());
    }
}
