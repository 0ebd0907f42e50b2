//! The journal document: everything lifetrack knows, in one versioned root.
//!
//! This is the shape the journal store reads and writes. Every section has a
//! serde default so documents written by older versions load cleanly, with
//! missing sections backfilled rather than rejected.

use serde::{Deserialize, Serialize};

use crate::collection::{Category, CollectionItem, default_categories};
use crate::diary::Diary;
use crate::event::Event;
use crate::goal::Goal;
use crate::habit::{Habit, HabitLogs, default_habits};
use crate::idea::{Idea, default_idea_categories};
use crate::nutrition::Nutrition;
use crate::reflection::Reflections;
use crate::settings::Settings;

/// Current document version. Older documents are upgraded in place on load.
pub const JOURNAL_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    pub version: String,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub diary: Diary,
    #[serde(default)]
    pub collection: Collection,
    #[serde(default)]
    pub ideas: Ideas,
    #[serde(default)]
    pub calendar: CalendarData,
    #[serde(default)]
    pub habits: HabitData,
    #[serde(default)]
    pub goals: GoalData,
    #[serde(default)]
    pub reflections: Reflections,
    #[serde(default)]
    pub nutrition: Nutrition,
}

impl Default for Journal {
    fn default() -> Self {
        Journal {
            version: JOURNAL_VERSION.to_string(),
            settings: Settings::default(),
            diary: Diary::new(),
            collection: Collection::default(),
            ideas: Ideas::default(),
            calendar: CalendarData::default(),
            habits: HabitData::default(),
            goals: GoalData::default(),
            reflections: Reflections::default(),
            nutrition: Nutrition::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default)]
    pub items: Vec<CollectionItem>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Default for Collection {
    fn default() -> Self {
        Collection {
            items: Vec::new(),
            categories: default_categories(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ideas {
    #[serde(default)]
    pub items: Vec<Idea>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Default for Ideas {
    fn default() -> Self {
        Ideas {
            items: Vec::new(),
            categories: default_idea_categories(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarData {
    #[serde(default)]
    pub events: Vec<Event>,
}

impl CalendarData {
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn find(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    /// Delete by id. Removing a recurring event removes its whole series;
    /// there is no per-occurrence exception model.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != before
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitData {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub logs: HabitLogs,
}

impl Default for HabitData {
    fn default() -> Self {
        HabitData {
            habits: default_habits(),
            logs: HabitLogs::new(),
        }
    }
}

impl HabitData {
    /// Find an active-or-not habit by id, or by case-insensitive name.
    pub fn find(&self, key: &str) -> Option<&Habit> {
        self.habits
            .iter()
            .find(|h| h.id == key || h.name.eq_ignore_ascii_case(key))
    }

    pub fn active(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter().filter(|h| h.active)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalData {
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl GoalData {
    /// Find a goal by id, or by case-insensitive title.
    pub fn find(&self, key: &str) -> Option<&Goal> {
        self.goals
            .iter()
            .find(|g| g.id == key || g.title.eq_ignore_ascii_case(key))
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Goal> {
        self.goals
            .iter_mut()
            .find(|g| g.id == key || g.title.eq_ignore_ascii_case(key))
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        self.goals.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_document_without_nutrition_backfills_default() {
        let json = r#"{"version":"0.9.0","settings":{"remindersEnabled":true}}"#;
        let journal: Journal = serde_json::from_str(json).unwrap();

        assert!(journal.settings.reminders_enabled);
        assert_eq!(journal.nutrition.target_kcal, 2000);
        assert!(journal.nutrition.meals.is_empty());
    }

    #[test]
    fn fresh_journal_seeds_categories() {
        let journal = Journal::default();
        assert!(!journal.collection.categories.is_empty());
        assert!(!journal.ideas.categories.is_empty());
        assert!(!journal.habits.habits.is_empty());
        assert!(journal.calendar.events.is_empty());
    }

    #[test]
    fn habit_lookup_by_name_is_case_insensitive() {
        let data = HabitData {
            habits: vec![crate::habit::Habit::new("Read")],
            logs: HabitLogs::new(),
        };

        assert!(data.find("read").is_some());
        assert!(data.find("READ").is_some());
        assert!(data.find("run").is_none());
    }

    #[test]
    fn event_remove_by_id() {
        let mut calendar = CalendarData::default();
        let event = Event::new("Dentist", chrono::NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        let id = event.id.clone();
        calendar.add(event);

        assert!(calendar.remove(&id));
        assert!(!calendar.remove(&id));
    }
}
