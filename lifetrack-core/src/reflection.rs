//! Daily, weekly and monthly reflections.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A structured end-of-day reflection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReflection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub went_well: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub could_improve: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gratitude: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyReflection {
    pub fn new() -> Self {
        let now = Utc::now();
        DailyReflection {
            went_well: None,
            could_improve: None,
            gratitude: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A free-form reflection over a week or month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodicReflection {
    pub id: String,
    /// Human period label, e.g. "2026-W12" or "2026-03".
    pub period: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl PeriodicReflection {
    pub fn new(period: impl Into<String>, text: impl Into<String>) -> Self {
        PeriodicReflection {
            id: Uuid::new_v4().to_string(),
            period: period.into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// All reflections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflections {
    #[serde(default)]
    pub daily: BTreeMap<NaiveDate, DailyReflection>,
    #[serde(default)]
    pub weekly: Vec<PeriodicReflection>,
    #[serde(default)]
    pub monthly: Vec<PeriodicReflection>,
}

impl Reflections {
    /// Create or update the daily reflection for `date`. Existing text is
    /// kept where the update passes `None`; `updated_at` is stamped either
    /// way and `created_at` survives updates.
    pub fn upsert_daily(
        &mut self,
        date: NaiveDate,
        went_well: Option<String>,
        could_improve: Option<String>,
        gratitude: Option<String>,
    ) {
        let entry = self.daily.entry(date).or_insert_with(DailyReflection::new);
        if went_well.is_some() {
            entry.went_well = went_well;
        }
        if could_improve.is_some() {
            entry.could_improve = could_improve;
        }
        if gratitude.is_some() {
            entry.gratitude = gratitude;
        }
        entry.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn upsert_daily_merges_fields() {
        let mut reflections = Reflections::default();
        reflections.upsert_daily(d(2024, 3, 1), Some("shipped it".into()), None, None);
        reflections.upsert_daily(d(2024, 3, 1), None, Some("slept late".into()), None);

        let daily = &reflections.daily[&d(2024, 3, 1)];
        assert_eq!(daily.went_well.as_deref(), Some("shipped it"));
        assert_eq!(daily.could_improve.as_deref(), Some("slept late"));
        assert!(daily.gratitude.is_none());
    }
}
