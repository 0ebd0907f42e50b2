//! Calendar event types.
//!
//! An `Event` is anchored on a single calendar date and may repeat through an
//! optional `Recurrence` rule. Times are `HH:MM` wall-clock strings with no
//! timezone semantics; all scheduling decisions happen at day granularity in
//! the `recurrence` module.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled occurrence on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Anchor date: the first occurrence of the series (or the only one).
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,

    // Display metadata, no behavioral effect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Event {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            date,
            start_time: None,
            end_time: None,
            recurrence: None,
            color: None,
            category: None,
            location: None,
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Whether this event has an actual recurrence rule attached.
    pub fn is_recurring(&self) -> bool {
        self.recurrence
            .as_ref()
            .is_some_and(|r| r.kind != RecurrenceKind::None)
    }
}

/// How an event repeats after its anchor date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    #[serde(rename = "type")]
    pub kind: RecurrenceKind,
    /// Repeat every N periods. Stored data may carry 0 (treated as 1) or
    /// negative values (treated as malformed), so this stays signed.
    #[serde(default = "default_interval")]
    pub interval: i32,
    /// Last date on which an occurrence may fall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

fn default_interval() -> i32 {
    1
}

impl Recurrence {
    pub fn new(kind: RecurrenceKind, interval: i32) -> Self {
        Recurrence {
            kind,
            interval,
            end_date: None,
        }
    }
}

/// Recurrence period kinds.
///
/// `Unknown` absorbs unrecognized values from legacy data; it deserializes
/// cleanly and simply never matches any date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    #[serde(other)]
    Unknown,
}

impl RecurrenceKind {
    /// Display label (also the stored string in table records).
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceKind::None => "none",
            RecurrenceKind::Daily => "daily",
            RecurrenceKind::Weekly => "weekly",
            RecurrenceKind::Monthly => "monthly",
            RecurrenceKind::Yearly => "yearly",
            RecurrenceKind::Unknown => "unknown",
        }
    }

    /// Parse a stored kind string, mapping anything unrecognized to `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s {
            "none" => RecurrenceKind::None,
            "daily" => RecurrenceKind::Daily,
            "weekly" => RecurrenceKind::Weekly,
            "monthly" => RecurrenceKind::Monthly,
            "yearly" => RecurrenceKind::Yearly,
            _ => RecurrenceKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_recurrence_kind_deserializes() {
        let json = r#"{"type":"fortnightly","interval":2}"#;
        let rec: Recurrence = serde_json::from_str(json).unwrap();
        assert_eq!(rec.kind, RecurrenceKind::Unknown);
        assert_eq!(rec.interval, 2);
    }

    #[test]
    fn missing_interval_defaults_to_one() {
        let json = r#"{"type":"daily"}"#;
        let rec: Recurrence = serde_json::from_str(json).unwrap();
        assert_eq!(rec.interval, 1);
    }

    #[test]
    fn event_json_uses_camel_case() {
        let mut event = Event::new("Dentist", chrono::NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        event.start_time = Some("09:30".to_string());
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"startTime\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("\"start_time\""));
    }

    #[test]
    fn is_recurring_ignores_none_kind() {
        let mut event = Event::new("Standup", chrono::NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        assert!(!event.is_recurring());

        event.recurrence = Some(Recurrence::new(RecurrenceKind::None, 1));
        assert!(!event.is_recurring());

        event.recurrence = Some(Recurrence::new(RecurrenceKind::Weekly, 1));
        assert!(event.is_recurring());
    }
}
