//! Upcoming-event detection with send-once bookkeeping.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::event::Event;

/// Events whose anchor date falls on the day after `today`, in list order.
///
/// Only the series anchor is consulted, not the recurrence rule: reminders
/// announce an event once, the day before it first happens.
pub fn upcoming_events(events: &[Event], today: NaiveDate) -> Vec<&Event> {
    let tomorrow = today + Duration::days(1);
    events.iter().filter(|e| e.date == tomorrow).collect()
}

/// Tracks which events have already been announced.
///
/// Owned by whoever runs the reminder loop; dropping the ledger forgets the
/// history, so a fresh run may announce again.
#[derive(Debug, Default)]
pub struct ReminderLedger {
    notified: HashSet<String>,
}

impl ReminderLedger {
    pub fn new() -> Self {
        ReminderLedger::default()
    }

    /// Upcoming events not yet announced, marking each as announced.
    pub fn due<'a>(&mut self, events: &'a [Event], today: NaiveDate) -> Vec<&'a Event> {
        upcoming_events(events, today)
            .into_iter()
            .filter(|e| self.notified.insert(e.id.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn upcoming_matches_tomorrow_only() {
        let events = vec![
            Event::new("tomorrow", d(2024, 3, 2)),
            Event::new("today", d(2024, 3, 1)),
            Event::new("later", d(2024, 3, 3)),
        ];

        let upcoming = upcoming_events(&events, d(2024, 3, 1));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].title, "tomorrow");
    }

    #[test]
    fn ledger_announces_each_event_once() {
        let events = vec![Event::new("tomorrow", d(2024, 3, 2))];
        let mut ledger = ReminderLedger::new();

        assert_eq!(ledger.due(&events, d(2024, 3, 1)).len(), 1);
        assert!(ledger.due(&events, d(2024, 3, 1)).is_empty());
    }

    #[test]
    fn fresh_ledger_forgets() {
        let events = vec![Event::new("tomorrow", d(2024, 3, 2))];
        let mut ledger = ReminderLedger::new();
        ledger.due(&events, d(2024, 3, 1));

        let mut fresh = ReminderLedger::new();
        assert_eq!(fresh.due(&events, d(2024, 3, 1)).len(), 1);
    }
}
