//! Day-granularity date helpers shared across modules.
//!
//! All calendar logic in lifetrack works on `NaiveDate`: dates are local
//! wall-clock days with no timezone attached, matching how they are stored.

use chrono::{Datelike, Duration, NaiveDate};

/// Storage format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a stored `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Format a date the way it is stored (`YYYY-MM-DD`).
pub fn date_string(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Whole days between two dates, ignoring direction.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Human-readable label for a date relative to `today`
/// (e.g. "Today", "Tomorrow", "In 3 days", "Wed Feb 25 2026").
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        2..=6 => format!("In {} days", diff),
        -6..=-2 => format!("{} days ago", -diff),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Monday-first bounds of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(date.weekday().num_days_from_monday());
    let start = date - Duration::days(offset);
    (start, start + Duration::days(6))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    // --- parse_date / date_string ---

    #[test]
    fn parse_and_format_round_trip() {
        let date = d(2024, 1, 31);
        assert_eq!(parse_date("2024-01-31"), Some(date));
        assert_eq!(date_string(date), "2024-01-31");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_date("31/01/2024"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("not a date"), None);
    }

    // --- days_between ---

    #[test]
    fn days_between_is_symmetric() {
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 4)), 3);
        assert_eq!(days_between(d(2024, 1, 4), d(2024, 1, 1)), 3);
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 1)), 0);
    }

    // --- relative_label ---

    #[test]
    fn relative_label_near_dates() {
        let today = d(2026, 3, 20);
        assert_eq!(relative_label(today, today), "Today");
        assert_eq!(relative_label(d(2026, 3, 21), today), "Tomorrow");
        assert_eq!(relative_label(d(2026, 3, 19), today), "Yesterday");
        assert_eq!(relative_label(d(2026, 3, 23), today), "In 3 days");
        assert_eq!(relative_label(d(2026, 3, 16), today), "4 days ago");
    }

    #[test]
    fn relative_label_far_dates_use_full_format() {
        let today = d(2026, 3, 20);
        assert_eq!(relative_label(d(2026, 4, 1), today), "Wed Apr 1 2026");
    }

    // --- week_bounds ---

    #[test]
    fn week_bounds_monday_first() {
        // 2024-01-03 is a Wednesday
        let (start, end) = week_bounds(d(2024, 1, 3));
        assert_eq!(start, d(2024, 1, 1)); // Monday
        assert_eq!(end, d(2024, 1, 7)); // Sunday
    }

    #[test]
    fn week_bounds_on_monday_and_sunday() {
        let (start, end) = week_bounds(d(2024, 1, 1));
        assert_eq!(start, d(2024, 1, 1));
        assert_eq!(end, d(2024, 1, 7));

        let (start, end) = week_bounds(d(2024, 1, 7));
        assert_eq!(start, d(2024, 1, 1));
        assert_eq!(end, d(2024, 1, 7));
    }
}
