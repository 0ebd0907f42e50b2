//! Habit streak arithmetic.
//!
//! A streak is the count of consecutive calendar days, walking backward from
//! today, for which a habit was logged as completed.

use chrono::{Duration, NaiveDate};

use crate::habit::{DayLogs, Habit, HabitLogs};

/// How far back the streak walk looks before giving up. History beyond this
/// bound never contributes.
pub const MAX_LOOKBACK_DAYS: i64 = 365;

/// Current and longest streaks for one habit within the lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

/// Compute streaks for `habit_id`, walking backward day-by-day from `today`.
///
/// `today` itself is exempt: a missing or incomplete log today does not break
/// the current streak, it just doesn't extend it (the day isn't over yet).
/// Any earlier gap ends the current streak. The longest streak considers
/// every run inside the lookback window.
pub fn streaks(logs: &HabitLogs, habit_id: &str, today: NaiveDate) -> StreakSummary {
    let mut current = 0u32;
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut current_open = true;

    let mut day = today;
    loop {
        let completed = logs
            .get(&day)
            .and_then(|d| d.get(habit_id))
            .is_some_and(|l| l.completed);

        if completed {
            run += 1;
            if current_open {
                current = run;
            }
            longest = longest.max(run);
        } else if day != today {
            run = 0;
            current_open = false;
        }

        if (today - day).num_days() >= MAX_LOOKBACK_DAYS {
            break;
        }
        day = day - Duration::days(1);
    }

    StreakSummary { current, longest }
}

/// Percentage (0–100, rounded) of active habits completed in `day_logs`.
pub fn completion_rate(habits: &[Habit], day_logs: Option<&DayLogs>) -> u32 {
    let active: Vec<&Habit> = habits.iter().filter(|h| h.active).collect();
    if active.is_empty() {
        return 0;
    }

    let done = active
        .iter()
        .filter(|h| {
            day_logs
                .and_then(|logs| logs.get(&h.id))
                .is_some_and(|l| l.completed)
        })
        .count();

    ((done as f64 / active.len() as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{HabitLog, log_habit};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn complete(logs: &mut HabitLogs, date: NaiveDate) {
        log_habit(logs, date, "h1", HabitLog::completed());
    }

    // --- streaks ---

    #[test]
    fn five_days_before_today_with_today_absent() {
        let today = d(2024, 6, 10);
        let mut logs = HabitLogs::new();
        for i in 1..=5 {
            complete(&mut logs, today - Duration::days(i));
        }

        let summary = streaks(&logs, "h1", today);
        assert_eq!(summary.current, 5);
        assert_eq!(summary.longest, 5);
    }

    #[test]
    fn gap_three_days_back_cuts_current_streak() {
        let today = d(2024, 6, 10);
        let mut logs = HabitLogs::new();
        // today, -1, -2 done; -3 missing; -4, -5 done
        complete(&mut logs, today);
        complete(&mut logs, today - Duration::days(1));
        complete(&mut logs, today - Duration::days(2));
        complete(&mut logs, today - Duration::days(4));
        complete(&mut logs, today - Duration::days(5));

        let summary = streaks(&logs, "h1", today);
        assert_eq!(summary.current, 3);
        assert_eq!(summary.longest, 3);
    }

    #[test]
    fn incomplete_today_does_not_reset_to_zero() {
        let today = d(2024, 6, 10);
        let mut logs = HabitLogs::new();
        // Explicit incomplete log today, completed yesterday
        log_habit(&mut logs, today, "h1", HabitLog::default());
        complete(&mut logs, today - Duration::days(1));

        assert_eq!(streaks(&logs, "h1", today).current, 1);
    }

    #[test]
    fn incomplete_yesterday_resets_current() {
        let today = d(2024, 6, 10);
        let mut logs = HabitLogs::new();
        complete(&mut logs, today);
        complete(&mut logs, today - Duration::days(2));

        let summary = streaks(&logs, "h1", today);
        assert_eq!(summary.current, 1);
        assert_eq!(summary.longest, 1);
    }

    #[test]
    fn longest_sees_older_runs_past_a_gap() {
        let today = d(2024, 6, 30);
        let mut logs = HabitLogs::new();
        complete(&mut logs, today);
        // A longer run two weeks back
        for i in 10..=16 {
            complete(&mut logs, today - Duration::days(i));
        }

        let summary = streaks(&logs, "h1", today);
        assert_eq!(summary.current, 1);
        assert_eq!(summary.longest, 7);
    }

    #[test]
    fn walk_is_bounded() {
        let today = d(2024, 6, 10);
        let mut logs = HabitLogs::new();
        // Completed every single day for two years back
        for i in 0..=800 {
            complete(&mut logs, today - Duration::days(i));
        }

        let summary = streaks(&logs, "h1", today);
        assert_eq!(summary.current, MAX_LOOKBACK_DAYS as u32 + 1);
        assert_eq!(summary.longest, MAX_LOOKBACK_DAYS as u32 + 1);
    }

    #[test]
    fn other_habits_do_not_count() {
        let today = d(2024, 6, 10);
        let mut logs = HabitLogs::new();
        log_habit(&mut logs, today, "h2", HabitLog::completed());

        assert_eq!(streaks(&logs, "h1", today), StreakSummary::default());
    }

    // --- completion_rate ---

    #[test]
    fn completion_rate_counts_active_habits_only() {
        let mut done = Habit::new("Read");
        done.id = "h1".to_string();
        let mut missed = Habit::new("Run");
        missed.id = "h2".to_string();
        let mut inactive = Habit::new("Old");
        inactive.id = "h3".to_string();
        inactive.active = false;

        let mut day = DayLogs::new();
        day.insert("h1".to_string(), HabitLog::completed());
        day.insert("h3".to_string(), HabitLog::completed());

        let habits = vec![done, missed, inactive];
        assert_eq!(completion_rate(&habits, Some(&day)), 50);
    }

    #[test]
    fn completion_rate_empty_inputs() {
        assert_eq!(completion_rate(&[], None), 0);
        let habits = vec![Habit::new("Read")];
        assert_eq!(completion_rate(&habits, None), 0);
    }
}
