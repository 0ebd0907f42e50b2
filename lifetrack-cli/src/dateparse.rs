//! Natural-language date arguments.
//!
//! Accepts strict `YYYY-MM-DD` first, then falls back to fuzzydate for
//! inputs like "tomorrow", "sat" or "march 20".

use anyhow::Result;
use chrono::NaiveDate;

/// Parse a date argument.
pub fn parse_date_arg(input: &str) -> Result<NaiveDate> {
    if let Some(date) = lifetrack_core::date::parse_date(input) {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// Today's local date, or the parsed argument when one is given.
pub fn date_or_today(input: Option<&str>) -> Result<NaiveDate> {
    match input {
        Some(s) => parse_date_arg(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let mut result = String::new();
    let lower = input.to_lowercase();

    for (i, word) in lower.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let expanded = abbrevs
            .iter()
            .find(|(abbr, _)| *abbr == word)
            .map(|(_, full)| *full)
            .unwrap_or(word);
        result.push_str(expanded);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    // --- expand_abbreviations ---

    #[test]
    fn expand_day_abbreviations() {
        assert_eq!(expand_abbreviations("sat"), "saturday");
        assert_eq!(expand_abbreviations("next fri"), "next friday");
        assert_eq!(expand_abbreviations("thu"), "thursday");
    }

    #[test]
    fn expand_month_abbreviations() {
        assert_eq!(expand_abbreviations("jan 20"), "january 20");
        assert_eq!(expand_abbreviations("sept 5"), "september 5");
    }

    #[test]
    fn expand_preserves_non_abbreviations() {
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
        assert_eq!(expand_abbreviations("next friday"), "next friday");
    }

    // --- parse_date_arg ---

    #[test]
    fn parse_strict_format_first() {
        let date = parse_date_arg("2026-03-20").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 3, 20));
    }

    #[test]
    fn parse_natural_absolute_date() {
        let date = parse_date_arg("march 20").unwrap();
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn parse_tomorrow_is_one_day_ahead() {
        let date = parse_date_arg("tomorrow").unwrap();
        let today = chrono::Local::now().date_naive();
        let diff = (date - today).num_days();
        // Allow for the test straddling midnight
        assert!((1..=2).contains(&diff));
    }

    #[test]
    fn parse_invalid_input() {
        assert!(parse_date_arg("not a date at all xyz").is_err());
    }

    // --- date_or_today ---

    #[test]
    fn date_or_today_defaults_to_today() {
        let date = date_or_today(None).unwrap();
        assert_eq!(date, chrono::Local::now().date_naive());
    }
}
