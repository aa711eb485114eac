use chrono::{Datelike, Duration, NaiveDate, Weekday};

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Interprets a requested appointment date relative to `today`.
///
/// Understands "today", "tomorrow", "day after", "next <weekday>" and strict
/// `YYYY-MM-DD`. Dates in the past are returned as-is; rejecting them is the
/// caller's job.
pub fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lower = input.trim().to_lowercase();

    if lower.contains("today") {
        return Some(today);
    }
    if lower.contains("tomorrow") {
        return today.checked_add_signed(Duration::days(1));
    }
    if lower.contains("day after") {
        return today.checked_add_signed(Duration::days(2));
    }

    if let Some(rest) = lower.strip_prefix("next ") {
        let day_name = rest.trim();
        if let Some((_, weekday)) = WEEKDAYS.iter().find(|(name, _)| *name == day_name) {
            return next_weekday(today, *weekday);
        }
    }

    parse_iso_date(input)
}

/// Next occurrence of `weekday` strictly after `today`.
fn next_weekday(today: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = today.weekday().num_days_from_monday() as i64;
    let target = weekday.num_days_from_monday() as i64;
    let mut ahead = (target - current).rem_euclid(7);
    if ahead == 0 {
        ahead = 7;
    }
    today.checked_add_signed(Duration::days(ahead))
}

fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    // 2025-01-10 is a Friday
    fn today() -> NaiveDate {
        d("2025-01-10")
    }

    #[test]
    fn test_relative_words() {
        assert_eq!(parse_date("today", today()), Some(d("2025-01-10")));
        assert_eq!(parse_date("Tomorrow please", today()), Some(d("2025-01-11")));
        assert_eq!(parse_date("the day after", today()), Some(d("2025-01-12")));
    }

    #[test]
    fn test_next_weekday() {
        assert_eq!(parse_date("next Monday", today()), Some(d("2025-01-13")));
        assert_eq!(parse_date("NEXT saturday", today()), Some(d("2025-01-11")));
    }

    #[test]
    fn test_next_same_weekday_skips_today() {
        assert_eq!(parse_date("next friday", today()), Some(d("2025-01-17")));
        // 2025-01-13 is a Monday
        assert_eq!(parse_date("next monday", d("2025-01-13")), Some(d("2025-01-20")));
    }

    #[test]
    fn test_next_requires_full_weekday_name() {
        assert_eq!(parse_date("next mon", today()), None);
        assert_eq!(parse_date("next week", today()), None);
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_date("2025-05-20", today()), Some(d("2025-05-20")));
        // past dates still parse
        assert_eq!(parse_date("2025-01-05", today()), Some(d("2025-01-05")));
    }

    #[test]
    fn test_iso_date_is_strict() {
        assert_eq!(parse_date("2025-5-20", today()), None);
        assert_eq!(parse_date("20-05-2025", today()), None);
        assert_eq!(parse_date("2025/05/20", today()), None);
        assert_eq!(parse_date("2025-02-30", today()), None);
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_date("banana", today()), None);
        assert_eq!(parse_date("", today()), None);
    }
}
