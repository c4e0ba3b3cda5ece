/// Utilities for date and time formatting
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Calendar date used for new sites and audit due checks (UTC, like an ISO timestamp)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format an instant as `HH:MM`
/// Example: 2024-03-15T14:02:26Z -> "14:02"
pub fn format_clock<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format("%H:%M").to_string()
}

/// Message time in the browser's timezone
pub fn format_message_time(ts: &DateTime<Utc>) -> String {
    format_clock(&ts.with_timezone(&Local))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_clock(&ts), "14:02");
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 9, 5, 0).unwrap();
        assert_eq!(format_clock(&ts), "09:05");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_date(&d), "2025-01-01");
    }
}
