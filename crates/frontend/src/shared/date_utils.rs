//! Utilities for date formatting on public pages and in the dashboard
use chrono::{DateTime, NaiveDate};

/// Format ISO date string for display
/// Example: "2026-10-17" or "2026-10-17T14:02:26Z" -> "Sat, Oct 17, 2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%a, %b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format ISO datetime string as date and minutes
/// Example: "2026-03-15T14:02:26.123Z" -> "Mar 15, 2026 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => format_date(datetime_str),
    }
}

/// "2026-10" -> "October 2026"
pub fn format_month(month_str: &str) -> String {
    match NaiveDate::parse_from_str(&format!("{}-01", month_str.trim()), "%Y-%m-%d") {
        Ok(date) => date.format("%B %Y").to_string(),
        Err(_) => month_str.to_string(),
    }
}

/// `true` when `date_str` (YYYY-MM-DD) is today or later
pub fn is_upcoming(date_str: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map(|d| d >= today)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-10-17"), "Sat, Oct 17, 2026");
        assert_eq!(format_date("2026-10-17T09:00:00Z"), "Sat, Oct 17, 2026");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2026-03-15T14:02:26.123Z"), "Mar 15, 2026 14:02");
        assert_eq!(format_datetime("2026-03-15"), "Sun, Mar 15, 2026");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2026-10"), "October 2026");
        assert_eq!(format_month("Oct"), "Oct");
    }

    #[test]
    fn test_is_upcoming() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert!(is_upcoming("2026-10-19", today));
        assert!(!is_upcoming("2026-10-18", today));
        assert!(!is_upcoming("soon", today));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
