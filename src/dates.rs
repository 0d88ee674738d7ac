//! Feed Date Helpers
//!
//! Date-key (`YYYY-MM-DD`) arithmetic and Korean display labels for the
//! question feed. Everything except `today_str` is pure and takes `today` as
//! a parameter, so the clamping logic stays host-testable; only the "what is
//! today" boundary touches `js_sys::Date` (the browser's local clock, which
//! is what the backend's per-day grouping follows).

use chrono::{Datelike, Duration, NaiveDate};

const WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Today in the browser's local timezone as `YYYY-MM-DD`
pub fn today_str() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

fn parse(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Step the date key by `delta` days. Unparseable input is returned as-is
/// rather than breaking navigation.
pub fn add_days(date: &str, delta: i64) -> String {
    match parse(date) {
        Some(d) => (d + Duration::days(delta)).format("%Y-%m-%d").to_string(),
        None => date.to_string(),
    }
}

pub fn is_today(date: &str, today: &str) -> bool {
    date == today
}

/// The next-day control is disabled at (or past) today; the date keys are
/// zero-padded so string order matches date order.
pub fn next_disabled(date: &str, today: &str) -> bool {
    date >= today
}

/// "M월 D일 (요일)" — matching the original feed header
pub fn format_date(date: &str) -> String {
    match parse(date) {
        Some(d) => {
            let weekday = WEEKDAYS[d.weekday().num_days_from_sunday() as usize];
            format!("{}월 {}일 ({})", d.month(), d.day(), weekday)
        }
        None => date.to_string(),
    }
}

/// Feed header label, with the " - 오늘" suffix on today
pub fn display_label(date: &str, today: &str) -> String {
    if is_today(date, today) {
        format!("{} - 오늘", format_date(date))
    } else {
        format_date(date)
    }
}

/// "오전/오후 h:mm" for a question timestamp. The backend stores naive UTC
/// (`YYYY-MM-DD HH:MM:SS`); conversion to the viewer's local time goes
/// through `js_sys::Date`, the clock formatting itself stays pure.
pub fn format_time(timestamp: &str) -> String {
    let iso = format!("{}Z", timestamp.replacen(' ', "T", 1));
    let local = js_sys::Date::new(&iso.into());
    let hours = local.get_hours();
    let minutes = local.get_minutes();
    if hours <= 23 && minutes <= 59 {
        clock_label(hours, minutes)
    } else {
        // NaN date from a malformed timestamp
        timestamp.to_string()
    }
}

fn clock_label(hour: u32, minute: u32) -> String {
    let period = if hour < 12 { "오전" } else { "오후" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}:{:02}", period, display_hour, minute)
}

/// Default export range start: 30 days before `today`
pub fn thirty_days_before(today: &str) -> String {
    add_days(today, -30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_days_steps_across_month_boundaries() {
        assert_eq!(add_days("2026-03-01", -1), "2026-02-28");
        assert_eq!(add_days("2026-02-28", 1), "2026-03-01");
        assert_eq!(add_days("2026-12-31", 1), "2027-01-01");
    }

    #[test]
    fn add_days_handles_leap_years() {
        assert_eq!(add_days("2024-02-28", 1), "2024-02-29");
        assert_eq!(add_days("2024-03-01", -1), "2024-02-29");
    }

    #[test]
    fn add_days_keeps_unparseable_input() {
        assert_eq!(add_days("not-a-date", 1), "not-a-date");
    }

    #[test]
    fn next_disabled_exactly_from_today_onward() {
        let today = "2026-08-30";
        assert!(!next_disabled("2026-08-29", today));
        assert!(next_disabled("2026-08-30", today));
        assert!(next_disabled("2026-08-31", today));
    }

    #[test]
    fn format_date_uses_korean_weekday() {
        // 2026-08-30 is a Sunday
        assert_eq!(format_date("2026-08-30"), "8월 30일 (일)");
        assert_eq!(format_date("2026-08-31"), "8월 31일 (월)");
    }

    #[test]
    fn display_label_marks_today() {
        assert_eq!(display_label("2026-08-30", "2026-08-30"), "8월 30일 (일) - 오늘");
        assert_eq!(display_label("2026-08-29", "2026-08-30"), "8월 29일 (토)");
    }

    #[test]
    fn clock_label_wraps_twelve_hour() {
        assert_eq!(clock_label(0, 5), "오전 12:05");
        assert_eq!(clock_label(9, 30), "오전 9:30");
        assert_eq!(clock_label(12, 0), "오후 12:00");
        assert_eq!(clock_label(23, 59), "오후 11:59");
    }

    #[test]
    fn export_range_default_start() {
        assert_eq!(thirty_days_before("2026-08-30"), "2026-07-31");
    }
}
