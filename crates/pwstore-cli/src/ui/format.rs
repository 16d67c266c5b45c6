//! String formatting utilities for UI rendering.

use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Utc};

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Replace every character with a bullet.
pub fn mask(secret: &str, unicode: bool) -> String {
    let bullet = if unicode { "\u{2022}" } else { "*" };
    bullet.repeat(secret.chars().count().clamp(8, 16))
}

/// Format a creation time relative to the local clock.
pub fn format_relative(created_at: &DateTime<Utc>) -> String {
    format_relative_at(created_at, &Local::now())
}

/// Format `dt` relative to `now`, in `now`'s timezone.
///
/// - same day: `Today 3:04 PM`
/// - previous day: `Yesterday 3:04 PM`
/// - within a week: `Monday 3:04 PM`
/// - same year: `Jan 2, 3:04 PM`
/// - otherwise: `Jan 2, 2006`
pub fn format_relative_at<Tz>(dt: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let local = dt.with_timezone(&now.timezone());
    let today = now.date_naive();
    let day = local.date_naive();

    if day == today {
        format!("Today {}", local.format("%-I:%M %p"))
    } else if Some(day) == today.pred_opt() {
        format!("Yesterday {}", local.format("%-I:%M %p"))
    } else if day < today && today - day < Duration::days(7) {
        local.format("%A %-I:%M %p").to_string()
    } else if day.year() == today.year() {
        local.format("%b %-d, %-I:%M %p").to_string()
    } else {
        local.format("%b %-d, %Y").to_string()
    }
}
