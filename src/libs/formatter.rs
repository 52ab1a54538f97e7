//! Duration formatting helpers for console output.
//!
//! All countdowns and break lengths are shown in the same "HH:MM" shape so
//! tables and status lines read uniformly. Negative durations clamp to
//! "00:00" instead of leaking a minus sign into the UI.

use chrono::Duration;

/// Formats a duration as zero-padded "HH:MM"; negatives clamp to zero.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a break length in minutes, e.g. "15 min".
pub fn format_minutes(minutes: i64) -> String {
    format!("{} min", minutes)
}
