use chrono::{Local, TimeZone};

/// Formats a countdown as `MM:SS`. Minutes are not wrapped into hours, so
/// 90 minutes reads `90:00`.
pub fn format_countdown(total_seconds: u32) -> String {
    let s = total_seconds.min(999_999);
    format!("{:02}:{:02}", s / 60, s % 60)
}

/// Local `YYYY-MM-DD HH:MM` for an epoch-millisecond timestamp.
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// `3/5`, or an empty string when there is nothing to count.
pub fn format_progress(done: usize, total: usize) -> String {
    if total == 0 {
        String::new()
    } else {
        format!("{}/{}", done, total)
    }
}

pub fn checkbox(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}
