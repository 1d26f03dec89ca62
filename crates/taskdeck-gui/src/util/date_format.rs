use chrono::{DateTime, Local, Utc};

/// Format a UTC datetime as a human-readable relative time
/// e.g., "2 hours ago", "yesterday", "3 days ago"
pub fn format_relative(dt: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(dt);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!(
            "{} minute{} ago",
            minutes,
            if minutes == 1 { "" } else { "s" }
        )
    } else if hours < 24 {
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        let weeks = days / 7;
        format!("{} week{} ago", weeks, if weeks == 1 { "" } else { "s" })
    } else {
        format_short(dt)
    }
}

/// Format a UTC datetime as short date (e.g., "Jan 15, 2026")
pub fn format_short(dt: DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.into();
    local.format("%b %d, %Y").to_string()
}

/// Format a UTC datetime as a full timestamp (e.g., "2026-08-05 10:00:02")
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format an execution duration with one decimal (e.g., "2.5s")
pub fn format_duration_seconds(seconds: f64) -> String {
    format!("{:.1}s", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn recent_times_are_relative() {
        let now = Utc::now();
        assert_eq!(format_relative(now - Duration::seconds(5)), "just now");
        assert_eq!(format_relative(now - Duration::minutes(1)), "1 minute ago");
        assert_eq!(format_relative(now - Duration::minutes(5)), "5 minutes ago");
        assert_eq!(format_relative(now - Duration::hours(3)), "3 hours ago");
        assert_eq!(format_relative(now - Duration::days(1)), "yesterday");
        assert_eq!(format_relative(now - Duration::days(3)), "3 days ago");
        assert_eq!(format_relative(now - Duration::days(14)), "2 weeks ago");
    }

    #[test]
    fn durations_render_with_one_decimal() {
        assert_eq!(format_duration_seconds(2.5), "2.5s");
        assert_eq!(format_duration_seconds(1.0), "1.0s");
        assert_eq!(format_duration_seconds(0.04), "0.0s");
        assert_eq!(format_duration_seconds(61.25), "61.2s");
    }
}
