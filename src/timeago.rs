use chrono::{DateTime, Utc};

/// Coarse "N units ago" label for the elapsed time between `timestamp` and `now`.
///
/// Months are approximated as 30 days and years as 365; labels are always
/// plural, "1 days ago" included.
pub fn relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    if years > 0 {
        format!("{years} years ago")
    } else if months > 0 {
        format!("{months} months ago")
    } else if days > 0 {
        format!("{days} days ago")
    } else if hours > 0 {
        format!("{hours} hours ago")
    } else if minutes > 0 {
        format!("{minutes} minutes ago")
    } else {
        format!("{seconds} seconds ago")
    }
}
