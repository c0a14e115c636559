use chrono::DateTime;

use crate::error::{GwhoError, Result};
use crate::model::CommitRecord;

/// Parse full-history output: one `<author>|<unix-seconds> <tz-offset>` line
/// per commit.
///
/// The line is split on the first `|`; the first whitespace-delimited token of
/// the right side is the timestamp and the timezone remainder is ignored.
/// Whitespace-only lines are skipped. Upstream guarantees the format, so a
/// malformed line fails the whole query instead of being dropped.
pub fn parse_full_history(text: &str) -> Result<Vec<CommitRecord>> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (author, date_field) = line.split_once('|').ok_or_else(|| malformed(idx, line))?;
        let seconds = date_field
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<i64>().ok())
            .ok_or_else(|| malformed(idx, line))?;
        let timestamp =
            DateTime::from_timestamp(seconds, 0).ok_or_else(|| malformed(idx, line))?;
        records.push(CommitRecord {
            author: author.to_string(),
            timestamp,
        });
    }
    Ok(records)
}

/// Parse name-only output for a single filtered author.
///
/// The query strips commit headers, so there are no commit boundaries to
/// recover: every non-blank line is a file path. Never fails.
pub fn parse_file_listing(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the single-integer response of a commit-count query.
///
/// `rev-list --count` prints one number; anything else means the response is
/// not what the exit status promised.
pub fn parse_count(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| GwhoError::MalformedLogLine {
            line: 1,
            content: trimmed.to_string(),
        })
}

fn malformed(idx: usize, line: &str) -> GwhoError {
    GwhoError::MalformedLogLine {
        line: idx + 1,
        content: line.to_string(),
    }
}
