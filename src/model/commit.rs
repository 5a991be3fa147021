//! Commit summary model

use std::fmt;

use chrono::{DateTime, FixedOffset, Timelike};

use super::LineRow;

/// One summary per distinct commit identifier, built by grouping the
/// log rows that share it.
///
/// The constituent rows are bulk payload: they are reachable through
/// [`CommitSummary::lines`] but kept out of the `Debug` output and never
/// serialized.
#[derive(Clone, PartialEq)]
pub struct CommitSummary {
    /// Commit identifier (full hash)
    pub id: String,

    /// Canonical link to the commit, when a repository URL is known
    pub url: Option<String>,

    /// Author name, taken from the group's first row
    pub author: String,

    /// Commit date as written in the log
    pub date: String,

    /// Commit time as written in the log
    pub time: String,

    /// Timezone offset as written in the log
    pub timezone: String,

    /// Combined timestamp; `None` when the log value was unparseable
    pub datetime: Option<DateTime<FixedOffset>>,

    /// Fractional hour of day (hours + minutes/60); NaN without a timestamp
    pub hour_frac: f64,

    /// Number of changed lines in this commit (the group size)
    pub total_lines: usize,

    lines: Vec<LineRow>,
}

impl CommitSummary {
    /// Build a summary from one commit's rows.
    ///
    /// Representative fields come from the first row; all rows of a group
    /// share them by construction of the source log.
    pub fn new(id: String, url: Option<String>, lines: Vec<LineRow>) -> Self {
        let first = lines.first().cloned().unwrap_or_default();
        let datetime = first.datetime;
        let hour_frac = datetime
            .map(|dt| f64::from(dt.hour()) + f64::from(dt.minute()) / 60.0)
            .unwrap_or(f64::NAN);

        Self {
            id,
            url,
            author: first.author,
            date: first.date,
            time: first.time,
            timezone: first.timezone,
            datetime,
            hour_frac,
            total_lines: lines.len(),
            lines,
        }
    }

    /// The constituent log rows.
    pub fn lines(&self) -> &[LineRow] {
        &self.lines
    }

    /// Timestamp in epoch milliseconds.
    ///
    /// Missing timestamps sort as the smallest possible value, so commits
    /// with a malformed date sink to the front of an ascending order and
    /// never crash a comparison.
    pub fn timestamp_ms(&self) -> i64 {
        self.datetime.map(|dt| dt.timestamp_millis()).unwrap_or(i64::MIN)
    }

    /// Display-friendly short identifier.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}

impl fmt::Debug for CommitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The row payload is omitted on purpose.
        f.debug_struct("CommitSummary")
            .field("id", &self.id)
            .field("author", &self.author)
            .field("datetime", &self.datetime)
            .field("hour_frac", &self.hour_frac)
            .field("total_lines", &self.total_lines)
            .finish_non_exhaustive()
    }
}
