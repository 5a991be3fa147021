//! Commit-log row model

use chrono::{DateTime, FixedOffset};

/// One changed source line within one commit.
///
/// Many rows share a commit identifier; rows are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineRow {
    /// Commit identifier (full hash)
    pub commit: String,

    /// File path, relative to the repository root
    pub file: String,

    /// Technology tag from the log ("js", "css", ...); may be empty
    pub file_type: String,

    /// Line index within the file
    pub line: u32,

    /// Nesting depth of the line
    pub depth: u32,

    /// Line length in characters
    pub length: u32,

    /// Author name
    pub author: String,

    /// Commit date as written in the log (e.g. "2024-05-01")
    pub date: String,

    /// Commit time as written in the log (e.g. "14:35")
    pub time: String,

    /// Timezone offset as written in the log (e.g. "-07:00")
    pub timezone: String,

    /// Combined timestamp; `None` when the log value was unparseable
    pub datetime: Option<DateTime<FixedOffset>>,
}

impl LineRow {
    /// File-type tag, inferred from the file extension when the log
    /// carries no explicit tag.
    pub fn inferred_type(&self) -> &str {
        if !self.file_type.is_empty() {
            return &self.file_type;
        }
        self.file
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && !ext.contains('/'))
            .unwrap_or("other")
    }
}
