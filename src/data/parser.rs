//! Commit log parser
//!
//! The log is a CSV table with a header row, one row per changed source
//! line. Parsing is deliberately lenient: only the `commit` and `file`
//! columns are required, numeric fields fall back to 0 and unparseable
//! timestamps become `None`. A malformed row must never take the whole
//! load down.

use chrono::{DateTime, FixedOffset};

use super::DataError;
use crate::model::LineRow;

/// Parse the commit log text into rows.
pub fn parse_commit_log(text: &str) -> Result<Vec<LineRow>, DataError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let header = lines.next().ok_or(DataError::EmptyLog)?;
    let columns = split_record(header);
    let index = HeaderIndex::new(&columns)?;

    Ok(lines
        .map(|line| index.row(&split_record(line)))
        .collect())
}

/// Column positions resolved from the header row.
///
/// Unknown columns are ignored; optional columns may be absent entirely.
struct HeaderIndex {
    commit: usize,
    file: usize,
    file_type: Option<usize>,
    line: Option<usize>,
    depth: Option<usize>,
    length: Option<usize>,
    author: Option<usize>,
    date: Option<usize>,
    time: Option<usize>,
    timezone: Option<usize>,
    datetime: Option<usize>,
}

impl HeaderIndex {
    fn new(columns: &[String]) -> Result<Self, DataError> {
        let find = |name: &str| columns.iter().position(|c| c.trim() == name);

        Ok(Self {
            commit: find("commit").ok_or(DataError::MissingColumn("commit"))?,
            file: find("file").ok_or(DataError::MissingColumn("file"))?,
            file_type: find("type"),
            line: find("line"),
            depth: find("depth"),
            length: find("length"),
            author: find("author"),
            date: find("date"),
            time: find("time"),
            timezone: find("timezone"),
            datetime: find("datetime"),
        })
    }

    fn row(&self, fields: &[String]) -> LineRow {
        let text = |idx: Option<usize>| {
            idx.and_then(|i| fields.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };
        let number = |idx: Option<usize>| {
            idx.and_then(|i| fields.get(i))
                .and_then(|s| s.trim().parse::<u32>().ok())
                .unwrap_or(0)
        };

        let date = text(self.date);
        let time = text(self.time);
        let timezone = text(self.timezone);
        let datetime = parse_timestamp(&text(self.datetime))
            .or_else(|| parse_timestamp(&compose_timestamp(&date, &time, &timezone)));

        LineRow {
            commit: text(Some(self.commit)),
            file: text(Some(self.file)),
            file_type: text(self.file_type),
            line: number(self.line),
            depth: number(self.depth),
            length: number(self.length),
            author: text(self.author),
            date,
            time,
            timezone,
            datetime,
        }
    }
}

/// Split one CSV record into fields, honoring double-quoted fields with
/// `""` escapes.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Parse an ISO-like timestamp with offset (e.g. "2024-05-01T14:35:00-07:00").
fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    if text.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .or_else(|| DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%z").ok())
        .or_else(|| DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S %z").ok())
}

/// Rebuild a timestamp from the split date/time/timezone columns,
/// tolerating a missing seconds part.
fn compose_timestamp(date: &str, time: &str, timezone: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let time = match time.chars().filter(|c| *c == ':').count() {
        0 => "00:00:00".to_string(),
        1 => format!("{time}:00"),
        _ => time.to_string(),
    };
    format!("{date}T{time}{timezone}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
commit,file,type,line,depth,length,author,date,time,timezone,datetime
a1,src/x.js,js,1,0,40,mam,2024-05-01,14:35,-07:00,2024-05-01T14:35:00-07:00
a1,src/y.js,js,2,1,12,mam,2024-05-01,14:35,-07:00,2024-05-01T14:35:00-07:00
b2,style.css,css,10,2,80,mam,2024-05-02,09:10,-07:00,2024-05-02T09:10:00-07:00
";

    #[test]
    fn parses_rows_with_typed_fields() {
        let rows = parse_commit_log(LOG).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].commit, "a1");
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[2].length, 80);
        assert!(rows[0].datetime.is_some());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_commit_log(""), Err(DataError::EmptyLog)));
        assert!(matches!(parse_commit_log("\n\n"), Err(DataError::EmptyLog)));
    }

    #[test]
    fn missing_commit_column_is_an_error() {
        let err = parse_commit_log("file,author\nx.js,mam\n").unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("commit")));
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let rows =
            parse_commit_log("commit,file,weird\na1,x.js,whatever\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].file, "x.js");
    }

    #[test]
    fn malformed_numbers_and_dates_do_not_fail_the_load() {
        let rows = parse_commit_log(
            "commit,file,line,datetime\na1,x.js,not-a-number,not-a-date\n",
        )
        .unwrap();
        assert_eq!(rows[0].line, 0);
        assert!(rows[0].datetime.is_none());
    }

    #[test]
    fn timestamp_recomposed_from_split_columns() {
        let rows = parse_commit_log(
            "commit,file,date,time,timezone\na1,x.js,2024-05-01,14:35,-07:00\n",
        )
        .unwrap();
        let dt = rows[0].datetime.expect("composed timestamp");
        assert_eq!(dt.timestamp(), 1714599300);
    }

    #[test]
    fn quoted_fields_keep_commas_and_escaped_quotes() {
        let fields = split_record(r#"a,"b,c","say ""hi""",d"#);
        assert_eq!(fields, ["a", "b,c", r#"say "hi""#, "d"]);
    }

    #[test]
    fn short_rows_fill_with_defaults() {
        let rows = parse_commit_log("commit,file,author\na1,x.js\n").unwrap();
        assert_eq!(rows[0].author, "");
    }
}
