//! Shared fixtures for integration tests
#![allow(dead_code)] // each test binary uses a different subset

use folio::model::{CommitSummary, LineRow, Project};
use ratatui::{Terminal, backend::TestBackend};

/// A small commit log: three commits over three days, mixed file types.
pub const SAMPLE_LOG: &str = "\
commit,file,type,line,depth,length,author,date,time,timezone,datetime
aaa111,src/index.js,js,1,0,40,mam,2024-05-01,09:15,-07:00,2024-05-01T09:15:00-07:00
aaa111,style.css,css,3,1,18,mam,2024-05-01,09:15,-07:00,2024-05-01T09:15:00-07:00
bbb222,src/index.js,js,4,2,55,mam,2024-05-02,14:40,-07:00,2024-05-02T14:40:00-07:00
bbb222,src/chart.js,js,9,1,33,mam,2024-05-02,14:40,-07:00,2024-05-02T14:40:00-07:00
bbb222,style.css,css,7,0,12,mam,2024-05-02,14:40,-07:00,2024-05-02T14:40:00-07:00
ccc333,index.html,html,2,0,60,mam,2024-05-03,22:05,-07:00,2024-05-03T22:05:00-07:00
";

pub const SAMPLE_PROJECTS: &str = r#"[
    {"title": "P1", "year": 2023, "description": "First", "url": "https://p1.example"},
    {"title": "P2", "year": 2024, "repo": "https://github.com/x/p2"},
    {"title": "P3"}
]"#;

/// Parse SAMPLE_LOG into rows.
pub fn sample_rows() -> Vec<LineRow> {
    folio::data::parser::parse_commit_log(SAMPLE_LOG).expect("sample log parses")
}

/// Aggregate SAMPLE_LOG into commit summaries.
pub fn sample_commits() -> Vec<CommitSummary> {
    folio::data::summarize_commits(sample_rows(), Some("https://github.com/mam084/portfolio"))
}

/// Decode SAMPLE_PROJECTS.
pub fn sample_projects() -> Vec<Project> {
    serde_json::from_str(SAMPLE_PROJECTS).expect("sample projects decode")
}

/// Render the terminal buffer as plain text for assertions.
pub fn screen(terminal: &Terminal<TestBackend>) -> String {
    terminal.backend().to_string()
}
