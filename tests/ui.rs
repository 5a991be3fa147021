//! UI tests using ratatui's TestBackend
//!
//! Views render into an in-memory terminal and assertions run against
//! the resulting buffer text.

mod common;

#[path = "ui/test_files.rs"]
mod test_files;

#[path = "ui/test_projects.rs"]
mod test_projects;

#[path = "ui/test_stats.rs"]
mod test_stats;

#[path = "ui/test_timeline.rs"]
mod test_timeline;
