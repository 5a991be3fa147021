//! Data models for Folio
//!
//! This module contains UI-independent data structures: commit-log rows,
//! per-commit summaries, project records and profile stats.

mod commit;
mod line_row;
mod notification;
mod profile;
mod project;

pub use commit::CommitSummary;
pub use line_row::LineRow;
pub use notification::{Notification, NotificationKind};
pub use profile::ProfileStats;
pub use project::{PLACEHOLDER_IMAGE, Project, sort_newest_first};
