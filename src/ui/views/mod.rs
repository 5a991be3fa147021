//! View components
//!
//! Each view represents a screen in the application.

mod files;
mod projects;
mod stats;
mod timeline;

pub use files::{FileBlock, FilesView, file_blocks};
pub use projects::{
    DEFAULT_HEADING_LEVEL, ProjectsAction, ProjectsInputMode, ProjectsView, Wedge, YearBucket,
    wedge_at, wedges,
};
pub use stats::StatsView;
pub use timeline::{
    Region, SelectionSummary, TimeWindow, TimelineAction, TimelineView, TypeBreakdown,
    summarize_selection,
};
