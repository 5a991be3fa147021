//! Data layer
//!
//! This module handles loading the commit log and project resources,
//! aggregating log rows into commit summaries, and the one-shot profile
//! stats lookup.

mod aggregate;
mod github;
mod loader;
/// Parser module (public for integration testing)
pub mod parser;

pub use aggregate::{DayPeriod, LogStats, summarize_commits};
pub use github::fetch_profile;
pub use loader::{load_commit_log, load_projects};

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or decoding a data resource.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("commit log has no header row")]
    EmptyLog,

    #[error("commit log header is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("invalid project data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("profile request failed with status {status}")]
    Http { status: u16 },

    #[error("profile request failed: {0}")]
    Transport(String),

    #[error("profile response could not be decoded: {0}")]
    Decode(String),
}
