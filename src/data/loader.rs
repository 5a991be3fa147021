//! Resource loading
//!
//! Each resource loads independently so one failure never takes down the
//! other views.

use std::fs;
use std::path::Path;

use super::{DataError, parser};
use crate::model::{LineRow, Project};

/// Load and parse the commit log CSV.
pub fn load_commit_log(path: &Path) -> Result<Vec<LineRow>, DataError> {
    let text = read(path)?;
    let rows = parser::parse_commit_log(&text)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "loaded commit log");
    Ok(rows)
}

/// Load and decode the projects JSON resource.
///
/// Anything that is not a JSON array of objects is a load failure.
pub fn load_projects(path: &Path) -> Result<Vec<Project>, DataError> {
    let text = read(path)?;
    let projects: Vec<Project> = serde_json::from_str(&text)?;
    tracing::info!(path = %path.display(), count = projects.len(), "loaded projects");
    Ok(projects)
}

fn read(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })
}
