//! UI symbols and fixed labels

/// List markers
pub mod markers {
    /// Commit inside the current time window
    pub const ACTIVE: char = '●';
    /// Commit beyond the cutoff
    pub const INACTIVE: char = '○';
    /// Legend color swatch
    pub const SWATCH: char = '■';
    /// Horizontal bar segment
    pub const BAR: char = '█';
}

/// Empty state labels
pub mod empty {
    /// Project list with nothing to show
    pub const NO_PROJECTS: &str = "No projects to show yet.";
    /// Commit log missing or empty
    pub const NO_COMMITS: &str = "No commit data loaded.";
    /// Time window excludes every commit
    pub const NO_ACTIVE_COMMITS: &str = "No commits in the current window.";
}
