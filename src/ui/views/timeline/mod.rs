//! Timeline View - commits by time of day
//!
//! The main view: a scatterplot of the active commits, a time-travel
//! slider, and a narrative commit list whose cursor drives the same
//! window as the slider.

mod input;
mod render;
mod selection;
mod window;

pub use selection::{Region, SelectionSummary, TypeBreakdown, summarize_selection};
pub use window::TimeWindow;

use ratatui::layout::Rect;

use crate::model::CommitSummary;
use crate::ui::scale::{LinearScale, SqrtScale};

/// Actions that TimelineView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineAction {
    /// No action needed
    None,
    /// Open a commit link in the browser
    OpenLink(String),
}

/// Geometry of the last rendered scatter plot, in screen cells.
///
/// Mouse handlers run against the previous frame's geometry, which is the
/// usual immediate-mode arrangement: the chart the user sees is the chart
/// they click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChartGeom {
    /// Plot region (inside borders and axis gutters)
    pub plot: Rect,
    /// Timestamp (epoch ms) to column
    pub x: LinearScale,
    /// Hour of day [0, 24] to row, 00:00 on the bottom row
    pub y: LinearScale,
    /// Total lines to radius in column units
    pub r: SqrtScale,
}

impl ChartGeom {
    /// Plotted cell position of a commit, when it has one.
    pub fn position(&self, commit: &CommitSummary) -> Option<(f64, f64)> {
        if commit.datetime.is_none() || !commit.hour_frac.is_finite() {
            return None;
        }
        Some((
            self.x.apply(commit.timestamp_ms() as f64),
            self.y.apply(commit.hour_frac),
        ))
    }

    pub fn radius(&self, commit: &CommitSummary) -> f64 {
        self.r.apply(commit.total_lines as f64)
    }
}

/// Timeline View state
#[derive(Debug)]
pub struct TimelineView {
    /// All commits, ascending by timestamp (undated ones first)
    commits: Vec<CommitSummary>,
    window: TimeWindow,
    /// Length of the active prefix of `commits`
    active_len: usize,
    /// Drag-select region in chart cells
    pub region: Option<Region>,
    summary: SelectionSummary,
    /// Cursor cell while the pointer is over the plot
    pub hover: Option<(u16, u16)>,
    /// Index into the active prefix of the hovered commit
    hovered: Option<usize>,
    /// Narrative cursor into `commits`
    pub step_index: usize,
    /// Scroll offset of the narrative list
    pub scroll_offset: usize,
    /// In-flight drag anchor cell
    drag_anchor: Option<(u16, u16)>,
    /// Dragging the slider knob
    slider_drag: bool,
    /// Load failure shown in place of the chart
    pub load_error: Option<String>,
    pub(crate) geom: Option<ChartGeom>,
    pub(crate) slider_area: Option<Rect>,
    pub(crate) steps_area: Option<Rect>,
}

impl Default for TimelineView {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineView {
    pub fn new() -> Self {
        Self {
            commits: Vec::new(),
            window: TimeWindow::new(&[]),
            active_len: 0,
            region: None,
            summary: SelectionSummary::default(),
            hover: None,
            hovered: None,
            step_index: 0,
            scroll_offset: 0,
            drag_anchor: None,
            slider_drag: false,
            load_error: None,
            geom: None,
            slider_area: None,
            steps_area: None,
        }
    }

    /// Install the commit list, sorted ascending by timestamp, and open
    /// the window to full history.
    pub fn set_commits(&mut self, mut commits: Vec<CommitSummary>) {
        commits.sort_by_key(CommitSummary::timestamp_ms);
        self.window = TimeWindow::new(&commits);
        self.active_len = self.window.active_len(&commits);
        self.commits = commits;
        self.region = None;
        self.summary = SelectionSummary::default();
        self.hovered = None;
        self.step_index = self.commits.len().saturating_sub(1);
    }

    pub fn commits(&self) -> &[CommitSummary] {
        &self.commits
    }

    /// Commits at or before the current cutoff.
    pub fn active_commits(&self) -> &[CommitSummary] {
        &self.commits[..self.active_len]
    }

    pub fn progress(&self) -> f64 {
        self.window.progress()
    }

    pub fn cutoff_label(&self) -> String {
        self.window.cutoff_label()
    }

    pub fn summary(&self) -> &SelectionSummary {
        &self.summary
    }

    pub fn hovered_commit(&self) -> Option<&CommitSummary> {
        self.hovered.and_then(|i| self.active_commits().get(i))
    }

    /// Move the time window.
    ///
    /// When the active prefix changes the x-domain rescales, so a region
    /// drawn in the old cell coordinates would silently select different
    /// commits; it is cleared instead.
    pub fn set_progress(&mut self, progress: f64) {
        self.window.set_progress(progress);
        let len = self.window.active_len(&self.commits);
        if len != self.active_len {
            self.active_len = len;
            self.region = None;
            self.hovered = None;
        }
        self.recompute_selection();
    }

    /// Enter a narrative step: same transition as the slider, with the
    /// cursor remembered so the list can follow.
    pub fn enter_step(&mut self, index: usize) {
        let Some(commit) = self.commits.get(index) else {
            return;
        };
        self.step_index = index;
        let progress = self.window.progress_for(commit);
        self.set_progress(progress);
    }

    /// Replace the drag-select region and re-derive the summary.
    pub fn set_region(&mut self, region: Option<Region>) {
        self.region = region;
        self.recompute_selection();
    }

    /// Commits inside the current region, as indexes into the active
    /// prefix.
    fn selected_indexes(&self) -> Vec<usize> {
        let (Some(region), Some(geom)) = (self.region, self.geom) else {
            return Vec::new();
        };
        self.active_commits()
            .iter()
            .enumerate()
            .filter(|(_, commit)| {
                geom.position(commit).is_some_and(|(col, row)| {
                    region.contains(col.round() as u16, row.round() as u16)
                })
            })
            .map(|(i, _)| i)
            .collect()
    }

    pub(crate) fn recompute_selection(&mut self) {
        let indexes = self.selected_indexes();
        let active = self.active_commits();
        let selected: Vec<&CommitSummary> = indexes.iter().map(|&i| &active[i]).collect();
        self.summary = summarize_selection(&selected);
    }

    /// Smallest hovered circle wins, so small dots stay reachable under
    /// bigger neighbors.
    pub(crate) fn hit_test(&self, col: u16, row: u16) -> Option<usize> {
        let geom = self.geom?;
        if !geom.plot.contains(ratatui::layout::Position { x: col, y: row }) {
            return None;
        }
        let mut candidates: Vec<(usize, f64)> = self
            .active_commits()
            .iter()
            .enumerate()
            .filter_map(|(i, commit)| {
                let (cx, cy) = geom.position(commit)?;
                let radius = geom.radius(commit).max(0.5);
                let dx = f64::from(col) - cx;
                // Cells are roughly twice as tall as wide.
                let dy = (f64::from(row) - cy) * 2.0;
                (dx * dx + dy * dy <= radius * radius).then_some((i, radius))
            })
            .collect();
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
        candidates.first().map(|(i, _)| *i)
    }
}

#[cfg(test)]
mod tests;
