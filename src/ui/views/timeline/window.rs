//! Time window over the commit history
//!
//! A single progress scalar in [0, 100], mapped through a time scale onto
//! the commit timestamp extent. Everything downstream derives from the
//! resulting cutoff.

use crate::model::CommitSummary;
use crate::ui::scale::TimeScale;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    progress: f64,
    scale: TimeScale,
    cutoff_ms: i64,
    has_domain: bool,
}

impl TimeWindow {
    /// Build a window over the given commits, starting at full history.
    ///
    /// Commits without a timestamp are excluded from the scale domain;
    /// they sort below every real timestamp and are therefore always
    /// inside the window.
    pub fn new(commits: &[CommitSummary]) -> Self {
        let mut extent: Option<(i64, i64)> = None;
        for commit in commits {
            if commit.datetime.is_some() {
                let ts = commit.timestamp_ms();
                extent = Some(match extent {
                    None => (ts, ts),
                    Some((min, max)) => (min.min(ts), max.max(ts)),
                });
            }
        }

        let (min_ms, max_ms) = extent.unwrap_or((0, 0));
        let scale = TimeScale::from_extent(min_ms, max_ms);
        let mut window = Self {
            progress: 100.0,
            scale,
            cutoff_ms: max_ms,
            has_domain: extent.is_some(),
        };
        window.set_progress(100.0);
        window
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn cutoff_ms(&self) -> i64 {
        self.cutoff_ms
    }

    /// Move the window.
    ///
    /// The input is clamped to [0, 100]; a non-finite value means full
    /// history.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = if progress.is_finite() {
            progress.clamp(0.0, 100.0)
        } else {
            100.0
        };
        self.cutoff_ms = self.scale.to_timestamp(self.progress);
    }

    /// Progress value whose cutoff lands exactly on this commit.
    pub fn progress_for(&self, commit: &CommitSummary) -> f64 {
        self.scale.to_progress(commit.timestamp_ms())
    }

    /// Length of the active prefix of a timestamp-ascending commit list.
    ///
    /// The cutoff is inclusive: commits exactly at the cutoff stay in.
    pub fn active_len(&self, commits: &[CommitSummary]) -> usize {
        commits.partition_point(|c| c.timestamp_ms() <= self.cutoff_ms)
    }

    /// Cutoff rendered for the slider label.
    pub fn cutoff_label(&self) -> String {
        if !self.has_domain {
            return "—".to_string();
        }
        chrono::DateTime::from_timestamp_millis(self.cutoff_ms)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "—".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineRow;
    use chrono::DateTime;

    fn commit(id: &str, datetime: &str) -> CommitSummary {
        CommitSummary::new(
            id.to_string(),
            None,
            vec![LineRow {
                commit: id.to_string(),
                file: "x.js".to_string(),
                datetime: DateTime::parse_from_rfc3339(datetime).ok(),
                ..LineRow::default()
            }],
        )
    }

    fn sample() -> Vec<CommitSummary> {
        vec![
            commit("a", "2024-05-01T10:00:00+00:00"),
            commit("b", "2024-05-02T10:00:00+00:00"),
            commit("c", "2024-05-03T10:00:00+00:00"),
        ]
    }

    #[test]
    fn full_progress_includes_everything() {
        let commits = sample();
        let window = TimeWindow::new(&commits);
        assert_eq!(window.active_len(&commits), 3);
    }

    #[test]
    fn zero_progress_keeps_at_most_the_earliest() {
        let commits = sample();
        let mut window = TimeWindow::new(&commits);
        window.set_progress(0.0);
        assert_eq!(window.active_len(&commits), 1);
    }

    #[test]
    fn cutoff_is_inclusive_for_exact_ties() {
        let commits = sample();
        let mut window = TimeWindow::new(&commits);
        window.set_progress(window.progress_for(&commits[1]));
        assert_eq!(window.active_len(&commits), 2);
    }

    #[test]
    fn active_len_is_monotonic_in_progress() {
        let commits = sample();
        let mut window = TimeWindow::new(&commits);
        let mut previous = 0;
        for step in 0..=20 {
            window.set_progress(step as f64 * 5.0);
            let len = window.active_len(&commits);
            assert!(len >= previous, "shrunk at progress {}", step * 5);
            previous = len;
        }
    }

    #[test]
    fn non_finite_progress_means_full_history() {
        let commits = sample();
        let mut window = TimeWindow::new(&commits);
        window.set_progress(f64::NAN);
        assert_eq!(window.progress(), 100.0);
        assert_eq!(window.active_len(&commits), 3);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let commits = sample();
        let mut window = TimeWindow::new(&commits);
        window.set_progress(250.0);
        assert_eq!(window.progress(), 100.0);
        window.set_progress(-10.0);
        assert_eq!(window.progress(), 0.0);
    }

    #[test]
    fn undated_commits_are_always_active() {
        let mut commits = vec![CommitSummary::new("x".to_string(), None, vec![])];
        commits.extend(sample());
        let mut window = TimeWindow::new(&commits);
        window.set_progress(0.0);
        // The undated commit sinks below the earliest real timestamp.
        assert_eq!(window.active_len(&commits), 2);
    }
}
