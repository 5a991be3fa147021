//! Stats View - whole-log metrics and the GitHub profile widget

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::data::LogStats;
use crate::model::ProfileStats;
use crate::ui::components;
use crate::ui::theme::Palette;

/// Stats View state
#[derive(Debug, Default)]
pub struct StatsView {
    /// Aggregates over the whole commit log (None until loaded)
    pub stats: Option<LogStats>,
    /// Profile counters, when the lookup succeeded
    pub profile: Option<ProfileStats>,
    /// Inline error from the one-shot profile lookup
    pub profile_error: Option<String>,
    /// Username the profile widget is about
    pub username: Option<String>,
}

impl StatsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the view
    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let chunks =
            Layout::vertical([Constraint::Min(6), Constraint::Length(6)]).split(area);
        self.render_log_stats(frame, chunks[0], palette);
        self.render_profile(frame, chunks[1], palette);
    }

    fn render_log_stats(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let title = Line::from(" Codebase ").style(Style::default().fg(palette.title));
        let block = components::framed_block(title, palette.frame);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(stats) = &self.stats else {
            frame.render_widget(
                components::empty_state("No commit log stats available.", None),
                inner,
            );
            return;
        };

        let entry = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<18}"), Style::default().fg(palette.dim)),
                Span::raw(value),
            ])
        };

        let (longest_name, longest_len) = stats
            .longest_file
            .clone()
            .map(|(name, len)| (name, len.to_string()))
            .unwrap_or_else(|| ("(unknown)".to_string(), "0".to_string()));

        let lines = vec![
            entry("Total LOC", stats.total_lines.to_string()),
            entry("Total commits", stats.total_commits.to_string()),
            entry("Files", stats.file_count.to_string()),
            entry("Max file length", longest_len),
            entry("Longest file", longest_name),
            entry("Avg file length", format!("{:.2}", stats.avg_file_length)),
            entry("Max depth", stats.max_depth.to_string()),
            entry("Avg depth", format!("{:.2}", stats.avg_depth)),
            entry(
                "Busiest period",
                stats
                    .busiest_period
                    .map(|p| p.label().to_string())
                    .unwrap_or_else(|| "(n/a)".to_string()),
            ),
            entry(
                "Busiest weekday",
                stats
                    .busiest_weekday
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "(n/a)".to_string()),
            ),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_profile(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let heading = match &self.username {
            Some(name) => format!(" GitHub · {name} "),
            None => " GitHub ".to_string(),
        };
        let title = Line::from(heading).style(Style::default().fg(palette.title));
        let block = components::framed_block(title, palette.frame);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.username.is_none() {
            frame.render_widget(
                Paragraph::new("No username configured. Pass --github <user>.")
                    .style(Style::default().fg(palette.dim)),
                inner,
            );
            return;
        }

        if let Some(error) = &self.profile_error {
            frame.render_widget(
                Paragraph::new(format!("Couldn't fetch profile: {error}"))
                    .style(Style::default().fg(palette.error)),
                inner,
            );
            return;
        }

        let Some(profile) = &self.profile else {
            frame.render_widget(
                Paragraph::new("Profile not loaded.").style(Style::default().fg(palette.dim)),
                inner,
            );
            return;
        };

        let counter = |label: &str, value: u64| {
            Line::from(vec![
                Span::styled(format!("{label:<14}"), Style::default().fg(palette.dim)),
                Span::raw(value.to_string()),
            ])
        };
        let lines = vec![
            counter("Followers", profile.followers),
            counter("Following", profile.following),
            counter("Public repos", profile.public_repos),
            counter("Public gists", profile.public_gists),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
