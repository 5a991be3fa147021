//! Hover tooltip widget

use ratatui::{
    Frame,
    prelude::*,
    widgets::{Clear, Paragraph},
};

use crate::model::CommitSummary;
use crate::ui::components;
use crate::ui::theme::Palette;

/// Offset between the cursor cell and the tooltip corner.
const OFFSET: (u16, u16) = (2, 1);
const WIDTH: u16 = 34;
const HEIGHT: u16 = 7;

/// Render a commit tooltip near the cursor.
///
/// The box is shifted by a fixed offset so it does not sit under the
/// cursor, and flipped to the other side when it would leave the screen.
pub fn render_commit_tooltip(
    frame: &mut Frame,
    cursor: (u16, u16),
    commit: &CommitSummary,
    palette: &Palette,
) {
    let screen = frame.area();
    if screen.width < WIDTH || screen.height < HEIGHT {
        return;
    }

    let mut x = cursor.0.saturating_add(OFFSET.0);
    let mut y = cursor.1.saturating_add(OFFSET.1);
    if x + WIDTH > screen.right() {
        x = cursor.0.saturating_sub(OFFSET.0 + WIDTH);
    }
    if y + HEIGHT > screen.bottom() {
        y = cursor.1.saturating_sub(OFFSET.1 + HEIGHT);
    }
    let area = Rect {
        x,
        y,
        width: WIDTH,
        height: HEIGHT,
    };

    let label = |name: &str| Span::styled(format!("{name:<8}"), Style::default().fg(palette.dim));
    let lines = vec![
        Line::from(vec![
            label("commit"),
            Span::styled(
                commit.url.clone().unwrap_or_else(|| commit.id.clone()),
                Style::default().fg(palette.accent),
            ),
        ]),
        Line::from(vec![label("date"), Span::raw(commit.date.clone())]),
        Line::from(vec![label("time"), Span::raw(commit.time.clone())]),
        Line::from(vec![label("author"), Span::raw(commit.author.clone())]),
        Line::from(vec![
            label("lines"),
            Span::raw(commit.total_lines.to_string()),
        ]),
    ];

    let title = Line::from(format!(" {} ", commit.short_id()))
        .style(Style::default().fg(palette.title));
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(components::framed_block(title, palette.frame)),
        area,
    );
}
