//! Rendering for FilesView

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::CommitSummary;
use crate::ui::theme::{Palette, categorical};
use crate::ui::{components, symbols};

use super::{FilesView, file_blocks};

impl FilesView {
    /// Render the view from the active commit subset.
    ///
    /// The whole block set is rebuilt on every render; there is no
    /// incremental diffing to go stale.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        active: &[CommitSummary],
        palette: &Palette,
    ) {
        let blocks = file_blocks(active);
        let title = Line::from(format!(" Files touched ({}) ", blocks.len()))
            .style(Style::default().fg(palette.title));
        let outer = components::framed_block(title, palette.frame);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        if blocks.is_empty() {
            frame.render_widget(
                components::empty_state(symbols::empty::NO_ACTIVE_COMMITS, None),
                inner,
            );
            return;
        }

        let visible = inner.height as usize;
        if visible == 0 {
            return;
        }
        self.scroll_offset = self.scroll_offset.min(blocks.len().saturating_sub(1));

        let max_lines = blocks.first().map(|b| b.lines).unwrap_or(1).max(1);
        let name_width = 28usize.min(inner.width as usize / 2);
        let bar_space = (inner.width as usize)
            .saturating_sub(name_width + 12)
            .max(1);

        let mut lines: Vec<Line> = Vec::new();
        for block in blocks.iter().skip(self.scroll_offset).take(visible) {
            let color = categorical::for_type(&block.type_tag);
            let bar_len = ((block.lines as f64 / max_lines as f64) * bar_space as f64)
                .round()
                .max(1.0) as usize;
            let bar: String = std::iter::repeat_n(symbols::markers::BAR, bar_len).collect();

            let mut path = block.path.clone();
            if path.chars().count() > name_width {
                let tail: String = path
                    .chars()
                    .rev()
                    .take(name_width.saturating_sub(1))
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                path = format!("…{tail}");
            }

            lines.push(Line::from(vec![
                Span::raw(format!("{path:<name_width$} ")),
                Span::styled(bar, Style::default().fg(color)),
                Span::styled(
                    format!(" {} ({})", block.lines, block.type_tag),
                    Style::default().fg(palette.dim),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
