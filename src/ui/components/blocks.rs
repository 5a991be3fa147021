//! Block components for UI rendering

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with all borders and a title.
pub fn bordered_block(title: Line<'_>) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Bordered block with a themed border color.
pub fn framed_block(title: Line<'_>, frame_color: Color) -> Block<'_> {
    bordered_block(title).border_style(Style::default().fg(frame_color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    #[test]
    fn blocks_build_without_panic() {
        let _ = bordered_block(Line::from("Test"));
        let _ = framed_block(Line::from("Framed"), Color::DarkGray);
    }
}
