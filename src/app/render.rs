//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::{App, View};
use crate::keys;
use crate::ui::components;
use crate::ui::widgets::{render_error_banner, render_status_bar};

/// Navigation entries, in Tab order.
const NAV: [(View, &str); 4] = [
    (View::Timeline, "[m] Timeline"),
    (View::Files, "[f] Files"),
    (View::Projects, "[p] Projects"),
    (View::Stats, "[s] Stats"),
];

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Top row: navigation; bottom row: status bar
        let nav_area = Rect {
            height: area.height.min(1),
            ..area
        };
        let main_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(2),
            ..area
        };

        self.render_nav(frame, nav_area);

        let palette = self.palette;
        match self.current_view {
            View::Timeline => self.timeline.render(frame, main_area, &palette),
            View::Files => {
                let active = self.timeline.active_commits();
                self.files.render(frame, main_area, active, &palette);
            }
            View::Projects => self.projects.render(frame, main_area, &palette),
            View::Stats => self.stats.render(frame, main_area, &palette),
            View::Help => self.render_help(frame, main_area),
        }

        self.render_notification(frame);

        let hints = keys::current_hints(self.current_view, self.projects.input_mode);
        render_status_bar(frame, &hints);

        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }
    }

    /// Navigation bar with the current view marked.
    fn render_nav(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let palette = &self.palette;
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for (view, label) in NAV {
            let style = if view == self.current_view {
                Style::default()
                    .fg(palette.selected_fg)
                    .bg(palette.accent)
                    .bold()
            } else {
                Style::default().fg(palette.dim)
            };
            spans.push(Span::styled(format!(" {label} "), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Transient notification in the top-right corner, over the view.
    fn render_notification(&self, frame: &mut Frame) {
        let Some(notification) = self.notification.as_ref().filter(|n| !n.is_expired()) else {
            return;
        };
        let area = frame.area();
        let line =
            components::build_notification_title(notification, Some(area.width as usize / 2));
        let width = line.width() as u16;
        if width == 0 || area.width <= width {
            return;
        }
        let corner = Rect {
            x: area.right() - width,
            y: area.y,
            width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(line), corner);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let palette = &self.palette;
        let title = Line::from(" Folio - Help ").bold().fg(palette.title).centered();

        let mut lines = vec![
            Line::from("Key bindings:".bold()),
            Line::from(""),
            Line::from("Global:".underlined()),
        ];
        push_entries(&mut lines, keys::GLOBAL_KEYS);

        lines.push(Line::from(""));
        lines.push(Line::from("Timeline:".underlined()));
        push_entries(&mut lines, keys::TIMELINE_KEYS);

        lines.push(Line::from(""));
        lines.push(Line::from("Projects:".underlined()));
        push_entries(&mut lines, keys::PROJECTS_KEYS);

        lines.push(Line::from(""));
        lines.push(Line::from("Files:".underlined()));
        push_entries(&mut lines, keys::FILES_KEYS);

        frame.render_widget(
            Paragraph::new(lines).block(components::framed_block(title, palette.frame)),
            area,
        );
    }
}

fn push_entries(lines: &mut Vec<Line<'static>>, entries: &[keys::KeyBindEntry]) {
    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", entry.key),
                Style::default().fg(ratatui::style::Color::Yellow),
            ),
            Span::raw(entry.description),
        ]));
    }
}
