//! Rendering for ProjectsView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, canvas::Canvas},
};

use crate::model::Project;
use crate::ui::theme::{Palette, categorical};
use crate::ui::{components, symbols};

use super::{CARD_HEIGHT, ProjectsInputMode, ProjectsView, wedges};

/// Side panel width (pie + legend).
const SIDE_PANEL: u16 = 30;

impl ProjectsView {
    /// Render the view
    pub fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if let Some(error) = self.load_error.clone() {
            let block = components::framed_block(
                Line::from(" Projects ").style(Style::default().fg(palette.title)),
                palette.frame,
            );
            let body = components::empty_state("Couldn't load projects.", Some(error.as_str()))
                .style(Style::default().fg(palette.error))
                .block(block);
            frame.render_widget(body, area);
            self.cards_area = None;
            self.pie_area = None;
            self.legend_area = None;
            return;
        }

        // Reserve the input bar while searching.
        let (main_area, input_area) = match self.input_mode {
            ProjectsInputMode::SearchInput => {
                let chunks =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);
                (chunks[0], Some(chunks[1]))
            }
            ProjectsInputMode::Normal => (area, None),
        };

        let columns = if main_area.width > SIDE_PANEL + 34 {
            Layout::horizontal([Constraint::Min(30), Constraint::Length(SIDE_PANEL)])
                .split(main_area)
        } else {
            Layout::horizontal([Constraint::Min(0)]).split(main_area)
        };

        self.render_cards(frame, columns[0], palette);
        if columns.len() > 1 {
            self.render_pie_panel(frame, columns[1], palette);
        } else {
            self.pie_area = None;
            self.legend_area = None;
        }

        if let Some(input_area) = input_area {
            self.render_input_bar(frame, input_area, palette);
        }
    }

    fn build_title(&self) -> String {
        let mut title = format!(" Projects ({}) ", self.visible().len());
        if !self.query.is_empty() {
            title.push_str(&format!("[Search: {}] ", self.query));
        }
        if let Some(index) = self.selected_year
            && let Some(bucket) = self.year_buckets().get(index)
        {
            title.push_str(&format!("[Year: {}] ", bucket.year));
        }
        title
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let title = Line::from(self.build_title()).style(Style::default().fg(palette.title));
        let block = components::framed_block(title, palette.frame);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.cards_area = Some(inner);

        let visible_len = self.visible().len();
        if visible_len == 0 {
            frame.render_widget(
                components::empty_state(
                    symbols::empty::NO_PROJECTS,
                    Some("Try clearing the search or year filter."),
                ),
                inner,
            );
            return;
        }

        let rows_per_card = usize::from(CARD_HEIGHT);
        let card_slots = (inner.height as usize / rows_per_card).max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + card_slots {
            self.scroll_offset = self.cursor - card_slots + 1;
        }

        let mut lines: Vec<Line> = Vec::new();
        for (idx, project) in self
            .visible()
            .into_iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(card_slots)
        {
            let selected = idx == self.cursor;
            lines.extend(self.build_card(project, selected, palette));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// One card: heading, description, image path, links, separator.
    fn build_card(
        &self,
        project: &Project,
        selected: bool,
        palette: &Palette,
    ) -> Vec<Line<'static>> {
        let heading_style = match self.heading_level() {
            1 | 2 => Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            3 | 4 => Style::default().fg(palette.title).add_modifier(Modifier::BOLD),
            _ => Style::default().fg(palette.title),
        };

        let mut heading = vec![Span::styled(project.title.clone(), heading_style)];
        if let Some(year) = project.year {
            heading.push(Span::styled(
                format!("  ({year})"),
                Style::default().fg(palette.dim),
            ));
        }

        let description = if project.description.is_empty() {
            Line::from(Span::styled(
                "(no description)".to_string(),
                Style::default().fg(palette.dim),
            ))
        } else {
            Line::from(project.description.clone())
        };

        let mut links: Vec<Span<'static>> = Vec::new();
        if project.url.is_some() {
            links.push(Span::styled(
                "[demo] ".to_string(),
                Style::default().fg(palette.accent),
            ));
        }
        if project.repo.is_some() {
            links.push(Span::styled(
                "[repo]".to_string(),
                Style::default().fg(palette.accent),
            ));
        }
        if links.is_empty() {
            links.push(Span::styled(
                "(no links)".to_string(),
                Style::default().fg(palette.dim),
            ));
        }

        let mut card = vec![
            Line::from(heading),
            description,
            Line::from(Span::styled(
                format!("img: {}", project.image_path()),
                Style::default().fg(palette.dim),
            )),
            Line::from(links),
            Line::from(""),
        ];

        if selected {
            for line in card.iter_mut().take(rows_with_content()) {
                *line = std::mem::take(line).style(
                    Style::default()
                        .fg(palette.selected_fg)
                        .bg(palette.selected_bg),
                );
            }
        }
        card
    }

    fn render_pie_panel(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let chunks =
            Layout::vertical([Constraint::Length(13), Constraint::Min(2)]).split(area);
        self.render_pie(frame, chunks[0], palette);
        self.render_legend(frame, chunks[1], palette);
    }

    fn render_pie(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let title = Line::from(" By year ").style(Style::default().fg(palette.title));
        let block = components::framed_block(title, palette.frame);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.pie_area = Some(inner);

        let buckets = self.year_buckets();
        let wedge_list = wedges(&buckets);
        if wedge_list.is_empty() {
            // Zero wedges: an empty ring, not a crash.
            return;
        }

        let selected = self.selected_year;
        let canvas = Canvas::default()
            .x_bounds([-1.2, 1.2])
            .y_bounds([-1.2, 1.2])
            .paint(|ctx| {
                for (index, wedge) in wedge_list.iter().enumerate() {
                    let color = categorical::by_index(index);
                    let radius = if selected == Some(index) { 1.1 } else { 0.95 };
                    let mut angle = wedge.start;
                    while angle < wedge.end {
                        ctx.draw(&ratatui::widgets::canvas::Line {
                            x1: 0.0,
                            y1: 0.0,
                            x2: angle.cos() * radius,
                            y2: angle.sin() * radius,
                            color,
                        });
                        angle += 0.02;
                    }
                }
            });
        frame.render_widget(canvas, inner);
    }

    fn render_legend(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let title = Line::from(" Legend ").style(Style::default().fg(palette.title));
        let block = components::framed_block(title, palette.frame);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.legend_area = Some(inner);

        let buckets = self.year_buckets();
        let mut lines: Vec<Line> = Vec::new();
        for (index, bucket) in buckets.iter().enumerate().take(inner.height as usize) {
            let marker = format!("[{}] ", index + 1);
            let mut line = Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.dim)),
                Span::styled(
                    format!("{} ", symbols::markers::SWATCH),
                    Style::default().fg(categorical::by_index(index)),
                ),
                Span::raw(format!("{} ", bucket.year)),
                Span::styled(
                    format!("({})", bucket.count),
                    Style::default().fg(palette.dim),
                ),
            ]);
            if self.selected_year == Some(index) {
                line = line.style(Style::default().add_modifier(Modifier::BOLD));
            }
            lines.push(line);
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let input_text = format!("Search: {}", self.input_buffer);
        let available_width = area.width.saturating_sub(2) as usize;
        if available_width == 0 {
            return;
        }

        // Show the end of long input, UTF-8 safe.
        let char_count = input_text.chars().count();
        let display_text = if char_count > available_width {
            let skip = char_count.saturating_sub(available_width.saturating_sub(1));
            format!("…{}", input_text.chars().skip(skip).collect::<String>())
        } else {
            input_text.clone()
        };

        let title = Line::from(" / Search ").bold().fg(palette.title);
        frame.render_widget(
            Paragraph::new(display_text).block(components::framed_block(title, palette.frame)),
            area,
        );

        let cursor_pos = char_count.min(available_width);
        frame.set_cursor_position((area.x + cursor_pos as u16 + 1, area.y + 1));
    }
}

/// Card rows that carry content (the trailing separator stays unstyled).
fn rows_with_content() -> usize {
    usize::from(CARD_HEIGHT) - 1
}
