//! Rendering for TimelineView

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Gauge, Paragraph,
        canvas::{Canvas, Circle, Rectangle},
    },
};

use crate::model::CommitSummary;
use crate::ui::scale::{LinearScale, SqrtScale};
use crate::ui::theme::Palette;
use crate::ui::widgets::render_commit_tooltip;
use crate::ui::{components, symbols, theme};

use super::{ChartGeom, TimelineView};

/// Width of the hour-label gutter left of the plot.
const GUTTER: u16 = 6;
/// Rows reserved under the plot for date labels.
const X_AXIS: u16 = 1;
/// Width of the narrative/selection side panel.
const SIDE_PANEL: u16 = 36;

impl TimelineView {
    /// Render the view
    pub fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if let Some(error) = self.load_error.clone() {
            let block = components::framed_block(
                Line::from(" Timeline ").style(Style::default().fg(palette.title)),
                palette.frame,
            );
            let body = components::empty_state("Couldn't load the commit log.", Some(error.as_str()))
                .style(Style::default().fg(palette.error))
                .block(block);
            frame.render_widget(body, area);
            self.geom = None;
            self.slider_area = None;
            return;
        }

        if self.commits().is_empty() {
            let block = components::framed_block(
                Line::from(" Timeline ").style(Style::default().fg(palette.title)),
                palette.frame,
            );
            let body = components::empty_state(
                symbols::empty::NO_COMMITS,
                Some("Hint: pass --log <loc.csv>"),
            )
            .block(block);
            frame.render_widget(body, area);
            self.geom = None;
            self.slider_area = None;
            return;
        }

        let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);
        self.render_slider(frame, rows[0], palette);

        let columns = if rows[1].width > SIDE_PANEL + 30 {
            Layout::horizontal([Constraint::Min(30), Constraint::Length(SIDE_PANEL)]).split(rows[1])
        } else {
            Layout::horizontal([Constraint::Min(0)]).split(rows[1])
        };
        self.render_chart(frame, columns[0], palette);
        if columns.len() > 1 {
            self.render_side_panel(frame, columns[1], palette);
        }

        if let (Some(cursor), Some(commit)) = (self.hover, self.hovered_commit()) {
            render_commit_tooltip(frame, cursor, commit, palette);
        }
    }

    fn render_slider(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = components::framed_block(
            Line::from(" Time travel ").style(Style::default().fg(palette.title)),
            palette.frame,
        );
        let inner = block.inner(area);
        let label = format!("{:3.0}% · {}", self.progress(), self.cutoff_label());
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(palette.accent))
            .ratio(self.progress() / 100.0)
            .label(label);
        frame.render_widget(gauge, area);
        self.slider_area = Some(inner);
    }

    fn render_chart(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let active_total = self.active_commits().len();
        let title = Line::from(format!(" Commits by time of day ({active_total}) "))
            .style(Style::default().fg(palette.title));
        let block = components::framed_block(title, palette.frame);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < GUTTER + 8 || inner.height < X_AXIS + 5 {
            self.geom = None;
            return;
        }

        let plot = Rect {
            x: inner.x + GUTTER,
            y: inner.y,
            width: inner.width - GUTTER,
            height: inner.height - X_AXIS,
        };

        // Domain over the *active* commits only: the axis rescales as the
        // window narrows so the plot stays populated.
        let mut ts_extent: Option<(i64, i64)> = None;
        let mut line_extent: Option<(usize, usize)> = None;
        for commit in self.active_commits() {
            if commit.datetime.is_none() {
                continue;
            }
            let ts = commit.timestamp_ms();
            let lines = commit.total_lines;
            ts_extent = Some(match ts_extent {
                None => (ts, ts),
                Some((min, max)) => (min.min(ts), max.max(ts)),
            });
            line_extent = Some(match line_extent {
                None => (lines, lines),
                Some((min, max)) => (min.min(lines), max.max(lines)),
            });
        }

        let (Some((ts_min, ts_max)), Some((ln_min, ln_max))) = (ts_extent, line_extent) else {
            frame.render_widget(
                components::empty_state(symbols::empty::NO_ACTIVE_COMMITS, None),
                plot,
            );
            self.geom = None;
            return;
        };

        let max_radius = (f64::from(plot.height) / 4.0).clamp(1.0, 4.0);
        let geom = ChartGeom {
            plot,
            x: LinearScale::new(
                (ts_min as f64, ts_max as f64),
                (f64::from(plot.x), f64::from(plot.right() - 1)),
            ),
            y: LinearScale::new(
                (0.0, 24.0),
                (f64::from(plot.bottom() - 1), f64::from(plot.y)),
            ),
            r: SqrtScale::new((ln_min as f64, ln_max as f64), (0.8, max_radius)),
        };
        self.geom = Some(geom);
        // Geometry may have shifted under an existing region.
        self.recompute_selection();

        self.render_axes(frame, inner, plot, &geom, palette);

        // Largest circles first so the small ones stay visible on top.
        let hovered_id = self.hovered_commit().map(|c| c.id.clone());
        let mut order: Vec<&CommitSummary> = self
            .active_commits()
            .iter()
            .filter(|c| geom.position(c).is_some())
            .collect();
        order.sort_by(|a, b| b.total_lines.cmp(&a.total_lines));

        let region = self.region;
        let canvas = Canvas::default()
            .x_bounds([0.0, f64::from(plot.width)])
            .y_bounds([0.0, f64::from(plot.height) * 2.0])
            .marker(Marker::Braille)
            .paint(|ctx| {
                for commit in &order {
                    let Some((col, row)) = geom.position(commit) else {
                        continue;
                    };
                    let color = if hovered_id.as_deref() == Some(commit.id.as_str()) {
                        palette.dot_hover
                    } else {
                        palette.dot
                    };
                    ctx.draw(&Circle {
                        x: col - f64::from(plot.x) + 0.5,
                        y: (f64::from(plot.bottom() - 1) - row + 0.5) * 2.0,
                        radius: geom.radius(commit),
                        color,
                    });
                }

                if let Some(region) = region {
                    let left = region.left.max(plot.x);
                    let right = region.right.min(plot.right().saturating_sub(1));
                    let top = region.top.max(plot.y);
                    let bottom = region.bottom.min(plot.bottom().saturating_sub(1));
                    if left <= right && top <= bottom {
                        ctx.draw(&Rectangle {
                            x: f64::from(left - plot.x),
                            y: f64::from(plot.bottom() - 1 - bottom) * 2.0,
                            width: f64::from(right - left + 1),
                            height: f64::from(bottom - top + 1) * 2.0,
                            color: palette.region,
                        });
                    }
                }
            });
        frame.render_widget(canvas, plot);
    }

    fn render_axes(
        &self,
        frame: &mut Frame,
        inner: Rect,
        plot: Rect,
        geom: &ChartGeom,
        palette: &Palette,
    ) {
        let axis_style = Style::default().fg(palette.axis);

        for hour in [0u32, 6, 12, 18, 24] {
            let row = geom.y.apply(f64::from(hour)).round() as u16;
            if row < inner.y || row >= plot.bottom() {
                continue;
            }
            let label_area = Rect {
                x: inner.x,
                y: row,
                width: GUTTER - 1,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(format!("{:02}:00", hour % 24))
                    .style(axis_style)
                    .alignment(Alignment::Right),
                label_area,
            );
        }

        let axis_row = Rect {
            x: plot.x,
            y: inner.bottom() - 1,
            width: plot.width,
            height: 1,
        };
        let first = self
            .active_commits()
            .iter()
            .find(|c| c.datetime.is_some())
            .map(|c| c.date.clone())
            .unwrap_or_default();
        let last = self
            .active_commits()
            .iter()
            .rev()
            .find(|c| c.datetime.is_some())
            .map(|c| c.date.clone())
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(first).style(axis_style).alignment(Alignment::Left),
            axis_row,
        );
        frame.render_widget(
            Paragraph::new(last).style(axis_style).alignment(Alignment::Right),
            axis_row,
        );
    }

    fn render_side_panel(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let chunks =
            Layout::vertical([Constraint::Min(3), Constraint::Length(9)]).split(area);
        self.render_steps(frame, chunks[0], palette);
        self.render_selection_summary(frame, chunks[1], palette);
    }

    /// The narrative commit list: its cursor drives the slider.
    fn render_steps(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let active_len = self.active_commits().len();
        let total = self.commits().len();
        let title = Line::from(format!(" Story ({active_len}/{total}) "))
            .style(Style::default().fg(palette.title));
        let block = components::framed_block(title, palette.frame);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.steps_area = Some(inner);

        let visible = inner.height as usize;
        if visible == 0 {
            return;
        }
        // Keep the cursor on screen.
        if self.step_index < self.scroll_offset {
            self.scroll_offset = self.step_index;
        } else if self.step_index >= self.scroll_offset + visible {
            self.scroll_offset = self.step_index - visible + 1;
        }

        let mut lines: Vec<Line> = Vec::new();
        for (idx, commit) in self
            .commits()
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible)
        {
            let active = idx < active_len;
            let marker = if active {
                symbols::markers::ACTIVE
            } else {
                symbols::markers::INACTIVE
            };
            let marker_style = if active {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.dim)
            };
            let mut line = Line::from(vec![
                Span::styled(format!("{marker} "), marker_style),
                Span::styled(
                    format!("{:<8} ", commit.short_id()),
                    Style::default().fg(palette.title),
                ),
                Span::styled(
                    format!("{} ", commit.date),
                    Style::default().fg(palette.dim),
                ),
                Span::raw(format!("{:>4}L", commit.total_lines)),
            ]);
            if idx == self.step_index {
                line = line.style(
                    Style::default()
                        .fg(palette.selected_fg)
                        .bg(palette.selected_bg)
                        .add_modifier(Modifier::BOLD),
                );
            }
            lines.push(line);
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_selection_summary(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let title = Line::from(" Selection ").style(Style::default().fg(palette.title));
        let block = components::framed_block(title, palette.frame);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.region.is_none() {
            frame.render_widget(
                Paragraph::new("Drag on the chart to select commits.")
                    .style(Style::default().fg(palette.dim)),
                inner,
            );
            return;
        }

        let summary = self.summary();
        let mut lines = vec![Line::from(format!(
            "{} commit{} selected",
            summary.commit_count,
            if summary.commit_count == 1 { "" } else { "s" }
        ))];
        for entry in summary.breakdown.iter().take(inner.height.saturating_sub(1) as usize) {
            let bar_len = (entry.proportion * 10.0).round() as usize;
            let bar: String = std::iter::repeat_n(symbols::markers::BAR, bar_len.max(1)).collect();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<6} ", entry.type_tag),
                    Style::default().fg(theme::categorical::for_type(&entry.type_tag)),
                ),
                Span::styled(
                    bar,
                    Style::default().fg(theme::categorical::for_type(&entry.type_tag)),
                ),
                Span::styled(
                    format!(" {} ({:.0}%)", entry.lines, entry.proportion * 100.0),
                    Style::default().fg(palette.dim),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
