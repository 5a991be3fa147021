//! Input handling for TimelineView

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::keys;

use super::{Region, TimelineAction, TimelineView};

/// Progress step for one slider key press.
const STEP: f64 = 1.0;
/// Progress step for the fast variant.
const FAST_STEP: f64 = 10.0;

impl TimelineView {
    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) -> TimelineAction {
        match key.code {
            keys::WINDOW_BACK | KeyCode::Left => {
                self.set_progress(self.progress() - STEP);
            }
            keys::WINDOW_FORWARD | KeyCode::Right => {
                self.set_progress(self.progress() + STEP);
            }
            keys::WINDOW_BACK_FAST => {
                self.set_progress(self.progress() - FAST_STEP);
            }
            keys::WINDOW_FORWARD_FAST => {
                self.set_progress(self.progress() + FAST_STEP);
            }
            KeyCode::Home => self.set_progress(0.0),
            KeyCode::End => self.set_progress(100.0),
            keys::CLEAR_SELECTION => self.set_region(None),
            code if keys::is_move_up(code) => self.step_up(),
            code if keys::is_move_down(code) => self.step_down(),
            keys::GO_TOP => self.enter_step(0),
            keys::GO_BOTTOM => self.enter_step(self.commits().len().saturating_sub(1)),
            KeyCode::Enter => {
                if let Some(url) = self
                    .commits()
                    .get(self.step_index)
                    .and_then(|c| c.url.clone())
                {
                    return TimelineAction::OpenLink(url);
                }
            }
            _ => {}
        }
        TimelineAction::None
    }

    fn step_up(&mut self) {
        if self.step_index > 0 {
            self.enter_step(self.step_index - 1);
        }
    }

    fn step_down(&mut self) {
        if self.step_index + 1 < self.commits().len() {
            self.enter_step(self.step_index + 1);
        }
    }

    /// Handle mouse events: slider scrubbing, drag-select, hover.
    ///
    /// Every drag phase (press, move, release) re-derives the selection;
    /// a press-and-release on the same cell clears it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> TimelineAction {
        let cell = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.in_slider(cell) {
                    self.slider_drag = true;
                    self.scrub_to(cell.0);
                } else if self.in_plot(cell) {
                    self.drag_anchor = Some(cell);
                    self.set_region(Some(Region::from_corners(cell, cell)));
                } else if let Some(steps) = self.steps_area
                    && steps.contains(Position::new(cell.0, cell.1))
                {
                    let index = self.scroll_offset + usize::from(cell.1 - steps.y);
                    if index < self.commits().len() {
                        self.enter_step(index);
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.slider_drag {
                    self.scrub_to(cell.0);
                } else if let Some(anchor) = self.drag_anchor {
                    self.set_region(Some(Region::from_corners(anchor, self.clamp_to_plot(cell))));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(anchor) = self.drag_anchor
                    && anchor == cell
                {
                    // Empty drag clears the region.
                    self.set_region(None);
                }
                self.drag_anchor = None;
                self.slider_drag = false;
            }
            MouseEventKind::Moved => {
                if self.in_plot(cell) {
                    self.hover = Some(cell);
                    self.hovered = self.hit_test(cell.0, cell.1);
                } else {
                    self.hover = None;
                    self.hovered = None;
                }
            }
            _ => {}
        }
        TimelineAction::None
    }

    fn in_slider(&self, cell: (u16, u16)) -> bool {
        self.slider_area
            .is_some_and(|area| area.contains(Position::new(cell.0, cell.1)))
    }

    fn in_plot(&self, cell: (u16, u16)) -> bool {
        self.geom
            .is_some_and(|geom| geom.plot.contains(Position::new(cell.0, cell.1)))
    }

    fn clamp_to_plot(&self, cell: (u16, u16)) -> (u16, u16) {
        let Some(geom) = self.geom else {
            return cell;
        };
        let plot = geom.plot;
        (
            cell.0.clamp(plot.x, plot.right().saturating_sub(1)),
            cell.1.clamp(plot.y, plot.bottom().saturating_sub(1)),
        )
    }

    /// Map a slider column onto progress (last write wins on rapid drags).
    fn scrub_to(&mut self, column: u16) {
        let Some(area) = self.slider_area else {
            return;
        };
        if area.width <= 1 {
            return;
        }
        let offset = column.saturating_sub(area.x);
        let progress = f64::from(offset) / f64::from(area.width - 1) * 100.0;
        self.set_progress(progress);
    }
}
