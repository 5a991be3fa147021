//! Input handling for ProjectsView

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::keys;

use super::{CARD_HEIGHT, ProjectsAction, ProjectsInputMode, ProjectsView, wedge_at, wedges};

impl ProjectsView {
    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) -> ProjectsAction {
        match self.input_mode {
            ProjectsInputMode::Normal => self.handle_normal_key(key),
            ProjectsInputMode::SearchInput => self.handle_search_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> ProjectsAction {
        match key.code {
            keys::SEARCH_INPUT => {
                self.input_mode = ProjectsInputMode::SearchInput;
                self.input_buffer = self.query.clone();
            }
            code if keys::is_move_down(code) => {
                let len = self.visible().len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            code if keys::is_move_up(code) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            keys::GO_TOP => self.cursor = 0,
            keys::GO_BOTTOM => self.cursor = self.visible().len().saturating_sub(1),
            keys::CLEAR_YEAR => {
                self.selected_year = None;
                self.clamp_cursor();
            }
            keys::OPEN_REPO => {
                if let Some(url) = self.visible().get(self.cursor).and_then(|p| p.repo.clone()) {
                    return ProjectsAction::OpenLink(url);
                }
            }
            KeyCode::Enter => {
                if let Some(url) = self.visible().get(self.cursor).and_then(|p| p.url.clone()) {
                    return ProjectsAction::OpenLink(url);
                }
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                self.toggle_year(index);
            }
            _ => {}
        }
        ProjectsAction::None
    }

    /// Search input applies live: every keystroke re-filters the cards
    /// and re-buckets the pie.
    fn handle_search_key(&mut self, key: KeyEvent) -> ProjectsAction {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = ProjectsInputMode::Normal;
                self.input_buffer.clear();
                self.set_query(String::new());
            }
            KeyCode::Enter => {
                self.input_mode = ProjectsInputMode::Normal;
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                let query = self.input_buffer.clone();
                self.set_query(query);
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                let query = self.input_buffer.clone();
                self.set_query(query);
            }
            _ => {}
        }
        ProjectsAction::None
    }

    /// Handle mouse events: wedge/legend toggles and card selection.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> ProjectsAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ProjectsAction::None;
        }
        let cell = Position::new(mouse.column, mouse.row);

        if let Some(legend) = self.legend_area
            && legend.contains(cell)
        {
            let index = usize::from(mouse.row - legend.y);
            self.toggle_year(index);
            return ProjectsAction::None;
        }

        if let Some(pie) = self.pie_area
            && pie.contains(cell)
        {
            if let Some(angle) = pie_angle(pie, cell) {
                let buckets = self.year_buckets();
                if let Some(index) = wedge_at(&wedges(&buckets), angle) {
                    self.toggle_year(index);
                }
            }
            return ProjectsAction::None;
        }

        if let Some(cards) = self.cards_area
            && cards.contains(cell)
        {
            let index =
                self.scroll_offset + usize::from((mouse.row - cards.y) / CARD_HEIGHT);
            if index < self.visible().len() {
                self.cursor = index;
            }
        }
        ProjectsAction::None
    }
}

/// Angle of a cell around the pie center, or `None` outside the disc.
///
/// Uses the same [-1.2, 1.2] canvas bounds the pie is painted with, so a
/// click lands on the wedge it appears to touch.
fn pie_angle(area: Rect, cell: Position) -> Option<f64> {
    if area.width < 2 || area.height < 2 {
        return None;
    }
    let nx = (f64::from(cell.x - area.x) / f64::from(area.width - 1)) * 2.4 - 1.2;
    let ny = 1.2 - (f64::from(cell.y - area.y) / f64::from(area.height - 1)) * 2.4;
    let radius = (nx * nx + ny * ny).sqrt();
    (radius <= 1.1).then(|| ny.atan2(nx))
}
