//! Input handling for the application

use crossterm::event::{KeyEvent, MouseEvent};

use super::state::{App, View};
use crate::keys;
use crate::ui::views::{ProjectsAction, ProjectsInputMode, TimelineAction};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        // Handle Ctrl+C globally
        if keys::is_quit_combo(&key) {
            self.quit();
            return;
        }

        // While typing a search query, every key belongs to the view
        if self.current_view == View::Projects
            && self.projects.input_mode != ProjectsInputMode::Normal
        {
            let action = self.projects.handle_key(key);
            self.handle_projects_action(action);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => {
                self.handle_back();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB => {
                self.next_view();
                true
            }
            keys::THEME => {
                self.cycle_theme();
                true
            }
            keys::TIMELINE_VIEW => {
                self.go_to_view(View::Timeline);
                true
            }
            keys::FILES_VIEW => {
                self.go_to_view(View::Files);
                true
            }
            keys::PROJECTS_VIEW => {
                self.go_to_view(View::Projects);
                true
            }
            keys::STATS_VIEW => {
                self.go_to_view(View::Stats);
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::Timeline {
            self.quit();
        } else {
            self.go_back();
        }
    }

    fn handle_back(&mut self) {
        if self.current_view != View::Timeline {
            self.go_back();
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Timeline => {
                let action = self.timeline.handle_key(key);
                self.handle_timeline_action(action);
            }
            View::Files => {
                let blocks = crate::ui::views::file_blocks(self.timeline.active_commits()).len();
                self.files.handle_key(key, blocks);
            }
            View::Projects => {
                let action = self.projects.handle_key(key);
                self.handle_projects_action(action);
            }
            View::Stats | View::Help => {
                // Only global keys here
            }
        }
    }

    /// Handle mouse events (hover, drag-select, slider, wedge clicks)
    pub fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match self.current_view {
            View::Timeline => {
                let action = self.timeline.handle_mouse(mouse);
                self.handle_timeline_action(action);
            }
            View::Projects => {
                let action = self.projects.handle_mouse(mouse);
                self.handle_projects_action(action);
            }
            _ => {}
        }
    }

    fn handle_timeline_action(&mut self, action: TimelineAction) {
        match action {
            TimelineAction::None => {}
            TimelineAction::OpenLink(url) => self.open_link(&url),
        }
    }

    fn handle_projects_action(&mut self, action: ProjectsAction) {
        match action {
            ProjectsAction::None => {}
            ProjectsAction::OpenLink(url) => self.open_link(&url),
        }
    }
}
