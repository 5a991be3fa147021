//! Application state, startup loading and view management

use std::path::PathBuf;

use crate::config::Config;
use crate::data::{self, LogStats};
use crate::model::Notification;
use crate::ui::theme::Palette;
use crate::ui::views::{FilesView, ProjectsView, StatsView, TimelineView};

/// Startup options (resolved from the command line).
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub log_path: PathBuf,
    pub projects_path: PathBuf,
    pub github_user: Option<String>,
    pub repo_url: Option<String>,
    pub heading_level: u8,
}

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Timeline,
    Files,
    Projects,
    Stats,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// Timeline view state
    pub timeline: TimelineView,
    /// Files view state
    pub files: FilesView,
    /// Projects view state
    pub projects: ProjectsView,
    /// Stats view state
    pub stats: StatsView,
    /// Persisted preferences
    pub config: Config,
    /// Colors resolved from the config's scheme
    pub palette: Palette,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (theme changes, opened links, ...)
    pub notification: Option<Notification>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl App {
    /// Construct a new instance of [`App`] and load every resource.
    ///
    /// Each resource loads independently: a failure lands as an inline
    /// error in its own view and leaves the others working.
    pub fn new(options: &Options) -> Self {
        let config = Config::load();
        let palette = Palette::for_scheme(config.color_scheme);

        let mut app = Self {
            running: true,
            current_view: View::Timeline,
            previous_view: None,
            timeline: TimelineView::new(),
            files: FilesView::new(),
            projects: ProjectsView::new(),
            stats: StatsView::new(),
            config,
            palette,
            error_message: None,
            notification: None,
        };

        app.load_commit_log(options);
        app.load_projects(options);
        app.load_profile(options);

        app
    }

    fn load_commit_log(&mut self, options: &Options) {
        match data::load_commit_log(&options.log_path) {
            Ok(rows) => {
                self.stats.stats = Some(LogStats::compute(&rows));
                let commits = data::summarize_commits(rows, options.repo_url.as_deref());
                self.timeline.set_commits(commits);
            }
            Err(err) => {
                tracing::error!(%err, "commit log load failed");
                self.timeline.load_error = Some(err.to_string());
            }
        }
    }

    fn load_projects(&mut self, options: &Options) {
        self.projects.set_heading_level(options.heading_level);
        match data::load_projects(&options.projects_path) {
            Ok(projects) => self.projects.set_projects(projects),
            Err(err) => {
                tracing::error!(%err, "projects load failed");
                self.projects.load_error = Some(err.to_string());
            }
        }
    }

    fn load_profile(&mut self, options: &Options) {
        self.stats.username = options.github_user.clone();
        let Some(user) = &options.github_user else {
            return;
        };
        match data::fetch_profile(user) {
            Ok(profile) => self.stats.profile = Some(profile),
            Err(err) => {
                tracing::error!(%err, %user, "profile lookup failed");
                self.stats.profile_error = Some(err.to_string());
            }
        }
    }

    /// Switch to next view (Tab key)
    pub(crate) fn next_view(&mut self) {
        let next = match self.current_view {
            View::Timeline => View::Files,
            View::Files => View::Projects,
            View::Projects => View::Stats,
            View::Stats => View::Timeline,
            View::Help => View::Timeline,
        };
        self.go_to_view(next);
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        if let Some(prev) = self.previous_view.take() {
            self.current_view = prev;
        } else {
            self.current_view = View::Timeline;
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Idle tick: drop notifications past their display window.
    pub fn on_idle(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
