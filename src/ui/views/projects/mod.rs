//! Projects View - portfolio cards with search and year filter
//!
//! Cards are filtered by a free-text query AND an optional year picked
//! from the pie/legend; the two predicates compose. Year buckets always
//! come from the text-filtered set only, so a selected year can never
//! make its own wedge disappear.

mod input;
mod pie;
mod render;

pub use pie::{Wedge, wedge_at, wedges};

use ratatui::layout::Rect;

use crate::model::{Project, sort_newest_first};

/// Default card heading level when the configured one is invalid.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Rows per project card.
pub(crate) const CARD_HEIGHT: u16 = 5;

/// Input mode for Projects View
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectsInputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Live text search input mode
    SearchInput,
}

/// Actions that ProjectsView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsAction {
    /// No action needed
    None,
    /// Open a demo or repo link in the browser
    OpenLink(String),
}

/// One pie wedge / legend entry worth of projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearBucket {
    pub year: i32,
    pub count: usize,
}

/// Projects View state
#[derive(Debug, Default)]
pub struct ProjectsView {
    /// All loaded projects, newest first
    all: Vec<Project>,
    /// Free-text query (applied live while typing)
    pub query: String,
    /// Selected index into [`ProjectsView::year_buckets`], if any
    pub selected_year: Option<usize>,
    /// Current input mode
    pub input_mode: ProjectsInputMode,
    /// Input buffer for the search bar
    pub input_buffer: String,
    /// Card cursor into the visible list
    pub cursor: usize,
    /// Scroll offset in cards
    pub scroll_offset: usize,
    heading_level: u8,
    /// Load failure shown in place of the cards
    pub load_error: Option<String>,
    pub(crate) cards_area: Option<Rect>,
    pub(crate) pie_area: Option<Rect>,
    pub(crate) legend_area: Option<Rect>,
}

impl ProjectsView {
    pub fn new() -> Self {
        Self {
            heading_level: DEFAULT_HEADING_LEVEL,
            ..Self::default()
        }
    }

    /// Install the project list, sorted newest first (records without a
    /// year sink to the end).
    pub fn set_projects(&mut self, mut projects: Vec<Project>) {
        sort_newest_first(&mut projects);
        self.all = projects;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.selected_year = None;
    }

    pub fn projects(&self) -> &[Project] {
        &self.all
    }

    /// Card heading level, validated against 1..=6; anything else falls
    /// back to the default.
    pub fn set_heading_level(&mut self, level: u8) {
        self.heading_level = if (1..=6).contains(&level) {
            level
        } else {
            DEFAULT_HEADING_LEVEL
        };
    }

    pub fn heading_level(&self) -> u8 {
        self.heading_level
    }

    /// Projects matching the text query only (the pie's base set).
    fn text_filtered(&self) -> Vec<&Project> {
        self.all
            .iter()
            .filter(|p| p.matches_query(&self.query))
            .collect()
    }

    /// Year buckets over the text-filtered set, ascending by year.
    pub fn year_buckets(&self) -> Vec<YearBucket> {
        let mut buckets: Vec<YearBucket> = Vec::new();
        for project in self.text_filtered() {
            let Some(year) = project.year else { continue };
            match buckets.iter_mut().find(|b| b.year == year) {
                Some(bucket) => bucket.count += 1,
                None => buckets.push(YearBucket { year, count: 1 }),
            }
        }
        buckets.sort_by_key(|b| b.year);
        buckets
    }

    /// Projects passing both the text query and the year filter.
    pub fn visible(&self) -> Vec<&Project> {
        let filtered = self.text_filtered();
        let Some(index) = self.selected_year else {
            return filtered;
        };
        let buckets = self.year_buckets();
        let Some(bucket) = buckets.get(index) else {
            return filtered;
        };
        filtered
            .into_iter()
            .filter(|p| p.year == Some(bucket.year))
            .collect()
    }

    /// Replace the query and reapply both filters.
    ///
    /// A shrunken bucket list can leave the year selection dangling; it
    /// is dropped rather than silently pointing at a different year.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        if let Some(index) = self.selected_year
            && index >= self.year_buckets().len()
        {
            self.selected_year = None;
        }
        self.clamp_cursor();
    }

    /// Toggle the year filter: selecting the already-selected bucket
    /// clears it.
    pub fn toggle_year(&mut self, index: usize) {
        if self.selected_year == Some(index) {
            self.selected_year = None;
        } else if index < self.year_buckets().len() {
            self.selected_year = Some(index);
        }
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}
