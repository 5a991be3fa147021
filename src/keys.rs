//! Keybinding definitions for Folio
//!
//! All keybindings are defined here for easy modification and future
//! config file support.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;
use crate::ui::views::ProjectsInputMode;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (quit)
pub fn is_quit_combo(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys (available in all views)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Switch between views
pub const TAB: KeyCode = KeyCode::Tab;

/// Alternative back
pub const ESC: KeyCode = KeyCode::Esc;

/// Cycle the color scheme
pub const THEME: KeyCode = KeyCode::Char('t');

/// Go to Timeline view
pub const TIMELINE_VIEW: KeyCode = KeyCode::Char('m');

/// Go to Files view
pub const FILES_VIEW: KeyCode = KeyCode::Char('f');

/// Go to Projects view
pub const PROJECTS_VIEW: KeyCode = KeyCode::Char('p');

/// Go to Stats view
pub const STATS_VIEW: KeyCode = KeyCode::Char('s');

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Timeline View keys
// =============================================================================

/// Move the time window back (also ←)
pub const WINDOW_BACK: KeyCode = KeyCode::Char('h');

/// Move the time window forward (also →)
pub const WINDOW_FORWARD: KeyCode = KeyCode::Char('l');

/// Move the time window back by a large step
pub const WINDOW_BACK_FAST: KeyCode = KeyCode::Char('H');

/// Move the time window forward by a large step
pub const WINDOW_FORWARD_FAST: KeyCode = KeyCode::Char('L');

/// Clear the drag-select region
pub const CLEAR_SELECTION: KeyCode = KeyCode::Char('c');

// =============================================================================
// Projects View keys
// =============================================================================

/// Open text search input
pub const SEARCH_INPUT: KeyCode = KeyCode::Char('/');

/// Clear the year filter
pub const CLEAR_YEAR: KeyCode = KeyCode::Char('x');

/// Open the repo link of the selected card
pub const OPEN_REPO: KeyCode = KeyCode::Char('o');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Next view",
    },
    KeyBindEntry {
        key: "m/f/p/s",
        description: "Timeline / Files / Projects / Stats",
    },
    KeyBindEntry {
        key: "t",
        description: "Cycle color scheme",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous view",
    },
];

/// Timeline view key bindings for help display
pub const TIMELINE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "h/l",
        description: "Time window back/forward (1%)",
    },
    KeyBindEntry {
        key: "H/L",
        description: "Time window back/forward (10%)",
    },
    KeyBindEntry {
        key: "Home/End",
        description: "Jump to start/full history",
    },
    KeyBindEntry {
        key: "j/k",
        description: "Walk the commit story",
    },
    KeyBindEntry {
        key: "g/G",
        description: "First/last commit",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Open commit link",
    },
    KeyBindEntry {
        key: "c",
        description: "Clear selection",
    },
    KeyBindEntry {
        key: "drag",
        description: "Select commits (mouse)",
    },
    KeyBindEntry {
        key: "hover",
        description: "Commit tooltip (mouse)",
    },
];

/// Projects view key bindings for help display
pub const PROJECTS_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "/",
        description: "Search projects (live)",
    },
    KeyBindEntry {
        key: "1-9",
        description: "Toggle year wedge",
    },
    KeyBindEntry {
        key: "x",
        description: "Clear year filter",
    },
    KeyBindEntry {
        key: "j/k",
        description: "Move between cards",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Open demo link",
    },
    KeyBindEntry {
        key: "o",
        description: "Open repo link",
    },
];

/// Files view key bindings for help display
pub const FILES_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Scroll",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_SWITCH: KeyHint = KeyHint {
    key: "Tab",
    label: "Switch",
    color: Color::Blue,
};
pub const HINT_THEME: KeyHint = KeyHint {
    key: "t",
    label: "Theme",
    color: Color::Magenta,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};
pub const HINT_WINDOW: KeyHint = KeyHint {
    key: "h/l",
    label: "Window",
    color: Color::Yellow,
};
pub const HINT_STORY: KeyHint = KeyHint {
    key: "j/k",
    label: "Story",
    color: Color::Green,
};
pub const HINT_CLEAR_SEL: KeyHint = KeyHint {
    key: "c",
    label: "Clear Sel",
    color: Color::Yellow,
};
pub const HINT_OPEN: KeyHint = KeyHint {
    key: "Enter",
    label: "Open",
    color: Color::Green,
};
pub const HINT_SEARCH: KeyHint = KeyHint {
    key: "/",
    label: "Search",
    color: Color::Yellow,
};
pub const HINT_YEAR: KeyHint = KeyHint {
    key: "1-9",
    label: "Year",
    color: Color::Cyan,
};
pub const HINT_CLEAR_YEAR: KeyHint = KeyHint {
    key: "x",
    label: "Clear Year",
    color: Color::Yellow,
};
pub const HINT_REPO: KeyHint = KeyHint {
    key: "o",
    label: "Repo",
    color: Color::Green,
};
pub const HINT_SCROLL: KeyHint = KeyHint {
    key: "j/k",
    label: "Scroll",
    color: Color::Cyan,
};
pub const HINT_SUBMIT: KeyHint = KeyHint {
    key: "Enter",
    label: "Done",
    color: Color::Green,
};
pub const HINT_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Red,
};

// =============================================================================
// Unified dispatch
// =============================================================================

/// Get the appropriate hints for the current view and input mode.
pub fn current_hints(view: View, input_mode: ProjectsInputMode) -> Vec<KeyHint> {
    if view == View::Projects && input_mode == ProjectsInputMode::SearchInput {
        return vec![HINT_SUBMIT, HINT_CANCEL];
    }
    match view {
        View::Timeline => vec![
            HINT_HELP,
            HINT_WINDOW,
            HINT_STORY,
            HINT_OPEN,
            HINT_CLEAR_SEL,
            HINT_THEME,
            HINT_SWITCH,
            HINT_QUIT,
        ],
        View::Files => vec![HINT_HELP, HINT_SCROLL, HINT_THEME, HINT_SWITCH, HINT_QUIT],
        View::Projects => vec![
            HINT_HELP,
            HINT_SEARCH,
            HINT_YEAR,
            HINT_CLEAR_YEAR,
            HINT_OPEN,
            HINT_REPO,
            HINT_THEME,
            HINT_SWITCH,
            HINT_QUIT,
        ],
        View::Stats => vec![HINT_HELP, HINT_THEME, HINT_SWITCH, HINT_QUIT],
        View::Help => vec![HINT_BACK],
    }
}

// =============================================================================
// Tests
// =============================================================================
