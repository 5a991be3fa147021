//! Color theme definitions
//!
//! One palette per color scheme, resolved once from the persisted
//! preference and applied everywhere, plus a fixed categorical palette
//! for file types.

use ratatui::style::Color;

use crate::config::ColorScheme;

/// Resolved colors for the current scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Base text
    pub fg: Color,
    /// View borders
    pub frame: Color,
    /// View titles
    pub title: Color,
    /// Slider fill, active nav entry
    pub accent: Color,
    /// Scatter circles
    pub dot: Color,
    /// Hovered scatter circle
    pub dot_hover: Color,
    /// Selection rectangle
    pub region: Color,
    /// Axis labels and gridline text
    pub axis: Color,
    /// Secondary text
    pub dim: Color,
    /// Selected list row foreground
    pub selected_fg: Color,
    /// Selected list row background
    pub selected_bg: Color,
    /// Inline error text
    pub error: Color,
}

impl Palette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Auto => Self::auto(),
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    /// Defers to the terminal's own foreground/background.
    fn auto() -> Self {
        Self {
            fg: Color::Reset,
            frame: Color::DarkGray,
            title: Color::Cyan,
            accent: Color::Blue,
            dot: Color::Blue,
            dot_hover: Color::LightBlue,
            region: Color::Yellow,
            axis: Color::DarkGray,
            dim: Color::DarkGray,
            selected_fg: Color::White,
            selected_bg: Color::DarkGray,
            error: Color::Red,
        }
    }

    fn light() -> Self {
        Self {
            fg: Color::Black,
            frame: Color::Gray,
            title: Color::Blue,
            accent: Color::Blue,
            dot: Color::Blue,
            dot_hover: Color::Magenta,
            region: Color::LightRed,
            axis: Color::Gray,
            dim: Color::Gray,
            selected_fg: Color::Black,
            selected_bg: Color::LightYellow,
            error: Color::Red,
        }
    }

    fn dark() -> Self {
        Self {
            fg: Color::White,
            frame: Color::DarkGray,
            title: Color::LightCyan,
            accent: Color::LightBlue,
            dot: Color::LightBlue,
            dot_hover: Color::LightMagenta,
            region: Color::LightYellow,
            axis: Color::DarkGray,
            dim: Color::DarkGray,
            selected_fg: Color::Black,
            selected_bg: Color::LightBlue,
            error: Color::LightRed,
        }
    }
}

/// Categorical colors keyed on file type or bucket index.
pub mod categorical {
    use super::*;

    pub const PALETTE: [Color; 10] = [
        Color::Cyan,
        Color::Yellow,
        Color::Green,
        Color::Magenta,
        Color::Blue,
        Color::LightRed,
        Color::LightCyan,
        Color::LightYellow,
        Color::LightGreen,
        Color::LightMagenta,
    ];

    /// Color for an ordinal index (year buckets, legends).
    pub fn by_index(index: usize) -> Color {
        PALETTE[index % PALETTE.len()]
    }

    /// Stable color for a file-type tag: the same tag always gets the
    /// same color, independent of what else is on screen.
    pub fn for_type(tag: &str) -> Color {
        let hash = tag
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
        PALETTE[hash % PALETTE.len()]
    }
}
