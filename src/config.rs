//! Persisted user preferences
//!
//! The color-scheme preference survives restarts: it is read once at
//! startup and written back on every change, stored as a small TOML file
//! in the platform config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Color-scheme preference.
///
/// Serialized values match the CSS `color-scheme` keywords the preference
/// originally expressed: `"light dark"` (follow the environment), `"light"`,
/// `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Defer to the terminal's own colors.
    #[default]
    #[serde(rename = "light dark")]
    Auto,
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
}

impl ColorScheme {
    /// Next scheme in the cycle (Auto -> Light -> Dark -> Auto).
    pub fn cycle(self) -> Self {
        match self {
            Self::Auto => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
        }
    }

    /// Human-readable name for notifications and the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Automatic",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// Persisted configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub color_scheme: ColorScheme,
}

impl Config {
    /// Platform config file location (`<config dir>/folio/config.toml`).
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    /// Load the config from the default location.
    ///
    /// A missing or unreadable file falls back to defaults; startup must
    /// never fail on a bad preference file.
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from a specific path (separated for tests).
    pub fn load_from(path: &Path) -> Self {
        let Ok(text) = fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "ignoring malformed config");
                Self::default()
            }
        }
    }

    /// Write the config to the default location.
    pub fn save(&self) -> io::Result<()> {
        let path = Self::path().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no config directory available")
        })?;
        self.save_to(&path)
    }

    /// Write to a specific path (separated for tests).
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, text)
    }
}
