//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct, startup loading and view management
//! - `input`: Key and mouse event handling
//! - `render`: UI rendering
//! - `actions`: Side effects (link opening, theme persistence)

mod actions;
mod input;
mod render;
mod state;

pub use state::{App, Options, View};
