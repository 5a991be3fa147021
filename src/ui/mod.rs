//! UI layer
//!
//! Contains views, widgets, scales, symbols, and theme definitions.

pub mod components;
pub mod scale;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
