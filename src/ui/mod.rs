//! Rendering: the [`Display`] capability, the scene drawn through it, and
//! the ratatui terminal that implements it.

pub mod display;
pub mod scene;
pub mod terminal;

pub use display::{Display, Glyph};
pub use terminal::TerminalDisplay;
