//! Clippy Bird - a terminal side-scroller.
//!
//! The simulation in [`core`] depends on nothing but `rand`. The game loop
//! reaches the terminal only through the [`input::Input`] and
//! [`ui::Display`] capabilities, so tests can script both.

pub mod build_info;
pub mod core;
pub mod input;
pub mod interrupt;
pub mod ui;

pub use crate::core::{GameLoop, GameState, Key, SessionMode};
pub use crate::interrupt::InterruptFlag;
