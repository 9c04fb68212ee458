//! Painting formatted text into a cell surface.
//!
//! The layout engines in `core-format` decide line content; this crate
//! decides cell positions. [`draw`] walks a formatter's lines, places each
//! one inside a target rectangle according to the two axis alignments and
//! the text direction, and pushes `(rune, style)` cells into a [`Surface`].
//! The hotkey cell, located by its tagged position, gets the caller's
//! highlight style instead of the normal one.
//!
//! Surfaces are deliberately dumb: [`Grid`] buffers cells in memory (and
//! backs the scenario tests), [`TermSurface`] queues them straight to a
//! crossterm writer. Neither knows anything about text.

pub mod draw;
pub mod surface;
pub mod term;

pub use draw::draw;
pub use surface::{Grid, Surface};
pub use term::TermSurface;

/// Style payload carried by every painted cell.
pub type CellStyle = crossterm::style::ContentStyle;
