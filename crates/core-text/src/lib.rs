//! Rune-level text measurement and access-key scanning.
//!
//! This crate is the leaf of the layout workspace: pure functions over
//! Unicode scalar values ("runes") with no dependencies beyond the width
//! tables. Everything that needs to know how many terminal cells a piece of
//! text occupies goes through [`width`]; everything that needs to find or
//! strip a keyboard access key goes through [`hotkey`].
//!
//! The engine deliberately reasons about individual code points, not
//! grapheme clusters: a fixed-grid terminal addresses cells, and the
//! per-code-point column width is the unit the grid understands.

pub mod hotkey;
pub mod width;

pub use hotkey::{
    HotKey, TaggedRune, find_hotkey, remove_hotkey_specifier, replace_hotkey_with_tag,
};
pub use width::{
    columns_width, fit_len, max_rune_width, reserved_width, reserved_width_range, rune_width,
    text_width,
};
