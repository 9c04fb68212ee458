//! Column width oracle.
//!
//! A single authoritative function maps a rune onto its terminal cell
//! footprint; every other measurement in the workspace is a fold over it.
//! The footprint classes are:
//!
//! * `-1`: non-printable (C0/C1 controls, DEL). Pure measurement ignores
//!   these, but the clip/wrap accounting still reserves one cell for them
//!   ([`reserved_width`]) so a raw tab inside a label cannot make a line
//!   claim fewer cells than a renderer will give it.
//! * `0`: zero-width combining marks, Hangul medial vowels and final
//!   consonants, joiners.
//! * `2`: East-Asian Wide and Fullwidth ranges.
//! * `1`: everything else.
//!
//! Invariants:
//! * No other crate consults `unicode_width` directly.
//! * [`text_width`] never counts a negative contribution.
//! * A wide rune is indivisible; [`fit_len`] stops before a rune that would
//!   overflow the budget rather than splitting it.

use unicode_width::UnicodeWidthChar;

/// Terminal column footprint of a single rune: -1, 0, 1 or 2.
#[inline]
pub fn rune_width(c: char) -> i32 {
    match c.width() {
        None => -1,
        Some(w) => w as i32,
    }
}

/// Printable column count of `text`. Non-printable runes contribute nothing;
/// this is the canonical "how many cells does this occupy" measurement
/// reported to the host layout system.
pub fn text_width(text: &str) -> usize {
    text.chars().map(|c| rune_width(c).max(0) as usize).sum()
}

/// Column count where every rune reserves at least one cell, including
/// non-printable and zero-width runes. The clip and wrap paths account with
/// this so control runes keep their slot.
pub fn reserved_width(text: &str) -> usize {
    text.chars().map(|c| rune_width(c).max(1) as usize).sum()
}

/// [`reserved_width`] over the rune-index range `[start, start + len)`.
/// Indices past the end of the text contribute nothing.
pub fn reserved_width_range(text: &str, start: usize, len: usize) -> usize {
    text.chars()
        .skip(start)
        .take(len)
        .map(|c| rune_width(c).max(1) as usize)
        .sum()
}

/// Widest single rune in `text`, each rune reserving at least one cell.
/// Zero for empty text. This is the column thickness of `text` laid out
/// vertically, one rune per row.
pub fn max_rune_width(text: &str) -> usize {
    text.chars()
        .map(|c| rune_width(c).max(1) as usize)
        .max()
        .unwrap_or(0)
}

/// Total width of a column-per-line (vertical) layout: each line is one
/// column as thick as its widest rune.
pub fn columns_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines.iter().map(|l| max_rune_width(l.as_ref())).sum()
}

/// Number of leading runes whose cumulative [`reserved_width`] stays within
/// `width` columns.
pub fn fit_len(text: &str, width: usize) -> usize {
    let mut used = 0usize;
    let mut count = 0usize;
    for c in text.chars() {
        let w = rune_width(c).max(1) as usize;
        if used + w > width {
            break;
        }
        used += w;
        count += 1;
    }
    count
}
