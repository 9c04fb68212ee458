//! Access-key (hotkey) scanning, stripping and tagging.
//!
//! Labels mark their keyboard shortcut either with a specifier rune
//! (`"_Save"`) or, in legacy mode, by their first uppercase letter
//! (`"save As"` marks `A`). Scanning reports the rune index of the marker
//! and the uppercased key; stripping removes exactly the one specifier
//! rune; tagging produces an explicit per-cell flag a renderer can turn
//! into a highlight attribute.
//!
//! The tag used to be a reserved high bit OR-ed into the character value.
//! Carrying a `(rune, hot)` pair instead keeps the same round-trip contract
//! (drop the flag, recover the rune) without leaning on unused code point
//! space.
//!
//! Scan rules:
//! * A specifier match is the marker rune immediately followed by a letter
//!   or digit. The first match wins. A marker as the very last rune marks
//!   nothing.
//! * When a marker rune is present in the text but never forms a match,
//!   the scan fails outright; the legacy fallback is suppressed so a
//!   dangling marker cannot silently promote an unrelated letter.
//! * Legacy mode matches the first uppercase letter anywhere. Digits and
//!   symbols never match it.

/// A located access key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotKey {
    /// Rune index of the specifier rune (marker mode) or of the uppercase
    /// letter itself (legacy mode).
    pub pos: usize,
    /// The key, uppercased; digits pass through unchanged.
    pub key: char,
}

/// One output cell of [`replace_hotkey_with_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedRune {
    pub rune: char,
    pub hot: bool,
}

fn fold_key(c: char) -> char {
    // Single-rune uppercase mapping; multi-rune expansions (ß and friends)
    // keep their first rune, which is what a key press can carry anyway.
    c.to_uppercase().next().unwrap_or(c)
}

/// Locate the access key in `text`.
///
/// `specifier` is the marker rune, or `None` for no marker;
/// `legacy_first_upper` enables the first-uppercase-letter convention.
/// Empty text never matches.
pub fn find_hotkey(text: &str, specifier: Option<char>, legacy_first_upper: bool) -> Option<HotKey> {
    if text.is_empty() {
        return None;
    }
    if let Some(marker) = specifier {
        let runes: Vec<char> = text.chars().collect();
        let mut saw_marker = false;
        for i in 0..runes.len() {
            if runes[i] != marker {
                continue;
            }
            saw_marker = true;
            if let Some(&next) = runes.get(i + 1) {
                if next.is_alphanumeric() {
                    return Some(HotKey {
                        pos: i,
                        key: fold_key(next),
                    });
                }
            }
        }
        if saw_marker {
            return None; // dangling marker suppresses the legacy fallback
        }
    }
    if legacy_first_upper {
        for (i, c) in text.chars().enumerate() {
            if c.is_uppercase() {
                return Some(HotKey { pos: i, key: c });
            }
        }
    }
    None
}

/// Return `text` with the specifier rune at rune index `pos` deleted.
///
/// A `pos` out of range, or one that does not hold the specifier rune,
/// returns the text unchanged. This is a defined no-op, not an error: the
/// legacy scan reports positions that have nothing to strip.
pub fn remove_hotkey_specifier(text: &str, pos: usize, specifier: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut removed = false;
    for (i, c) in text.chars().enumerate() {
        if !removed && i == pos && c == specifier {
            removed = true;
            continue;
        }
        out.push(c);
    }
    out
}

/// Copy `text` into tagged cells, flagging the rune at rune index `pos`.
///
/// Collecting the `rune` field of every cell reproduces `text` exactly; an
/// out-of-range `pos` yields cells with no flag set.
pub fn replace_hotkey_with_tag(text: &str, pos: usize) -> Vec<TaggedRune> {
    text.chars()
        .enumerate()
        .map(|(i, rune)| TaggedRune { rune, hot: i == pos })
        .collect()
}
