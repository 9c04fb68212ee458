//! Whitespace-aware word wrapping.
//!
//! Splits one logical run of text into lines that each fit a column budget.
//! Hard line breaks (`\n`, `\r\n`) inside the input are deleted up front:
//! wrapping always operates over a single run, and callers that want
//! paragraph structure split before calling (see the format pipeline).
//! Non-breaking spaces are ordinary word runes; every other whitespace rune
//! is a break opportunity.
//!
//! Two policies:
//!
//! * Collapse (default): break runs are consumed at the wrap point, so
//!   produced lines start with a word and carry no incidental spaces from
//!   the break itself. A word wider than the whole budget is hard-split at
//!   the column boundary.
//! * Preserve: every rune of the input reappears in the output. A space
//!   landing exactly on the budget stays at the end of its line; a word
//!   that only partially fits moves wholly to the next line when the line
//!   already holds a completed word; tabs expand to `tab_width`-aligned
//!   stops and a tab whose stop overflows the budget is emitted as its own
//!   single-tab line segment so column accounting stays exact.
//!
//! Invariants:
//! * No produced line exceeds the budget under the reserving measure.
//! * Wide runes are never split across lines; when the last column cannot
//!   hold one, the line is flushed short and the rune opens the next line.
//! * A budget smaller than the narrowest unit produces no lines at all
//!   rather than budget-violating ones.

use tracing::debug;

use crate::error::{FormatError, non_negative};
use crate::measure::Measure;

/// Wrap `text` into lines of at most `width` columns.
///
/// Empty text yields an empty list: zero lines, not one empty line. (The
/// format pipeline's one-empty-line contract for the same input is a
/// distinct, deliberate behavior.)
pub fn word_wrap(
    text: &str,
    width: i32,
    preserve_trailing_spaces: bool,
    tab_width: usize,
) -> Result<Vec<String>, FormatError> {
    let width = non_negative(width)?;
    Ok(word_wrap_measured(
        text,
        width,
        preserve_trailing_spaces,
        tab_width,
        Measure::Columns,
    ))
}

pub(crate) fn word_wrap_measured(
    text: &str,
    width: usize,
    preserve_trailing_spaces: bool,
    tab_width: usize,
    measure: Measure,
) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let runes = strip_hard_breaks(text);
    let lines = if preserve_trailing_spaces {
        wrap_preserve(&runes, width, tab_width, measure)
    } else {
        wrap_collapse(&runes, width, measure)
    };
    if lines.is_empty() && !runes.is_empty() {
        debug!(width, "wrap budget below the narrowest unit; no lines fit");
    }
    lines
}

/// Delete hard break sequences: `\r\n` pairs and bare `\n`. A `\r` not
/// followed by `\n` is left in place as an ordinary control rune.
fn strip_hard_breaks(text: &str) -> Vec<char> {
    let mut runes = Vec::with_capacity(text.chars().count());
    let mut iter = text.chars().peekable();
    while let Some(c) = iter.next() {
        match c {
            '\n' => {}
            '\r' if iter.peek() == Some(&'\n') => {
                iter.next();
            }
            _ => runes.push(c),
        }
    }
    runes
}

/// Break opportunity: whitespace except the non-breaking spaces.
fn is_break(c: char) -> bool {
    c.is_whitespace() && !matches!(c, '\u{00A0}' | '\u{202F}')
}

fn wrap_collapse(runes: &[char], width: usize, measure: Measure) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0usize;
    loop {
        let fits = measure.fit(&runes[start..], width);
        if fits == 0 {
            // The next rune can never fit; stop short of violating the budget.
            return lines;
        }
        if start + fits >= runes.len() {
            break;
        }
        let mut end = start + fits;
        // Back up to the last break opportunity within the candidate.
        while end > start && !is_break(runes[end]) {
            end -= 1;
        }
        if end == start {
            // No break inside: hard-split the word at the column boundary.
            end = start + fits;
        }
        lines.push(runes[start..end].iter().collect());
        start = end;
        if is_break(runes[start]) {
            // The break itself is consumed, not emitted.
            start += 1;
        }
    }
    if start < runes.len() {
        lines.push(runes[start..].iter().collect());
    }
    lines
}

fn wrap_preserve(runes: &[char], width: usize, tab_width: usize, measure: Measure) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0usize;
    while start < runes.len() {
        let end = next_break(runes, start, width, 0, tab_width, measure);
        if end <= start {
            // A unit wider than the whole budget; nothing more can fit.
            return lines;
        }
        lines.push(runes[start..end].iter().collect());
        start = end;
    }
    lines
}

/// Scan forward from `from`, spending the budget rune by rune and recursing
/// across each completed word-plus-break group. Returns the index one past
/// the chosen break. `carried` is the extent already spent by completed
/// groups on this line; it being non-zero is what allows a partially
/// fitting word to be pushed to the next line instead of split.
fn next_break(
    runes: &[char],
    from: usize,
    width: usize,
    carried: usize,
    tab_width: usize,
    measure: Measure,
) -> usize {
    let mut to = from;
    let mut used = carried;
    while used < width && to < runes.len() {
        let c = runes[to];
        if c == '\t' {
            let stop = if tab_width == 0 {
                used + 1
            } else {
                (used / tab_width + 1) * tab_width
            };
            if stop > width {
                // Overflowing tab: alone at line start it becomes its own
                // segment, otherwise it opens the next line.
                return if to == from && carried == 0 { to + 1 } else { to };
            }
            used = stop;
            if used == width {
                return to + 1;
            }
            return next_break(runes, to + 1, width, used, tab_width, measure);
        }
        if is_break(c) {
            used += measure.rune(c);
            if used == width {
                return to + 1; // break lands exactly on the budget: keep it
            }
            if used > width {
                return to;
            }
            return next_break(runes, to + 1, width, used, tab_width, measure);
        }
        let w = measure.rune(c);
        if used + w > width {
            // A wide rune never splits; it moves wholly to the next line.
            return to;
        }
        used += w;
        to += 1;
    }
    if to >= runes.len() || carried == 0 {
        return to;
    }
    // Budget exhausted mid-word with a completed group behind us: if the
    // word ended exactly at the boundary keep it, otherwise push the whole
    // word to the next line.
    if is_break(runes[to]) || runes[to] == '\t' {
        to
    } else {
        from
    }
}
