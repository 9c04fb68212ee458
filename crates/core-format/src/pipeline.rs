//! The formatting pipeline: raw text in, display-ready lines out.
//!
//! [`format`] is the single entry point the formatter state drives. It
//! always produces at least one line: empty input or a zero budget yield
//! exactly one empty line, in deliberate contrast to the wrap engine's
//! zero-line contract for the same input. Both are observable behaviors of
//! their own.
//!
//! Hard break policy differs per path, and both policies are kept exactly:
//! without wrapping, breaks become single spaces and the whole text is one
//! clipped line; with wrapping, breaks delimit paragraphs that wrap
//! independently (a blank paragraph contributes one empty line), while the
//! wrap engine itself deletes any break sequence handed to it.

use tracing::trace;

use crate::Alignment;
use crate::clip::clip_and_justify_measured;
use crate::error::{FormatError, non_negative};
use crate::measure::Measure;
use crate::wrap::word_wrap_measured;

/// Produce the ordered display lines for `text` under a `width` budget.
///
/// When `alignment` is Justified each wrapped line additionally gets its
/// inter-word gaps stretched to the budget; other alignments position at
/// paint time and leave line content untouched.
pub fn format(
    text: &str,
    width: i32,
    alignment: Alignment,
    wrap: bool,
    preserve_trailing_spaces: bool,
    tab_width: usize,
) -> Result<Vec<String>, FormatError> {
    let width = non_negative(width)?;
    Ok(format_measured(
        text,
        width,
        alignment,
        wrap,
        preserve_trailing_spaces,
        tab_width,
        Measure::Columns,
    ))
}

pub(crate) fn format_measured(
    text: &str,
    width: usize,
    alignment: Alignment,
    wrap: bool,
    preserve_trailing_spaces: bool,
    tab_width: usize,
    measure: Measure,
) -> Vec<String> {
    if text.is_empty() || width == 0 {
        return vec![String::new()];
    }
    if !wrap {
        let single = replace_hard_breaks_with_space(text);
        return vec![clip_and_justify_measured(&single, width, alignment, measure)];
    }
    let normalized = text.replace("\r\n", "\n");
    let mut lines = Vec::new();
    for paragraph in normalized.split('\n') {
        let wrapped =
            word_wrap_measured(paragraph, width, preserve_trailing_spaces, tab_width, measure);
        if wrapped.is_empty() {
            lines.push(String::new());
        } else if alignment == Alignment::Justified {
            for line in wrapped {
                lines.push(clip_and_justify_measured(&line, width, alignment, measure));
            }
        } else {
            lines.extend(wrapped);
        }
    }
    trace!(width, lines = lines.len(), "formatted");
    lines
}

/// Substitute every hard break sequence with a single space, so the text
/// reads as one logical line. `\r\n` collapses to one space, not two.
fn replace_hard_breaks_with_space(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ")
}
