//! Clipping and justification of a single logical line.
//!
//! [`clip_and_justify`] bounds a line to a column budget; [`justify`]
//! stretches inter-word gaps toward a target width. The two compose: when a
//! line already fits its budget and full justification is requested, the
//! gaps are stretched; otherwise the line is clipped and returned as-is.
//! Clipping never pads.
//!
//! Accounting uses the reserving measure (every rune holds at least one
//! cell), so a control rune inside a label keeps its slot. Wide runes are
//! never split: a clip stops short of a rune that would overflow even if
//! that leaves the budget underfilled.

use crate::Alignment;
use crate::error::{FormatError, non_negative};
use crate::measure::Measure;

/// Bound `text` to `max_width` columns.
///
/// Walks runes left to right for Start/Centered/Justified alignment, right
/// to left for End (the tail survives a clip on an end-aligned line). Text
/// that fits is returned unchanged unless `alignment` is Justified, in
/// which case its gaps are stretched to fill the budget. A negative
/// `max_width` is an invalid argument; zero yields empty text.
pub fn clip_and_justify(
    text: &str,
    max_width: i32,
    alignment: Alignment,
) -> Result<String, FormatError> {
    let width = non_negative(max_width)?;
    Ok(clip_and_justify_measured(
        text,
        width,
        alignment,
        Measure::Columns,
    ))
}

pub(crate) fn clip_and_justify_measured(
    text: &str,
    width: usize,
    alignment: Alignment,
    measure: Measure,
) -> String {
    if text.is_empty() || width == 0 {
        return String::new();
    }
    if measure.text(text) > width {
        let runes: Vec<char> = text.chars().collect();
        return match alignment {
            Alignment::End => {
                // Longest suffix that fits.
                let mut used = 0usize;
                let mut start = runes.len();
                for (i, &c) in runes.iter().enumerate().rev() {
                    let w = measure.rune(c);
                    if used + w > width {
                        break;
                    }
                    used += w;
                    start = i;
                }
                runes[start..].iter().collect()
            }
            _ => {
                let n = measure.fit(&runes, width);
                runes[..n].iter().collect()
            }
        };
    }
    if alignment == Alignment::Justified {
        justify_measured(text, width, ' ', measure)
    } else {
        text.to_string()
    }
}

/// Stretch the inter-word gaps of `text` toward `width` columns using
/// `fill` as the gap rune.
///
/// A single-word text is returned unchanged; there is nothing to stretch.
/// Each gap receives the same fill count, `floor(extra / gaps)`; a deficit
/// that does not divide evenly leaves the result short of `width` by less
/// than the gap count rather than unbalancing the gaps.
pub fn justify(text: &str, width: i32, fill: char) -> Result<String, FormatError> {
    let width = non_negative(width)?;
    Ok(justify_measured(text, width, fill, Measure::Columns))
}

pub(crate) fn justify_measured(text: &str, width: usize, fill: char, measure: Measure) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < 2 {
        return text.to_string();
    }
    let text_extent: usize = words.iter().map(|w| measure.text(w)).sum();
    let gaps = words.len() - 1;
    let per_gap = width.saturating_sub(text_extent) / gaps;
    let mut out = String::with_capacity(text.len() + per_gap * gaps * fill.len_utf8());
    for (i, word) in words.iter().enumerate() {
        out.push_str(word);
        if i < gaps {
            for _ in 0..per_gap {
                out.push(fill);
            }
        }
    }
    out
}

/// Fit `text` into exactly `width` columns for a fixed-width slot: clip
/// when too wide, right-pad with spaces when too narrow.
pub fn clip_or_pad(text: &str, width: usize) -> String {
    if text.is_empty() {
        return text.to_string();
    }
    let mut out: String = text.chars().take(core_text::fit_len(text, width)).collect();
    let mut used = core_text::text_width(&out);
    while used < width {
        out.push(' ');
        used += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_budget_is_an_error() {
        assert_eq!(
            clip_and_justify("test", -1, Alignment::Start),
            Err(FormatError::NegativeWidth(-1))
        );
        assert_eq!(justify("test", -1, '+'), Err(FormatError::NegativeWidth(-1)));
    }

    #[test]
    fn zero_budget_yields_empty() {
        assert_eq!(clip_and_justify("test", 0, Alignment::Start).unwrap(), "");
        assert_eq!(clip_and_justify("", 0, Alignment::Start).unwrap(), "");
    }

    #[test]
    fn clip_start_takes_the_prefix() {
        assert_eq!(clip_and_justify("test", 2, Alignment::Start).unwrap(), "te");
        assert_eq!(
            clip_and_justify("test", i32::MAX, Alignment::Start).unwrap(),
            "test"
        );
        let text = "A sentence has words.";
        assert_eq!(clip_and_justify(text, 22, Alignment::Start).unwrap(), text);
        assert_eq!(clip_and_justify(text, 21, Alignment::Start).unwrap(), text);
        assert_eq!(
            clip_and_justify(text, 20, Alignment::Start).unwrap(),
            "A sentence has words"
        );
        assert_eq!(
            clip_and_justify(text, 10, Alignment::Start).unwrap(),
            "A sentence"
        );
    }

    #[test]
    fn clip_centered_also_takes_the_prefix() {
        assert_eq!(
            clip_and_justify("A sentence has words.", 10, Alignment::Centered).unwrap(),
            "A sentence"
        );
    }

    #[test]
    fn clip_end_keeps_the_suffix() {
        assert_eq!(clip_and_justify("test", 2, Alignment::End).unwrap(), "st");
        assert_eq!(
            clip_and_justify("A sentence has words.", 6, Alignment::End).unwrap(),
            "words."
        );
        assert_eq!(clip_and_justify("test", i32::MAX, Alignment::End).unwrap(), "test");
    }

    #[test]
    fn clip_reserves_a_cell_for_controls() {
        let text = "A\tsentence\thas\twords.";
        let clipped = clip_and_justify(text, 10, Alignment::Start).unwrap();
        assert_eq!(clipped.chars().count(), 10);
        assert_eq!(core_text::reserved_width(&clipped), 10);
        assert_eq!(clipped, text.chars().take(10).collect::<String>());
    }

    #[test]
    fn clip_treats_hard_breaks_as_one_run() {
        let text = "line1\nline2\nline3long!";
        let clipped = clip_and_justify(text, 10, Alignment::Start).unwrap();
        assert_eq!(clipped, "line1\nline");
        assert_eq!(core_text::reserved_width(&clipped), 10);
    }

    #[test]
    fn clip_never_splits_a_wide_rune() {
        assert_eq!(clip_and_justify("こんにちは", 3, Alignment::Start).unwrap(), "こ");
        assert_eq!(clip_and_justify("こんにちは", 3, Alignment::End).unwrap(), "は");
        assert_eq!(
            core_text::text_width(&clip_and_justify("こんにちは", 5, Alignment::Start).unwrap()),
            4
        );
    }

    #[test]
    fn justified_text_that_fits_is_stretched() {
        assert_eq!(
            clip_and_justify("012 456 89", 12, Alignment::Justified).unwrap(),
            "012  456  89"
        );
        assert_eq!(
            clip_and_justify("Hello World", 20, Alignment::Justified).unwrap(),
            format!("Hello{}World", " ".repeat(10))
        );
    }

    #[test]
    fn justified_text_that_overflows_is_clipped() {
        assert_eq!(
            clip_and_justify("A sentence has words.", 10, Alignment::Justified).unwrap(),
            "A sentence"
        );
    }

    #[test]
    fn justify_single_word_is_unchanged() {
        for text in ["word", "word.", "привет", "привет."] {
            let n = text.chars().count() as i32;
            for extra in [0, 1, 2, 10, 11] {
                assert_eq!(justify(text, n + extra, '+').unwrap(), text);
            }
        }
    }

    #[test]
    fn justify_even_gap_count() {
        let text = "012 456 89"; // 10 runes, 8 word columns, 2 gaps
        let expect = |fill: &str| text.replace(' ', fill);
        assert_eq!(justify(text, 10, '+').unwrap(), expect("+"));
        assert_eq!(justify(text, 11, '+').unwrap(), expect("+"));
        assert_eq!(justify(text, 12, '+').unwrap(), expect("++"));
        assert_eq!(justify(text, 13, '+').unwrap(), expect("++"));
        assert_eq!(justify(text, 14, '+').unwrap(), expect("+++"));
        assert_eq!(justify(text, 15, '+').unwrap(), expect("+++"));
        assert_eq!(justify(text, 16, '+').unwrap(), expect("++++"));
        assert_eq!(justify(text, 30, '+').unwrap(), expect("+++++++++++"));
        assert_eq!(justify(text, 33, '+').unwrap(), expect("++++++++++++"));
    }

    #[test]
    fn justify_odd_gap_count() {
        let text = "012 456 89 end"; // 14 runes, 11 word columns, 3 gaps
        let expect = |fill: &str| text.replace(' ', fill);
        assert_eq!(justify(text, 14, '+').unwrap(), expect("+"));
        assert_eq!(justify(text, 16, '+').unwrap(), expect("+"));
        assert_eq!(justify(text, 17, '+').unwrap(), expect("++"));
        assert_eq!(justify(text, 19, '+').unwrap(), expect("++"));
        assert_eq!(justify(text, 20, '+').unwrap(), expect("+++"));
        assert_eq!(justify(text, 34, '+').unwrap(), expect("+++++++"));
        assert_eq!(justify(text, 37, '+').unwrap(), expect("++++++++"));
    }

    #[test]
    fn justify_remainder_stays_within_gap_count() {
        let text = "012 456 89";
        let gaps = 2;
        for width in 10..40 {
            let out = justify(text, width, '+').unwrap();
            let got = core_text::text_width(&out) as i32;
            assert!((width - got) < gaps, "width {width} -> {got}");
        }
    }

    #[test]
    fn justify_measures_wide_words_in_columns() {
        assert_eq!(
            justify("こんにちは 世界", 25, ' ').unwrap(),
            format!("こんにちは{}世界", " ".repeat(11))
        );
    }

    #[test]
    fn justify_empty_is_unchanged() {
        assert_eq!(justify("", 0, '+').unwrap(), "");
    }

    #[test]
    fn clip_or_pad_fills_the_slot() {
        assert_eq!(clip_or_pad("fff", 6), "fff   ");
        assert_eq!(clip_or_pad("123456789", 3), "123");
        assert_eq!(clip_or_pad("", 5), "");
    }
}
