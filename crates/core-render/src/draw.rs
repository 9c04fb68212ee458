//! The paint operation: formatted lines to positioned cells.
//!
//! Horizontal direction paints lines as rows; vertical direction paints
//! them as columns, one rune per row, each column as thick as its widest
//! rune. Alignment on the primary axis was already baked into line content
//! where it changes content (Justified); everything else is pure
//! positioning here.
//!
//! The hotkey cell is found by its ordinal among non-whitespace runes:
//! every transformation the pipeline applies only adds or removes
//! whitespace, so the ordinal counted over the stripped source text still
//! addresses the same rune in the output lines. Clipping can drop the rune
//! entirely, in which case nothing is highlighted.

use core_format::{Alignment, Direction, Rect, TextFormatter};
use core_text::{TaggedRune, max_rune_width, replace_hotkey_with_tag, rune_width, text_width};

use crate::{CellStyle, Surface};

/// Paint `tf`'s lines into `bounds`, reformatting first if the state is
/// dirty. `normal` styles every cell except the hotkey cell, which gets
/// `hot`.
pub fn draw(
    tf: &mut TextFormatter,
    bounds: Rect,
    normal: CellStyle,
    hot: CellStyle,
    surface: &mut dyn Surface,
) {
    let direction = tf.direction();
    let h_align = tf.alignment();
    let v_align = tf.vertical_alignment();
    let mut hot_remaining = tf.hot_rune_ordinal();
    let lines = tf.lines().to_vec();

    match direction {
        Direction::Horizontal => {
            let count = lines.len();
            for (i, line) in lines.iter().enumerate() {
                // Tag before clipping so the ordinal is consumed even for
                // lines that fall outside the rect.
                let cells = tag_line(line, &mut hot_remaining);
                let row = lengthwise_offset(v_align, bounds.height, count, i);
                if row < 0 || row >= bounds.height as i64 {
                    continue;
                }
                let mut col = crosswise_offset(h_align, bounds.width, text_width(line));
                for cell in cells {
                    let w = rune_width(cell.rune) as i64;
                    if w <= 0 {
                        continue; // zero-width and control runes paint nothing
                    }
                    put_clipped(surface, bounds, col, row, w, &cell, normal, hot);
                    col += w;
                }
            }
        }
        Direction::Vertical => {
            let col_widths: Vec<usize> = lines.iter().map(|l| max_rune_width(l)).collect();
            let total: usize = col_widths.iter().sum();
            let mut col = crosswise_offset(h_align, bounds.width, total);
            let gap = if h_align == Alignment::Justified && lines.len() > 1 {
                (bounds.width.saturating_sub(total) / (lines.len() - 1)) as i64
            } else {
                0
            };
            for (i, line) in lines.iter().enumerate() {
                let cells = tag_line(line, &mut hot_remaining);
                let len = line.chars().count();
                let y0 = crosswise_offset(v_align, bounds.height, len);
                for (j, cell) in cells.iter().enumerate() {
                    let row = y0 + j as i64;
                    if row < 0 || row >= bounds.height as i64 {
                        continue;
                    }
                    let w = rune_width(cell.rune) as i64;
                    if w <= 0 {
                        continue;
                    }
                    put_clipped(surface, bounds, col, row, w, cell, normal, hot);
                }
                col += col_widths[i] as i64 + gap;
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn put_clipped(
    surface: &mut dyn Surface,
    bounds: Rect,
    col: i64,
    row: i64,
    w: i64,
    cell: &TaggedRune,
    normal: CellStyle,
    hot: CellStyle,
) {
    if col < 0 || col + w > bounds.width as i64 {
        return; // a wide rune that straddles the edge is dropped whole
    }
    let abs_x = bounds.x as i64 + col;
    let abs_y = bounds.y as i64 + row;
    if !(0..=u16::MAX as i64).contains(&abs_x) || !(0..=u16::MAX as i64).contains(&abs_y) {
        return;
    }
    let style = if cell.hot { hot } else { normal };
    surface.put(abs_x as u16, abs_y as u16, cell.rune, style);
}

/// Offset of a block of `content` cells inside `extent` on the axis the
/// content runs across. Justified content was stretched (or spread) by
/// other means and anchors at the start.
fn crosswise_offset(align: Alignment, extent: usize, content: usize) -> i64 {
    match align {
        Alignment::Start | Alignment::Justified => 0,
        Alignment::End => extent as i64 - content as i64,
        Alignment::Centered => (extent as i64 - content as i64) / 2,
    }
}

/// Row of line `i` of `count` inside `extent` on the line-count axis.
/// Justified spreads the lines so the first touches the start and the gaps
/// share the slack evenly.
fn lengthwise_offset(align: Alignment, extent: usize, count: usize, i: usize) -> i64 {
    let i = i as i64;
    match align {
        Alignment::Start => i,
        Alignment::End => extent as i64 - count as i64 + i,
        Alignment::Centered => (extent as i64 - count as i64) / 2 + i,
        Alignment::Justified => {
            if count <= 1 || extent <= count {
                i
            } else {
                let step = 1 + (extent - count) as i64 / (count as i64 - 1);
                i * step
            }
        }
    }
}

/// Convert one line into tagged cells, spending the hotkey ordinal. The
/// ordinal counts non-whitespace runes across lines in order; when it lands
/// inside this line the matching rune is flagged.
fn tag_line(line: &str, remaining: &mut Option<usize>) -> Vec<TaggedRune> {
    let tag_pos = if let Some(target) = *remaining {
        let mut word_runes = 0usize;
        let mut found = None;
        for (i, c) in line.chars().enumerate() {
            if !c.is_whitespace() {
                if word_runes == target {
                    found = Some(i);
                    break;
                }
                word_runes += 1;
            }
        }
        match found {
            Some(i) => {
                *remaining = None;
                i
            }
            None => {
                *remaining = Some(target - word_runes);
                usize::MAX
            }
        }
    } else {
        usize::MAX
    };
    replace_hotkey_with_tag(line, tag_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crosswise_offsets() {
        assert_eq!(crosswise_offset(Alignment::Start, 20, 11), 0);
        assert_eq!(crosswise_offset(Alignment::Centered, 20, 11), 4);
        assert_eq!(crosswise_offset(Alignment::End, 20, 11), 9);
        assert_eq!(crosswise_offset(Alignment::Justified, 20, 11), 0);
        assert_eq!(crosswise_offset(Alignment::Centered, 25, 15), 5);
    }

    #[test]
    fn lengthwise_offsets() {
        assert_eq!(lengthwise_offset(Alignment::Start, 20, 11, 0), 0);
        assert_eq!(lengthwise_offset(Alignment::Centered, 20, 11, 0), 4);
        assert_eq!(lengthwise_offset(Alignment::End, 20, 11, 0), 9);
        assert_eq!(lengthwise_offset(Alignment::End, 20, 11, 10), 19);
        // Justified spread: first line at the start, last at the end.
        assert_eq!(lengthwise_offset(Alignment::Justified, 10, 4, 0), 0);
        assert_eq!(lengthwise_offset(Alignment::Justified, 10, 4, 1), 3);
        assert_eq!(lengthwise_offset(Alignment::Justified, 10, 4, 3), 9);
    }

    #[test]
    fn tag_line_spends_the_ordinal_across_lines() {
        let mut remaining = Some(5usize);
        let cells = tag_line("Open", &mut remaining);
        assert!(cells.iter().all(|c| !c.hot));
        assert_eq!(remaining, Some(1));
        let cells = tag_line("File", &mut remaining);
        assert!(cells[1].hot);
        assert_eq!(remaining, None);
        let cells = tag_line("now", &mut remaining);
        assert!(cells.iter().all(|c| !c.hot));
    }

    #[test]
    fn tag_line_skips_whitespace() {
        let mut remaining = Some(2usize);
        let cells = tag_line("  a b", &mut remaining);
        assert!(cells.iter().all(|c| !c.hot));
        assert_eq!(remaining, Some(0));
        let cells = tag_line(" cd", &mut remaining);
        assert!(cells[1].hot);
        assert_eq!(cells[1].rune, 'c');
    }
}
