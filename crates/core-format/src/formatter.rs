//! Formatter state: cached pipeline output behind a dirty flag.
//!
//! A widget owns one [`TextFormatter`] and mutates it whenever content,
//! geometry or alignment changes. Every mutation marks the state dirty;
//! reading [`TextFormatter::lines`] reformats lazily and caches until the
//! next mutation, so stale output is never observable and untouched
//! formatters never pay for layout.
//!
//! Setting text also runs the access-key scan: the specifier rune is
//! stripped from the formatted text and the key position is remembered so
//! the paint layer can highlight the right cell. Direction transposes which
//! rect extent is the wrap budget; vertical layout spends one row per rune,
//! so the vertical path runs the same pipeline under the rune-count
//! measure.

use tracing::trace;

use core_text::{HotKey, columns_width, find_hotkey, remove_hotkey_specifier, text_width};

use crate::measure::Measure;
use crate::pipeline::format_measured;
use crate::{Alignment, Direction, Rect, Size};

/// Smallest rectangle at `(x, y)` that contains `text` without wrapping,
/// splitting only on hard line breaks. Width is the widest line's printable
/// column count; height is the line count. Empty text yields a zero-size
/// rect at the origin.
pub fn bounding_rect(x: i32, y: i32, text: &str) -> Rect {
    if text.is_empty() {
        return Rect {
            x,
            y,
            width: 0,
            height: 0,
        };
    }
    let normalized = text.replace("\r\n", "\n");
    let mut width = 0usize;
    let mut height = 0usize;
    for line in normalized.split('\n') {
        width = width.max(text_width(line));
        height += 1;
    }
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Lazily formatted text with cached lines, sized and aligned on both axes.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    raw_text: String,
    text: String, // specifier-stripped; what the pipeline formats
    hot_specifier: Option<char>,
    legacy_first_upper: bool,
    hot: Option<HotKey>,
    size: Size,
    alignment: Alignment,
    vertical_alignment: Alignment,
    direction: Direction,
    preserve_trailing_spaces: bool,
    tab_width: usize,
    lines: Vec<String>,
    needs_format: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter {
    /// Empty formatter: no text, Start alignment, horizontal direction.
    pub fn new() -> Self {
        Self {
            raw_text: String::new(),
            text: String::new(),
            hot_specifier: None,
            legacy_first_upper: false,
            hot: None,
            size: Size::default(),
            alignment: Alignment::Start,
            vertical_alignment: Alignment::Start,
            direction: Direction::Horizontal,
            preserve_trailing_spaces: false,
            tab_width: 0,
            lines: Vec::new(),
            needs_format: true,
        }
    }

    /// The text as last set, specifier included.
    pub fn text(&self) -> &str {
        &self.raw_text
    }

    /// The text the pipeline formats, with any specifier rune stripped.
    pub fn stripped_text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Reruns the hotkey scan and, for non-empty text,
    /// recomputes the size from the stripped content; empty text keeps the
    /// previous size.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.raw_text = text.into();
        self.rescan_hotkey();
        if !self.text.is_empty() {
            self.size = self.auto_size();
        }
        self.needs_format = true;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Explicit size override. The host clamps negative extents upstream;
    /// `Size` cannot carry one.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.needs_format = true;
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
        self.needs_format = true;
    }

    pub fn vertical_alignment(&self) -> Alignment {
        self.vertical_alignment
    }

    pub fn set_vertical_alignment(&mut self, alignment: Alignment) {
        self.vertical_alignment = alignment;
        self.needs_format = true;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.needs_format = true;
    }

    pub fn hot_key_specifier(&self) -> Option<char> {
        self.hot_specifier
    }

    pub fn set_hot_key_specifier(&mut self, specifier: Option<char>) {
        self.hot_specifier = specifier;
        self.rescan_hotkey();
        self.needs_format = true;
    }

    pub fn set_legacy_first_upper(&mut self, enabled: bool) {
        self.legacy_first_upper = enabled;
        self.rescan_hotkey();
        self.needs_format = true;
    }

    pub fn preserve_trailing_spaces(&self) -> bool {
        self.preserve_trailing_spaces
    }

    pub fn set_preserve_trailing_spaces(&mut self, preserve: bool) {
        self.preserve_trailing_spaces = preserve;
        self.needs_format = true;
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn set_tab_width(&mut self, tab_width: usize) {
        self.tab_width = tab_width;
        self.needs_format = true;
    }

    /// The located access key, if any. The position indexes the stripped
    /// text.
    pub fn hot_key(&self) -> Option<HotKey> {
        self.hot
    }

    /// Ordinal of the hotkey rune among the non-whitespace runes of the
    /// stripped text. The pipeline only ever inserts or removes whitespace
    /// (breaks, wrap spaces, justify fills, tab segments), so this ordinal
    /// survives formatting and lets the paint layer find the cell in the
    /// output lines.
    pub fn hot_rune_ordinal(&self) -> Option<usize> {
        let hot = self.hot?;
        Some(
            self.text
                .chars()
                .take(hot.pos)
                .filter(|c| !c.is_whitespace())
                .count(),
        )
    }

    /// True when a mutation has invalidated the cached lines.
    pub fn needs_format(&self) -> bool {
        self.needs_format
    }

    /// The formatted lines, reformatting first if the state is dirty.
    pub fn lines(&mut self) -> &[String] {
        if self.needs_format {
            self.reformat();
        }
        &self.lines
    }

    fn rescan_hotkey(&mut self) {
        self.hot = find_hotkey(&self.raw_text, self.hot_specifier, self.legacy_first_upper);
        self.text = match (self.hot_specifier, self.hot) {
            (Some(spec), Some(hot)) => remove_hotkey_specifier(&self.raw_text, hot.pos, spec),
            _ => self.raw_text.clone(),
        };
    }

    fn auto_size(&self) -> Size {
        match self.direction {
            Direction::Horizontal => {
                let r = bounding_rect(0, 0, &self.text);
                Size {
                    width: r.width,
                    height: r.height,
                }
            }
            Direction::Vertical => {
                let normalized = self.text.replace("\r\n", "\n");
                let lines: Vec<&str> = normalized.split('\n').collect();
                Size {
                    width: columns_width(&lines),
                    height: lines.iter().map(|l| l.chars().count()).max().unwrap_or(0),
                }
            }
        }
    }

    fn reformat(&mut self) {
        let (budget, alignment, measure, wrap) = match self.direction {
            Direction::Horizontal => (
                self.size.width,
                self.alignment,
                Measure::Columns,
                self.size.height > 1,
            ),
            Direction::Vertical => (
                self.size.height,
                self.vertical_alignment,
                Measure::Runes,
                self.size.width > 1,
            ),
        };
        self.lines = format_measured(
            &self.text,
            budget,
            alignment,
            wrap,
            self.preserve_trailing_spaces,
            self.tab_width,
            measure,
        );
        self.needs_format = false;
        trace!(
            budget,
            lines = self.lines.len(),
            direction = ?self.direction,
            "reformatted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_rect_empty() {
        assert_eq!(bounding_rect(0, 0, ""), Rect { x: 0, y: 0, width: 0, height: 0 });
        assert_eq!(bounding_rect(1, 2, ""), Rect { x: 1, y: 2, width: 0, height: 0 });
        assert_eq!(
            bounding_rect(-1, -2, ""),
            Rect { x: -1, y: -2, width: 0, height: 0 }
        );
    }

    #[test]
    fn bounding_rect_single_line() {
        assert_eq!(bounding_rect(0, 0, "test").width, 4);
        assert_eq!(bounding_rect(0, 0, "test").height, 1);
        let status = " ~  s  gui.cs   master ↑10";
        assert_eq!(bounding_rect(0, 0, status).width, status.chars().count());
    }

    #[test]
    fn bounding_rect_multi_line() {
        let cases: &[(&str, usize, usize)] = &[
            ("line1\nline2", 5, 2),
            ("\nline2", 5, 2),
            ("\n\n", 0, 3),
            ("\n\n\n", 0, 4),
            ("line1\nline2\nline3long!", 10, 3),
            ("line1\nline2\n\n", 5, 4),
            ("line1\r\nline2", 5, 2),
            (" ~  s  gui.cs   master ↑10\n", 26, 2),
            ("\n ~  s  gui.cs   master ↑10", 26, 2),
            (" ~  s  gui.cs   master\n↑10", 22, 2),
        ];
        for &(text, width, height) in cases {
            let r = bounding_rect(0, 0, text);
            assert_eq!((r.width, r.height), (width, height), "{text:?}");
        }
    }

    #[test]
    fn size_follows_text() {
        let mut tf = TextFormatter::new();
        tf.set_text("你");
        assert_eq!(tf.size().width, 2);
        tf.set_text("你你");
        assert_eq!(tf.size().width, 4);
        tf.set_text("test");
        assert_eq!(tf.size(), Size { width: 4, height: 1 });
    }

    #[test]
    fn dirty_flag_lifecycle() {
        let mut tf = TextFormatter::new();
        tf.set_text("test");
        assert!(tf.needs_format());
        assert!(!tf.lines().is_empty());
        assert!(!tf.needs_format());

        tf.set_size(Size { width: 1, height: 1 });
        assert!(tf.needs_format());
        assert!(!tf.lines().is_empty());
        assert!(!tf.needs_format());

        tf.set_alignment(Alignment::Centered);
        assert!(tf.needs_format());
        assert!(!tf.lines().is_empty());
        assert!(!tf.needs_format());
    }

    #[test]
    fn lines_reflect_explicit_size() {
        let mut tf = TextFormatter::new();
        tf.set_text("Views");
        tf.set_size(Size { width: 3, height: 1 });
        assert_eq!(tf.lines(), ["Vie"]);

        tf.set_size(Size { width: 0, height: 1 });
        assert_eq!(tf.lines(), [""]);
    }

    #[test]
    fn single_row_never_wraps_taller_sizes_do() {
        let mut tf = TextFormatter::new();
        tf.set_text("A sentence has words.");
        tf.set_size(Size { width: 14, height: 1 });
        assert_eq!(tf.lines(), ["A sentence has"]);

        tf.set_size(Size { width: 14, height: 2 });
        assert_eq!(tf.lines(), ["A sentence has", "words."]);
    }

    #[test]
    fn empty_text_keeps_size_and_yields_one_empty_line() {
        let mut tf = TextFormatter::new();
        tf.set_text("Label");
        tf.set_size(Size { width: 5, height: 1 });
        tf.set_text("");
        assert_eq!(tf.size(), Size { width: 5, height: 1 });
        assert_eq!(tf.lines(), [""]);
    }

    #[test]
    fn specifier_is_stripped_and_key_found() {
        let mut tf = TextFormatter::new();
        tf.set_hot_key_specifier(Some('_'));
        tf.set_text("_Save");
        assert_eq!(tf.text(), "_Save");
        assert_eq!(tf.stripped_text(), "Save");
        let hot = tf.hot_key().unwrap();
        assert_eq!(hot.pos, 0);
        assert_eq!(hot.key, 'S');
        assert_eq!(tf.hot_rune_ordinal(), Some(0));
        assert_eq!(tf.size().width, 4);
    }

    #[test]
    fn hot_ordinal_skips_whitespace() {
        let mut tf = TextFormatter::new();
        tf.set_hot_key_specifier(Some('_'));
        tf.set_text("Save _As");
        let hot = tf.hot_key().unwrap();
        assert_eq!(hot.key, 'A');
        assert_eq!(hot.pos, 5);
        // "Save As" -> non-whitespace runes before index 5: S,a,v,e
        assert_eq!(tf.hot_rune_ordinal(), Some(4));
    }

    #[test]
    fn legacy_mode_keeps_text_intact() {
        let mut tf = TextFormatter::new();
        tf.set_legacy_first_upper(true);
        tf.set_text("save As");
        assert_eq!(tf.stripped_text(), "save As");
        let hot = tf.hot_key().unwrap();
        assert_eq!(hot.pos, 5);
        assert_eq!(hot.key, 'A');
    }

    #[test]
    fn vertical_direction_uses_height_budget_and_rune_rows() {
        let mut tf = TextFormatter::new();
        tf.set_text("デモエムポンズ");
        tf.set_direction(Direction::Vertical);
        tf.set_text("デモエムポンズ");
        assert_eq!(tf.size(), Size { width: 2, height: 7 });
        assert_eq!(tf.lines(), ["デモエムポンズ"]);

        // Height budget counts one row per rune, not rune columns.
        tf.set_size(Size { width: 1, height: 7 });
        assert_eq!(tf.lines(), ["デモエムポンズ"]);
        tf.set_size(Size { width: 1, height: 3 });
        assert_eq!(tf.lines(), ["デモエ"]);
    }
}
