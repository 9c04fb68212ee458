//! Internal layout measure.
//!
//! Horizontal layout spends terminal columns; vertical layout spends rows,
//! one per rune no matter how wide the rune's column renders. The engines
//! are written once against this measure and the public API pins it to
//! columns; the formatter state selects per direction.

use core_text::rune_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Measure {
    /// Terminal columns; every rune reserves at least one cell.
    Columns,
    /// One unit per rune (vertical stacking).
    Runes,
}

impl Measure {
    /// Extent one rune spends along the primary axis.
    #[inline]
    pub(crate) fn rune(self, c: char) -> usize {
        match self {
            Measure::Columns => rune_width(c).max(1) as usize,
            Measure::Runes => 1,
        }
    }

    pub(crate) fn text(self, text: &str) -> usize {
        text.chars().map(|c| self.rune(c)).sum()
    }

    /// Count of leading runes whose cumulative extent fits in `budget`.
    pub(crate) fn fit(self, runes: &[char], budget: usize) -> usize {
        let mut used = 0usize;
        let mut count = 0usize;
        for &c in runes {
            let w = self.rune(c);
            if used + w > budget {
                break;
            }
            used += w;
            count += 1;
        }
        count
    }
}
