//! Terminal-backed surface.
//!
//! Queues each cell as a cursor move plus a styled print on the wrapped
//! writer; nothing reaches the terminal until [`TermSurface::flush`].
//! Because [`Surface::put`] is infallible by contract, the first queueing
//! error is parked and surfaced at flush time, and later puts become
//! no-ops.

use std::io::{self, Write};

use crossterm::{cursor::MoveTo, queue, style::PrintStyledContent};

use crate::{CellStyle, Surface};

pub struct TermSurface<W: Write> {
    out: W,
    err: Option<io::Error>,
}

impl<W: Write> TermSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, err: None }
    }

    /// Flush queued cells, reporting any error parked by earlier puts.
    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(err) = self.err.take() {
            return Err(err);
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TermSurface<W> {
    fn put(&mut self, x: u16, y: u16, rune: char, style: CellStyle) {
        if self.err.is_some() {
            return;
        }
        if let Err(err) = queue!(self.out, MoveTo(x, y), PrintStyledContent(style.apply(rune))) {
            self.err = Some(err);
        }
    }
}
