//! Append buffer for one screen refresh.

use crate::ansi::{self, sequences};
use std::io::{self, Write};

/// Bytes for one full redraw, sent to the terminal with a single write.
///
/// Building the whole frame before writing keeps the terminal from showing
/// half-drawn screens.
#[derive(Debug, Default)]
pub struct Frame {
    buffer: Vec<u8>,
}

impl Frame {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty frame sized for a `cols` x `rows` screen.
    ///
    /// Reserves one full-width row; every other row is a `~` marker.
    #[must_use]
    pub fn for_screen(rows: u16, cols: u16) -> Self {
        // Marker, `ESC[K` and `\r\n` per row.
        let per_row = 1 + sequences::CLEAR_LINE_RIGHT.len() + sequences::NEWLINE.len();
        Self {
            buffer: Vec::with_capacity(usize::from(rows) * per_row + usize::from(cols) + 32),
        }
    }


    /// Write raw bytes to the buffer.
    pub fn write_raw(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Append `byte` `count` times.
    pub fn write_repeated(&mut self, byte: u8, count: usize) {
        self.buffer.resize(self.buffer.len() + count, byte);
    }

    /// Position the cursor (0-indexed).
    pub fn move_cursor(&mut self, row: u16, col: u16) {
        // Writing into a Vec cannot fail.
        let _ = ansi::write_cursor_position(&mut self.buffer, u32::from(row), u32::from(col));
    }

    /// Bytes accumulated so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Send the frame to `out` in one write and flush it.
    ///
    /// Consumes the frame; nothing is kept for the next refresh.
    pub fn flush_to<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.buffer)?;
        out.flush()
    }
}
