//! Mock terminal for driving editor sessions without a real TTY.
//!
//! This module provides:
//! - `MockTty`: a [`Tty`] with scripted input, captured output and counters
//!   for raw-mode switches
//! - Screen helpers that replay the captured bytes through a VT100 emulator
//!
//! # Example
//!
//! ```ignore
//! let mut tty = MockTty::new(24, 80).with_input(b"\x18");
//! kilo::run(&mut tty, &Config::default())?;
//! assert_eq!(tty.restore_count(), 1);
//! ```

#![allow(dead_code)] // Shared test helper; not every integration test uses every method

use kilo::Result;
use kilo::terminal::{Tty, WindowSize};
use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// A scripted terminal.
#[derive(Debug, Default)]
pub struct MockTty {
    /// Bytes handed out by `read`, one chunk per call.
    input: VecDeque<Vec<u8>>,
    /// Everything written so far.
    output: Vec<u8>,
    /// Answer to the size ioctl; `None` makes the ioctl fail.
    size: Option<WindowSize>,
    /// Size of the emulated screen when it differs from the ioctl answer.
    screen_size: Option<WindowSize>,
    /// Fail every write after this many bytes have been accepted.
    write_limit: Option<usize>,
    /// Fail reads once the script runs out instead of timing out.
    fail_when_drained: bool,
    raw: bool,
    enable_count: usize,
    restore_count: usize,
    write_calls: usize,
}

impl MockTty {
    /// Create a mock whose size ioctl reports `rows` x `cols`.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            size: Some(WindowSize { rows, cols }),
            fail_when_drained: true,
            ..Self::default()
        }
    }

    /// Create a mock whose size ioctl fails.
    #[must_use]
    pub fn without_ioctl() -> Self {
        Self {
            fail_when_drained: true,
            ..Self::default()
        }
    }

    /// Queue bytes to be returned by a single `read` call.
    ///
    /// The key decoder reads one byte at a time, so chunk boundaries only
    /// matter for cursor position replies.
    #[must_use]
    pub fn with_input(mut self, bytes: &[u8]) -> Self {
        self.input.push_back(bytes.to_vec());
        self
    }

    /// Report `rows` x `cols` through the ioctl.
    #[must_use]
    pub fn with_size(mut self, rows: u16, cols: u16) -> Self {
        self.size = Some(WindowSize { rows, cols });
        self
    }

    /// Time out (zero-byte reads) once the script runs out.
    #[must_use]
    pub fn with_read_timeouts(mut self) -> Self {
        self.fail_when_drained = false;
        self
    }

    /// Emulate a `rows` x `cols` screen without reporting it via the ioctl.
    #[must_use]
    pub fn with_screen_size(mut self, rows: u16, cols: u16) -> Self {
        self.screen_size = Some(WindowSize { rows, cols });
        self
    }

    /// Reject writes once `limit` bytes have been written.
    #[must_use]
    pub fn with_write_limit(mut self, limit: usize) -> Self {
        self.write_limit = Some(limit);
        self
    }

    /// Get the raw output buffer.
    #[must_use]
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Get the output as a string (lossy UTF-8 conversion).
    #[must_use]
    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Number of times raw mode was entered.
    #[must_use]
    pub fn enable_count(&self) -> usize {
        self.enable_count
    }

    /// Number of times the original attributes were restored.
    #[must_use]
    pub fn restore_count(&self) -> usize {
        self.restore_count
    }

    /// Number of successful write calls.
    #[must_use]
    pub fn write_calls(&self) -> usize {
        self.write_calls
    }

    #[must_use]
    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Output written before the exit-time screen clear.
    #[must_use]
    pub fn output_before_exit(&self) -> &[u8] {
        let clear = b"\x1b[2J";
        let end = self
            .output
            .windows(clear.len())
            .rposition(|w| w == clear)
            .unwrap_or(self.output.len());
        &self.output[..end]
    }

    /// Replay the output up to the exit-time clear through a VT100 emulator.
    #[must_use]
    pub fn screen(&self) -> vt100::Parser {
        let size = self
            .screen_size
            .or(self.size)
            .unwrap_or(WindowSize { rows: 24, cols: 80 });
        let mut parser = vt100::Parser::new(size.rows, size.cols, 0);
        parser.process(self.output_before_exit());
        parser
    }

    /// The emulated screen's rows with trailing blanks removed.
    #[must_use]
    pub fn screen_rows(&self) -> Vec<String> {
        let parser = self.screen();
        let (_, cols) = parser.screen().size();
        parser
            .screen()
            .rows(0, cols)
            .map(|row| row.trim_end().to_string())
            .collect()
    }

    /// Count occurrences of a byte sequence in the output.
    #[must_use]
    pub fn count_sequence(&self, seq: &[u8]) -> usize {
        if seq.is_empty() {
            return 0;
        }
        self.output.windows(seq.len()).filter(|w| *w == seq).count()
    }
}

impl Read for MockTty {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(chunk) = self.input.front_mut() else {
            if self.fail_when_drained {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script drained"));
            }
            return Ok(0);
        };
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        chunk.drain(..n);
        if chunk.is_empty() {
            self.input.pop_front();
        }
        Ok(n)
    }
}

impl Write for MockTty {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(limit) = self.write_limit {
            if self.output.len() + buf.len() > limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "write limit"));
            }
        }
        self.write_calls += 1;
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Tty for MockTty {
    fn window_size(&self) -> io::Result<WindowSize> {
        self.size
            .ok_or_else(|| io::Error::from_raw_os_error(libc::ENOTTY))
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.raw = true;
        self.enable_count += 1;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.raw = false;
        self.restore_count += 1;
        Ok(())
    }
}
