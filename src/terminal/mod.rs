//! Terminal abstraction: raw mode, geometry and the device handle.

mod queries;
mod raw;
mod size;

pub use queries::{CursorReport, REPORT_BUFFER_LEN, query_cursor_position, read_report};
pub use raw::{RawModeGuard, WindowSize, make_raw, window_size};
pub use size::{Geometry, probe_geometry};

use crate::error::Result;
use std::fs::File;
use std::io::{self, Read, Write};
use std::os::fd::AsFd;

/// A terminal the editor can drive.
///
/// Reads are raw key bytes, writes are escape sequences and text. The
/// remaining methods cover the device-level operations that cannot be
/// expressed as a byte stream.
pub trait Tty: Read + Write {
    /// Ask the device for its window size.
    fn window_size(&self) -> io::Result<WindowSize>;

    /// Switch to raw mode, capturing the current attributes.
    fn enable_raw_mode(&mut self) -> Result<()>;

    /// Restore the attributes captured by [`Tty::enable_raw_mode`].
    fn disable_raw_mode(&mut self) -> Result<()>;
}

/// The process's controlling terminal.
///
/// Holds unbuffered duplicates of the input and output descriptors so that
/// a frame handed to [`Write::write_all`] reaches the device in one write.
#[derive(Debug)]
pub struct Terminal {
    input: File,
    output: File,
    raw_mode_guard: Option<RawModeGuard>,
}

impl Terminal {
    /// Open the terminal on standard input and standard output.
    pub fn stdio() -> io::Result<Self> {
        let input = File::from(io::stdin().as_fd().try_clone_to_owned()?);
        let output = File::from(io::stdout().as_fd().try_clone_to_owned()?);
        Ok(Self::from_files(input, output))
    }

    /// Drive the terminal behind explicit input/output handles.
    #[must_use]
    pub fn from_files(input: File, output: File) -> Self {
        Self {
            input,
            output,
            raw_mode_guard: None,
        }
    }
}

impl Read for Terminal {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.input.read(buf)
    }
}

impl Write for Terminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

impl Tty for Terminal {
    fn window_size(&self) -> io::Result<WindowSize> {
        window_size(&self.output)
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        if self.raw_mode_guard.is_none() {
            self.raw_mode_guard = Some(RawModeGuard::new(&self.input)?);
        }
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        match self.raw_mode_guard.take() {
            Some(mut guard) => guard.restore(),
            None => Ok(()),
        }
    }
}
