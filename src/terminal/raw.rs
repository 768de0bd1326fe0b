//! Raw mode terminal handling.
//!
//! Provides functions to enter and exit raw mode on Unix terminals using termios.
//! Raw mode disables terminal line buffering and echo, allowing character-by-character
//! input reading.
//!
//! # Safety
//! This module uses unsafe code for FFI calls to libc termios functions.
//! These are necessary for low-level terminal control and cannot be avoided.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use crate::error::{Error, Result};
use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// Window size as reported by the `TIOCGWINSZ` ioctl.
///
/// Unvalidated: a terminal may report zero for either field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

/// Saved terminal state for restoration.
///
/// The original attributes are written back exactly once: either by an
/// explicit [`RawModeGuard::restore`] or, failing that, when the guard drops.
#[derive(Debug)]
pub struct RawModeGuard {
    fd: RawFd,
    original: libc::termios,
    restored: bool,
}

impl RawModeGuard {
    /// Enter raw mode on the given file descriptor.
    ///
    /// Returns a guard that will restore the terminal state when dropped.
    pub fn new<F: AsRawFd>(fd: &F) -> Result<Self> {
        let fd = fd.as_raw_fd();
        let original = get_termios(fd).map_err(|e| Error::terminal("tcgetattr", e))?;

        set_termios(fd, &make_raw(original)).map_err(|e| Error::terminal("tcsetattr", e))?;
        tracing::debug!(fd, "entered raw mode");

        Ok(Self {
            fd,
            original,
            restored: false,
        })
    }

    /// Restore the original terminal state.
    ///
    /// Only the first call touches the terminal; later calls return `Ok(())`.
    /// A failed restore is not retried.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        set_termios(self.fd, &self.original).map_err(|e| Error::terminal("tcsetattr", e))?;
        tracing::debug!(fd = self.fd, "restored terminal mode");
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "failed to restore terminal mode");
        }
    }
}

/// Derive raw-mode attributes from the original ones.
#[must_use]
pub fn make_raw(original: libc::termios) -> libc::termios {
    let mut raw = original;

    // Input modes: no break, no CR to NL, no parity check, no strip char,
    // no start/stop output control.
    raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);

    // Output modes: disable post processing
    raw.c_oflag &= !libc::OPOST;

    // Control modes: set 8 bit chars
    raw.c_cflag |= libc::CS8;

    // Local modes: echo off, canonical off, no extended functions,
    // no signal chars (^C, ^Z, etc)
    raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);

    // Return from read() as soon as any input is available, or after 100ms
    raw.c_cc[libc::VMIN] = 0;
    raw.c_cc[libc::VTIME] = 1;

    raw
}

/// Query the window size of the terminal behind `fd`.
pub fn window_size<F: AsRawFd>(fd: &F) -> io::Result<WindowSize> {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: ioctl with TIOCGWINSZ is safe when passed a valid winsize struct
    let result = unsafe { libc::ioctl(fd.as_raw_fd(), libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(WindowSize {
            rows: size.ws_row,
            cols: size.ws_col,
        })
    }
}

/// Get termios attributes.
fn get_termios(fd: RawFd) -> io::Result<libc::termios> {
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };

    // SAFETY: tcgetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(termios)
    }
}

/// Set termios attributes.
fn set_termios(fd: RawFd, termios: &libc::termios) -> io::Result<()> {
    // SAFETY: tcsetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}
