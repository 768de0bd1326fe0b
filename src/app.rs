//! Editor session: raw mode lifetime and the control loop.

use crate::config::Config;
use crate::editor::{Action, Editor};
use crate::error::Result;
use crate::input::read_key;
use crate::render::{clear_screen, refresh};
use crate::terminal::{Tty, probe_geometry};
use tracing::{debug, info, warn};

/// A terminal held in raw mode.
///
/// The original attributes are restored exactly once: by [`Session::finish`]
/// on every normal or error exit, or by `Drop` if the session unwinds.
pub struct Session<'a, T: Tty + ?Sized> {
    tty: &'a mut T,
    raw: bool,
}

impl<'a, T: Tty + ?Sized> Session<'a, T> {
    /// Put `tty` into raw mode.
    pub fn start(tty: &'a mut T) -> Result<Self> {
        tty.enable_raw_mode()?;
        debug!("raw mode enabled");
        Ok(Self { tty, raw: true })
    }

    /// Probe the screen, load the file and run until the quit key.
    pub fn edit(&mut self, config: &Config) -> Result<()> {
        let geometry = probe_geometry(self.tty)?;
        info!(rows = geometry.rows(), cols = geometry.cols(), "screen geometry");

        let mut editor = Editor::new(geometry);
        if let Some(path) = &config.file {
            editor.open(path)?;
        }

        loop {
            refresh(&editor, self.tty)?;
            let key = read_key(self.tty)?;
            debug!(?key, "key");
            if editor.process_key(key) == Action::Quit {
                info!("quit requested");
                return Ok(());
            }
        }
    }

    /// Clear the screen and restore the terminal.
    ///
    /// Clearing is best effort; only the restore can fail the call.
    pub fn finish(mut self) -> Result<()> {
        self.raw = false;
        if let Err(e) = clear_screen(self.tty) {
            debug!(error = %e, "clear screen on exit failed");
        }
        let restored = self.tty.disable_raw_mode();
        if restored.is_ok() {
            debug!("terminal restored");
        }
        restored
    }
}

impl<T: Tty + ?Sized> Drop for Session<'_, T> {
    fn drop(&mut self) {
        if self.raw {
            self.raw = false;
            if let Err(e) = self.tty.disable_raw_mode() {
                warn!(error = %e, "failed to restore terminal on drop");
            }
        }
    }
}

/// Run the editor on `tty` until the user quits or a fatal error occurs.
///
/// The screen is cleared and the terminal restored before returning on every
/// path. When both the session and the restore fail, the session error is
/// returned.
pub fn run<T: Tty + ?Sized>(tty: &mut T, config: &Config) -> Result<()> {
    let started = match Session::start(tty) {
        Ok(mut session) => {
            let outcome = session.edit(config);
            let restored = session.finish();
            Ok((outcome, restored))
        }
        Err(e) => Err(e),
    };
    let (outcome, restored) = match started {
        Ok(pair) => pair,
        Err(e) => {
            if let Err(clear_err) = clear_screen(tty) {
                debug!(error = %clear_err, "clear screen after failed setup failed");
            }
            return Err(e);
        }
    };

    match (outcome, restored) {
        (Err(e), Err(restore_err)) => {
            warn!(error = %restore_err, "terminal restore failed after fatal error");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}
