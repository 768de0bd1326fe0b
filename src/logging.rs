//! Diagnostic logging.
//!
//! The screen belongs to the editor, so logs never go to the terminal. When a
//! log file is configured, a `tracing` subscriber appends plain-text records
//! to it; otherwise events are dropped.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install a global subscriber writing to `path` at `level` and below.
///
/// Returns `false` when another subscriber was already installed.
pub fn init(path: &Path, level: Level) -> Result<bool> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    Ok(tracing::subscriber::set_global_default(subscriber).is_ok())
}
