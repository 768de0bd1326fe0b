//! The single line of text an editor session can show.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One line of file content with its line terminator removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    chars: Vec<u8>,
}

impl Row {
    /// Build a row from raw bytes, stripping any trailing `\n`/`\r`.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let mut chars = bytes.into();
        while matches!(chars.last(), Some(b'\n' | b'\r')) {
            chars.pop();
        }
        Self { chars }
    }

    /// Read the first line from `reader`.
    ///
    /// Returns `Ok(None)` for empty input. Everything after the first line
    /// is left unread.
    pub fn read_first<R: BufRead>(mut reader: R) -> io::Result<Option<Self>> {
        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(Self::new(line)))
    }

    /// Load the first line of the file at `path`.
    pub fn open(path: &Path) -> Result<Option<Self>> {
        let open_err = |source| Error::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_err)?;
        let row = Self::read_first(BufReader::new(file)).map_err(open_err)?;
        tracing::info!(
            path = %path.display(),
            len = row.as_ref().map_or(0, Self::len),
            "loaded first line"
        );
        Ok(row)
    }

    /// The row's bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// At most `width` leading bytes, for display.
    #[must_use]
    pub fn clipped(&self, width: usize) -> &[u8] {
        &self.chars[..self.chars.len().min(width)]
    }
}
