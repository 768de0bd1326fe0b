//! Screen geometry detection.

use super::Tty;
use super::queries::query_cursor_position;
use crate::ansi::sequences;
use crate::error::{CursorReportError, Error, Result};

/// Visible screen size in cells.
///
/// Both dimensions are non-zero; [`Geometry::new`] is the only way to build
/// one.
///
/// ```compile_fail
/// let geometry = kilo::Geometry { rows: 0, cols: 0 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    rows: u16,
    cols: u16,
}

impl Geometry {
    /// Create a geometry, rejecting zero dimensions.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Option<Self> {
        (rows > 0 && cols > 0).then_some(Self { rows, cols })
    }

    #[must_use]
    pub fn rows(self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(self) -> u16 {
        self.cols
    }

    /// Index of the bottom row.
    #[must_use]
    pub fn last_row(self) -> u16 {
        self.rows - 1
    }

    /// Index of the rightmost column.
    #[must_use]
    pub fn last_col(self) -> u16 {
        self.cols - 1
    }
}

/// Determine the terminal's rows and columns.
///
/// Asks the device directly first. When that fails or reports zero columns,
/// pushes the cursor into the bottom-right corner and reads its position
/// back from the terminal.
pub fn probe_geometry<T: Tty + ?Sized>(tty: &mut T) -> Result<Geometry> {
    match tty.window_size() {
        Ok(size) => {
            if let Some(geometry) = Geometry::new(size.rows, size.cols) {
                tracing::debug!(rows = geometry.rows, cols = geometry.cols, "window size from ioctl");
                return Ok(geometry);
            }
            tracing::debug!(rows = size.rows, cols = size.cols, "ioctl reported empty window");
        }
        Err(e) => tracing::debug!(error = %e, "window size ioctl failed"),
    }

    tty.write_all(sequences::CURSOR_FAR_CORNER.as_bytes())
        .map_err(|e| Error::terminal("write", e))?;
    let report = query_cursor_position(tty)?;
    tracing::info!(rows = report.row, cols = report.col, "window size from cursor report");

    // The report parser already rejects zero rows or columns.
    Geometry::new(report.row, report.col)
        .ok_or(Error::CursorReport(CursorReportError::ZeroSize))
}
