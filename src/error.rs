//! Error types for kilo.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for kilo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a cursor position report could not be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorReportError {
    /// The reply never reached its `R` terminator.
    Unterminated,
    /// The reply did not start with `ESC [`.
    BadPrefix,
    /// The row/column fields were not two decimal integers.
    BadNumber,
    /// The terminal reported a zero row or column.
    ZeroSize,
}

impl fmt::Display for CursorReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Unterminated => "reply missing 'R' terminator",
            Self::BadPrefix => "reply does not start with ESC [",
            Self::BadNumber => "reply is not <row>;<col>",
            Self::ZeroSize => "reply reports a zero dimension",
        };
        f.write_str(reason)
    }
}

/// Error type for kilo operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal operations.
    Io(io::Error),
    /// A named terminal call failed (`tcgetattr`, `tcsetattr`, `read`, `write`).
    Terminal {
        op: &'static str,
        source: io::Error,
    },
    /// The cursor position report was malformed.
    CursorReport(CursorReportError),
    /// The file given on the command line could not be read.
    Open { path: PathBuf, source: io::Error },
}

impl Error {
    /// Wrap an I/O error with the name of the call that produced it.
    #[must_use]
    pub fn terminal(op: &'static str, source: io::Error) -> Self {
        Self::Terminal { op, source }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Terminal { op, source } => write!(f, "{op}: {source}"),
            Self::CursorReport(reason) => write!(f, "cursor position report: {reason}"),
            Self::Open { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Terminal { source: e, .. } | Self::Open { source: e, .. } => {
                Some(e)
            }
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<CursorReportError> for Error {
    fn from(e: CursorReportError) -> Self {
        Self::CursorReport(e)
    }
}
