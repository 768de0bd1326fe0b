//! Cursor position report (DSR 6) parsing.
//!
//! The terminal answers `ESC[6n` with `ESC [ row ; col R`, 1-indexed.

use crate::ansi::sequences;
use crate::error::{CursorReportError, Error, Result};
use std::io::{self, Read, Write};

/// Size of the scratch buffer for a cursor report, including one slot that
/// is never filled (the reply is at most 31 bytes).
pub const REPORT_BUFFER_LEN: usize = 32;

/// A parsed cursor position report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorReport {
    /// 1-indexed row.
    pub row: u16,
    /// 1-indexed column.
    pub col: u16,
}

impl CursorReport {
    /// Parse a reply of the form `ESC [ row ; col R`.
    pub fn parse(reply: &[u8]) -> std::result::Result<Self, CursorReportError> {
        let Some((&b'R', body)) = reply.split_last() else {
            return Err(CursorReportError::Unterminated);
        };
        let Some(params) = body.strip_prefix(b"\x1b[") else {
            return Err(CursorReportError::BadPrefix);
        };

        let params = std::str::from_utf8(params).map_err(|_| CursorReportError::BadNumber)?;
        let (row, col) = params
            .split_once(';')
            .ok_or(CursorReportError::BadNumber)?;
        let row = parse_decimal(row)?;
        let col = parse_decimal(col)?;

        if row == 0 || col == 0 {
            return Err(CursorReportError::ZeroSize);
        }
        Ok(Self { row, col })
    }
}

fn parse_decimal(field: &str) -> std::result::Result<u16, CursorReportError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CursorReportError::BadNumber);
    }
    field.parse().map_err(|_| CursorReportError::BadNumber)
}

/// Read a cursor report reply from `input`.
///
/// Stops after the `R` terminator, on a zero-byte read (timeout), or when
/// the scratch buffer is full. The returned bytes include the terminator if
/// one was seen.
pub fn read_report<R: Read + ?Sized>(input: &mut R) -> Result<Vec<u8>> {
    let mut reply = Vec::with_capacity(REPORT_BUFFER_LEN);
    let mut byte = [0u8; 1];

    while reply.len() < REPORT_BUFFER_LEN - 1 {
        match input.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                reply.push(byte[0]);
                if byte[0] == b'R' {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
            Err(e) => return Err(Error::terminal("read", e)),
        }
    }

    Ok(reply)
}

/// Ask the terminal where the cursor is and parse its answer.
pub fn query_cursor_position<T: Read + Write + ?Sized>(tty: &mut T) -> Result<CursorReport> {
    tty.write_all(sequences::query::CURSOR_POSITION.as_bytes())
        .and_then(|()| tty.flush())
        .map_err(|e| Error::terminal("write", e))?;

    let reply = read_report(tty)?;
    CursorReport::parse(&reply).map_err(|reason| {
        tracing::debug!(?reply, %reason, "rejected cursor position report");
        Error::CursorReport(reason)
    })
}
