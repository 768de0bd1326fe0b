//! Full-screen painter.
//!
//! Every refresh redraws the whole screen into a fresh [`Frame`]:
//!
//! ```text
//! ESC[?25l ESC[H                      hide cursor, go home
//! <row 0> ESC[K \r\n ... <row n-1> ESC[K
//! ESC[{y+1};{x+1}H ESC[?25h           place and show cursor
//! ```
//!
//! Empty rows show `~`. Without a loaded row, the welcome banner sits a
//! third of the way down the screen.

mod frame;

pub use frame::Frame;

use crate::ansi::sequences;
use crate::editor::Editor;
use crate::error::{Error, Result};
use std::io::Write;

/// Editor version shown in the welcome banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The welcome banner text, before truncation.
#[must_use]
pub fn welcome_message() -> String {
    format!("Kilo editor -- version {VERSION}")
}

/// Append the welcome banner centered in `cols` cells.
///
/// The banner is cut to `cols` bytes. When there is left padding, its first
/// cell is the `~` empty-row marker.
pub fn draw_welcome(frame: &mut Frame, cols: u16) {
    let welcome = welcome_message();
    let cols = usize::from(cols);
    let len = welcome.len().min(cols);

    let mut padding = (cols - len) / 2;
    if padding > 0 {
        frame.write_str("~");
        padding -= 1;
    }
    frame.write_repeated(b' ', padding);
    frame.write_raw(&welcome.as_bytes()[..len]);
}

/// Append every screen row to `frame`.
pub fn draw_rows(editor: &Editor, frame: &mut Frame) {
    let geometry = editor.geometry();
    let row = editor.row();

    for y in 0..geometry.rows() {
        match row {
            Some(row) if y == 0 => frame.write_raw(row.clipped(usize::from(geometry.cols()))),
            None if y == geometry.rows() / 3 => draw_welcome(frame, geometry.cols()),
            _ => frame.write_str("~"),
        }

        frame.write_str(sequences::CLEAR_LINE_RIGHT);
        if y < geometry.last_row() {
            frame.write_str(sequences::NEWLINE);
        }
    }
}

/// Build the complete frame for the editor's current state.
#[must_use]
pub fn render_frame(editor: &Editor) -> Frame {
    let geometry = editor.geometry();
    let mut frame = Frame::for_screen(geometry.rows(), geometry.cols());

    frame.write_str(sequences::CURSOR_HIDE);
    frame.write_str(sequences::CURSOR_HOME);

    draw_rows(editor, &mut frame);

    let cursor = editor.cursor();
    frame.move_cursor(cursor.y, cursor.x);
    frame.write_str(sequences::CURSOR_SHOW);

    frame
}

/// Redraw the screen.
///
/// The frame goes out in a single write; a failed write is fatal to the
/// session.
pub fn refresh<W: Write + ?Sized>(editor: &Editor, out: &mut W) -> Result<()> {
    let frame = render_frame(editor);
    tracing::trace!(bytes = frame.len(), "refresh");
    frame.flush_to(out).map_err(|e| Error::terminal("write", e))
}

/// Clear the screen and home the cursor.
pub fn clear_screen<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut frame = Frame::new();
    frame.write_str(sequences::CLEAR_SCREEN);
    frame.write_str(sequences::CURSOR_HOME);
    frame.flush_to(out).map_err(|e| Error::terminal("write", e))
}
