//! Constant ANSI escape sequences.

/// Clear entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Clear from cursor to end of line.
pub const CLEAR_LINE_RIGHT: &str = "\x1b[K";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Move cursor to home position (1,1).
pub const CURSOR_HOME: &str = "\x1b[H";

/// Push the cursor to the bottom-right corner.
///
/// `C` and `B` stop at the screen edge, so 999 cells is enough for any
/// real terminal.
pub const CURSOR_FAR_CORNER: &str = "\x1b[999C\x1b[999B";

/// Line break between rendered rows (`OPOST` is off in raw mode).
pub const NEWLINE: &str = "\r\n";

/// Terminal query sequences.
pub mod query {
    /// Device status report: cursor position (DSR 6).
    ///
    /// The terminal answers `ESC [ row ; col R`.
    pub const CURSOR_POSITION: &str = "\x1b[6n";
}
