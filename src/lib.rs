//! kilo - a minimal raw-mode terminal screen editor core.
//!
//! Puts the controlling terminal into raw mode, decodes key bytes (including
//! VT100 escape sequences), finds the screen size and paints a full frame in
//! a single write. At most one line of text is shown.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::module_name_repetitions)] // Allow editor::EditorState style names
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod ansi;
pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod terminal;

// Re-export core types at crate root
pub use app::{Session, run};
pub use config::Config;
pub use editor::{Action, Cursor, Editor, Row};
pub use error::{Error, Result};
pub use input::{Key, ctrl_key, poll_key, read_key};
pub use render::{Frame, refresh, render_frame};
pub use terminal::{Geometry, RawModeGuard, Terminal, Tty, probe_geometry};
