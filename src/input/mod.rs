//! Keyboard input decoding.
//!
//! Raw-mode terminals deliver keystrokes as bytes; navigation keys arrive as
//! short VT100/xterm escape sequences. This module reads those bytes one at
//! a time and produces a closed set of [`Key`] values.

mod decoder;
mod keyboard;

pub use decoder::{poll_key, read_key};
pub use keyboard::{ESC, Key, ctrl_key};
