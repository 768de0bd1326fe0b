//! Byte-level key decoder.
//!
//! Turns raw terminal input into [`Key`]s. Recognized escape sequences:
//! - `ESC [ A|B|C|D` arrows, `ESC [ H|F` and `ESC O H|F` Home/End
//! - `ESC [ n ~` for n in `1 3 4 5 6 7 8` (Home, Delete, End, PageUp,
//!   PageDown, Home, End)
//!
//! Every call starts from scratch. Anything that does not complete one of
//! the sequences above within the lookahead decodes to [`Key::Escape`].

use crate::error::{Error, Result};
use crate::input::keyboard::{ESC, Key};
use std::io::{self, Read};

/// Read one byte. `Ok(None)` means the read timed out with nothing available.
fn read_byte<R: Read + ?Sized>(input: &mut R) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

/// Try to decode one key.
///
/// Returns `Ok(None)` when no byte arrived before the read timeout. Only
/// the first byte can fail the call: errors inside an escape sequence
/// degrade to [`Key::Escape`].
pub fn poll_key<R: Read + ?Sized>(input: &mut R) -> Result<Option<Key>> {
    match read_byte(input) {
        Ok(Some(ESC)) => Ok(Some(decode_escape(input))),
        Ok(Some(byte)) => Ok(Some(Key::from_byte(byte))),
        Ok(None) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
        Err(e) => Err(Error::terminal("read", e)),
    }
}

/// Block until a key arrives.
pub fn read_key<R: Read + ?Sized>(input: &mut R) -> Result<Key> {
    loop {
        if let Some(key) = poll_key(input)? {
            return Ok(key);
        }
    }
}

/// Decode what follows an ESC byte, reading at most three more bytes.
fn decode_escape<R: Read + ?Sized>(input: &mut R) -> Key {
    let mut next = || read_byte(input).ok().flatten();

    let Some(first) = next() else {
        return Key::Escape;
    };
    let Some(second) = next() else {
        return Key::Escape;
    };

    let key = match (first, second) {
        (b'[', digit @ b'0'..=b'9') => match next() {
            Some(b'~') => tilde_key(digit),
            _ => None,
        },
        (b'[', letter) => csi_key(letter),
        (b'O', letter) => ss3_key(letter),
        _ => None,
    };

    key.unwrap_or_else(|| {
        tracing::trace!(first, second, "unrecognized escape sequence");
        Key::Escape
    })
}

/// `ESC [ <digit> ~`
fn tilde_key(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}

/// `ESC [ <letter>`
fn csi_key(letter: u8) -> Option<Key> {
    match letter {
        b'A' => Some(Key::ArrowUp),
        b'B' => Some(Key::ArrowDown),
        b'C' => Some(Key::ArrowRight),
        b'D' => Some(Key::ArrowLeft),
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}

/// `ESC O <letter>`
fn ss3_key(letter: u8) -> Option<Key> {
    match letter {
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}
