//! Keyboard event types.

/// The escape byte that starts every terminal key sequence.
pub const ESC: u8 = 0x1b;

/// Map a letter to the byte the terminal sends for Ctrl+letter.
///
/// Ctrl clears the upper three bits of the typed character.
#[must_use]
pub const fn ctrl_key(k: u8) -> u8 {
    k & 0x1f
}

/// A logical key decoded from raw terminal input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable (or high) byte, as typed.
    Char(u8),
    /// A control byte (`0x00..=0x1f` other than ESC, or DEL), as typed.
    Ctrl(u8),
    /// Up arrow key.
    ArrowUp,
    /// Down arrow key.
    ArrowDown,
    /// Left arrow key.
    ArrowLeft,
    /// Right arrow key.
    ArrowRight,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Delete key.
    Delete,
    /// A bare escape, or an escape sequence that was not recognized.
    Escape,
}

impl Key {
    /// Classify a single non-escape byte.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            ESC => Self::Escape,
            0x00..=0x1f | 0x7f => Self::Ctrl(byte),
            _ => Self::Char(byte),
        }
    }

    /// The raw byte for literal keys.
    #[must_use]
    pub const fn byte(self) -> Option<u8> {
        match self {
            Self::Char(b) | Self::Ctrl(b) => Some(b),
            _ => None,
        }
    }
}
