//! Fuzz target for the key decoder.
//!
//! Generates structured inputs around the escape sequences the decoder
//! recognizes, then checks it always makes progress and never panics.

#![no_main]

use arbitrary::Arbitrary;
use kilo::{Key, poll_key};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct KeyInput {
    seq_type: SequenceType,
    /// Raw bytes to append (for edge cases).
    suffix: Vec<u8>,
}

#[derive(Arbitrary, Debug)]
enum SequenceType {
    /// ESC [ <final>
    Csi { final_byte: u8 },
    /// ESC O <final>
    Ss3 { final_byte: u8 },
    /// ESC [ <digit> <terminator>
    Tilde { digit: u8, terminator: u8 },
    /// Lone escape.
    Escape,
    /// Just raw bytes.
    RawBytes { bytes: Vec<u8> },
}

impl KeyInput {
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = match &self.seq_type {
            SequenceType::Csi { final_byte } => vec![0x1b, b'[', *final_byte],
            SequenceType::Ss3 { final_byte } => vec![0x1b, b'O', *final_byte],
            SequenceType::Tilde { digit, terminator } => {
                vec![0x1b, b'[', b'0' + digit % 10, *terminator]
            }
            SequenceType::Escape => vec![0x1b],
            SequenceType::RawBytes { bytes } => bytes.clone(),
        };
        bytes.extend_from_slice(&self.suffix);
        bytes
    }
}

fuzz_target!(|input: KeyInput| {
    let bytes = input.to_bytes();
    let mut rest = &bytes[..];

    while !rest.is_empty() {
        let before = rest.len();
        let key = poll_key(&mut rest).expect("slice reads never fail");
        let consumed = before - rest.len();
        assert!((1..=4).contains(&consumed));
        if let Some(Key::Char(b) | Key::Ctrl(b)) = key {
            assert_eq!(consumed, 1);
            assert_ne!(b, 0x1b);
        }
    }
});
