// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Byte decoder for the shutter command alphabet.

use crate::protocol::messages::*;

/// Decode one received byte. Returns `None` for bytes outside the alphabet, NUL included.
pub fn parse(byte: u8) -> Option<Command> {
    match byte {
        CMD_OPEN => Some(Command::Open),
        CMD_CLOSE => Some(Command::Close),
        CMD_GAP => Some(Command::Gap),
        CMD_DECILE_MIN..=CMD_DECILE_MAX => Some(Command::OpenTo(byte - b'0')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_alphabet() {
        assert_eq!(parse(b'u'), Some(Command::Open));
        assert_eq!(parse(b'0'), Some(Command::Close));
        assert_eq!(parse(b'g'), Some(Command::Gap));
        assert_eq!(parse(b'1'), Some(Command::OpenTo(1)));
        assert_eq!(parse(b'9'), Some(Command::OpenTo(9)));
    }

    #[test]
    fn ignores_everything_else() {
        for byte in [0u8, b'z', b'U', b'G', b'/', b':', b'\r', b'\n', 0xFF] {
            assert_eq!(parse(byte), None, "byte {byte:#04x}");
        }
    }
}
