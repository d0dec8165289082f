// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial command alphabet.
//!
//! Every command is a single ASCII byte with no framing or checksum. Any other byte is ignored and
//! NUL is reserved as the "nothing received" marker.

/// Open completely.
pub const CMD_OPEN: u8 = b'u';

/// Close completely.
pub const CMD_CLOSE: u8 = b'0';

/// Separate the slats without lifting the shutter.
pub const CMD_GAP: u8 = b'g';

/// Lowest and highest percentage digits (10 % and 90 %).
pub const CMD_DECILE_MIN: u8 = b'1';
pub const CMD_DECILE_MAX: u8 = b'9';

/// Decoded serial command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    Close,
    /// Go to `n` tenths of the usable travel, `n` in 1..=9.
    OpenTo(u8),
    Gap,
}
