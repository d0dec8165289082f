// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Control states and the motor output each one asserts.

use core::fmt;

use crate::io::Drive;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    /// Power-on run to the end stop. Ignores every input.
    Init,
    /// Motor off, waiting for a button edge or a command.
    Idle,
    /// Closing while deciding between a click and a held press.
    CloseCheck,
    /// Opening while deciding between a click and a held press.
    OpenCheck,
    /// Opening until the top or a button press.
    OpenAuto,
    /// Closing until the bottom or a button press.
    CloseAuto,
    /// Closing for as long as the close button is held.
    CloseManual,
    /// Opening for as long as the open button is held.
    OpenManual,
    /// Driving towards the height reference.
    OpenX,
    /// Terminal. Motor off until reset.
    Fault,
}

impl State {
    /// Numeric code reported in traces.
    pub const fn code(self) -> u8 {
        match self {
            State::Init => 0,
            State::Idle => 1,
            State::CloseCheck => 2,
            State::OpenCheck => 3,
            State::OpenAuto => 4,
            State::CloseAuto => 5,
            State::CloseManual => 6,
            State::OpenManual => 7,
            State::OpenX => 8,
            State::Fault => 255,
        }
    }

    /// Inverse of [`State::code`]. Any unknown code decodes to `Fault`.
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => State::Init,
            1 => State::Idle,
            2 => State::CloseCheck,
            3 => State::OpenCheck,
            4 => State::OpenAuto,
            5 => State::CloseAuto,
            6 => State::CloseManual,
            7 => State::OpenManual,
            8 => State::OpenX,
            _ => State::Fault,
        }
    }

    /// States that classify a press with the click window.
    #[inline]
    pub fn is_check(self) -> bool {
        matches!(self, State::CloseCheck | State::OpenCheck)
    }

    /// Output asserted on every evaluation of this state.
    ///
    /// Only `OpenX` looks at the position, to pick the side of the reference it is on.
    pub fn drive(self, height: u16, reference: u16) -> Drive {
        match self {
            State::Idle | State::Fault => Drive::Off,
            State::Init | State::OpenCheck | State::OpenAuto | State::OpenManual => Drive::Opening,
            State::CloseCheck | State::CloseAuto | State::CloseManual => Drive::Closing,
            State::OpenX => {
                if height > reference {
                    Drive::Closing
                } else if height < reference {
                    Drive::Opening
                } else {
                    Drive::Off
                }
            }
        }
    }
}

impl From<u8> for State {
    fn from(code: u8) -> Self {
        State::from_code(code)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Init => "INIT",
            State::Idle => "IDLE",
            State::CloseCheck => "CLOSE_CHECK",
            State::OpenCheck => "OPEN_CHECK",
            State::OpenAuto => "OPEN_AUTO",
            State::CloseAuto => "CLOSE_AUTO",
            State::CloseManual => "CLOSE_MANUAL",
            State::OpenManual => "OPEN_MANUAL",
            State::OpenX => "OPEN_X",
            State::Fault => "FAULT",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 0..=8 {
            assert_eq!(State::from_code(code).code(), code);
        }
        assert_eq!(State::from_code(255), State::Fault);
    }

    #[test]
    fn unknown_codes_are_faults() {
        for code in [9u8, 42, 128, 254] {
            assert_eq!(State::from(code), State::Fault);
        }
    }

    #[test]
    fn open_x_drives_towards_reference() {
        assert_eq!(State::OpenX.drive(5_000, 2_500), Drive::Closing);
        assert_eq!(State::OpenX.drive(1_000, 2_500), Drive::Opening);
        assert_eq!(State::OpenX.drive(2_500, 2_500), Drive::Off);
    }

    #[test]
    fn fixed_outputs() {
        assert_eq!(State::Init.drive(0, 0), Drive::Opening);
        assert_eq!(State::Idle.drive(0, 0), Drive::Off);
        assert_eq!(State::CloseManual.drive(0, 0), Drive::Closing);
        assert_eq!(State::Fault.drive(0, 0), Drive::Off);
    }
}
