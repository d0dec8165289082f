// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interfaces between the control core and the board.
//!
//! The core never touches registers. It drives the motor through [`MotorDrive`] and samples the
//! push-buttons through [`ButtonSense`]; `hw` implements both for the STM32F777 board and the test
//! suite implements them with plain in-memory mocks.

/// Motor travel direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Opening,
    Closing,
}

/// The two front-panel buttons.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Button {
    Open,
    Close,
}

/// Motor actuation as asserted by the controller and observed by the timebase.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Drive {
    Off = 0,
    Opening = 1,
    Closing = 2,
}

impl Drive {
    #[inline]
    pub fn is_enabled(self) -> bool {
        self != Drive::Off
    }

    /// Direction for an enabled motor, `None` when off.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Drive::Off => None,
            Drive::Opening => Some(Direction::Opening),
            Drive::Closing => Some(Direction::Closing),
        }
    }

    /// Decode the value stored in the shared latch. Anything unknown reads as `Off`.
    #[inline]
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Drive::Opening,
            2 => Drive::Closing,
            _ => Drive::Off,
        }
    }
}

/// Motor actuation output. There is no feedback path.
pub trait MotorDrive {
    fn set_motor(&mut self, enabled: bool, direction: Direction);
}

/// Raw button sampling. `true` means pressed, whatever the electrical polarity.
pub trait ButtonSense {
    fn read_raw(&mut self, which: Button) -> bool;
}
