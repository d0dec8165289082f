// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Relay-driven shutter motor.
//!
//! Two GPIO outputs:
//! - enable, active-low (relay coil energised when low),
//! - direction, high = opening, low = closing.

use stm32f7xx_hal::gpio::{self, Output, PushPull};

use crate::io::{Direction, MotorDrive};

pub struct RelayMotor<const EN_P: char, const EN_N: u8, const DIR_P: char, const DIR_N: u8> {
    enable: gpio::Pin<EN_P, EN_N, Output<PushPull>>,
    dir: gpio::Pin<DIR_P, DIR_N, Output<PushPull>>,
}

impl<const EN_P: char, const EN_N: u8, const DIR_P: char, const DIR_N: u8>
    RelayMotor<EN_P, EN_N, DIR_P, DIR_N>
{
    /// Take both lines and leave the motor off.
    pub fn new<EnMode, DirMode>(
        enable: gpio::Pin<EN_P, EN_N, EnMode>,
        dir: gpio::Pin<DIR_P, DIR_N, DirMode>,
    ) -> Self {
        let mut enable = enable.into_push_pull_output();
        let mut dir = dir.into_push_pull_output();

        // Default: Off, direction up
        enable.set_high();
        dir.set_high();

        Self { enable, dir }
    }

    pub fn free(
        self,
    ) -> (
        gpio::Pin<EN_P, EN_N, Output<PushPull>>,
        gpio::Pin<DIR_P, DIR_N, Output<PushPull>>,
    ) {
        (self.enable, self.dir)
    }
}

impl<const EN_P: char, const EN_N: u8, const DIR_P: char, const DIR_N: u8> MotorDrive
    for RelayMotor<EN_P, EN_N, DIR_P, DIR_N>
{
    fn set_motor(&mut self, enabled: bool, direction: Direction) {
        match direction {
            Direction::Opening => self.dir.set_high(),
            Direction::Closing => self.dir.set_low(),
        }
        if enabled {
            self.enable.set_low();
        } else {
            self.enable.set_high();
        }
    }
}
