// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Front-panel push-buttons.
//!
//! Both buttons pull their line to ground, so a low level reads as pressed. The lines are sampled
//! once per loop iteration and are not debounced further.

use stm32f7xx_hal::gpio::{self, Input, PullUp};

use crate::io::{Button, ButtonSense};

pub struct Buttons<const OPEN_P: char, const OPEN_N: u8, const CLOSE_P: char, const CLOSE_N: u8> {
    open: gpio::Pin<OPEN_P, OPEN_N, Input<PullUp>>,
    close: gpio::Pin<CLOSE_P, CLOSE_N, Input<PullUp>>,
}

impl<const OPEN_P: char, const OPEN_N: u8, const CLOSE_P: char, const CLOSE_N: u8>
    Buttons<OPEN_P, OPEN_N, CLOSE_P, CLOSE_N>
{
    /// Configure both pins as pulled-up inputs.
    pub fn new<OpenMode, CloseMode>(
        open: gpio::Pin<OPEN_P, OPEN_N, OpenMode>,
        close: gpio::Pin<CLOSE_P, CLOSE_N, CloseMode>,
    ) -> Self {
        Self {
            open: open.into_pull_up_input(),
            close: close.into_pull_up_input(),
        }
    }
}

impl<const OPEN_P: char, const OPEN_N: u8, const CLOSE_P: char, const CLOSE_N: u8> ButtonSense
    for Buttons<OPEN_P, OPEN_N, CLOSE_P, CLOSE_N>
{
    #[inline]
    fn read_raw(&mut self, which: Button) -> bool {
        match which {
            Button::Open => self.open.is_low(),
            Button::Close => self.close.is_low(),
        }
    }
}
