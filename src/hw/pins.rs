// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 shutter controller board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, gpioe, Alternate, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub motor: MotorPins,
    pub buttons: ButtonPins,
    pub usart1: Usart1Pins,
    pub usart3: Usart3Pins,
}

/// Relay outputs
pub struct MotorPins {
    pub enable: gpiod::PD12<Output<PushPull>>, // active-low
    pub dir: gpiod::PD13<Output<PushPull>>,    // high = opening
}

/// Push-buttons to ground
pub struct ButtonPins {
    pub open: gpioe::PE2<Input<PullUp>>,
    pub close: gpioe::PE3<Input<PullUp>>,
}

/// Command channel
pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// Trace channel (ST-LINK virtual COM port)
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            motor: MotorPins {
                enable: gpiod.pd12.into_push_pull_output(),
                dir: gpiod.pd13.into_push_pull_output(),
            },

            buttons: ButtonPins {
                open: gpioe.pe2.into_pull_up_input(),
                close: gpioe.pe3.into_pull_up_input(),
            },

            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },
        }
    }
}
