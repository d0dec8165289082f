// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motion controller.
//!
//! [`Controller::poll`] is one iteration of the main loop and must be called as often as
//! possible. Each call:
//!
//! 1. samples the buttons,
//! 2. lets a pending serial command replace the state,
//! 3. asserts the outputs of the (possibly replaced) state,
//! 4. evaluates that state's exit conditions, first match wins.
//!
//! Outputs are a function of the state alone and are written before the transition, so a new
//! state only reaches the motor on the next call. Commands go through step 2 and therefore reach
//! the motor in the same call.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut controller = Controller::new(&SHARED, motor, buttons);
//!
//! loop {
//!     controller.poll(&mut ());
//! }
//! ```

use crate::config::Config;
use crate::control::arbiter::{Arbiter, Inputs};
use crate::control::State;
use crate::io::{ButtonSense, Direction, Drive, MotorDrive};
use crate::shared::SharedState;
use crate::trace::{Snapshot, TraceSink};

pub struct Controller<'a, M, B> {
    shared: &'a SharedState,
    config: Config,
    motor: M,
    buttons: B,
    arbiter: Arbiter,
    state: State,
    reference: u16,

    /// Last asserted output, and the direction line as last written.
    drive: Drive,
    direction: Direction,

    inputs: Inputs,
    reported: Option<State>,
}

impl<'a, M, B> Controller<'a, M, B>
where
    M: MotorDrive,
    B: ButtonSense,
{
    /// Create a controller in `Init`. Nothing is driven until the first [`poll`](Self::poll).
    ///
    /// The travel table is taken from `shared`, so the end-stop checks here always match the
    /// saturation limit of the tick.
    pub fn new(shared: &'a SharedState, motor: M, buttons: B) -> Self {
        Self {
            shared,
            config: *shared.config(),
            motor,
            buttons,
            arbiter: Arbiter::new(),
            state: State::Init,
            reference: 0,
            drive: Drive::Off,
            direction: Direction::Opening,
            inputs: Inputs::default(),
            reported: None,
        }
    }

    /// Run one loop iteration.
    pub fn poll<S: TraceSink>(&mut self, sink: &mut S) {
        self.inputs = self.arbiter.sample(&mut self.buttons);

        if let Some(forced) = self.arbiter.arbitrate(self.shared, self.state, &self.config) {
            if let Some(reference) = forced.reference {
                self.reference = reference;
            }
            self.state = forced.state;
        }

        self.step();

        if self.reported != Some(self.state) {
            self.reported = Some(self.state);
            sink.record(&self.snapshot());
        }
    }

    /// Output then transition for the current state.
    fn step(&mut self) {
        let height = self.shared.height();
        let countdown = self.shared.countdown();
        let max = self.config.max_height;
        let input = self.inputs;

        self.assert(self.state.drive(height, self.reference));

        let next = match self.state {
            State::Init => (countdown == 0).then_some(State::Idle),

            State::Idle => {
                if input.close_edge && height > 0 {
                    Some(State::CloseCheck)
                } else if input.open_edge && height < max {
                    Some(State::OpenCheck)
                } else {
                    None
                }
            }

            State::CloseCheck => {
                if height == 0 {
                    Some(State::Idle)
                } else if !input.close {
                    Some(State::CloseAuto)
                } else if countdown == 0 {
                    Some(State::CloseManual)
                } else if input.open {
                    Some(State::Idle)
                } else {
                    None
                }
            }

            State::OpenCheck => {
                if height == max {
                    Some(State::Idle)
                } else if !input.open {
                    Some(State::OpenAuto)
                } else if countdown == 0 {
                    Some(State::OpenManual)
                } else if input.close {
                    Some(State::Idle)
                } else {
                    None
                }
            }

            State::OpenAuto => {
                if height == max || input.open {
                    Some(State::Idle)
                } else if input.close {
                    Some(State::CloseCheck)
                } else {
                    None
                }
            }

            State::CloseAuto => {
                if height == 0 || input.close {
                    Some(State::Idle)
                } else if input.open {
                    Some(State::OpenCheck)
                } else {
                    None
                }
            }

            State::CloseManual => {
                (!input.close || height == 0 || input.open).then_some(State::Idle)
            }

            State::OpenManual => {
                (!input.open || height == max || input.close).then_some(State::Idle)
            }

            State::OpenX => (height == self.reference).then_some(State::Idle),

            State::Fault => None,
        };

        if let Some(next) = next {
            self.enter(next);
        }
    }

    fn enter(&mut self, next: State) {
        if next.is_check() {
            self.shared.reset_countdown(self.config.click_window);
        }
        self.state = next;
    }

    /// Write the motor lines and publish the actuation to the timebase. Switching off leaves the
    /// direction line where it was.
    fn assert(&mut self, drive: Drive) {
        if let Some(direction) = drive.direction() {
            self.direction = direction;
        }
        self.motor.set_motor(drive.is_enabled(), self.direction);
        self.shared.latch_drive(drive);
        self.drive = drive;
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Target of the `OpenX` state.
    #[inline]
    pub fn reference(&self) -> u16 {
        self.reference
    }

    /// Output asserted by the last [`poll`](Self::poll).
    #[inline]
    pub fn drive(&self) -> Drive {
        self.drive
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            height: self.shared.height(),
            input: self.arbiter.last_byte(),
            countdown: self.shared.countdown(),
            open: self.inputs.open,
            close: self.inputs.close,
            motor_on: self.drive.is_enabled(),
            direction: self.direction,
        }
    }

    /// Force the state from its numeric code. Unknown codes put the controller in `Fault`, which
    /// takes effect on the next poll.
    pub fn set_state_code(&mut self, code: u8) {
        self.state = State::from_code(code);
    }

    /// Access the motor driver.
    #[inline]
    pub fn motor(&mut self) -> &mut M {
        &mut self.motor
    }

    /// Access the button inputs.
    #[inline]
    pub fn buttons(&mut self) -> &mut B {
        &mut self.buttons
    }

    pub fn free(self) -> (M, B) {
        (self.motor, self.buttons)
    }
}
