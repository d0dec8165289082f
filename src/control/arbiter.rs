// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Input arbitration.
//!
//! Runs at the top of every loop iteration, before the state machine:
//!
//! 1. both buttons are sampled once and their rising edges derived,
//! 2. a pending serial byte is consumed and, when it is a command, turned into an [`Override`]
//!    that replaces the current state outright.
//!
//! Commands are refused while the startup run is in progress and once the controller has
//! faulted, but the byte is still consumed.

use crate::config::Config;
use crate::control::State;
use crate::io::{Button, ButtonSense};
use crate::protocol::{self, Command};
use crate::shared::{SharedState, NO_DATA};

/// Rising-edge detector. The stored level is the only history.
#[derive(Copy, Clone, Debug, Default)]
pub struct EdgeDetector {
    level: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { level: false }
    }

    /// Feed the current level; returns `true` only on a released→pressed transition.
    #[inline]
    pub fn update(&mut self, pressed: bool) -> bool {
        let rising = pressed && !self.level;
        self.level = pressed;
        rising
    }

    #[inline]
    pub fn level(&self) -> bool {
        self.level
    }
}

/// Button levels and edges for one iteration.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Inputs {
    pub open: bool,
    pub close: bool,
    pub open_edge: bool,
    pub close_edge: bool,
}

/// State forced by a serial command.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Override {
    pub state: State,
    /// New `OpenX` target, for the commands that set one.
    pub reference: Option<u16>,
}

impl Override {
    /// Map a decoded command onto the state it forces.
    pub fn for_command(command: Command, config: &Config) -> Self {
        match command {
            Command::Open => Self {
                state: State::OpenAuto,
                reference: None,
            },
            Command::Close => Self {
                state: State::CloseAuto,
                reference: None,
            },
            Command::OpenTo(digit) => Self {
                state: State::OpenX,
                reference: Some(config.decile_height(digit)),
            },
            Command::Gap => Self {
                state: State::OpenX,
                reference: Some(config.gap_height()),
            },
        }
    }
}

pub struct Arbiter {
    open: EdgeDetector,
    close: EdgeDetector,
    last_byte: u8,
}

impl Arbiter {
    pub const fn new() -> Self {
        Self {
            open: EdgeDetector::new(),
            close: EdgeDetector::new(),
            last_byte: NO_DATA,
        }
    }

    /// Sample both buttons once and derive their edges.
    pub fn sample<B: ButtonSense>(&mut self, buttons: &mut B) -> Inputs {
        let close = buttons.read_raw(Button::Close);
        let open = buttons.read_raw(Button::Open);
        Inputs {
            open,
            close,
            open_edge: self.open.update(open),
            close_edge: self.close.update(close),
        }
    }

    /// Consume the pending serial byte, if any, and decide whether it overrides `current`.
    pub fn arbitrate(
        &mut self,
        shared: &SharedState,
        current: State,
        config: &Config,
    ) -> Option<Override> {
        let byte = shared.take_byte()?;
        self.last_byte = byte;

        if matches!(current, State::Init | State::Fault) {
            return None;
        }
        protocol::parse(byte).map(|command| Override::for_command(command, config))
    }

    /// Most recently consumed serial byte, `0` if none yet.
    #[inline]
    pub fn last_byte(&self) -> u8 {
        self.last_byte
    }
}

impl Default for Arbiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Levels {
        open: bool,
        close: bool,
    }

    impl ButtonSense for Levels {
        fn read_raw(&mut self, which: Button) -> bool {
            match which {
                Button::Open => self.open,
                Button::Close => self.close,
            }
        }
    }

    #[test]
    fn edge_fires_once_per_press() {
        let mut edge = EdgeDetector::new();
        let trace: [bool; 8] = [false, true, true, true, false, false, true, true];
        let fired: [bool; 8] = [false, true, false, false, false, false, true, false];
        for (level, expected) in trace.iter().zip(fired.iter()) {
            assert_eq!(edge.update(*level), *expected);
            assert_eq!(edge.level(), *level);
        }
    }

    #[test]
    fn sample_reports_levels_and_edges() {
        let mut arbiter = Arbiter::new();
        let mut buttons = Levels {
            open: true,
            close: false,
        };

        let first = arbiter.sample(&mut buttons);
        assert_eq!(
            first,
            Inputs {
                open: true,
                close: false,
                open_edge: true,
                close_edge: false,
            }
        );

        buttons.close = true;
        let second = arbiter.sample(&mut buttons);
        assert!(second.open && second.close);
        assert!(!second.open_edge);
        assert!(second.close_edge);
    }

    #[test]
    fn percentage_command_sets_reference() {
        let shared = SharedState::new(Config::DEFAULT);
        let mut arbiter = Arbiter::new();
        shared.post_byte(b'5');

        let forced = arbiter.arbitrate(&shared, State::Idle, &Config::DEFAULT);
        assert_eq!(
            forced,
            Some(Override {
                state: State::OpenX,
                reference: Some(7_850),
            })
        );
        assert_eq!(shared.take_byte(), None);
        assert_eq!(arbiter.last_byte(), b'5');
    }

    #[test]
    fn gap_and_full_travel_commands() {
        let cfg = Config::DEFAULT;
        let shared = SharedState::new(cfg);
        let mut arbiter = Arbiter::new();

        shared.post_byte(b'g');
        let gap = arbiter.arbitrate(&shared, State::OpenAuto, &cfg).unwrap();
        assert_eq!(gap.state, State::OpenX);
        assert_eq!(gap.reference, Some(2_500));

        shared.post_byte(b'u');
        let open = arbiter.arbitrate(&shared, State::CloseManual, &cfg).unwrap();
        assert_eq!(open.state, State::OpenAuto);
        assert_eq!(open.reference, None);

        shared.post_byte(b'0');
        let close = arbiter.arbitrate(&shared, State::OpenX, &cfg).unwrap();
        assert_eq!(close.state, State::CloseAuto);
    }

    #[test]
    fn unknown_byte_is_consumed_without_override() {
        let shared = SharedState::new(Config::DEFAULT);
        let mut arbiter = Arbiter::new();
        shared.post_byte(b'z');

        assert_eq!(arbiter.arbitrate(&shared, State::Idle, &Config::DEFAULT), None);
        assert_eq!(shared.take_byte(), None);
        assert_eq!(arbiter.last_byte(), b'z');
    }

    #[test]
    fn startup_and_fault_absorb_commands() {
        let shared = SharedState::new(Config::DEFAULT);
        let mut arbiter = Arbiter::new();

        for state in [State::Init, State::Fault] {
            shared.post_byte(b'u');
            assert_eq!(arbiter.arbitrate(&shared, state, &Config::DEFAULT), None);
            assert_eq!(shared.take_byte(), None);
        }
    }

    #[test]
    fn nothing_pending() {
        let shared = SharedState::new(Config::DEFAULT);
        let mut arbiter = Arbiter::new();
        assert_eq!(arbiter.arbitrate(&shared, State::Idle, &Config::DEFAULT), None);
        assert_eq!(arbiter.last_byte(), 0);
    }
}
