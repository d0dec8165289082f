// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! State-change trace.
//!
//! The controller hands a [`Snapshot`] to its [`TraceSink`] on the first iteration and then only
//! when the state changes. Production firmware passes `()`, which discards everything; the
//! `trace` feature wires a [`WriteTrace`] onto a UART.
//!
//! A line looks like:
//!
//! ```text
//! OPEN_CHECK(3) height=501 input='u' countdown=0 open=1 close=0 motor=on dir=opening
//! ```

use core::fmt;

use crate::control::State;
use crate::io::Direction;

/// Everything worth knowing about the controller at one instant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    pub state: State,
    pub height: u16,
    /// Last serial byte consumed, `0` if none yet.
    pub input: u8,
    pub countdown: u16,
    pub open: bool,
    pub close: bool,
    pub motor_on: bool,
    pub direction: Direction,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) height={} ", self.state, self.state.code(), self.height)?;
        if self.input.is_ascii_graphic() {
            write!(f, "input='{}' ", self.input as char)?;
        } else {
            write!(f, "input={:#04x} ", self.input)?;
        }
        write!(
            f,
            "countdown={} open={} close={} motor={} dir={}",
            self.countdown,
            self.open as u8,
            self.close as u8,
            if self.motor_on { "on" } else { "off" },
            match self.direction {
                Direction::Opening => "opening",
                Direction::Closing => "closing",
            },
        )
    }
}

/// Receiver of state-change snapshots.
pub trait TraceSink {
    fn record(&mut self, snapshot: &Snapshot);
}

/// Disabled trace.
impl TraceSink for () {
    #[inline]
    fn record(&mut self, _snapshot: &Snapshot) {}
}

/// Writes one CRLF-terminated line per snapshot to any `fmt::Write`.
pub struct WriteTrace<W: fmt::Write> {
    out: W,
}

impl<W: fmt::Write> WriteTrace<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn free(self) -> W {
        self.out
    }
}

impl<W: fmt::Write> TraceSink for WriteTrace<W> {
    fn record(&mut self, snapshot: &Snapshot) {
        // Trace output is best-effort.
        let _ = write!(self.out, "{}\r\n", snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot {
            state: State::OpenCheck,
            height: 501,
            input: b'u',
            countdown: 0,
            open: true,
            close: false,
            motor_on: true,
            direction: Direction::Opening,
        }
    }

    #[test]
    fn formats_one_line() {
        let mut trace = WriteTrace::new(String::new());
        trace.record(&snapshot());
        assert_eq!(
            trace.free(),
            "OPEN_CHECK(3) height=501 input='u' countdown=0 open=1 close=0 motor=on dir=opening\r\n"
        );
    }

    #[test]
    fn non_printable_input_is_hex() {
        let mut snap = snapshot();
        snap.input = 0;
        snap.state = State::Fault;
        snap.motor_on = false;
        let mut trace = WriteTrace::new(String::new());
        trace.record(&snap);
        let line = trace.free();
        assert!(line.starts_with("FAULT(255) height=501 input=0x00 "));
        assert!(line.contains("motor=off"));
    }
}
