// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART abstraction layer.
//!
//! - [`CommandPort`] owns the command UART. It is serviced from the receive interrupt, posts each
//!   byte to the shared state and echoes it back to the operator.
//! - [`Usart`] is a blocking, transmit-only printer used for the state trace.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.
//!
//! To access the terminal on the host machine, connect to the USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```
//!
//! To close the terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Event, Instance, Pins, Rx, Serial, Tx},
};

use crate::shared::SharedState;

/// Command channel: 57 600 baud, 8N1, single-byte commands.
pub const COMMAND_BAUD: u32 = 57_600;

/// Trace channel.
pub const TRACE_BAUD: u32 = 115_200;

pub struct CommandPort<U: Instance> {
    tx: Tx<U>,
    rx: Rx<U>,
}

impl<U: Instance> CommandPort<U> {
    /// Enable the receive interrupt and split the port.
    pub fn new<PINS: Pins<U>>(mut serial: Serial<U, PINS>) -> Self {
        serial.listen(Event::Rxne);
        let (tx, rx) = serial.split();
        Self { tx, rx }
    }

    /// Receive-interrupt body.
    ///
    /// Never blocks: the echo is dropped if the transmitter is still busy, and receive errors
    /// (overrun, framing) discard the byte.
    pub fn service(&mut self, shared: &SharedState) {
        if let Ok(byte) = self.rx.read() {
            shared.post_byte(byte);
            let _ = self.tx.write(byte);
        }
    }
}

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }
}

// Implement `core::fmt::Write` so the trace sink can use `write!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}
