// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Board Support
//!
//! STM32F777 implementations of the [`crate::io`] interfaces, plus the serial ports.
//!
//! ## Modules
//!
//! - [`pins`] - Pin assignment.
//! - [`motor`] - Relay motor (enable + direction).
//! - [`buttons`] - Active-low push-buttons.
//! - [`usart`] - Command port and trace printer.

pub mod buttons;
pub mod motor;
pub mod pins;
pub mod usart;

pub use buttons::Buttons;
pub use motor::RelayMotor;
pub use pins::BoardPins;
pub use usart::{CommandPort, Usart};
