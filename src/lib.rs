// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Shutter Controller Firmware
//!
//! Firmware for a motorized window shutter driven by two push-buttons and a serial command port,
//! written in Rust, targeting an STM32F777 MCU.
//!
//! A quick click on a button runs the shutter all the way; holding the button moves it only while
//! held. Single-byte serial commands override the buttons at any time. There is no position
//! sensor: the height is estimated from how long the motor has been driven, one step per
//! millisecond, so it drifts over many runs.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`control`] | 1 ms timebase, input arbitration and the motion state machine |
//! | [`protocol`] | Serial command alphabet |
//! | [`shared`] | Variables shared between interrupts and the main loop |
//! | [`config`] | Travel and timing table |
//! | [`io`] | Motor and button interfaces implemented by the board |
//! | [`trace`] | State-change snapshots for the debug terminal |
//! | `hw` | STM32F777 pins, relay motor, buttons and USARTs (`board` feature) |
//!
//! ## Serial commands
//!
//! | Byte | Action |
//! | ---- | ------ |
//! | `u` | Open completely |
//! | `0` | Close completely |
//! | `1`–`9` | Go to 10 %–90 % of the travel above the dead-band |
//! | `g` | Separate the slats, shutter stays seated |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board (add `trace` to print state changes on the ST-LINK port):
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf --features board
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod io;
pub mod protocol;
pub mod shared;
pub mod trace;

#[cfg(feature = "board")]
pub mod hw;

pub use config::Config;
pub use control::{Controller, State};
pub use shared::SharedState;
