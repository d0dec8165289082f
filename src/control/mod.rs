// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motion Control
//!
//! ## Modules
//!
//! - [`tick`] - 1 ms timebase: height estimate and countdown.
//! - [`arbiter`] - Button edges and serial command override.
//! - [`state`] - Control states and their motor outputs.
//! - [`controller`] - The polling state machine.

pub mod arbiter;
pub mod controller;
pub mod state;
pub mod tick;

pub use arbiter::{Arbiter, EdgeDetector, Inputs, Override};
pub use controller::Controller;
pub use state::State;
pub use tick::tick;
