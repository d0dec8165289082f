// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! State shared between the interrupt handlers and the polling loop.
//!
//! Every field is a single-word atomic, so no critical section is needed on the Cortex-M7. Write
//! ownership is split by method visibility:
//!
//! | Field | Written by | Read by |
//! | ----- | ---------- | ------- |
//! | height | tick (`step_height`) | controller |
//! | countdown | tick (`count_down`), controller (`reset_countdown`) | controller |
//! | pending byte | serial ISR (`post_byte`), controller (`take_byte`) | controller |
//! | drive latch | controller (`latch_drive`) | tick |

use core::sync::atomic::{AtomicU16, AtomicU8, Ordering};

use crate::config::Config;
use crate::io::Drive;

/// "No pending byte". NUL is never a command.
pub const NO_DATA: u8 = 0;

pub struct SharedState {
    config: Config,
    height: AtomicU16,
    countdown: AtomicU16,
    pending: AtomicU8,
    drive: AtomicU8,
}

impl SharedState {
    /// Power-on state: height assumed at the top, countdown armed with the startup run.
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            height: AtomicU16::new(config.max_height),
            countdown: AtomicU16::new(config.init_timeout),
            pending: AtomicU8::new(NO_DATA),
            drive: AtomicU8::new(Drive::Off as u8),
        }
    }

    /// Travel and timing table, shared by the tick and the controller.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn countdown(&self) -> u16 {
        self.countdown.load(Ordering::Relaxed)
    }

    /// Arm the countdown with a fresh duration.
    #[inline]
    pub fn reset_countdown(&self, ticks: u16) {
        self.countdown.store(ticks, Ordering::Relaxed);
    }

    /// Record a received byte. A later byte overwrites one that was not consumed yet.
    #[inline]
    pub fn post_byte(&self, byte: u8) {
        self.pending.store(byte, Ordering::Release);
    }

    /// Read and clear the pending byte in one step.
    #[inline]
    pub fn take_byte(&self) -> Option<u8> {
        match self.pending.swap(NO_DATA, Ordering::Acquire) {
            NO_DATA => None,
            byte => Some(byte),
        }
    }

    #[inline]
    pub fn latch_drive(&self, drive: Drive) {
        self.drive.store(drive as u8, Ordering::Relaxed);
    }

    #[inline]
    pub fn drive(&self) -> Drive {
        Drive::from_bits(self.drive.load(Ordering::Relaxed))
    }

    /// Move the height one step in the latched direction, saturating at both ends.
    pub(crate) fn step_height(&self, drive: Drive) {
        let max = self.config.max_height;
        let _ = self
            .height
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |h| match drive {
                Drive::Closing if h > 0 => Some(h - 1),
                Drive::Opening if h < max => Some(h + 1),
                _ => None,
            });
    }

    /// Decrement the countdown, stopping at zero.
    pub(crate) fn count_down(&self) {
        let _ = self
            .countdown
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| c.checked_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_byte_clears_the_slot() {
        let shared = SharedState::new(Config::DEFAULT);
        assert_eq!(shared.take_byte(), None);

        shared.post_byte(b'u');
        assert_eq!(shared.take_byte(), Some(b'u'));
        assert_eq!(shared.take_byte(), None);
    }

    #[test]
    fn nul_is_not_a_byte() {
        let shared = SharedState::new(Config::DEFAULT);
        shared.post_byte(0);
        assert_eq!(shared.take_byte(), None);
    }

    #[test]
    fn latest_byte_wins() {
        let shared = SharedState::new(Config::DEFAULT);
        shared.post_byte(b'3');
        shared.post_byte(b'g');
        assert_eq!(shared.take_byte(), Some(b'g'));
    }

    #[test]
    fn drive_latch_round_trips() {
        let shared = SharedState::new(Config::DEFAULT);
        assert_eq!(shared.drive(), Drive::Off);
        shared.latch_drive(Drive::Closing);
        assert_eq!(shared.drive(), Drive::Closing);
    }
}
