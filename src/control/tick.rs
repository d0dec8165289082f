// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! 1 ms timebase.
//!
//! [`tick`] is the whole body of the periodic interrupt. It moves the height estimate one step in
//! the direction the motor was latched to when the interrupt fired and runs the countdown down to
//! zero. It never looks at the control state, so a transition made by the loop only shows up in
//! the height from the following tick on.

use crate::shared::SharedState;

/// Interrupt period in milliseconds.
pub const TICK_PERIOD_MS: u32 = 1;

/// One timebase period.
#[inline]
pub fn tick(shared: &SharedState) {
    shared.step_height(shared.drive());
    shared.count_down();
}

/// SysTick reload value giving a [`TICK_PERIOD_MS`] period from the core clock.
pub const fn reload_for(sysclk_hz: u32) -> u32 {
    sysclk_hz / 1_000 * TICK_PERIOD_MS - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::io::Drive;

    fn shared() -> SharedState {
        SharedState::new(Config::DEFAULT.with_max_height(10).with_init_timeout(20))
    }

    #[test]
    fn follows_the_latched_drive() {
        let s = shared();
        assert_eq!(s.height(), 10);

        s.latch_drive(Drive::Closing);
        tick(&s);
        tick(&s);
        assert_eq!(s.height(), 8);

        s.latch_drive(Drive::Off);
        tick(&s);
        assert_eq!(s.height(), 8);

        s.latch_drive(Drive::Opening);
        tick(&s);
        assert_eq!(s.height(), 9);
    }

    #[test]
    fn height_saturates_at_both_ends() {
        let s = shared();

        s.latch_drive(Drive::Opening);
        for _ in 0..5 {
            tick(&s);
        }
        assert_eq!(s.height(), 10);

        s.latch_drive(Drive::Closing);
        for _ in 0..50 {
            tick(&s);
        }
        assert_eq!(s.height(), 0);
        tick(&s);
        assert_eq!(s.height(), 0);
    }

    #[test]
    fn countdown_stops_at_zero() {
        let s = shared();
        for _ in 0..19 {
            tick(&s);
        }
        assert_eq!(s.countdown(), 1);
        tick(&s);
        assert_eq!(s.countdown(), 0);
        tick(&s);
        assert_eq!(s.countdown(), 0);

        s.reset_countdown(3);
        tick(&s);
        assert_eq!(s.countdown(), 2);
    }

    #[test]
    fn reload_for_one_millisecond() {
        assert_eq!(reload_for(216_000_000), 215_999);
        assert_eq!(reload_for(16_000_000), 15_999);
    }
}
