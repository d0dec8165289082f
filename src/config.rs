// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Travel and timing configuration.
//!
//! All durations are expressed in ticks of the 1 ms timebase, so a height is simply the number of
//! milliseconds the motor has spent driving upwards from the fully closed position.

/// Time for a full open run from the closed seat (stopwatch measurement).
pub const MAX_HEIGHT: u16 = 13_200;

/// Time the shutter drives before the slats separate from the seat.
pub const DEAD_BAND: u16 = 2_500;

/// Press duration separating a quick click from a held press.
pub const CLICK_WINDOW: u16 = 500;

/// Startup run. Longer than a full travel so the shutter always reaches its end stop.
pub const INIT_TIMEOUT: u16 = 14_000;

/// Invalid combinations rejected by [`Config::check`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The dead-band does not leave any usable travel.
    DeadBandBeyondTravel,
    /// A zero click window would classify every press as held.
    EmptyClickWindow,
    /// The startup run would not cover a full travel.
    InitTimeoutTooShort,
}

/// Shutter geometry and timing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Full travel in ticks.
    pub max_height: u16,
    /// Travel before the slats start separating.
    pub dead_band: u16,
    /// Quick-click classification window.
    pub click_window: u16,
    /// Duration of the initial end-stop run.
    pub init_timeout: u16,
}

impl Config {
    pub const DEFAULT: Config = Config {
        max_height: MAX_HEIGHT,
        dead_band: DEAD_BAND,
        click_window: CLICK_WINDOW,
        init_timeout: INIT_TIMEOUT,
    };

    pub const fn with_max_height(mut self, ticks: u16) -> Self {
        self.max_height = ticks;
        self
    }

    pub const fn with_dead_band(mut self, ticks: u16) -> Self {
        self.dead_band = ticks;
        self
    }

    pub const fn with_click_window(mut self, ticks: u16) -> Self {
        self.click_window = ticks;
        self
    }

    pub const fn with_init_timeout(mut self, ticks: u16) -> Self {
        self.init_timeout = ticks;
        self
    }

    /// Validate the configuration. Usable in a `const` item so the firmware refuses to build with
    /// a bad table.
    pub const fn check(self) -> Result<Self, ConfigError> {
        if self.dead_band >= self.max_height {
            return Err(ConfigError::DeadBandBeyondTravel);
        }
        if self.click_window == 0 {
            return Err(ConfigError::EmptyClickWindow);
        }
        if self.init_timeout <= self.max_height {
            return Err(ConfigError::InitTimeoutTooShort);
        }
        Ok(self)
    }

    /// Usable travel above the dead-band, split into tenths. Zero when the dead-band swallows the
    /// whole travel.
    #[inline]
    pub const fn tenth(&self) -> u16 {
        self.max_height.saturating_sub(self.dead_band) / 10
    }

    /// Reference height for a `'1'..='9'` command: 10 % to 90 % of the usable travel.
    ///
    /// `digit` is the numeric value (1–9), not the ASCII byte. Never above `max_height`.
    pub const fn decile_height(&self, digit: u8) -> u16 {
        self.clamp(self.dead_band.saturating_add(self.tenth() * digit as u16))
    }

    /// Reference height for the gap command: slats apart, shutter still seated.
    #[inline]
    pub const fn gap_height(&self) -> u16 {
        self.clamp(self.dead_band)
    }

    /// Limit a reference to the reachable travel.
    const fn clamp(&self, height: u16) -> u16 {
        if height > self.max_height {
            self.max_height
        } else {
            height
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert_eq!(Config::DEFAULT.check(), Ok(Config::DEFAULT));
    }

    #[test]
    fn decile_heights_skip_the_dead_band() {
        let cfg = Config::DEFAULT;
        assert_eq!(cfg.tenth(), 1_070);
        assert_eq!(cfg.decile_height(1), 3_570);
        assert_eq!(cfg.decile_height(5), 7_850);
        assert_eq!(cfg.decile_height(9), 12_130);
        assert_eq!(cfg.gap_height(), 2_500);
    }

    #[test]
    fn rejects_dead_band_past_travel() {
        let cfg = Config::DEFAULT.with_dead_band(13_200);
        assert_eq!(cfg.check(), Err(ConfigError::DeadBandBeyondTravel));
    }

    #[test]
    fn rejects_empty_click_window() {
        let cfg = Config::DEFAULT.with_click_window(0);
        assert_eq!(cfg.check(), Err(ConfigError::EmptyClickWindow));
    }

    #[test]
    fn init_run_must_overrun_full_travel() {
        let cfg = Config::DEFAULT.with_init_timeout(MAX_HEIGHT);
        assert_eq!(cfg.check(), Err(ConfigError::InitTimeoutTooShort));

        let cfg = Config::DEFAULT
            .with_max_height(1_000)
            .with_dead_band(200)
            .with_init_timeout(1_200);
        assert_eq!(cfg.check(), Ok(cfg));
    }

    #[test]
    fn references_never_exceed_travel() {
        let cfg = Config::DEFAULT.with_dead_band(14_000);
        assert!(cfg.check().is_err());
        assert_eq!(cfg.tenth(), 0);
        assert_eq!(cfg.decile_height(5), MAX_HEIGHT);
        assert_eq!(cfg.gap_height(), MAX_HEIGHT);
    }
}
