//! In-game day/night clock.
//!
//! A day lasts `seconds_per_day` real seconds and always starts at 06:00.
//! Night (20:00 to 06:00) gates monster spawning; the near-night window
//! (18:00 to 20:00) additionally permits setting up camp.

use crate::config::GameConfig;

/// Broad phase of the in-game day, used to filter narrative prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

/// Session clock. Advanced by the session's `advance` call; never by wall
/// time, so paused hosts do not drift.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameClock {
    elapsed_secs: f64,
    seconds_per_hour: u32,
}

impl GameClock {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            elapsed_secs: 0.0,
            seconds_per_hour: config.seconds_per_hour(),
        }
    }

    pub fn advance(&mut self, dt_secs: f64) {
        self.elapsed_secs += dt_secs.max(0.0);
    }

    /// Current hour in 0..24. The day starts at 06:00.
    pub fn hour(&self) -> u32 {
        let hours_elapsed = self.elapsed_secs as u64 / self.seconds_per_hour as u64;
        ((6 + hours_elapsed) % 24) as u32
    }

    /// Jump the clock so that `hour()` reports the given hour. Debug aid for
    /// exercising night-gated content without waiting out the day.
    pub fn set_hour(&mut self, hour: u32) {
        let target = hour % 24;
        let offset = (target + 24 - 6) % 24;
        self.elapsed_secs = (offset * self.seconds_per_hour) as f64;
    }

    /// Night spans 20:00 up to (but excluding) 06:00.
    pub fn is_night(&self) -> bool {
        let h = self.hour();
        h >= 20 || h < 6
    }

    /// The camping window that precedes night: 18:00 up to 20:00.
    pub fn is_near_night(&self) -> bool {
        let h = self.hour();
        (18..20).contains(&h)
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        match self.hour() {
            0..12 => TimeOfDay::Morning,
            12..18 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    /// Opacity a renderer should apply to its darkness overlay.
    pub fn night_overlay_alpha(&self) -> f32 {
        if self.is_night() { 0.8 } else { 0.0 }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }
}
