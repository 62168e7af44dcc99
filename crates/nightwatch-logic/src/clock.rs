//! Night clock - 12 AM to 6 AM driven by elapsed seconds.

use serde::{Deserialize, Serialize};

/// Clock tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Real seconds per in-game hour.
    pub seconds_per_hour: f64,
    /// In-game hours between midnight and dawn.
    pub hours_per_night: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            seconds_per_hour: 90.0,
            hours_per_night: 6,
        }
    }
}

impl ClockConfig {
    pub fn seconds_per_minute(&self) -> f64 {
        self.seconds_per_hour / 60.0
    }

    pub fn night_length(&self) -> f64 {
        self.seconds_per_hour * self.hours_per_night as f64
    }
}

/// Elapsed time within the current night.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NightClock {
    pub elapsed: f64,
}

impl NightClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds. Returns `true` on the step that reaches dawn.
    pub fn advance(&mut self, config: &ClockConfig, dt: f64) -> bool {
        let was_dawn = self.is_dawn(config);
        self.elapsed += dt.max(0.0);
        !was_dawn && self.is_dawn(config)
    }

    pub fn is_dawn(&self, config: &ClockConfig) -> bool {
        self.elapsed >= config.night_length()
    }

    /// Whole in-game hours since midnight, capped at dawn.
    pub fn hours_elapsed(&self, config: &ClockConfig) -> u32 {
        ((self.elapsed / config.seconds_per_hour) as u32).min(config.hours_per_night)
    }

    /// Minute within the current hour.
    pub fn minute(&self, config: &ClockConfig) -> u32 {
        if self.is_dawn(config) {
            return 0;
        }
        ((self.elapsed % config.seconds_per_hour) / config.seconds_per_minute()) as u32
    }

    /// Hour as shown on the office clock: 12, 1, 2, ... 6.
    pub fn hour_label(&self, config: &ClockConfig) -> u32 {
        match self.hours_elapsed(config) {
            0 => 12,
            h => h,
        }
    }

    /// In-game minutes survived so far.
    pub fn survived_minutes(&self, config: &ClockConfig) -> u32 {
        let cap = config.hours_per_night * 60;
        ((self.elapsed / config.seconds_per_minute()) as u32).min(cap)
    }

    /// `HH:MM` string for the office display.
    pub fn display(&self, config: &ClockConfig) -> String {
        format!("{:02}:{:02} AM", self.hour_label(config), self.minute(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_midnight() {
        let config = ClockConfig::default();
        let clock = NightClock::new();
        assert_eq!(clock.hour_label(&config), 12);
        assert_eq!(clock.minute(&config), 0);
        assert_eq!(clock.display(&config), "12:00 AM");
    }

    #[test]
    fn minute_every_second_and_a_half() {
        let config = ClockConfig::default();
        let mut clock = NightClock::new();
        clock.advance(&config, 1.5 * 7.0 + 0.25);
        assert_eq!(clock.minute(&config), 7);
        assert_eq!(clock.survived_minutes(&config), 7);
    }

    #[test]
    fn hour_rolls_over() {
        let config = ClockConfig::default();
        let mut clock = NightClock::new();
        clock.advance(&config, 90.0 * 2.0 + 3.0);
        assert_eq!(clock.hour_label(&config), 2);
        assert_eq!(clock.minute(&config), 2);
    }

    #[test]
    fn dawn_fires_once() {
        let config = ClockConfig::default();
        let mut clock = NightClock::new();
        assert!(!clock.advance(&config, config.night_length() - 1.0));
        assert!(clock.advance(&config, 2.0));
        assert!(!clock.advance(&config, 100.0));
        assert_eq!(clock.hour_label(&config), 6);
        assert_eq!(clock.survived_minutes(&config), 360);
    }

    #[test]
    fn default_night_is_nine_minutes() {
        assert_eq!(ClockConfig::default().night_length(), 540.0);
    }

    #[test]
    fn negative_dt_ignored() {
        let config = ClockConfig::default();
        let mut clock = NightClock::new();
        clock.advance(&config, 10.0);
        clock.advance(&config, -5.0);
        assert_eq!(clock.elapsed, 10.0);
    }
}
