//! Tuning configuration - every balance constant in one serde-loadable struct.
//!
//! `TuningConfig::default()` is the shipped balance. A tuning file only has
//! to name the values it changes; missing fields fall back to defaults.
//!
//! ```
//! use nightwatch_logic::config::{validate_config, TuningConfig};
//!
//! let config = TuningConfig::default();
//! assert!(validate_config(&config).is_empty());
//! assert!((config.watch.hysteresis_secs - 3.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::ClockConfig;
use crate::difficulty::DifficultyConfig;
use crate::power::PowerConfig;

/// Observation gate tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Seconds an agent stays frozen after it drops off the active feed.
    pub hysteresis_secs: f64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            hysteresis_secs: 3.0,
        }
    }
}

/// All tunables for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    pub difficulty: DifficultyConfig,
    pub watch: WatchConfig,
    pub power: PowerConfig,
    pub clock: ClockConfig,
}

/// Tuning validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("base movement chance {0} must be within [0, 1]")]
    InvalidBaseChance(f64),
    #[error("max movement chance {0} must be within [0, 1]")]
    InvalidMaxChance(f64),
    #[error("night scaling {0} must not be negative")]
    NegativeNightScaling(f64),
    #[error("cooldown range {min}..{max} is empty or negative")]
    InvalidCooldown { min: f64, max: f64 },
    #[error("watch hysteresis {0}s must not be negative")]
    NegativeHysteresis(f64),
    #[error("power capacity {0} must be positive")]
    InvalidCapacity(f32),
    #[error("power rate {name} = {value} must not be negative")]
    NegativePowerRate { name: &'static str, value: f32 },
    #[error("seconds per hour {0} must be positive")]
    InvalidHourLength(f64),
    #[error("a night must last at least one hour")]
    EmptyNight,
}

/// Validate a tuning configuration, returning all errors found.
pub fn validate_config(config: &TuningConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    let d = &config.difficulty;
    if !(0.0..=1.0).contains(&d.base_chance) {
        errors.push(ConfigError::InvalidBaseChance(d.base_chance));
    }
    if !(0.0..=1.0).contains(&d.max_chance) {
        errors.push(ConfigError::InvalidMaxChance(d.max_chance));
    }
    if d.night_scaling < 0.0 {
        errors.push(ConfigError::NegativeNightScaling(d.night_scaling));
    }
    for range in d.cooldowns.ranges() {
        if !range.is_valid() {
            errors.push(ConfigError::InvalidCooldown {
                min: range.min,
                max: range.max,
            });
        }
    }

    if config.watch.hysteresis_secs < 0.0 {
        errors.push(ConfigError::NegativeHysteresis(config.watch.hysteresis_secs));
    }

    let p = &config.power;
    if p.capacity <= 0.0 {
        errors.push(ConfigError::InvalidCapacity(p.capacity));
    }
    for (name, value) in [
        ("base_drain", p.base_drain),
        ("door_cost", p.door_cost),
        ("light_cost", p.light_cost),
        ("vent_cost", p.vent_cost),
        ("emergency_boost", p.emergency_boost),
        ("emergency_duration", p.emergency_duration),
    ] {
        if value < 0.0 {
            errors.push(ConfigError::NegativePowerRate { name, value });
        }
    }

    if config.clock.seconds_per_hour <= 0.0 {
        errors.push(ConfigError::InvalidHourLength(config.clock.seconds_per_hour));
    }
    if config.clock.hours_per_night == 0 {
        errors.push(ConfigError::EmptyNight);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::SecondsRange;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&TuningConfig::default()).is_empty());
    }

    #[test]
    fn bad_chances_reported() {
        let mut config = TuningConfig::default();
        config.difficulty.base_chance = 1.5;
        config.difficulty.max_chance = -0.1;
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::InvalidBaseChance(1.5)));
        assert!(errors.contains(&ConfigError::InvalidMaxChance(-0.1)));
    }

    #[test]
    fn empty_cooldown_reported() {
        let mut config = TuningConfig::default();
        config.difficulty.cooldowns.vent = SecondsRange::new(5.0, 5.0);
        let errors = validate_config(&config);
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidCooldown { .. })));
    }

    #[test]
    fn negative_power_rate_names_field() {
        let mut config = TuningConfig::default();
        config.power.light_cost = -1.0;
        let errors = validate_config(&config);
        assert_eq!(
            errors,
            vec![ConfigError::NegativePowerRate {
                name: "light_cost",
                value: -1.0
            }]
        );
        assert_eq!(
            errors[0].to_string(),
            "power rate light_cost = -1 must not be negative"
        );
    }

    #[test]
    fn zero_length_night_reported() {
        let mut config = TuningConfig::default();
        config.clock.hours_per_night = 0;
        assert_eq!(validate_config(&config), vec![ConfigError::EmptyNight]);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{ "difficulty": { "max_chance": 0.05 }, "watch": { "hysteresis_secs": 2.5 } }"#;
        let config: TuningConfig = serde_json::from_str(json).unwrap();
        assert!((config.difficulty.max_chance - 0.05).abs() < 1e-12);
        assert!((config.difficulty.base_chance - 0.02).abs() < 1e-12);
        assert!((config.watch.hysteresis_secs - 2.5).abs() < 1e-12);
        assert_eq!(config.power, PowerConfig::default());
    }
}
