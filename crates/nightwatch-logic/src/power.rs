//! Office power budget.
//!
//! Power drains continuously; every closed door, lit light and the vent
//! system add to the drain. Emergency power tops the reserve up once per
//! night and suspends drain for a while. All rates are per second of
//! elapsed time, so the result does not depend on frame rate.
//!
//! ```
//! use nightwatch_logic::power::{Loads, PowerConfig, PowerState};
//!
//! let config = PowerConfig::default();
//! let mut power = PowerState::new(&config);
//! let loads = Loads { doors_closed: 2, ..Default::default() };
//! power.update(&config, &loads, 10.0);
//! // 0.3 base + 2 × 1.5 per door = 3.3/s
//! assert!((power.level - (200.0 - 33.0)).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

/// Power tuning, all rates in units per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerConfig {
    pub capacity: f32,
    pub base_drain: f32,
    pub door_cost: f32,
    pub light_cost: f32,
    pub vent_cost: f32,
    /// Reserve added by emergency power (capped at capacity).
    pub emergency_boost: f32,
    /// Seconds of drain-free operation emergency power buys.
    pub emergency_duration: f32,
    /// Level below which the office warns the player.
    pub warning_threshold: f32,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            capacity: 200.0,
            base_drain: 0.3,
            door_cost: 1.5,
            light_cost: 0.8,
            vent_cost: 0.3,
            emergency_boost: 20.0,
            emergency_duration: 30.0,
            warning_threshold: 40.0,
        }
    }
}

/// What is currently drawing power in the office.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loads {
    pub doors_closed: u8,
    pub lights_on: u8,
    pub vent_active: bool,
}

/// Drain per second for the given loads.
pub fn drain_rate(config: &PowerConfig, loads: &Loads) -> f32 {
    let mut rate = config.base_drain;
    rate += loads.doors_closed as f32 * config.door_cost;
    rate += loads.lights_on as f32 * config.light_cost;
    if loads.vent_active {
        rate += config.vent_cost;
    }
    rate
}

/// Seconds until the reserve runs dry at a constant load.
pub fn seconds_remaining(level: f32, config: &PowerConfig, loads: &Loads) -> f32 {
    let rate = drain_rate(config, loads);
    if rate <= 0.0 {
        f32::INFINITY
    } else {
        level.max(0.0) / rate
    }
}

/// Result of advancing the power model by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerStatus {
    Normal,
    /// Below the warning threshold but still running.
    Low,
    /// Running on the emergency reserve, no drain.
    Emergency,
    /// Reserve exhausted.
    Out,
}

/// Mutable power reserve for one night.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerState {
    pub level: f32,
    /// Whether emergency power is currently running.
    pub emergency_active: bool,
    /// Emergency seconds left; 0 once used up.
    pub emergency_remaining: f32,
}

impl PowerState {
    pub fn new(config: &PowerConfig) -> Self {
        Self {
            level: config.capacity,
            emergency_active: false,
            emergency_remaining: config.emergency_duration,
        }
    }

    /// Start emergency power if it has not been used up.
    ///
    /// Returns `false` when it is already running or spent.
    pub fn activate_emergency(&mut self, config: &PowerConfig) -> bool {
        if self.emergency_active || self.emergency_remaining <= 0.0 {
            return false;
        }
        self.emergency_active = true;
        self.level = (self.level + config.emergency_boost).min(config.capacity);
        true
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, config: &PowerConfig, loads: &Loads, dt: f32) -> PowerStatus {
        if self.emergency_active {
            self.emergency_remaining -= dt;
            if self.emergency_remaining <= 0.0 {
                self.emergency_active = false;
                self.emergency_remaining = 0.0;
            }
            return PowerStatus::Emergency;
        }

        self.level -= drain_rate(config, loads) * dt;
        if self.level <= 0.0 {
            self.level = 0.0;
            return PowerStatus::Out;
        }
        if self.level <= config.warning_threshold {
            PowerStatus::Low
        } else {
            PowerStatus::Normal
        }
    }

    pub fn fraction(&self, config: &PowerConfig) -> f32 {
        (self.level / config.capacity).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_drain_is_base_rate() {
        let config = PowerConfig::default();
        assert!((drain_rate(&config, &Loads::default()) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn full_load_drain() {
        let config = PowerConfig::default();
        let loads = Loads {
            doors_closed: 2,
            lights_on: 2,
            vent_active: true,
        };
        // 0.3 + 3.0 + 1.6 + 0.3
        assert!((drain_rate(&config, &loads) - 5.2).abs() < 1e-5);
    }

    #[test]
    fn frame_rate_independent() {
        let config = PowerConfig::default();
        let loads = Loads {
            doors_closed: 1,
            ..Default::default()
        };
        let mut coarse = PowerState::new(&config);
        coarse.update(&config, &loads, 1.0);
        let mut fine = PowerState::new(&config);
        for _ in 0..60 {
            fine.update(&config, &loads, 1.0 / 60.0);
        }
        assert!((coarse.level - fine.level).abs() < 1e-3);
    }

    #[test]
    fn runs_out() {
        let config = PowerConfig::default();
        let mut power = PowerState::new(&config);
        power.level = 1.0;
        assert_eq!(
            power.update(&config, &Loads::default(), 10.0),
            PowerStatus::Out
        );
        assert_eq!(power.level, 0.0);
    }

    #[test]
    fn warning_below_threshold() {
        let config = PowerConfig::default();
        let mut power = PowerState::new(&config);
        power.level = 40.5;
        assert_eq!(
            power.update(&config, &Loads::default(), 2.0),
            PowerStatus::Low
        );
    }

    #[test]
    fn emergency_boosts_and_pauses_drain_once() {
        let config = PowerConfig::default();
        let mut power = PowerState::new(&config);
        power.level = 50.0;
        assert!(power.activate_emergency(&config));
        assert!((power.level - 70.0).abs() < 1e-6);
        assert!(!power.activate_emergency(&config));

        let loads = Loads {
            doors_closed: 2,
            ..Default::default()
        };
        assert_eq!(power.update(&config, &loads, 29.0), PowerStatus::Emergency);
        assert!((power.level - 70.0).abs() < 1e-6);
        power.update(&config, &loads, 2.0);
        assert!(!power.emergency_active);
        assert!(!power.activate_emergency(&config));

        power.update(&config, &loads, 1.0);
        assert!(power.level < 70.0);
    }

    #[test]
    fn emergency_caps_at_capacity() {
        let config = PowerConfig::default();
        let mut power = PowerState::new(&config);
        power.activate_emergency(&config);
        assert_eq!(power.level, config.capacity);
    }

    #[test]
    fn seconds_remaining_at_idle() {
        let config = PowerConfig::default();
        let secs = seconds_remaining(30.0, &config, &Loads::default());
        assert!((secs - 100.0).abs() < 1e-3);
    }
}
