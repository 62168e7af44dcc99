//! Per-night difficulty: movement probability, agent activation, cooldowns.
//!
//! The movement chance grows linearly with the night number and is capped,
//! so early nights stay slow and late nights never become a coin flip.
//!
//! | Night | Chance per tick |
//! |-------|-----------------|
//! | 1 | 0.020 |
//! | 2 | 0.026 |
//! | 3 | 0.032 |
//! | 4 | 0.038 |
//! | 5 | 0.044 |
//! | 11+ | 0.080 (cap) |
//!
//! ```
//! use nightwatch_logic::difficulty::{is_kind_active_on, movement_chance};
//! use nightwatch_logic::topology::AgentKind;
//!
//! assert!((movement_chance(1) - 0.02).abs() < 1e-12);
//! assert!(movement_chance(50) <= 0.08);
//! assert!(!is_kind_active_on(AgentKind::GoldenFreddy, 2));
//! assert!(is_kind_active_on(AgentKind::GoldenFreddy, 3));
//! ```

use serde::{Deserialize, Serialize};

use crate::topology::{AgentKind, Location, LocationClass};

/// Last night of a full week. The session does not offer a night after it.
pub const FINAL_NIGHT: u32 = 5;

/// Inclusive-exclusive range of seconds for a uniform cooldown draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondsRange {
    pub min: f64,
    pub max: f64,
}

impl SecondsRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min >= 0.0 && self.max > self.min
    }
}

/// Cooldown ranges by location class. Agents linger near spawn and hurry
/// once they are close to the office.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CooldownTable {
    pub spawn: SecondsRange,
    pub intermediate: SecondsRange,
    pub approach: SecondsRange,
    pub vent: SecondsRange,
    /// Anything not covered above (in practice only the office).
    pub fallback: SecondsRange,
}

impl Default for CooldownTable {
    fn default() -> Self {
        Self {
            spawn: SecondsRange::new(15.0, 25.0),
            intermediate: SecondsRange::new(12.0, 20.0),
            approach: SecondsRange::new(8.0, 15.0),
            vent: SecondsRange::new(5.0, 10.0),
            fallback: SecondsRange::new(10.0, 18.0),
        }
    }
}

impl CooldownTable {
    pub fn range_for(&self, location: Location) -> SecondsRange {
        match location.class() {
            LocationClass::Spawn => self.spawn,
            LocationClass::Intermediate => self.intermediate,
            LocationClass::Approach => self.approach,
            LocationClass::Vent => self.vent,
            LocationClass::Terminal => self.fallback,
        }
    }

    pub fn ranges(&self) -> [SecondsRange; 5] {
        [self.spawn, self.intermediate, self.approach, self.vent, self.fallback]
    }
}

/// Difficulty curve parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// Chance per tick on night 1.
    pub base_chance: f64,
    /// Fractional increase per night after the first.
    pub night_scaling: f64,
    /// Hard ceiling on the chance per tick.
    pub max_chance: f64,
    /// Agent that sleeps through the early nights.
    pub late_agent: AgentKind,
    /// First night on which `late_agent` is active.
    pub late_agent_night: u32,
    pub cooldowns: CooldownTable,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            base_chance: 0.02,
            night_scaling: 0.3,
            max_chance: 0.08,
            late_agent: AgentKind::GoldenFreddy,
            late_agent_night: 3,
            cooldowns: CooldownTable::default(),
        }
    }
}

impl DifficultyConfig {
    /// Multiplier applied to `base_chance` on `night`.
    pub fn night_multiplier(&self, night: u32) -> f64 {
        1.0 + (night as f64 - 1.0) * self.night_scaling
    }

    /// Probability that an idle, unobserved agent tries to move this tick.
    pub fn movement_chance(&self, night: u32) -> f64 {
        (self.base_chance * self.night_multiplier(night)).clamp(0.0, self.max_chance)
    }

    pub fn is_kind_active_on(&self, kind: AgentKind, night: u32) -> bool {
        kind != self.late_agent || night >= self.late_agent_night
    }
}

/// Movement chance on `night` with the stock curve.
pub fn movement_chance(night: u32) -> f64 {
    DifficultyConfig::default().movement_chance(night)
}

/// Whether `kind` is awake at the start of `night` with the stock curve.
pub fn is_kind_active_on(kind: AgentKind, night: u32) -> bool {
    DifficultyConfig::default().is_kind_active_on(kind, night)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chance_is_monotonic_and_capped() {
        let mut prev = 0.0;
        for night in 0..100 {
            let c = movement_chance(night);
            assert!(c >= prev, "night {night}: {c} < {prev}");
            assert!(c <= 0.08);
            prev = c;
        }
    }

    #[test]
    fn night_five_is_2_2_times_night_one() {
        let ratio = movement_chance(5) / movement_chance(1);
        assert!((ratio - 2.2).abs() < 1e-9);
    }

    #[test]
    fn cap_reached_eventually() {
        assert!((movement_chance(11) - 0.08).abs() < 1e-12);
        assert!((movement_chance(40) - 0.08).abs() < 1e-12);
    }

    #[test]
    fn steep_scaling_still_capped() {
        let config = DifficultyConfig {
            night_scaling: 10.0,
            ..Default::default()
        };
        assert!((config.movement_chance(2) - config.max_chance).abs() < 1e-12);
    }

    #[test]
    fn only_late_agent_is_dormant() {
        for kind in AgentKind::ALL {
            let expected = kind != AgentKind::GoldenFreddy;
            assert_eq!(is_kind_active_on(kind, 1), expected);
            assert_eq!(is_kind_active_on(kind, 2), expected);
            assert!(is_kind_active_on(kind, 3));
            assert!(is_kind_active_on(kind, FINAL_NIGHT));
        }
    }

    #[test]
    fn cooldowns_shrink_toward_office() {
        let t = CooldownTable::default();
        assert!(t.spawn.min > t.intermediate.min);
        assert!(t.intermediate.min > t.approach.min);
        assert!(t.approach.min > t.vent.min);
        assert_eq!(t.range_for(Location::LeftVent), t.vent);
        assert_eq!(t.range_for(Location::Office), t.fallback);
        assert!(t.ranges().iter().all(SecondsRange::is_valid));
    }
}
