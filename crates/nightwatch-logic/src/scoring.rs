//! Survival score and running session statistics.

use serde::{Deserialize, Serialize};

/// Bonus awarded at dawn.
///
/// Remaining power counts ten points per unit, each night is worth a
/// hundred, and any in-game hours left before 6 AM add a hundred each
/// (always zero when the night is actually survived to dawn).
pub fn survival_bonus(power_level: f32, hours_elapsed: u32, hours_per_night: u32, night: u32) -> u32 {
    let power_bonus = (power_level.max(0.0) * 10.0) as u32;
    let time_bonus = hours_per_night.saturating_sub(hours_elapsed) * 100;
    power_bonus + time_bonus + night * 100
}

/// Totals across all nights of a session. Kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub nights_survived: u32,
    pub total_jumpscares: u32,
    pub total_score: u32,
    /// Longest stretch survived in a single night, in in-game minutes.
    pub best_survival_minutes: u32,
}

impl SessionStats {
    pub fn record_survival(&mut self, bonus: u32, minutes: u32) {
        self.nights_survived += 1;
        self.total_score += bonus;
        self.best_survival_minutes = self.best_survival_minutes.max(minutes);
    }

    pub fn record_jumpscare(&mut self, minutes: u32) {
        self.total_jumpscares += 1;
        self.best_survival_minutes = self.best_survival_minutes.max(minutes);
    }

    pub fn record_power_out(&mut self, minutes: u32) {
        self.best_survival_minutes = self.best_survival_minutes.max(minutes);
    }
}
