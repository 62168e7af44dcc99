//! Per-agent character sheet.
//!
//! Speed and aggression are carried on every agent but do not feed the
//! movement gate yet; the jump-trigger chance is what the session rolls
//! against when an agent reaches the office.

use serde::{Deserialize, Serialize};

use crate::topology::{AgentKind, Location};

/// Static attributes of one agent kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub kind: AgentKind,
    pub spawn: Location,
    pub movement_speed: f32,
    pub aggression: f32,
    /// Probability in [0, 1] that an arrival at the office ends the night.
    pub jump_chance: f32,
}

/// Look up the profile for `kind`.
pub fn profile(kind: AgentKind) -> AgentProfile {
    let (movement_speed, aggression, jump_chance) = match kind {
        AgentKind::Freddy => (0.3, 0.4, 0.10),
        AgentKind::Bonnie => (0.5, 0.6, 0.15),
        AgentKind::Chica => (0.4, 0.5, 0.12),
        AgentKind::Foxy => (0.8, 0.7, 0.20),
        AgentKind::GoldenFreddy => (0.2, 0.9, 0.30),
    };
    AgentProfile {
        kind,
        spawn: kind.spawn(),
        movement_speed,
        aggression,
        jump_chance,
    }
}

/// Profiles for the whole roster, in scheduler order.
pub fn roster() -> Vec<AgentProfile> {
    AgentKind::ALL.iter().map(|k| profile(*k)).collect()
}
