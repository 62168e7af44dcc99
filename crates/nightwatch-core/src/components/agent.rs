//! Agent state - one per roster entry, owned by the engine.

use nightwatch_logic::roster::{self, AgentProfile};
use nightwatch_logic::topology::{self, AgentKind, Location};
use serde::{Deserialize, Serialize};

/// Mutable state of a single agent.
///
/// Timestamps are seconds since the start of the current night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub kind: AgentKind,
    pub location: Location,
    /// Carried for future scaling; the movement gate does not read it.
    pub movement_speed: f32,
    /// Carried for future scaling; the movement gate does not read it.
    pub aggression: f32,
    /// Chance in [0, 1] that reaching the office ends the night.
    pub jump_chance: f32,
    pub active: bool,
    pub last_move_time: f64,
    pub move_cooldown: f64,
    /// While set the agent is frozen in place.
    pub is_observed: bool,
    /// Last time a feed had this agent in view.
    pub observed_at: f64,
    /// Where the player last saw it. Diagnostic only.
    pub last_seen: Location,
}

impl Agent {
    pub fn new(profile: &AgentProfile) -> Self {
        Self {
            kind: profile.kind,
            location: profile.spawn,
            movement_speed: profile.movement_speed,
            aggression: profile.aggression,
            jump_chance: profile.jump_chance,
            active: true,
            last_move_time: 0.0,
            move_cooldown: 0.0,
            is_observed: false,
            observed_at: 0.0,
            last_seen: profile.spawn,
        }
    }

    pub fn from_kind(kind: AgentKind) -> Self {
        Self::new(&roster::profile(kind))
    }

    /// Put the agent back on its spawn with a clean slate for a new night.
    pub fn reset_for_night(&mut self, active: bool) {
        let spawn = self.kind.spawn();
        self.location = spawn;
        self.active = active;
        self.last_move_time = 0.0;
        self.move_cooldown = 0.0;
        self.is_observed = false;
        self.observed_at = 0.0;
        self.last_seen = spawn;
    }

    pub fn path(&self) -> &'static [Location] {
        self.kind.path()
    }

    /// Index on the agent's own path, `None` if it has wandered off it.
    pub fn path_index(&self) -> Option<usize> {
        topology::path_index(self.kind, self.location)
    }

    pub fn danger_level(&self) -> usize {
        topology::danger_level(self.kind, self.location)
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_spawn() {
        for kind in AgentKind::ALL {
            let agent = Agent::from_kind(kind);
            assert_eq!(agent.location, kind.spawn());
            assert_eq!(agent.danger_level(), 0);
            assert!(!agent.is_observed);
        }
    }

    #[test]
    fn reset_clears_progress() {
        let mut agent = Agent::from_kind(AgentKind::Bonnie);
        agent.location = Location::RightHallway;
        agent.is_observed = true;
        agent.observed_at = 40.0;
        agent.last_move_time = 35.0;
        agent.move_cooldown = 12.0;

        agent.reset_for_night(false);

        assert_eq!(agent.location, Location::Stage);
        assert_eq!(agent.last_seen, Location::Stage);
        assert!(!agent.active);
        assert!(!agent.is_observed);
        assert_eq!(agent.last_move_time, 0.0);
        assert_eq!(agent.move_cooldown, 0.0);
    }

    #[test]
    fn off_path_has_no_index() {
        let mut agent = Agent::from_kind(AgentKind::Foxy);
        agent.location = Location::Kitchen;
        assert_eq!(agent.path_index(), None);
        assert_eq!(agent.danger_level(), 0);
    }
}
