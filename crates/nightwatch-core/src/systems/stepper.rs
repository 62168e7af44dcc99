//! Path stepper - moves one agent one step along its fixed path
//!
//! A step into the office can be refused by a closed door. A refused agent
//! does not wait at the door: it falls back one location and draws a fresh
//! cooldown there.

use nightwatch_logic::difficulty::CooldownTable;
use nightwatch_logic::topology::{self, AgentKind, Location};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{Agent, Telemetry};

/// An agent has stepped into the office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arrival {
    pub kind: AgentKind,
}

/// Draw a movement cooldown for an agent that has just entered `location`.
pub fn movement_cooldown<R: Rng + ?Sized>(
    location: Location,
    cooldowns: &CooldownTable,
    rng: &mut R,
) -> f64 {
    let range = cooldowns.range_for(location);
    if !range.is_valid() {
        return range.min.max(0.0);
    }
    rng.gen_range(range.min..range.max)
}

/// Advance `agent` one step, honouring the door-block table.
///
/// Returns an [`Arrival`] only when the step lands on the office.
pub fn step<R: Rng + ?Sized>(
    agent: &mut Agent,
    left_door_closed: bool,
    right_door_closed: bool,
    cooldowns: &CooldownTable,
    rng: &mut R,
    telemetry: &mut Telemetry,
) -> Option<Arrival> {
    let path = agent.path();

    let Some(current_index) = agent.path_index() else {
        log::warn!(
            "{} found off its path at {}, resetting to {}",
            agent.name(),
            agent.location.name(),
            path[0].name()
        );
        agent.location = path[0];
        telemetry.repairs.off_path_resets += 1;
        return None;
    };

    // Already at the end of the path. The scheduler evicts office
    // occupants before stepping, so this is unreachable in play.
    if current_index + 1 >= path.len() {
        return None;
    }

    let next = path[current_index + 1];
    if topology::is_blocked(agent.kind, next, left_door_closed, right_door_closed) {
        return retreat(agent, current_index, cooldowns, rng, telemetry);
    }

    agent.location = next;
    agent.move_cooldown = movement_cooldown(next, cooldowns, rng);
    telemetry.advances += 1;
    log::debug!(
        "{} moved to {} (danger {})",
        agent.name(),
        next.name(),
        current_index + 1
    );

    if next.is_terminal() {
        telemetry.arrivals += 1;
        return Some(Arrival { kind: agent.kind });
    }
    None
}

/// Fall back one step after being refused at the door.
fn retreat<R: Rng + ?Sized>(
    agent: &mut Agent,
    current_index: usize,
    cooldowns: &CooldownTable,
    rng: &mut R,
    telemetry: &mut Telemetry,
) -> Option<Arrival> {
    let path = agent.path();
    agent.location = path[current_index.saturating_sub(1)];
    agent.move_cooldown = movement_cooldown(agent.location, cooldowns, rng);
    telemetry.retreats += 1;
    log::debug!(
        "{} blocked at the door, fell back to {}",
        agent.name(),
        agent.location.name()
    );
    None
}
