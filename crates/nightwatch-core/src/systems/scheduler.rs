//! Movement scheduler - decides each tick which agents try to move
//!
//! Agents are processed in roster order. The first arrival ends the tick:
//! agents later in the roster are not observed, rolled or moved until the
//! next tick.

use nightwatch_logic::config::TuningConfig;
use rand::Rng;

use super::observation::{can_move, observe};
use super::stepper::{movement_cooldown, step, Arrival};
use crate::components::{Agent, SessionState, Telemetry};

/// Run one scheduler tick over `agents` at elapsed time `now`.
pub fn tick<R: Rng + ?Sized>(
    agents: &mut [Agent],
    now: f64,
    session: &SessionState,
    config: &TuningConfig,
    rng: &mut R,
    telemetry: &mut Telemetry,
) -> Option<Arrival> {
    telemetry.ticks += 1;
    let chance = config.difficulty.movement_chance(session.night);

    for agent in agents.iter_mut() {
        if !agent.active {
            continue;
        }

        // Arrivals are resolved by the session before the next tick, so an
        // agent still in the office here was left behind.
        if agent.location.is_terminal() {
            evict_from_office(agent, now, config, rng, telemetry);
            continue;
        }

        observe(agent, session.view, now, config.watch.hysteresis_secs);

        if can_move(agent, now) && roll_movement(rng, chance) {
            telemetry.attempts += 1;
            let before = agent.location;
            let arrival = step(
                agent,
                session.left_door_closed,
                session.right_door_closed,
                &config.difficulty.cooldowns,
                rng,
                telemetry,
            );
            if agent.location != before {
                agent.last_move_time = now;
            }
            if arrival.is_some() {
                return arrival;
            }
        }
    }

    None
}

/// Send an agent stranded in the office back to its spawn.
fn evict_from_office<R: Rng + ?Sized>(
    agent: &mut Agent,
    now: f64,
    config: &TuningConfig,
    rng: &mut R,
    telemetry: &mut Telemetry,
) {
    log::warn!("{} was left in the office, sending it back to spawn", agent.name());
    agent.location = agent.kind.spawn();
    agent.last_move_time = now;
    agent.move_cooldown = movement_cooldown(agent.location, &config.difficulty.cooldowns, rng);
    telemetry.repairs.office_evictions += 1;
}

/// Whether a single roll at `chance` comes up as a movement attempt.
pub fn roll_movement<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> bool {
    rng.gen::<f64>() < chance
}
