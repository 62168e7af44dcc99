//! Observation gate - freezes agents that are on the active feed
//!
//! Dropping an agent off the feed does not release it at once: it stays
//! frozen until the hysteresis window has passed since it was last seen,
//! so flicking between feeds cannot be used to stutter-step it.

use nightwatch_logic::observation::is_observed;
use nightwatch_logic::topology::View;

use crate::components::Agent;

/// Record whether the agent is on the active feed at `now`.
///
/// Observation takes effect immediately. Release only happens once
/// `now - observed_at` is strictly greater than `hysteresis`.
pub fn update_watch_status(agent: &mut Agent, observed_now: bool, now: f64, hysteresis: f64) {
    if observed_now {
        agent.is_observed = true;
        agent.observed_at = now;
        agent.last_seen = agent.location;
    } else if now - agent.observed_at > hysteresis {
        agent.is_observed = false;
    }
}

/// The only movement gate: not observed and off cooldown.
pub fn can_move(agent: &Agent, now: f64) -> bool {
    !agent.is_observed && now - agent.last_move_time >= agent.move_cooldown
}

/// Check the agent against `view` and update its watch status.
///
/// Returns whether the agent is on the feed right now.
pub fn observe(agent: &mut Agent, view: View, now: f64, hysteresis: f64) -> bool {
    let observed_now = is_observed(agent.location, view);
    update_watch_status(agent, observed_now, now, hysteresis);
    observed_now
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightwatch_logic::topology::{AgentKind, Location, Viewpoint};

    const HYSTERESIS: f64 = 3.0;

    #[test]
    fn observed_agent_cannot_move() {
        let mut agent = Agent::from_kind(AgentKind::Freddy);
        assert!(can_move(&agent, 10.0));
        update_watch_status(&mut agent, true, 10.0, HYSTERESIS);
        assert!(!can_move(&agent, 10.0));
        assert_eq!(agent.observed_at, 10.0);
    }

    #[test]
    fn hysteresis_holds_for_three_seconds() {
        let mut agent = Agent::from_kind(AgentKind::Freddy);
        update_watch_status(&mut agent, true, 10.0, HYSTERESIS);

        update_watch_status(&mut agent, false, 12.0, HYSTERESIS);
        assert!(!can_move(&agent, 12.0));
        // Exactly at the boundary the agent is still frozen
        update_watch_status(&mut agent, false, 13.0, HYSTERESIS);
        assert!(!can_move(&agent, 13.0));

        update_watch_status(&mut agent, false, 13.01, HYSTERESIS);
        assert!(can_move(&agent, 13.01));
    }

    #[test]
    fn reobserving_restarts_window() {
        let mut agent = Agent::from_kind(AgentKind::Chica);
        update_watch_status(&mut agent, true, 1.0, HYSTERESIS);
        update_watch_status(&mut agent, true, 3.5, HYSTERESIS);
        update_watch_status(&mut agent, false, 5.0, HYSTERESIS);
        assert!(agent.is_observed);
        update_watch_status(&mut agent, false, 6.6, HYSTERESIS);
        assert!(!agent.is_observed);
    }

    #[test]
    fn cooldown_gates_movement() {
        let mut agent = Agent::from_kind(AgentKind::Bonnie);
        agent.last_move_time = 20.0;
        agent.move_cooldown = 8.0;
        assert!(!can_move(&agent, 27.9));
        assert!(can_move(&agent, 28.0));
    }

    #[test]
    fn observe_records_last_seen() {
        let mut agent = Agent::from_kind(AgentKind::Foxy);
        agent.location = Location::SupplyCloset;
        assert!(observe(
            &mut agent,
            View::Camera(Viewpoint::Backstage),
            4.0,
            HYSTERESIS
        ));
        assert_eq!(agent.last_seen, Location::SupplyCloset);
        assert!(!observe(&mut agent, View::Office, 5.0, HYSTERESIS));
        assert!(agent.is_observed);
    }
}
