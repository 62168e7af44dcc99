//! Agent director - owns the roster and drives it one tick at a time

use nightwatch_logic::config::TuningConfig;
use nightwatch_logic::roster;
use nightwatch_logic::topology::AgentKind;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::*;
use crate::systems::*;

/// Owns every agent plus the seeded RNG that drives them.
///
/// Nothing outside the director mutates agents between ticks except
/// [`Director::reset_for_new_night`] and [`Director::repel`].
pub struct Director {
    agents: Vec<Agent>,
    config: TuningConfig,
    night: u32,
    seed: u64,
    rng: StdRng,
    telemetry: Telemetry,
}

impl Director {
    /// Create a director with the shipped tuning, ready for night 1.
    pub fn new(seed: u64) -> Self {
        Self::with_config(TuningConfig::default(), seed)
    }

    pub fn with_config(config: TuningConfig, seed: u64) -> Self {
        let agents = roster::roster().iter().map(Agent::new).collect();
        let mut director = Self {
            agents,
            config,
            night: 1,
            seed,
            rng: StdRng::seed_from_u64(seed),
            telemetry: Telemetry::default(),
        };
        director.reset_for_new_night(1);
        director
    }

    /// Rebuild a director from saved parts. The RNG restarts from `seed`.
    pub(crate) fn from_parts(
        agents: Vec<Agent>,
        config: TuningConfig,
        night: u32,
        seed: u64,
        telemetry: Telemetry,
    ) -> Self {
        Self {
            agents,
            config,
            night,
            seed,
            rng: StdRng::seed_from_u64(seed),
            telemetry,
        }
    }

    /// Send every agent back to spawn and wake the ones active on `night`.
    ///
    /// Agent timestamps restart at zero: `tick` expects seconds since the
    /// start of this night.
    pub fn reset_for_new_night(&mut self, night: u32) {
        self.night = night;
        for agent in &mut self.agents {
            let active = self.config.difficulty.is_kind_active_on(agent.kind, night);
            agent.reset_for_night(active);
        }
        let awake = self.agents.iter().filter(|a| a.active).count();
        log::info!("Night {} begins with {} agents awake", night, awake);
    }

    /// Advance every agent one tick. Returns the first arrival, if any.
    pub fn tick(&mut self, session: &SessionState, now: f64) -> Option<Arrival> {
        tick(
            &mut self.agents,
            now,
            session,
            &self.config,
            &mut self.rng,
            &mut self.telemetry,
        )
    }

    /// Roll an arrival against the agent's jump-trigger chance.
    pub fn resolve_arrival(&mut self, arrival: Arrival) -> Encounter {
        match self.agents.iter().find(|a| a.kind == arrival.kind) {
            Some(agent) => resolve_arrival(agent, &mut self.rng),
            None => Encounter::NearMiss(arrival.kind),
        }
    }

    /// Send `kind` back to its spawn after a near miss.
    pub fn repel(&mut self, kind: AgentKind, now: f64) {
        let cooldowns = self.config.difficulty.cooldowns;
        if let Some(agent) = self.agents.iter_mut().find(|a| a.kind == kind) {
            agent.location = kind.spawn();
            agent.last_move_time = now;
            agent.move_cooldown = movement_cooldown(agent.location, &cooldowns, &mut self.rng);
            log::info!("{} retreats to {}", agent.name(), agent.location.name());
        }
    }

    /// Index of `kind` on its own path. 0 for unknown or off-path agents.
    pub fn danger_level(&self, kind: AgentKind) -> usize {
        self.agent(kind).map(Agent::danger_level).unwrap_or(0)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, kind: AgentKind) -> Option<&Agent> {
        self.agents.iter().find(|a| a.kind == kind)
    }

    /// Agents currently frozen by a camera.
    pub fn observed_agents(&self) -> Vec<AgentKind> {
        self.agents
            .iter()
            .filter(|a| a.active && a.is_observed)
            .map(|a| a.kind)
            .collect()
    }

    pub fn night(&self) -> u32 {
        self.night
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &TuningConfig {
        &self.config
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    pub fn repairs(&self) -> InvariantRepairs {
        self.telemetry.repairs
    }

    /// Movement attempts rolled since the director was created.
    pub fn attempts(&self) -> u64 {
        self.telemetry.attempts
    }

    /// Save director state to a writer
    pub fn save<W: std::io::Write>(&self, writer: W) -> Result<(), crate::persistence::SaveError> {
        crate::persistence::save_director(writer, self)
    }

    /// Load director state from a reader
    pub fn load<R: std::io::Read>(reader: R) -> Result<Self, crate::persistence::SaveError> {
        crate::persistence::load_director(reader)
    }
}
