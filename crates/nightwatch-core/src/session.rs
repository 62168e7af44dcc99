//! Night session - the host-side controller around the director
//!
//! Owns the office controls, power reserve, clock and statistics, and feeds
//! them into the director once per frame. A night ends at dawn, when the
//! power runs out, or when an arrival turns into a jumpscare.

use nightwatch_logic::clock::NightClock;
use nightwatch_logic::config::TuningConfig;
use nightwatch_logic::difficulty::FINAL_NIGHT;
use nightwatch_logic::power::{PowerState, PowerStatus};
use nightwatch_logic::scoring::{survival_bonus, SessionStats};
use nightwatch_logic::topology::{AgentKind, DoorSide, View, Viewpoint};
use serde::{Deserialize, Serialize};

use crate::components::SessionState;
use crate::engine::Director;
use crate::systems::Encounter;

/// How a night ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NightOutcome {
    /// Reached 6 AM. Carries the survival bonus awarded.
    Survived { bonus: u32 },
    Jumpscared(AgentKind),
    PowerOut,
}

/// What happened during one `update`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub power: PowerStatus,
    pub encounter: Option<Encounter>,
    pub outcome: Option<NightOutcome>,
}

/// One player's run through the week.
pub struct NightSession {
    director: Director,
    state: SessionState,
    power: PowerState,
    clock: NightClock,
    stats: SessionStats,
    outcome: Option<NightOutcome>,
}

impl NightSession {
    /// Start a new session on night 1.
    pub fn new(seed: u64) -> Self {
        Self::with_config(TuningConfig::default(), seed)
    }

    pub fn with_config(config: TuningConfig, seed: u64) -> Self {
        let mut session = Self {
            power: PowerState::new(&config.power),
            director: Director::with_config(config, seed),
            state: SessionState::new(1),
            clock: NightClock::new(),
            stats: SessionStats::default(),
            outcome: None,
        };
        session.start_night(1);
        session
    }

    /// Reset the office and agents for `night`.
    pub fn start_night(&mut self, night: u32) {
        let config = *self.director.config();
        self.state = SessionState::new(night);
        self.power = PowerState::new(&config.power);
        self.clock = NightClock::new();
        self.outcome = None;
        self.director.reset_for_new_night(night);
    }

    /// Move on to the next night after surviving one.
    ///
    /// Returns `false` after the final night or if the current night has not
    /// been survived.
    pub fn advance_night(&mut self) -> bool {
        let survived = matches!(self.outcome, Some(NightOutcome::Survived { .. }));
        if !survived || self.state.night >= FINAL_NIGHT {
            return false;
        }
        self.start_night(self.state.night + 1);
        true
    }

    /// Replay the current night from the start.
    pub fn retry_night(&mut self) {
        self.start_night(self.state.night);
    }

    /// Advance the night by `dt` seconds of elapsed time.
    ///
    /// A negative `dt` counts as zero.
    pub fn update(&mut self, dt: f64) -> FrameReport {
        let dt = dt.max(0.0);
        if let Some(outcome) = self.outcome {
            return FrameReport {
                power: self.power_status(),
                encounter: None,
                outcome: Some(outcome),
            };
        }

        let config = *self.director.config();
        let dawn = self.clock.advance(&config.clock, dt);
        let power = self
            .power
            .update(&config.power, &self.state.loads(), dt as f32);

        if dawn {
            return self.finish(power, None, self.survived_outcome());
        }
        if power == PowerStatus::Out {
            return self.finish(power, None, NightOutcome::PowerOut);
        }

        let now = self.clock.elapsed;
        let Some(arrival) = self.director.tick(&self.state, now) else {
            return FrameReport {
                power,
                encounter: None,
                outcome: None,
            };
        };

        let encounter = self.director.resolve_arrival(arrival);
        match encounter {
            Encounter::Jumpscare(kind) => {
                self.finish(power, Some(encounter), NightOutcome::Jumpscared(kind))
            }
            Encounter::NearMiss(kind) => {
                self.director.repel(kind, now);
                FrameReport {
                    power,
                    encounter: Some(encounter),
                    outcome: None,
                }
            }
        }
    }

    fn survived_outcome(&self) -> NightOutcome {
        let config = self.director.config();
        let bonus = survival_bonus(
            self.power.level,
            self.clock.hours_elapsed(&config.clock),
            config.clock.hours_per_night,
            self.state.night,
        );
        NightOutcome::Survived { bonus }
    }

    fn finish(
        &mut self,
        power: PowerStatus,
        encounter: Option<Encounter>,
        outcome: NightOutcome,
    ) -> FrameReport {
        let minutes = self.clock.survived_minutes(&self.director.config().clock);
        match outcome {
            NightOutcome::Survived { bonus } => self.stats.record_survival(bonus, minutes),
            NightOutcome::Jumpscared(_) => self.stats.record_jumpscare(minutes),
            NightOutcome::PowerOut => self.stats.record_power_out(minutes),
        }
        log::info!(
            "Night {} over after {} minutes: {:?}",
            self.state.night,
            minutes,
            outcome
        );
        self.outcome = Some(outcome);
        FrameReport {
            power,
            encounter,
            outcome: Some(outcome),
        }
    }

    fn power_status(&self) -> PowerStatus {
        let config = &self.director.config().power;
        if self.power.emergency_active {
            PowerStatus::Emergency
        } else if self.power.level <= 0.0 {
            PowerStatus::Out
        } else if self.power.level <= config.warning_threshold {
            PowerStatus::Low
        } else {
            PowerStatus::Normal
        }
    }

    pub fn toggle_left_door(&mut self) -> bool {
        self.state.toggle_door(DoorSide::Left)
    }

    pub fn toggle_right_door(&mut self) -> bool {
        self.state.toggle_door(DoorSide::Right)
    }

    pub fn toggle_left_light(&mut self) -> bool {
        self.state.toggle_light(DoorSide::Left)
    }

    pub fn toggle_right_light(&mut self) -> bool {
        self.state.toggle_light(DoorSide::Right)
    }

    pub fn toggle_vent(&mut self) -> bool {
        self.state.vent_active = !self.state.vent_active;
        self.state.vent_active
    }

    pub fn activate_emergency_power(&mut self) -> bool {
        let config = self.director.config().power;
        self.power.activate_emergency(&config)
    }

    pub fn switch_view(&mut self, view: View) {
        self.state.view = view;
    }

    pub fn switch_to_camera(&mut self, viewpoint: Viewpoint) {
        self.state.view = View::Camera(viewpoint);
    }

    pub fn switch_to_office(&mut self) {
        self.state.view = View::Office;
    }

    pub fn cycle_view(&mut self) -> View {
        self.state.view = self.state.view.cycle();
        self.state.view
    }

    pub fn director(&self) -> &Director {
        &self.director
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn power(&self) -> &PowerState {
        &self.power
    }

    pub fn clock(&self) -> &NightClock {
        &self.clock
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn outcome(&self) -> Option<NightOutcome> {
        self.outcome
    }

    pub fn night(&self) -> u32 {
        self.state.night
    }
}
