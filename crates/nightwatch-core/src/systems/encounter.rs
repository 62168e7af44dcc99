//! Encounter resolution - does an arrival end the night?
//!
//! Reaching the office is not a guaranteed loss. The session rolls against
//! the arriving agent's jump-trigger chance; a miss sends the agent home.

use nightwatch_logic::topology::AgentKind;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::Agent;

/// How an arrival played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encounter {
    /// The agent got the player. The night is over.
    Jumpscare(AgentKind),
    /// The agent reached the office and left again.
    NearMiss(AgentKind),
}

impl Encounter {
    pub fn kind(&self) -> AgentKind {
        match self {
            Encounter::Jumpscare(kind) | Encounter::NearMiss(kind) => *kind,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Encounter::Jumpscare(_))
    }
}

/// Roll the arriving agent's jump-trigger chance.
pub fn resolve_arrival<R: Rng + ?Sized>(agent: &Agent, rng: &mut R) -> Encounter {
    if rng.gen::<f32>() < agent.jump_chance {
        Encounter::Jumpscare(agent.kind)
    } else {
        Encounter::NearMiss(agent.kind)
    }
}
