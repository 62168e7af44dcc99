//! Save/Load of director state
//!
//! Uses bincode for a compact binary snapshot of the roster, tuning and
//! counters. The RNG stream is not captured: a loaded director reseeds
//! from its starting seed.

use nightwatch_logic::config::{validate_config, ConfigError, TuningConfig};
use nightwatch_logic::topology::AgentKind;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use thiserror::Error;

use crate::components::{Agent, Telemetry};
use crate::engine::Director;

/// Version number for save file format (increment when format changes)
const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of a director
#[derive(Serialize, Deserialize)]
pub struct SaveData {
    /// Save format version
    pub version: u32,
    pub seed: u64,
    pub night: u32,
    pub config: TuningConfig,
    pub agents: Vec<Agent>,
    pub telemetry: Telemetry,
}

/// Errors that can occur during save/load
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Serialization error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("Save holds invalid tuning: {0:?}")]
    InvalidConfig(Vec<ConfigError>),
    #[error("Save holds {found} agents, expected {expected}")]
    RosterMismatch { expected: usize, found: usize },
    #[error("Save holds {found:?} in roster slot {slot}, expected {expected:?}")]
    RosterOrder {
        slot: usize,
        expected: AgentKind,
        found: AgentKind,
    },
}

/// Save a director to a writer
pub fn save_director<W: Write>(writer: W, director: &Director) -> Result<(), SaveError> {
    let save_data = SaveData {
        version: SAVE_VERSION,
        seed: director.seed(),
        night: director.night(),
        config: *director.config(),
        agents: director.agents().to_vec(),
        telemetry: *director.telemetry(),
    };

    bincode::serialize_into(writer, &save_data)?;
    Ok(())
}

/// Load a director from a reader
pub fn load_director<R: Read>(reader: R) -> Result<Director, SaveError> {
    let save_data: SaveData = bincode::deserialize_from(reader)?;

    if save_data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save_data.version,
        });
    }

    let errors = validate_config(&save_data.config);
    if !errors.is_empty() {
        return Err(SaveError::InvalidConfig(errors));
    }

    if save_data.agents.len() != AgentKind::ALL.len() {
        return Err(SaveError::RosterMismatch {
            expected: AgentKind::ALL.len(),
            found: save_data.agents.len(),
        });
    }

    // Scheduling order is roster order, so every kind must sit in its own slot
    let misplaced = AgentKind::ALL
        .iter()
        .zip(&save_data.agents)
        .position(|(kind, agent)| agent.kind != *kind);
    if let Some(slot) = misplaced {
        return Err(SaveError::RosterOrder {
            slot,
            expected: AgentKind::ALL[slot],
            found: save_data.agents[slot].kind,
        });
    }

    Ok(Director::from_parts(
        save_data.agents,
        save_data.config,
        save_data.night,
        save_data.seed,
        save_data.telemetry,
    ))
}
