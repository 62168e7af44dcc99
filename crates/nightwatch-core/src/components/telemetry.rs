//! Counters the engine keeps about its own behaviour.

use serde::{Deserialize, Serialize};

/// Corrections applied to agent state that should never have happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantRepairs {
    /// Agent was found off its own path and sent back to spawn.
    pub off_path_resets: u32,
    /// Agent was found sitting in the office at tick time and evicted.
    pub office_evictions: u32,
}

impl InvariantRepairs {
    pub fn total(&self) -> u32 {
        self.off_path_resets + self.office_evictions
    }
}

/// Movement counters since the engine was created or last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Telemetry {
    pub ticks: u64,
    /// Rolls that came in under the movement chance.
    pub attempts: u64,
    pub advances: u64,
    /// Steps refused by a closed door.
    pub retreats: u64,
    pub arrivals: u64,
    pub repairs: InvariantRepairs,
}
