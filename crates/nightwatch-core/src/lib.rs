//! Nightwatch Core - Animatronic Agent Director
//!
//! Drives a small roster of hostile agents along fixed paths toward the
//! player's office, one tick per frame, reacting to the player's cameras
//! and doors.
//!
//! # Architecture
//!
//! - **Components**: Plain data (agents, the office controls, telemetry counters)
//! - **Systems**: Free functions over components (observation, stepping, scheduling, encounters)
//! - **Director**: Owns the roster and the seeded RNG, runs the systems each tick
//! - **NightSession**: Wraps a director with power, clock and scoring for a playable night
//!
//! # Example
//!
//! ```rust,no_run
//! use nightwatch_core::prelude::*;
//!
//! let mut session = NightSession::new(42);
//! session.toggle_left_door();
//!
//! // Run until the night ends
//! loop {
//!     let report = session.update(1.0 / 60.0); // 60 FPS
//!     if report.outcome.is_some() {
//!         break;
//!     }
//! }
//! ```

pub mod components;
pub mod systems;
pub mod engine;
pub mod session;
pub mod persistence;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::Director;
    pub use crate::session::{FrameReport, NightOutcome, NightSession};
    pub use crate::systems::{Arrival, Encounter};
}
