//! Component definitions for the night simulation.
//!
//! Components are plain data structs. They carry no scheduling logic;
//! that lives in systems.

mod agent;
mod session;
mod telemetry;

pub use agent::*;
pub use session::*;
pub use telemetry::*;
