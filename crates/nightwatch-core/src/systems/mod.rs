//! Systems - logic that operates on agents each tick

mod observation;
mod stepper;
mod scheduler;
mod encounter;

pub use observation::*;
pub use stepper::*;
pub use scheduler::*;
pub use encounter::*;
