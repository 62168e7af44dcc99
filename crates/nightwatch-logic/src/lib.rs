//! Pure game rules for NightWatch.
//!
//! This crate contains all rules that are independent of any clock source,
//! random number generator, window or engine. Functions take plain data and
//! return results, making them unit-testable and usable from the engine
//! crate, the headless harness, and any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`clock`] | 12 AM → 6 AM night clock driven by elapsed seconds |
//! | [`config`] | Serde-loadable tuning constants and validation |
//! | [`difficulty`] | Movement chance curve, agent activation, cooldown table |
//! | [`observation`] | Whether a location is visible on the active view |
//! | [`power`] | Office power drain, emergency reserve, outage |
//! | [`roster`] | Per-agent spawn, speed, aggression, jump-trigger chance |
//! | [`scoring`] | Survival bonus and session statistics |
//! | [`topology`] | Locations, camera feeds, agent paths, door-block table |

pub mod clock;
pub mod config;
pub mod difficulty;
pub mod observation;
pub mod power;
pub mod roster;
pub mod scoring;
pub mod topology;
