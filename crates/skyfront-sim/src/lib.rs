//! Campaign engine for SKYFRONT.
//!
//! Owns the hecs ECS world, drives the turn/phase state machine, steps
//! squadron missions tick by tick, and produces CampaignSnapshots for
//! the frontend. Completely headless, enabling deterministic testing.

pub mod engine;
pub mod path;
pub mod scenario;
pub mod setup;
pub mod systems;
pub mod weather;

pub use engine::{CampaignConfig, CampaignEngine};
pub use skyfront_core as core;
