//! Systems that operate on the campaign world.
//!
//! Systems are free functions over `&mut World` — they own no state.
//! The engine decides when each runs: mission stepping during the
//! Movement/Combat phases, readiness and repair as phase entry actions.

pub mod combat;
pub mod mission;
pub mod resolution;
pub mod snapshot;
