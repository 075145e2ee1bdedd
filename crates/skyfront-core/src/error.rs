//! Command rejection and configuration errors.
//!
//! A rejected command never mutates campaign state. Recoverable in-flight
//! conditions (fuel exhaustion) are events, not errors.

use thiserror::Error;

use crate::components::{LocationId, SquadronId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampaignError {
    #[error("squadron {name} cannot fly: readiness, fuel, or aircraft exhausted")]
    SquadronCannotFly { name: String },

    #[error("squadron {name} has no home base assigned")]
    MissingHomeBase { name: String },

    #[error("no squadron with id {0:?}")]
    UnknownSquadron(SquadronId),

    #[error("no location with id {0:?}")]
    UnknownLocation(LocationId),

    #[error("no aircraft type named {0:?} in the catalog")]
    UnknownAircraftType(String),

    #[error("no location type for category {0:?} in the catalog")]
    UnknownLocationType(String),

    #[error("unresolved location name {0:?} in campaign setup")]
    UnresolvedLocationName(String),

    #[error("duplicate name {0:?} in campaign setup")]
    DuplicateName(String),

    #[error("campaign has not been started")]
    CampaignNotStarted,

    #[error("campaign is already running")]
    CampaignAlreadyStarted,
}
