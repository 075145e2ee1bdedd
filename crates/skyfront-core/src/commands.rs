//! Commands sent from a controlling layer (UI/CLI) to the campaign engine.
//!
//! Commands are validated when applied; a rejected command returns an
//! error and leaves the campaign state untouched.

use serde::{Deserialize, Serialize};

use crate::components::{LocationId, SquadronId};

/// All externally drivable campaign actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CampaignCommand {
    /// Advance to the next phase of the turn cycle.
    AdvancePhase,
    /// Order a squadron onto a strike mission against a location.
    SendMission {
        squadron: SquadronId,
        target: LocationId,
    },
}
