//! Broadcast payloads exposed to transport listeners
//!
//! Payload keys (`state`, `teams`, `bestOf`, `roundOf`) are external
//! schema; existing graphics listeners parse them as-is.

use serde::{Deserialize, Serialize};

use crate::types::{MatchLifecycle, Team, TeamSides};

/// State payload of the update and teams-loaded events, and the reply to
/// current-state requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateUpdate {
    pub state: MatchLifecycle,
    pub teams: TeamSides,
    pub best_of: u32,
    pub round_of: u32,
}

/// Everything the reconciliation core publishes to interested listeners.
///
/// The transport host maps variants onto bus event names; the core never
/// performs name-based dispatch itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutboundEvent {
    /// State after a successful mutation.
    Update(StateUpdate),
    /// One-shot announcement once bootstrap has resolved.
    TeamsLoaded(StateUpdate),
    /// Current roster listing after a team write.
    RosterChanged(Vec<Team>),
    /// The component is ready to serve operations.
    Ready,
}
