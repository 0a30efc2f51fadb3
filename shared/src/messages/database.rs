//! Wire layout of the persistence gateway's request/reply contract
//!
//! The persisted match layout is external schema and must stay
//! compatible: `{id, teams: {blueTeam, redTeam}, bestOf, roundOf, date}`
//! with `date` in epoch milliseconds.

use serde::{Deserialize, Serialize};

use crate::types::{RecordId, TeamPair};

/// A match as stored by the persistence gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: RecordId,
    pub teams: TeamPair,
    pub best_of: u32,
    pub round_of: u32,
    /// Creation timestamp in epoch milliseconds.
    pub date: i64,
}

/// Insert/update body for the match collection.
///
/// `date` is set on insert only; updates leave the stored creation
/// timestamp untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDocument {
    pub teams: TeamPair,
    pub best_of: u32,
    pub round_of: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
}

/// Reply to an insert request.
///
/// The reply may legally arrive without an id; callers treat that as a
/// failed insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertAck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
}
