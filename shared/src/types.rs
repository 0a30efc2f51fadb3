//! Core types used throughout the match graphics system

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::SharedError;

/// Coarse lifecycle of the tracked match.
///
/// Serialized forms (`NO_MATCH` / `READY`) are external schema and must
/// stay stable for graphics listeners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchLifecycle {
    /// No pairing is being tracked.
    #[default]
    NoMatch,
    /// A pairing is active.
    Ready,
}

impl fmt::Display for MatchLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchLifecycle::NoMatch => write!(f, "NO_MATCH"),
            MatchLifecycle::Ready => write!(f, "READY"),
        }
    }
}

/// Opaque identifier of a record owned by the persistence gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh v4 identifier, for gateway implementations and tests.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A team as stored in the roster collection.
///
/// Reconciliation identity compares `name` only; the remaining fields are
/// opaque payload carried along for the graphics layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach: Option<String>,
}

/// Roster write body for team create/update operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach: Option<String>,
}

impl TeamProfile {
    /// The roster entity this profile becomes once the gateway has
    /// assigned it an identifier.
    pub fn into_team(self, id: RecordId) -> Team {
        Team {
            id: Some(id),
            name: self.name,
            tag: self.tag,
            logo: self.logo,
            color: self.color,
            standing: self.standing,
            coach: self.coach,
        }
    }
}

/// Sided assignment of two teams to blue and red.
///
/// Both sides are always present; a state without a pairing is modeled as
/// the absence of the whole pair, never as a half-filled one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPair {
    pub blue_team: Team,
    pub red_team: Team,
}

impl TeamPair {
    /// The same pairing with sides exchanged.
    pub fn swapped(&self) -> TeamPair {
        TeamPair {
            blue_team: self.red_team.clone(),
            red_team: self.blue_team.clone(),
        }
    }
}

/// Broadcast-payload shape of a pairing: both sides, or `{}` while no
/// match is tracked. Kept separate from [`TeamPair`] so the wire format
/// of state updates stays compatible with existing listeners.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue_team: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_team: Option<Team>,
}

impl TeamSides {
    pub fn is_empty(&self) -> bool {
        self.blue_team.is_none() && self.red_team.is_none()
    }
}

impl From<Option<TeamPair>> for TeamSides {
    fn from(pair: Option<TeamPair>) -> Self {
        match pair {
            Some(pair) => TeamSides {
                blue_team: Some(pair.blue_team),
                red_team: Some(pair.red_team),
            },
            None => TeamSides::default(),
        }
    }
}

/// A proposed pairing and format, as submitted by an operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub teams: TeamPair,
    pub best_of: u32,
    pub round_of: u32,
}

impl Submission {
    /// Format fields are positive by the data model; zero is rejected.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.best_of == 0 {
            return Err(SharedError::InvalidFormat {
                field: "bestOf".to_string(),
                value: self.best_of.to_string(),
            });
        }
        if self.round_of == 0 {
            return Err(SharedError::InvalidFormat {
                field: "roundOf".to_string(),
                value: self.round_of.to_string(),
            });
        }
        Ok(())
    }
}
