//! Authoritative in-memory match state and change classification

use serde::{Deserialize, Serialize};
use shared::{MatchLifecycle, MatchRecord, RecordId, StateUpdate, Submission, TeamPair};

/// The single source of truth for the currently tracked match.
///
/// Owned exclusively by the reconciler; every mutation funnels through
/// its operations and is followed by a broadcast. `record_id` is present
/// exactly while a persisted record backs this state, and `teams` is
/// absent exactly while the lifecycle is `NoMatch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub lifecycle: MatchLifecycle,
    pub teams: Option<TeamPair>,
    pub best_of: u32,
    pub round_of: u32,
    pub record_id: Option<RecordId>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            lifecycle: MatchLifecycle::NoMatch,
            teams: None,
            best_of: 1,
            round_of: 2,
            record_id: None,
        }
    }
}

/// How a proposed pairing relates to the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Identical teams and format; nothing to do.
    Unchanged,
    /// Same pairing with blue and red exchanged.
    SidesSwapped,
    /// Same pairing and orientation; format or team payload changed.
    SameOrientation,
    /// No prior pairing, or a genuinely different one.
    NewPairing,
}

/// What a successful submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Redundant resubmission; no write, no broadcast.
    Unchanged,
    /// Update-in-place after a side swap.
    SidesSwapped(RecordId),
    /// Update-in-place for the same orientation.
    Updated(RecordId),
    /// A new record was created.
    Created(RecordId),
}

impl MatchState {
    /// Seed state from a persisted record.
    pub fn from_record(record: MatchRecord) -> Self {
        Self {
            lifecycle: MatchLifecycle::Ready,
            teams: Some(record.teams),
            best_of: record.best_of,
            round_of: record.round_of,
            record_id: Some(record.id),
        }
    }

    /// Classify a proposal against the current state.
    ///
    /// Order matters: the no-op check guards against redundant writes,
    /// and the cross-orientation check runs before the straight one so a
    /// pairing whose two teams share one name resolves as a swap.
    pub fn classify(&self, proposal: &Submission) -> Classification {
        if self.teams.as_ref() == Some(&proposal.teams)
            && self.best_of == proposal.best_of
            && self.round_of == proposal.round_of
        {
            return Classification::Unchanged;
        }

        match &self.teams {
            Some(current)
                if current.blue_team.name == proposal.teams.red_team.name
                    && current.red_team.name == proposal.teams.blue_team.name =>
            {
                Classification::SidesSwapped
            }
            Some(current)
                if current.blue_team.name == proposal.teams.blue_team.name
                    && current.red_team.name == proposal.teams.red_team.name =>
            {
                Classification::SameOrientation
            }
            _ => Classification::NewPairing,
        }
    }

    /// Adopt a proposal after its persistence action succeeded.
    pub fn adopt(&mut self, proposal: &Submission) {
        self.lifecycle = MatchLifecycle::Ready;
        self.teams = Some(proposal.teams.clone());
        self.best_of = proposal.best_of;
        self.round_of = proposal.round_of;
    }

    /// Broadcast payload for the current state.
    pub fn to_update(&self) -> StateUpdate {
        StateUpdate {
            state: self.lifecycle,
            teams: self.teams.clone().into(),
            best_of: self.best_of,
            round_of: self.round_of,
        }
    }
}
