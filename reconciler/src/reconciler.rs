//! The match reconciler: classification, persistence actions, broadcasts

use std::sync::Arc;

use chrono::{Local, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::core::{day_window, Classification, MatchState, SubmitOutcome};
use crate::error::{ReconcilerError, ReconcilerResult};
use crate::traits::{PersistenceGateway, StateBroadcaster};
use shared::{MatchDocument, MatchLifecycle, MatchRecord, OutboundEvent, StateUpdate, Submission};

/// Single logical owner of the match state.
///
/// Submissions are serialized on an internal mutex held across the
/// persistence round-trip, so classification always sees a stable
/// snapshot. No timeout is imposed here; a stalled gateway stalls the
/// submission, and callers bring their own deadline if they need one.
pub struct MatchReconciler {
    pub(crate) state: Mutex<MatchState>,
    pub(crate) gateway: Arc<dyn PersistenceGateway>,
    pub(crate) broadcaster: Arc<dyn StateBroadcaster>,
}

impl MatchReconciler {
    pub fn new(
        gateway: Arc<dyn PersistenceGateway>,
        broadcaster: Arc<dyn StateBroadcaster>,
    ) -> Self {
        Self {
            state: Mutex::new(MatchState::default()),
            gateway,
            broadcaster,
        }
    }

    /// Apply a newly submitted pairing.
    ///
    /// Decides between no-op, side swap, update-in-place, and insert.
    /// On success the in-memory state adopts the proposal and one update
    /// broadcast fires. A failed or ack-less persistence action leaves
    /// the state exactly as it was and nothing is broadcast.
    pub async fn submit(&self, proposal: Submission) -> ReconcilerResult<SubmitOutcome> {
        proposal.validate()?;

        let mut state = self.state.lock().await;

        let classification = state.classify(&proposal);
        if classification == Classification::Unchanged {
            debug!("Identical resubmission ignored");
            return Ok(SubmitOutcome::Unchanged);
        }

        let document = MatchDocument {
            teams: proposal.teams.clone(),
            best_of: proposal.best_of,
            round_of: proposal.round_of,
            date: None,
        };

        let outcome = match (classification, state.record_id.clone()) {
            (Classification::SidesSwapped | Classification::SameOrientation, Some(record_id)) => {
                if let Err(error) = self.gateway.update_match(&record_id, document).await {
                    warn!(%error, "match could not be updated");
                    return Err(error);
                }
                if classification == Classification::SidesSwapped {
                    info!(%record_id, "Pairing kept with sides swapped");
                    SubmitOutcome::SidesSwapped(record_id)
                } else {
                    info!(%record_id, "Pairing kept, format updated in place");
                    SubmitOutcome::Updated(record_id)
                }
            }
            // A pairing without a backing record falls through to a
            // fresh insert, keeping record_id tied to durable rows.
            _ => {
                let document = MatchDocument {
                    date: Some(Utc::now().timestamp_millis()),
                    ..document
                };
                let ack = match self.gateway.insert_match(document).await {
                    Ok(ack) => ack,
                    Err(error) => {
                        warn!(%error, "match could not be inserted");
                        return Err(error);
                    }
                };
                let Some(record_id) = ack.id else {
                    warn!("match could not be inserted");
                    return Err(ReconcilerError::MissingInsertId {
                        collection: "match".to_string(),
                    });
                };
                info!(%record_id, "New match record created");
                state.record_id = Some(record_id.clone());
                SubmitOutcome::Created(record_id)
            }
        };

        state.adopt(&proposal);
        self.broadcast(state.to_update()).await;
        Ok(outcome)
    }

    /// Exchange blue and red in place.
    ///
    /// Valid only for a ready match with a pairing; anything else is a
    /// silent no-op returning `false`. No persistence write happens and
    /// the stored record keeps its orientation.
    pub async fn swap(&self) -> bool {
        let mut state = self.state.lock().await;
        if state.lifecycle != MatchLifecycle::Ready {
            return false;
        }
        let swapped = match state.teams.as_ref() {
            Some(pair) => pair.swapped(),
            None => return false,
        };
        state.teams = Some(swapped);
        self.broadcast(state.to_update()).await;
        true
    }

    /// Drop back to the default state and broadcast it.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        *state = MatchState::default();
        self.broadcast(state.to_update()).await;
    }

    /// Reset and additionally request deletion of every persisted match.
    ///
    /// The deletion is not awaited; a failure is logged and never
    /// surfaced to the caller.
    pub async fn clear_matches(&self) {
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            if let Err(error) = gateway.delete_all_matches().await {
                warn!(%error, "Stored matches could not be cleared");
            }
        });
        self.reset().await;
    }

    /// Reply payload for current-state requests.
    pub async fn current(&self) -> StateUpdate {
        self.state.lock().await.to_update()
    }

    /// Today's persisted matches, sorted ascending by creation date.
    pub async fn matches_of_day(&self) -> ReconcilerResult<Vec<MatchRecord>> {
        self.gateway
            .matches_in_window(day_window(Local::now()), None)
            .await
    }

    /// Snapshot of the current state, for diagnostics and tests.
    pub async fn snapshot(&self) -> MatchState {
        self.state.lock().await.clone()
    }

    pub(crate) async fn broadcast(&self, update: StateUpdate) {
        self.publish(OutboundEvent::Update(update)).await;
    }

    pub(crate) async fn publish(&self, event: OutboundEvent) {
        if let Err(error) = self.broadcaster.publish(event).await {
            debug!(%error, "Broadcast dropped");
        }
    }
}
