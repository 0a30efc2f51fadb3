//! Startup sequencing: restore today's match and announce readiness

use chrono::Local;
use tracing::info;

use crate::core::{day_window, MatchState};
use crate::error::ReconcilerResult;
use crate::reconciler::MatchReconciler;
use shared::{MatchLifecycle, OutboundEvent};

impl MatchReconciler {
    /// Restore state from today's persisted matches, then announce.
    ///
    /// Runs once at startup. A gateway failure here is fatal: the error
    /// propagates to the host and nothing is published. After resolving,
    /// listeners always receive a teams-loaded event followed by the
    /// readiness announcement, even when no record was found or the
    /// state was already seeded.
    pub async fn bootstrap(&self) -> ReconcilerResult<()> {
        let loaded = {
            let mut state = self.state.lock().await;
            if state.lifecycle == MatchLifecycle::NoMatch {
                let window = day_window(Local::now());
                let matches = self.gateway.matches_in_window(window, Some(1)).await?;
                match matches.into_iter().next() {
                    Some(record) => {
                        info!(record_id = %record.id, "Restored today's match from storage");
                        *state = MatchState::from_record(record);
                    }
                    None => info!("No match stored for today, starting empty"),
                }
            }
            state.to_update()
        };

        self.publish(OutboundEvent::TeamsLoaded(loaded)).await;
        self.publish(OutboundEvent::Ready).await;
        Ok(())
    }
}
