//! Team roster proxying
//!
//! Roster writes are mechanical: forward to the gateway, re-read the
//! roster, and push the fresh listing to listeners. No reconciliation
//! happens here.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ReconcilerConfig;
use crate::error::ReconcilerResult;
use crate::traits::{PersistenceGateway, StateBroadcaster};
use shared::{OutboundEvent, RecordId, Team, TeamProfile};

pub struct TeamRoster {
    gateway: Arc<dyn PersistenceGateway>,
    broadcaster: Arc<dyn StateBroadcaster>,
    list_limit: u32,
}

impl TeamRoster {
    pub fn new(
        gateway: Arc<dyn PersistenceGateway>,
        broadcaster: Arc<dyn StateBroadcaster>,
        config: &ReconcilerConfig,
    ) -> Self {
        Self {
            gateway,
            broadcaster,
            list_limit: config.roster_limit,
        }
    }

    /// Current roster listing, for request-style callers.
    pub async fn teams(&self) -> ReconcilerResult<Vec<Team>> {
        self.gateway.list_teams(self.list_limit).await
    }

    pub async fn add_team(&self, profile: TeamProfile) -> ReconcilerResult<()> {
        self.gateway.insert_team(profile).await?;
        self.publish_roster().await
    }

    pub async fn update_team(&self, id: &RecordId, profile: TeamProfile) -> ReconcilerResult<()> {
        self.gateway.update_team(id, profile).await?;
        self.publish_roster().await
    }

    pub async fn delete_team(&self, id: &RecordId) -> ReconcilerResult<()> {
        self.gateway.delete_team(id).await?;
        self.publish_roster().await
    }

    async fn publish_roster(&self) -> ReconcilerResult<()> {
        let teams = match self.gateway.list_teams(self.list_limit).await {
            Ok(teams) => teams,
            Err(error) => {
                warn!(%error, "teams could not be loaded");
                return Err(error);
            }
        };
        if let Err(error) = self
            .broadcaster
            .publish(OutboundEvent::RosterChanged(teams))
            .await
        {
            debug!(%error, "Roster broadcast dropped");
        }
        Ok(())
    }
}
