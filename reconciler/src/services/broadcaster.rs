//! Broadcast channel fan-out for outbound events

use tokio::sync::broadcast;
use tracing::debug;

use crate::error::{ReconcilerError, ReconcilerResult};
use crate::traits::StateBroadcaster;
use shared::OutboundEvent;

/// [`StateBroadcaster`] over a tokio broadcast channel.
///
/// The transport host subscribes and forwards events onto the bus; other
/// in-process listeners may subscribe as well. Slow receivers lose the
/// oldest events, which is acceptable for state fan-out: the next update
/// supersedes anything missed.
#[derive(Debug, Clone)]
pub struct ChannelBroadcaster {
    tx: broadcast::Sender<OutboundEvent>,
}

impl ChannelBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// New receiver for every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<OutboundEvent> {
        self.tx.subscribe()
    }

    /// Listeners currently attached.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[async_trait::async_trait]
impl StateBroadcaster for ChannelBroadcaster {
    async fn publish(&self, event: OutboundEvent) -> ReconcilerResult<()> {
        match self.tx.send(event) {
            Ok(receivers) => {
                debug!(receivers, "Event published");
                Ok(())
            }
            Err(_) => Err(ReconcilerError::BroadcastFailed { subscribers: 0 }),
        }
    }
}
