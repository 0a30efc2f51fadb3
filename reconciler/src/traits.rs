//! Collaborator traits with mockall annotations for testing
//!
//! The persistence gateway and the listener fan-out are reachable only
//! through asynchronous request/reply messaging. These traits are the
//! reconciler's view of that contract and double as the dependency
//! injection seams for tests; the transport host supplies the real
//! implementations.

use crate::core::DayWindow;
use crate::error::ReconcilerResult;
use shared::{InsertAck, MatchDocument, MatchRecord, OutboundEvent, RecordId, Team, TeamProfile};

/// Request/reply contract of the durable store.
///
/// The reconciler depends on these shapes only, never on the transport
/// or the storage engine behind them. No call here is retried; a failed
/// request surfaces to the caller and the in-memory state stays as it
/// was.
#[mockall::automock]
#[async_trait::async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Matches whose creation date falls inside `window`, sorted
    /// ascending by date. `limit` truncates the result after sorting.
    async fn matches_in_window(
        &self,
        window: DayWindow,
        limit: Option<u32>,
    ) -> ReconcilerResult<Vec<MatchRecord>>;

    /// Insert a new match document.
    ///
    /// The ack may legally arrive without an id; callers treat that as a
    /// failed insert.
    async fn insert_match(&self, doc: MatchDocument) -> ReconcilerResult<InsertAck>;

    /// Update the match record behind `id` in place.
    async fn update_match(&self, id: &RecordId, doc: MatchDocument) -> ReconcilerResult<()>;

    /// Drop every persisted match record (unconditional filter).
    async fn delete_all_matches(&self) -> ReconcilerResult<()>;

    /// Roster listing, capped at `limit` entries.
    async fn list_teams(&self, limit: u32) -> ReconcilerResult<Vec<Team>>;

    /// Insert a roster entry.
    async fn insert_team(&self, profile: TeamProfile) -> ReconcilerResult<InsertAck>;

    /// Update the roster entry behind `id`.
    async fn update_team(&self, id: &RecordId, profile: TeamProfile) -> ReconcilerResult<()>;

    /// Delete the roster entry behind `id`.
    async fn delete_team(&self, id: &RecordId) -> ReconcilerResult<()>;
}

/// Outbound fan-out towards transport listeners.
///
/// Publishing is fire-and-forget from the reconciler's point of view: a
/// failed publish never fails the mutation that triggered it.
#[mockall::automock]
#[async_trait::async_trait]
pub trait StateBroadcaster: Send + Sync {
    /// Publish one event to every attached listener.
    async fn publish(&self, event: OutboundEvent) -> ReconcilerResult<()>;
}
