//! Shared types for the match graphics system
//!
//! Contains only the types that cross the component boundary: wire
//! payloads, identifiers, and the tracing bootstrap. Reconciler-internal
//! state is kept in the reconciler crate.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

// Re-export wire payloads at crate level for convenience
pub use messages::{InsertAck, MatchDocument, MatchRecord, OutboundEvent, StateUpdate};
