//! Message types for the match graphics system
//!
//! This module organizes the payloads crossing the component boundary:
//! - `state`: broadcast payloads and state replies for listeners
//! - `database`: wire layout of the persistence gateway contract

pub mod database;
pub mod state;

// Re-export commonly used types at module level for convenience
pub use database::{InsertAck, MatchDocument, MatchRecord};
pub use state::{OutboundEvent, StateUpdate};
