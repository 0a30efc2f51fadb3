//! Match-state reconciliation for live broadcast graphics
//!
//! This library keeps the in-memory state of the currently active match
//! consistent with a durable record behind an asynchronous persistence
//! gateway. Incoming pairing submissions are classified as no-op, side
//! swap, in-place update, or new match, and every successful mutation is
//! broadcast to interested listeners. The transport host performs the
//! bus-side dispatch and calls into the typed operations exposed here.

mod bootstrap;
pub mod config;
pub mod core;
pub mod error;
pub mod reconciler;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::ReconcilerConfig;
pub use core::{day_window, Classification, DayWindow, MatchState, SubmitOutcome};
pub use error::{ReconcilerError, ReconcilerResult};
pub use reconciler::MatchReconciler;
pub use services::{ChannelBroadcaster, TeamRoster};
pub use traits::{PersistenceGateway, StateBroadcaster};
