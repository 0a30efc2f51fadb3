//! Core reconciliation state and temporal scoping

pub mod day_window;
pub mod state;

pub use day_window::{day_window, DayWindow};
pub use state::{Classification, MatchState, SubmitOutcome};
