//! Runtime configuration with environment overrides

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Tunables for the reconciler services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Cap on roster listings handed to operators.
    pub roster_limit: u32,
    /// Capacity of the outbound broadcast channel.
    pub broadcast_capacity: usize,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            roster_limit: 30,
            broadcast_capacity: 64,
        }
    }
}

impl ReconcilerConfig {
    /// Build from environment variables, falling back to defaults for
    /// anything unset or unparsable.
    ///
    /// Recognized: `RECONCILER_ROSTER_LIMIT`, `RECONCILER_BROADCAST_CAPACITY`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            roster_limit: parse_env("RECONCILER_ROSTER_LIMIT", defaults.roster_limit),
            broadcast_capacity: parse_env("RECONCILER_BROADCAST_CAPACITY", defaults.broadcast_capacity),
        }
    }
}

fn parse_env<T: FromStr + Copy + Debug>(key: &str, fallback: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring unparsable {key}={raw}, using {fallback:?}");
                fallback
            }
        },
        Err(_) => fallback,
    }
}
