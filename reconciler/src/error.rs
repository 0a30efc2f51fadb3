//! Reconciler-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconcilerError {
    #[error("Persistence gateway request failed: {message}")]
    GatewayFailure { message: String },

    #[error("Gateway reply carried no id for the inserted {collection} document")]
    MissingInsertId { collection: String },

    #[error("State broadcast reached {subscribers} listeners")]
    BroadcastFailed { subscribers: usize },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}

pub type ReconcilerResult<T> = Result<T, ReconcilerError>;
