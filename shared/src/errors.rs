//! Shared error types for the match graphics system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid format value: {field} = {value}")]
    InvalidFormat { field: String, value: String },

    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Message protocol error: {message}")]
    ProtocolError { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
