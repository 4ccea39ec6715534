//! Shared error types for the catalog harvester

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Unknown category: {input}")]
    UnknownCategory { input: String },
}
