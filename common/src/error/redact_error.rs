use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when something attempts to serialize a [`crate::RedactedApiKey`].
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}
