//! Error types for deck generation.

use thiserror::Error;

/// Message shown to the user for any generation failure.
pub const USER_FACING_MESSAGE: &str = "Couldn't generate facts. Check your connection or API key.";

/// Errors that can occur while producing a deck.
///
/// The UI never inspects the variant; every failure collapses into
/// [`USER_FACING_MESSAGE`]. Variants exist for logging.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Blank topic, rejected before any request is made
    #[error("Topic must not be empty")]
    EmptyTopic,

    /// Network or client-level failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Generation API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The payload was not valid JSON or violated the schema
    #[error("Failed to parse generated deck: {0}")]
    Parse(String),

    /// Strict mode only: the payload contained no facts
    #[error("Generated deck contained no facts")]
    EmptyDeck,
}

impl GenerationError {
    /// The single user-facing message for every variant.
    pub fn user_message(&self) -> &'static str {
        USER_FACING_MESSAGE
    }
}
