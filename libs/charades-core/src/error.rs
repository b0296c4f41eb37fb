//! Error types for charades-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Failures of a single quote-generation call.
///
/// These never reach the player: the controller logs them and serves a
/// fallback question instead.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("generation service returned status {status}: {message}")]
    Service { status: u16, message: String },

    #[error("generation timed out after {0} seconds")]
    Timeout(u64),

    #[error("malformed quote response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("quote response is missing the quote text")]
    EmptyQuote,

    #[error("generator unavailable: {0}")]
    Unavailable(String),
}

/// Misuse of the session state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session has not been started")]
    NotStarted,

    #[error("a question request is already in flight")]
    FetchInFlight,

    #[error("no question is waiting for an answer")]
    NotAwaitingAnswer,

    #[error("guess is empty")]
    EmptyGuess,

    #[error("response belongs to a session that has since been reset")]
    StaleResponse,
}
