//! Domain-specific error types and error handling.
//!
//! Every variant's `Display` output is the human-readable message handed to
//! the session handler, so messages are written for end users.

use thiserror::Error;

/// Generic message used when the backend rejects a session without details
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Core KYC client errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KycError {
    /// No usable response: connectivity, TLS, timeout
    #[error("{message}")]
    Transport { message: String },

    /// Backend answered with a well-formed failure
    #[error("{message}")]
    Backend { message: String },

    /// Backend reported a configuration problem on its side
    #[error("Configuration error. Contact your service representative.")]
    BackendConfiguration,

    /// Non-success HTTP status without an extractable message
    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },

    /// Response body could not be parsed
    #[error("{message}")]
    Parse { message: String },

    /// Backend response did not carry a session id
    #[error("Failed to get valid session id.")]
    MissingSessionId,

    /// Backend moved into a state the flow does not expect
    #[error("{message}")]
    UnexpectedState { message: String },

    /// Session could not be built from the supplied captures
    #[error("Invalid capture: {message}")]
    InvalidCapture { message: String },

    /// Setting write rejected
    #[error("Invalid setting value: {message}")]
    InvalidSetting { message: String },

    /// Token does not look like a JSON web token with an expiration
    #[error("Invalid JSON web token: {message}")]
    InvalidToken { message: String },

    /// Session ended without producing an outcome
    #[error("Verification session ended unexpectedly.")]
    SessionAborted,

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl KycError {
    /// Whether the error happened before the backend produced an answer
    pub fn is_transport(&self) -> bool {
        matches!(self, KycError::Transport { .. })
    }
}

pub type KycResult<T> = Result<T, KycError>;
