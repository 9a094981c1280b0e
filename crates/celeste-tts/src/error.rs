use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Errors surfaced by the TTS package
///
/// Lookups that find nothing are not errors: the registry answers them with
/// `None` or an empty list.
#[derive(Debug, Error)]
pub enum TtsError {
    /// Unknown provider identifier, unmapped provider or missing credential
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The backend call failed, the cause is kept for diagnostics
    #[error("Speech synthesis failed: {0}")]
    SynthesisFailed(#[from] SynthesisError),
}

impl TtsError {
    pub const fn is_synthesis_failure(&self) -> bool {
        matches!(self, Self::SynthesisFailed(_))
    }

    /// Underlying backend failure, if this is one
    pub const fn synthesis_cause(&self) -> Option<&SynthesisError> {
        match self {
            Self::SynthesisFailed(cause) => Some(cause),
            Self::ConfigError(_) => None,
        }
    }
}

/// Why a backend call failed
///
/// Retry policy belongs to the caller, nothing here is retried.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Missing or rejected credential
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Backend rejected the request (e.g. unknown voice name)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Quota exhausted or rate limit hit
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success status
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Response did not carry a usable audio payload
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Caller-imposed deadline expired
    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

impl SynthesisError {
    /// Classify a non-success HTTP status returned by a backend
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed(message),
            400 | 404 | 422 => Self::InvalidRequest(message),
            429 => Self::RateLimited(message),
            _ => Self::ProviderApiError { status, message },
        }
    }
}
