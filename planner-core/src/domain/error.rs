//! Error taxonomy
//!
//! Every failure degrades the current view only; nothing here is fatal.

use thiserror::Error;

/// Common result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Planner-level errors
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Request failed or came back non-2xx
    #[error("Network error: {0}")]
    Network(#[from] ApiError),

    /// Action requiring sign-in attempted without a session
    #[error("Please sign in to continue")]
    Unauthenticated,

    /// Input rejected before any call is made
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Identity provider refused the sign-in or sign-out
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Failure talking to the travel API.
///
/// Callers treat all variants alike; the split only feeds the log line.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API error: {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    #[error("unreadable response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl ApiError {
    /// Endpoint path the failing call was made against
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Status { endpoint, .. }
            | ApiError::Transport { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}
