use crate::auth::error_body::ErrorBody;
use thiserror::Error;

/// Fallback shown when the server gives nothing usable back.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

/// Errors produced by the authentication service calls.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Refresh was requested without a token. Fails before any network
    /// call; this is a caller logic error, not a user-facing condition.
    #[error("No token found!")]
    MissingToken,

    /// The request never produced a server response (DNS, TLS, timeouts).
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status and a structured
    /// error body.
    #[error("API error (HTTP {status})")]
    Api { status: u16, body: ErrorBody },

    /// A success status whose payload could not be decoded.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl AuthError {
    /// Message to show the user: the first value of the first field-error
    /// object, else the plain error string, else a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Api { body, .. } => body.user_message(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}
