use std::fmt::Display;

/// Application-wide error types for the Moivon terminal user interface.
///
/// Every failure here is attempt-scoped and recoverable: the user can
/// always retry the workflow from the idle state. Errors that reach the
/// user go through the notification system; the rest are logged.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Moivon API call failures (transport or server-side).
    Api(String),

    /// Authentication failures surfaced by the auth service or strategy.
    Auth(String),

    /// UI component lifecycle and rendering errors.
    Component(String),

    /// Invalid workflow state transitions.
    State(String),

    /// Configuration loading and validation errors.
    Config(String),

    /// Durable session storage failures.
    Storage(String),

    /// Inter-component channel failures.
    Channel(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Api(msg) => write!(f, "API Error: {msg}"),
            AppError::Auth(msg) => write!(f, "Authentication Error: {msg}"),
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            AppError::Channel(msg) => write!(f, "Channel Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<moivon_client::AuthError> for AppError {
    fn from(err: moivon_client::AuthError) -> Self {
        AppError::Auth(err.to_string())
    }
}

impl From<moivon_client::session::SessionStoreError> for AppError {
    fn from(err: moivon_client::session::SessionStoreError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
