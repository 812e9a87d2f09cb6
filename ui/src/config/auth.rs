use serde::Deserialize;
use std::time::Duration;

/// Which login strategy the workflow uses. Both are first-class; there is
/// no fallback from one to the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStrategyKind {
    /// Submit credentials to the remote auth endpoint.
    #[default]
    Remote,
    /// Compare against fixed local credentials after an artificial delay.
    Mock,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    strategy: AuthStrategyKind,
    mock_email: Option<String>,
    mock_password: Option<String>,
    mock_delay_ms: Option<u64>,
}

impl AuthConfig {
    pub fn strategy(&self) -> AuthStrategyKind {
        self.strategy
    }

    pub fn mock_email(&self) -> &str {
        self.mock_email.as_deref().unwrap_or("admin@moivon.com")
    }

    pub fn mock_password(&self) -> &str {
        self.mock_password.as_deref().unwrap_or("admin@123")
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms.unwrap_or(1200))
    }
}
