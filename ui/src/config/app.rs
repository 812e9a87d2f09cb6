use super::{api::ApiConfig, auth::AuthConfig, ui::UIConfig};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    api: ApiConfig,
    #[serde(default)]
    auth: AuthConfig,
    #[serde(default)]
    ui: UIConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    pub fn ui(&self) -> &UIConfig {
        &self.ui
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
