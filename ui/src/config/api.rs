use serde::Deserialize;

/// Remote API endpoints and public asset locations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    base_url: Option<String>,
    public_base_url: Option<String>,
}

impl ApiConfig {
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or("https://api.moivon.com/v1")
    }

    pub fn public_base_url(&self) -> &str {
        self.public_base_url
            .as_deref()
            .unwrap_or("https://moivon.com/public")
    }
}
