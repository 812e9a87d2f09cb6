/// Builds full URLs for the Moivon API from a configured base URL.
///
/// The base URL may or may not carry a trailing slash; built URLs are
/// normalized either way.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    pub fn register(&self) -> String {
        format!("{}/auth/register", self.base_url)
    }

    pub fn forgot_password(&self) -> String {
        format!("{}/auth/forgot-password", self.base_url)
    }

    pub fn refresh_token(&self) -> String {
        format!("{}/auth/refresh-token", self.base_url)
    }
}

/// Resolve a public asset path (e.g. the logo image) against the public
/// asset base.
pub fn prepare_public_folder(public_base: &str, asset_path: &str) -> String {
    let base = public_base.trim_end_matches('/');
    let path = asset_path.trim_start_matches('/');
    format!("{base}/{path}")
}
