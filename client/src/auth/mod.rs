pub mod error_body;
pub mod errors;

pub use error_body::{ErrorBody, ErrorDetail};
pub use errors::AuthError;

use crate::api::ApiClient;
use crate::session::Session;
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One login attempt's credentials. Created per submission and never
/// persisted; the password buffer is wiped on drop.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Manual Debug so the password never reaches a log line.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Serialize)]
struct RefreshTokenRequest<'a> {
    #[serde(rename = "refreshToken")]
    refresh_token: &'a str,
}

/// Translates auth actions into API calls. No business logic, no retry,
/// no caching; side effects are limited to the network request itself.
#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit credentials to the login endpoint. A successful response is
    /// the opaque session payload.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let url = self.api.endpoints().login();
        let payload = self.api.post_json(&url, credentials).await?;
        Ok(Session::new(payload))
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value, AuthError> {
        let url = self.api.endpoints().register();
        self.api.post_json(&url, request).await
    }

    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<serde_json::Value, AuthError> {
        let url = self.api.endpoints().forgot_password();
        self.api.post_json(&url, request).await
    }

    /// Exchange a refresh token for a fresh session. A blank token is a
    /// caller logic error and fails before any request is issued.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<Session, AuthError> {
        if refresh_token.trim().is_empty() {
            return Err(AuthError::MissingToken);
        }

        let url = self.api.endpoints().refresh_token();
        let payload = self
            .api
            .post_json(&url, &RefreshTokenRequest { refresh_token })
            .await?;
        Ok(Session::new(payload))
    }
}
