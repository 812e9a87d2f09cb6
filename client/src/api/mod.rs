pub mod endpoints;

pub use endpoints::{Endpoints, prepare_public_folder};

use crate::auth::AuthError;
use crate::auth::error_body::ErrorBody;
use serde::Serialize;

/// Shared HTTP client for the Moivon API.
///
/// Owns the `reqwest::Client` and the endpoint builder. All service calls
/// go through [`post_json`](ApiClient::post_json), which classifies the
/// outcome into a success payload, a structured API error, or a transport
/// error. No retry, no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(endpoints: Endpoints, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// POST a JSON body and return the response payload.
    ///
    /// Non-success statuses are decoded into [`ErrorBody`] and surfaced as
    /// [`AuthError::Api`]; a body that cannot be decoded still produces an
    /// `Api` error with an empty detail so the caller falls back to the
    /// generic message.
    pub async fn post_json<B>(&self, url: &str, body: &B) -> Result<serde_json::Value, AuthError>
    where
        B: Serialize + ?Sized,
    {
        log::debug!("POST {url}");

        let response = self
            .http_client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .json::<ErrorBody>()
                .await
                .unwrap_or_else(|_| ErrorBody::empty());

            log::warn!("API request to {url} failed with status {status}");
            return Err(AuthError::Api {
                status: status.as_u16(),
                body: error_body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AuthError::UnexpectedResponse(e.to_string()))
    }
}
