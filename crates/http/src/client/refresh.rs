//! Access token refresh call

use super::error::ClientError;
use crate::types::{RefreshRequest, RefreshResponse};
use reqwest::Client;
use tracing::debug;

pub const REFRESH_PATH: &str = "/api/auth/refresh";

/// Client for `POST /api/auth/refresh`.
///
/// Holds its own HTTP client and bypasses the interceptors entirely.
#[derive(Clone)]
pub struct RefreshClient {
    client: Client,
    base_url: String,
}

impl RefreshClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Exchange a refresh token for a new access token
    pub async fn refresh(&self, refresh_token: Option<String>) -> Result<String, ClientError> {
        let refresh_token = refresh_token
            .ok_or_else(|| ClientError::AuthenticationFailed("no refresh token stored".into()))?;

        debug!("requesting new access token");
        let response = self
            .client
            .post(format!("{}{}", self.base_url, REFRESH_PATH))
            .json(&RefreshRequest { refresh_token })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }

        let body: RefreshResponse = response.json().await?;
        if body.access_token.is_empty() {
            return Err(ClientError::AuthenticationFailed(
                "refresh returned an empty access token".into(),
            ));
        }
        Ok(body.access_token)
    }
}
