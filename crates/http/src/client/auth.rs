//! Authentication API client methods

use super::{ApiRequest, ClientError, TodoClient};
use crate::types::{Credentials, TokenPair};
use reqwest::Method;
use tracing::info;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

impl TodoClient {
    /// Log in and store the issued token pair, replacing any previous session
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ClientError> {
        let request = ApiRequest::new(Method::POST, LOGIN_PATH)
            .json(credentials)?
            .without_refresh();
        let tokens: TokenPair = self.execute(&request).await?;
        self.session().store_tokens(&tokens)?;
        info!(email = %credentials.email, "logged in");
        Ok(tokens)
    }

    /// Create an account.
    ///
    /// The response body belongs to the server. When it happens to contain a
    /// token pair the session is stored and returned, otherwise the caller is
    /// expected to log in.
    pub async fn register(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<TokenPair>, ClientError> {
        let request = ApiRequest::new(Method::POST, REGISTER_PATH)
            .json(credentials)?
            .without_refresh();
        let body = self.send(&request).await?.text().await?;
        info!(email = %credentials.email, "registered");

        match serde_json::from_str::<TokenPair>(&body) {
            Ok(tokens) => {
                self.session().store_tokens(&tokens)?;
                Ok(Some(tokens))
            }
            Err(_) => Ok(None),
        }
    }

    /// Forget the session
    pub fn logout(&self) -> Result<(), ClientError> {
        self.session().clear()?;
        info!("logged out");
        Ok(())
    }

    /// Route guard check: is an access token present? Validity is not checked.
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }
}
