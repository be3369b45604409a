//! Tasklist HTTP client

pub mod auth;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod refresh;
pub mod todos;

pub use config::ClientConfig;

use crate::session::Session;
use error::ClientError;
use interceptor::{AttemptState, RefreshPolicy};
use refresh::RefreshClient;
use reqwest::{Client, ClientBuilder, Method, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Callback run after the session has been torn down by a failed refresh.
/// The browser front end navigates to the login page from here.
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// A request as issued by a caller, kept so it can be replayed after a refresh
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Value>,
    policy: RefreshPolicy,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            policy: RefreshPolicy::RefreshOnUnauthorized,
        }
    }

    pub fn json(mut self, body: &impl serde::Serialize) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Surface a 401 to the caller instead of refreshing
    pub fn without_refresh(mut self) -> Self {
        self.policy = RefreshPolicy::Exempt;
        self
    }
}

/// Tasklist API client
///
/// Clones share the HTTP connection pool, the session and the refresh lock.
#[derive(Clone)]
pub struct TodoClient {
    client: Client,
    base_url: String,
    session: Session,
    refresher: RefreshClient,
    refresh_lock: Arc<Mutex<()>>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl TodoClient {
    /// Create a new client with default configuration and an in-memory session
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> TodoClientBuilder {
        TodoClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session this client reads and updates
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Issue a request through the interceptors and decode the JSON body
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        let mut request = ApiRequest::new(method, path);
        request.body = body;
        self.execute(&request).await
    }

    /// Send and decode the JSON body
    pub async fn execute<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// Send and discard the body
    pub async fn execute_empty(&self, request: &ApiRequest) -> Result<(), ClientError> {
        self.send(request).await.map(drop)
    }

    /// Run the request pipeline: attach the bearer token, send, and on a 401
    /// refresh the access token once and replay.
    pub async fn send(&self, request: &ApiRequest) -> Result<reqwest::Response, ClientError> {
        let mut state = AttemptState::Initial;
        let mut token = self.session.access_token();

        loop {
            let response = self.dispatch(request, token.as_deref()).await?;
            let status = response.status();
            debug!(method = %request.method, path = %request.path, %status, ?state, "response");

            if status.is_success() {
                return Ok(response);
            }

            match state {
                AttemptState::Initial
                    if status == StatusCode::UNAUTHORIZED
                        && request.policy == RefreshPolicy::RefreshOnUnauthorized =>
                {
                    state = AttemptState::Refreshing;
                    token = Some(self.recover_session(token.as_deref()).await?);
                }
                _ => return Err(ClientError::from_response(response).await),
            }
        }
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.client.request(request.method.clone(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let builder = interceptor::attach_bearer(builder, token);
        Ok(builder.send().await?)
    }

    /// Obtain a usable access token after `stale` was rejected.
    ///
    /// Refreshes are single-flight. A caller that waited on the lock while
    /// another request refreshed picks up the stored token instead of spending
    /// the refresh token a second time.
    async fn recover_session(&self, stale: Option<&str>) -> Result<String, ClientError> {
        let _guard = self.refresh_lock.lock().await;

        let current = self.session.access_token();
        if current.as_deref() != stale {
            return match current {
                Some(token) => {
                    debug!("access token already refreshed by a concurrent request");
                    Ok(token)
                }
                None => Err(ClientError::SessionExpired),
            };
        }

        match self.refresher.refresh(self.session.refresh_token()).await {
            Ok(token) => {
                self.session.replace_access_token(&token)?;
                debug!("access token refreshed");
                Ok(token)
            }
            Err(error) => {
                warn!(%error, "token refresh failed, ending session");
                self.expire_session();
                Err(ClientError::SessionExpired)
            }
        }
    }

    fn expire_session(&self) {
        if let Err(error) = self.session.clear() {
            warn!(%error, "failed to clear session store");
        }
        if let Some(hook) = &self.on_session_expired {
            hook();
        }
    }
}

/// Builder for TodoClient
#[derive(Default)]
pub struct TodoClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    session: Option<Session>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl TodoClientBuilder {
    /// Start from a loaded configuration
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: Some(config.base_url.clone()),
            timeout: config.timeout(),
            user_agent: Some(config.user_agent.clone()),
            ..Self::default()
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use an existing session instead of a fresh in-memory one
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Run `hook` whenever a failed refresh ends the session
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<TodoClient, ClientError> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| config::DEFAULT_USER_AGENT.to_string());

        let client = build_http_client(&user_agent, self.timeout)?;
        // The refresh call gets its own client so it can never be intercepted.
        let refresher = RefreshClient::new(
            build_http_client(&user_agent, self.timeout)?,
            base_url.clone(),
        );

        Ok(TodoClient {
            client,
            base_url,
            session: self.session.unwrap_or_else(Session::in_memory),
            refresher,
            refresh_lock: Arc::new(Mutex::new(())),
            on_session_expired: self.on_session_expired,
        })
    }
}

fn build_http_client(user_agent: &str, timeout: Option<Duration>) -> Result<Client, ClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new()
            .default_headers(headers)
            .user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?
    };

    Ok(client)
}
