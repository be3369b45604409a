//! Client configuration and initialization

use crate::config::AppConfig;
use crate::storage::BrowserSessionStore;
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};
pub use tasklist_http::ClientError;
use tasklist_http::{Session, TodoClient};
use web_sys::window;

/// Global client instance
static CLIENT: Lazy<Mutex<Option<TodoClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the shared client, building it on first use
pub fn api_client() -> Result<TodoClient, ClientError> {
    let mut client_lock = CLIENT.lock().unwrap_or_else(|e| e.into_inner());

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = TodoClient::builder()
        .base_url(AppConfig::api_base_url())
        .session(Session::new(Arc::new(BrowserSessionStore)))
        .on_session_expired(redirect_to_login)
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Route guard check. Only the presence of an access token is tested.
pub fn has_session() -> bool {
    api_client().is_ok_and(|client| client.is_authenticated())
}

/// Hard navigation to the login page, dropping all in-memory view state
fn redirect_to_login() {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(AppConfig::LOGIN_PATH) {
            tracing::error!("failed to redirect to login: {e:?}");
        }
    }
}
