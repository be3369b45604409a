//! Request and response interception rules
//!
//! Outgoing requests carry `Authorization: Bearer <access token>` whenever the
//! session holds one. A 401 on the first attempt moves the request into
//! [`AttemptState::Refreshing`]: the access token is refreshed once and the
//! request is replayed. Anything that fails after that is returned as is.
//!
//! Exempt from the refresh flow:
//! - the refresh call itself, which runs on a separate client
//!   ([`RefreshClient`](super::refresh::RefreshClient)) and never carries a
//!   bearer header
//! - login and registration, where a 401 means bad credentials

use reqwest::{RequestBuilder, header};

/// Where a request is in the retry-once cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// First attempt, a 401 may still be recovered
    Initial,
    /// The token was refreshed and the request replayed; no further retries
    Refreshing,
}

/// Whether a 401 response should trigger the refresh flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    RefreshOnUnauthorized,
    Exempt,
}

/// Attach the access token, if any, as a bearer credential
pub fn attach_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.header(header::AUTHORIZATION, bearer_value(token)),
        None => request,
    }
}

pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attaches_header_when_token_present() {
        let client = reqwest::Client::new();
        let request = attach_bearer(client.get("http://localhost/api/todos"), Some("abc"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(header::AUTHORIZATION).unwrap(),
            "Bearer abc"
        );
    }

    #[test]
    fn test_no_header_without_token() {
        let client = reqwest::Client::new();
        let request = attach_bearer(client.get("http://localhost/api/todos"), None)
            .build()
            .unwrap();
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }
}
