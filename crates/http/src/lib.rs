//! Tasklist HTTP client
//!
//! A session-aware client for the Tasklist REST service. Every call goes
//! through a request interceptor that attaches the stored bearer token and a
//! response interceptor that refreshes an expired access token once and
//! replays the request.

pub mod board;
pub mod client;
pub mod session;
pub mod types;

pub use board::{TodoBoard, TodoFilter, TodoStats};
pub use client::{ClientConfig, TodoClient, TodoClientBuilder, error::ClientError};
pub use session::{MemorySessionStore, Session, SessionStore};
pub use types::{Credentials, Todo, TokenPair};
