//! Frontend configuration

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// API origin used when the build does not override it
    pub const API_BASE_URL: &'static str = tasklist_http::client::config::DEFAULT_BASE_URL;

    /// Compile-time override, e.g. `TASKLIST_API_URL=http://localhost:5000 trunk build`
    pub fn api_base_url() -> &'static str {
        option_env!("TASKLIST_API_URL").unwrap_or(Self::API_BASE_URL)
    }

    /// Path the browser is sent to when the session cannot be recovered
    pub const LOGIN_PATH: &'static str = "/login";
}
