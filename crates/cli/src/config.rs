//! CLI settings
//!
//! Read from an optional TOML/YAML/JSON file, then from `TASKLIST__*`
//! environment variables (`TASKLIST__API__BASE_URL`,
//! `TASKLIST__API__TIMEOUT_SECS`, `TASKLIST__SESSION_FILE`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tasklist_http::ClientConfig;

use crate::state_dir::StateDir;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    pub api: ClientConfig,

    /// Where tokens are kept between runs; defaults to the platform data dir
    pub session_file: Option<PathBuf>,
}

impl CliSettings {
    /// Load settings. An explicit `path` must exist; the default one may not.
    pub fn load(path: Option<&Path>, state_dir: &StateDir) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(state_dir.config_path()).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("TASKLIST").separator("__"))
            .build()
            .context("failed to read settings")?;

        settings
            .try_deserialize()
            .context("failed to parse settings")
    }

    pub fn session_path(&self, state_dir: &StateDir) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(|| state_dir.session_path())
    }
}
