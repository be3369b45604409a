//! Tasklist CLI - manage todos on a Tasklist server

mod commands;
mod config;
mod logging;
mod session_store;
mod state_dir;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use commands::Commands;
use config::CliSettings;
use session_store::FileSessionStore;
use state_dir::StateDir;
use std::path::PathBuf;
use std::sync::Arc;
use tasklist_http::{Session, TodoClientBuilder};
use tracing::{Level, debug, error, warn};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Manage your todos from the terminal")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Settings file (TOML, YAML or JSON)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Directory for settings and session data
    #[arg(short = 'd', long, global = true, env = "TASKLIST_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// API base URL, overriding the settings file
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.into(), cli.log_json)?;

    let state_dir = StateDir::resolve(cli.state_dir);
    let mut settings = CliSettings::load(cli.config.as_deref(), &state_dir)?;
    if let Some(url) = cli.api_url {
        settings.api.base_url = url;
    }
    debug!(?settings, "loaded settings");

    let store = FileSessionStore::open(settings.session_path(&state_dir));
    debug!("session file: {}", store.path().display());

    let client = TodoClientBuilder::from_config(&settings.api)
        .session(Session::new(Arc::new(store)))
        .on_session_expired(|| warn!("Session expired, run `tasklist login` again"))
        .build()
        .context("failed to build API client")?;

    if let Err(e) = cli.command.execute(&client).await {
        error!("Command failed: {e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
