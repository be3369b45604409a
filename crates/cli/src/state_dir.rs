//! Platform-specific state directory management

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::warn;

/// Locates the CLI's configuration and session files
pub struct StateDir {
    project_dirs: Option<ProjectDirs>,
    /// Override directory for testing or custom installations
    override_dir: Option<PathBuf>,
}

impl StateDir {
    pub fn new() -> Self {
        let project_dirs = ProjectDirs::from("com", "Tasklist", "tasklist");
        if project_dirs.is_none() {
            warn!("Failed to determine platform-specific directories, will use fallback");
        }
        Self {
            project_dirs,
            override_dir: None,
        }
    }

    pub fn with_override(path: impl Into<PathBuf>) -> Self {
        Self {
            project_dirs: None,
            override_dir: Some(path.into()),
        }
    }

    /// Use `path` if given, else the platform directories
    pub fn resolve(path: Option<PathBuf>) -> Self {
        path.map_or_else(Self::new, Self::with_override)
    }

    pub fn config_dir(&self) -> PathBuf {
        if let Some(override_dir) = &self.override_dir {
            return override_dir.join("config");
        }

        match &self.project_dirs {
            Some(project_dirs) => project_dirs.config_dir().to_path_buf(),
            None => PathBuf::from("./config"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        if let Some(override_dir) = &self.override_dir {
            return override_dir.join("data");
        }

        match &self.project_dirs {
            Some(project_dirs) => project_dirs.data_dir().to_path_buf(),
            None => PathBuf::from("./data"),
        }
    }

    /// Optional settings file
    pub fn config_path(&self) -> PathBuf {
        self.config_dir().join("config.toml")
    }

    /// Default location of the stored tokens
    pub fn session_path(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }
}

impl Default for StateDir {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_paths() {
        let state_dir = StateDir::with_override("/tmp/tasklist");
        assert_eq!(
            state_dir.config_path(),
            PathBuf::from("/tmp/tasklist/config/config.toml")
        );
        assert_eq!(
            state_dir.session_path(),
            PathBuf::from("/tmp/tasklist/data/session.json")
        );
    }
}
