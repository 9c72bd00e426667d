use serde::Deserialize;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::version::catalog::LAST_UNSTABLE_VERSION;
use crate::version::error::ConfigError;
use crate::version::labels::VersionLabels;

const APP_NAME: &str = "web-versions";

/// Application configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Repository whose branches and tags define the versions
    pub repository_dir: PathBuf,
    /// Name of the unstable (development) version
    pub last_unstable_version: String,
    pub labels: VersionLabels,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            repository_dir: PathBuf::from("."),
            last_unstable_version: LAST_UNSTABLE_VERSION.to_string(),
            labels: VersionLabels::default(),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading config from {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the given file, else the default config file if present, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = config_path();
                if default_path.is_file() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Returns the path to the default config file.
/// Uses $XDG_CONFIG_HOME/web-versions if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/web-versions,
/// or ./web-versions if neither is available.
pub fn config_path() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
    .join("config.json")
}

/// Returns the path to the log file.
/// Uses $XDG_DATA_HOME/web-versions, falling back to ~/.local/share/web-versions.
pub fn log_path() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
    .join("web-versions.log")
}

fn app_dir_with_env(
    xdg_dir: Option<String>,
    home_dir: Option<PathBuf>,
    home_subdir: &str,
) -> PathBuf {
    let base_dir = xdg_dir
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_subdir)))
        .unwrap_or_else(|| PathBuf::from("."));

    base_dir.join(APP_NAME)
}
