use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("No patch versions match{} in {repository}", of_version(.superior))]
    NoPatchVersionsMatch {
        repository: String,
        superior: Option<String>,
    },

    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),
}

fn of_version(superior: &Option<String>) -> String {
    superior
        .as_deref()
        .map(|s| format!(" version {s}"))
        .unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
