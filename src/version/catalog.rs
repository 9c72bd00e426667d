//! Memoizing catalog of the versions a repository offers
//!
//! Every query asks the backend once per catalog and serves the answer from
//! memory afterwards. Cached answers are never refreshed, so a long-lived
//! catalog keeps reporting the repository state of its first queries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::version::backend::VersionBackend;
use crate::version::error::BackendError;
use crate::version::labels::VersionLabels;

/// Default name of the unstable (development) version
pub const LAST_UNSTABLE_VERSION: &str = "master";

/// Answers version discovery queries about one repository, caching each answer
pub struct VersionCatalog {
    backend: Arc<dyn VersionBackend>,
    repository: String,
    last_unstable_version: String,
    labels: VersionLabels,
    all_minor_versions: Mutex<Option<Vec<String>>>,
    last_stable_minor_version: Mutex<Option<String>>,
    last_stable_patch_version: Mutex<Option<String>>,
    all_stable_minor_versions: Mutex<Option<Vec<String>>>,
    last_patch_versions_of: Mutex<HashMap<String, String>>,
    patch_versions: Mutex<Option<Vec<String>>>,
}

impl VersionCatalog {
    /// Create a catalog; the backend is not queried until the first question
    ///
    /// `last_unstable_version` defaults to [`LAST_UNSTABLE_VERSION`].
    pub fn new(
        backend: Arc<dyn VersionBackend>,
        repository: impl Into<String>,
        last_unstable_version: Option<&str>,
    ) -> Self {
        Self {
            backend,
            repository: repository.into(),
            last_unstable_version: last_unstable_version
                .unwrap_or(LAST_UNSTABLE_VERSION)
                .to_string(),
            labels: VersionLabels::default(),
            all_minor_versions: Mutex::new(None),
            last_stable_minor_version: Mutex::new(None),
            last_stable_patch_version: Mutex::new(None),
            all_stable_minor_versions: Mutex::new(None),
            last_patch_versions_of: Mutex::new(HashMap::new()),
            patch_versions: Mutex::new(None),
        }
    }

    /// Replace the labels used by [`Self::version_human_name`]
    pub fn with_labels(mut self, labels: VersionLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn last_unstable_version(&self) -> &str {
        &self.last_unstable_version
    }

    /// All minor versions taken from branches, the unstable version first
    ///
    /// Tags are intentionally ignored to keep the number of versions low.
    pub fn all_minor_versions(&self) -> Result<Vec<String>, BackendError> {
        memoized(&self.all_minor_versions, || {
            debug!("Reading minor versions of {}", self.repository);
            let branches = self
                .backend
                .all_minor_version_like_branches(&self.repository)?;
            let mut versions = Vec::with_capacity(branches.len() + 1);
            versions.push(self.last_unstable_version.clone());
            versions.extend(branches);
            Ok(versions)
        })
    }

    /// Last stable minor version, or the unstable version if there is none
    pub fn last_stable_minor_version(&self) -> Result<String, BackendError> {
        memoized(&self.last_stable_minor_version, || {
            debug!("Reading last stable minor version of {}", self.repository);
            let version = self.backend.last_stable_minor_version(&self.repository)?;
            Ok(version
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| self.last_unstable_version.clone()))
        })
    }

    /// Last stable patch version, or the unstable version if no tag is a patch version
    pub fn last_stable_patch_version(&self) -> Result<String, BackendError> {
        memoized(&self.last_stable_patch_version, || {
            debug!("Reading last stable patch version of {}", self.repository);
            match self.backend.last_tag_patch_version(&self.repository) {
                Ok(version) => Ok(version),
                Err(BackendError::NoPatchVersionsMatch { .. }) => {
                    Ok(self.last_unstable_version.clone())
                }
                Err(e) => Err(e),
            }
        })
    }

    /// Minor versions taken from branches, without the unstable version
    pub fn all_stable_minor_versions(&self) -> Result<Vec<String>, BackendError> {
        memoized(&self.all_stable_minor_versions, || {
            debug!("Reading stable minor versions of {}", self.repository);
            self.backend
                .all_minor_version_like_branches(&self.repository)
        })
    }

    /// Exact, case-sensitive lookup in [`Self::all_minor_versions`]
    pub fn has_minor_version(&self, minor_version: &str) -> Result<bool, BackendError> {
        Ok(self
            .all_minor_versions()?
            .iter()
            .any(|v| v == minor_version))
    }

    pub fn version_human_name(&self, version: &str) -> String {
        self.labels
            .human_name(version, &self.last_unstable_version)
    }

    /// Last patch version within `superior_version`, cached per superior version
    pub fn last_patch_version_of(&self, superior_version: &str) -> Result<String, BackendError> {
        let mut cache = lock(&self.last_patch_versions_of);
        if let Some(version) = cache.get(superior_version) {
            return Ok(version.clone());
        }

        debug!(
            "Reading last patch version of {} in {}",
            superior_version, self.repository
        );
        let version = self
            .backend
            .last_tag_patch_version_of(superior_version, &self.repository)?;
        cache.insert(superior_version.to_string(), version.clone());

        Ok(version)
    }

    /// All patch versions taken from tags
    pub fn patch_versions(&self) -> Result<Vec<String>, BackendError> {
        memoized(&self.patch_versions, || {
            debug!("Reading patch versions of {}", self.repository);
            self.backend.tag_patch_versions(&self.repository)
        })
    }
}

impl std::fmt::Debug for VersionCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionCatalog")
            .field("repository", &self.repository)
            .field("last_unstable_version", &self.last_unstable_version)
            .finish_non_exhaustive()
    }
}

/// A slot only ever holds nothing or a complete value, so a poisoned lock is still usable
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Return the cached value, or compute and cache it while holding the slot's lock
///
/// Errors are returned without being cached.
fn memoized<T, F>(slot: &Mutex<Option<T>>, compute: F) -> Result<T, BackendError>
where
    T: Clone,
    F: FnOnce() -> Result<T, BackendError>,
{
    let mut cached = lock(slot);
    if let Some(value) = cached.as_ref() {
        return Ok(value.clone());
    }

    let value = compute()?;
    *cached = Some(value.clone());

    Ok(value)
}
