//! Backend trait for reading version-like branches and tags of a repository

#[cfg(test)]
use mockall::automock;

use crate::version::error::BackendError;

/// Trait for querying the versions a version-control repository defines
///
/// Minor versions come from branches (e.g. "1.2"), patch versions from tags
/// (e.g. "1.2.3"). Every method takes the repository location it reads from.
#[cfg_attr(test, automock)]
pub trait VersionBackend: Send + Sync {
    /// Lists branch names that look like a minor version
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Minor versions, ordered from newest to oldest
    /// * `Err(BackendError)` - If the repository cannot be read
    fn all_minor_version_like_branches(
        &self,
        repository: &str,
    ) -> Result<Vec<String>, BackendError>;

    /// Returns the newest minor version branch, or `None` if there is none
    fn last_stable_minor_version(&self, repository: &str) -> Result<Option<String>, BackendError>;

    /// Returns the newest patch version tag
    ///
    /// Fails with [`BackendError::NoPatchVersionsMatch`] when no tag looks like a patch version.
    fn last_tag_patch_version(&self, repository: &str) -> Result<String, BackendError>;

    /// Returns the newest patch version tag within `superior_version` (e.g. "1.2" -> "1.2.7")
    ///
    /// Fails with [`BackendError::NoPatchVersionsMatch`] when no tag belongs to it.
    fn last_tag_patch_version_of(
        &self,
        superior_version: &str,
        repository: &str,
    ) -> Result<String, BackendError>;

    /// Lists all patch version tags, ordered from newest to oldest
    fn tag_patch_versions(&self, repository: &str) -> Result<Vec<String>, BackendError>;
}
