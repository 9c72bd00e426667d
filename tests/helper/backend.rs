//! Backend test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use web_versions::version::backend::VersionBackend;
use web_versions::version::error::BackendError;

/// Backend method a [`StubBackend`] was asked through
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Call {
    MinorVersionLikeBranches,
    LastStableMinorVersion,
    LastTagPatchVersion,
    LastTagPatchVersionOf(String),
    TagPatchVersions,
}

/// Stub backend serving fixed answers and counting every call
#[derive(Default)]
pub struct StubBackend {
    minor_branches: Vec<String>,
    last_stable_minor: Option<String>,
    last_tag_patch: Option<String>,
    last_tag_patch_of: HashMap<String, String>,
    patch_versions: Vec<String>,
    missing_repository: bool,
    calls: Mutex<Vec<Call>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minor_branches(mut self, branches: Vec<&str>) -> Self {
        self.minor_branches = branches.into_iter().map(str::to_string).collect();
        self
    }

    pub fn with_last_stable_minor(mut self, version: &str) -> Self {
        self.last_stable_minor = Some(version.to_string());
        self
    }

    pub fn with_last_tag_patch(mut self, version: &str) -> Self {
        self.last_tag_patch = Some(version.to_string());
        self
    }

    pub fn with_last_tag_patch_of(mut self, superior: &str, version: &str) -> Self {
        self.last_tag_patch_of
            .insert(superior.to_string(), version.to_string());
        self
    }

    pub fn with_patch_versions(mut self, versions: Vec<&str>) -> Self {
        self.patch_versions = versions.into_iter().map(str::to_string).collect();
        self
    }

    /// Every call fails as if the repository did not exist
    pub fn with_missing_repository(mut self) -> Self {
        self.missing_repository = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, call: &Call) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: Call, repository: &str) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(call);
        if self.missing_repository {
            return Err(BackendError::RepositoryNotFound(repository.to_string()));
        }
        Ok(())
    }
}

impl VersionBackend for StubBackend {
    fn all_minor_version_like_branches(
        &self,
        repository: &str,
    ) -> Result<Vec<String>, BackendError> {
        self.record(Call::MinorVersionLikeBranches, repository)?;
        Ok(self.minor_branches.clone())
    }

    fn last_stable_minor_version(&self, repository: &str) -> Result<Option<String>, BackendError> {
        self.record(Call::LastStableMinorVersion, repository)?;
        Ok(self.last_stable_minor.clone())
    }

    fn last_tag_patch_version(&self, repository: &str) -> Result<String, BackendError> {
        self.record(Call::LastTagPatchVersion, repository)?;
        self.last_tag_patch
            .clone()
            .ok_or_else(|| BackendError::NoPatchVersionsMatch {
                repository: repository.to_string(),
                superior: None,
            })
    }

    fn last_tag_patch_version_of(
        &self,
        superior_version: &str,
        repository: &str,
    ) -> Result<String, BackendError> {
        self.record(
            Call::LastTagPatchVersionOf(superior_version.to_string()),
            repository,
        )?;
        self.last_tag_patch_of
            .get(superior_version)
            .cloned()
            .ok_or_else(|| BackendError::NoPatchVersionsMatch {
                repository: repository.to_string(),
                superior: Some(superior_version.to_string()),
            })
    }

    fn tag_patch_versions(&self, repository: &str) -> Result<Vec<String>, BackendError> {
        self.record(Call::TagPatchVersions, repository)?;
        Ok(self.patch_versions.clone())
    }
}
