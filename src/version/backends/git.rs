//! Backend reading branches and tags with git2

use git2::{BranchType, ErrorCode, Repository};
use tracing::{debug, warn};

use crate::version::backend::VersionBackend;
use crate::version::error::BackendError;
use crate::version::semver::{
    belongs_to, is_minor_version_like, is_patch_version_like, sort_newest_first,
};

/// Backend implementation opening the repository with libgit2
#[derive(Debug, Clone, Copy, Default)]
pub struct GitBackend;

impl GitBackend {
    pub fn new() -> Self {
        Self
    }

    fn open(repository: &str) -> Result<Repository, BackendError> {
        debug!("Opening repository {}", repository);

        Repository::open(repository).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                BackendError::RepositoryNotFound(repository.to_string())
            } else {
                warn!("Failed to open repository {}: {}", repository, e);
                BackendError::Git(e)
            }
        })
    }

    /// Names of local branches and of remote-tracking branches without their remote
    fn branch_names(repo: &Repository) -> Result<Vec<String>, BackendError> {
        let mut names = Vec::new();

        for branch in repo.branches(None)? {
            let (branch, branch_type) = branch?;
            // Non UTF-8 names cannot be versions
            let Some(name) = branch.name()? else {
                continue;
            };

            match branch_type {
                BranchType::Local => names.push(name.to_string()),
                BranchType::Remote => {
                    let Some(refname) = branch.get().name() else {
                        continue;
                    };
                    let remote = match repo.branch_remote_name(refname) {
                        Ok(remote) => remote,
                        Err(e) => {
                            debug!("Skipping {} without a known remote: {}", refname, e);
                            continue;
                        }
                    };
                    let Some(remote) = remote.as_str() else {
                        continue;
                    };
                    if let Some(local) = name
                        .strip_prefix(remote)
                        .and_then(|rest| rest.strip_prefix('/'))
                    {
                        names.push(local.to_string());
                    }
                }
            }
        }

        Ok(names)
    }
}

impl VersionBackend for GitBackend {
    fn all_minor_version_like_branches(
        &self,
        repository: &str,
    ) -> Result<Vec<String>, BackendError> {
        let repo = Self::open(repository)?;
        let mut versions: Vec<String> = Self::branch_names(&repo)?
            .into_iter()
            .filter(|name| is_minor_version_like(name))
            .collect();
        // Local and remote-tracking branches share names
        versions.sort();
        versions.dedup();
        sort_newest_first(&mut versions);

        Ok(versions)
    }

    fn last_stable_minor_version(&self, repository: &str) -> Result<Option<String>, BackendError> {
        Ok(self
            .all_minor_version_like_branches(repository)?
            .into_iter()
            .next())
    }

    fn last_tag_patch_version(&self, repository: &str) -> Result<String, BackendError> {
        self.tag_patch_versions(repository)?
            .into_iter()
            .next()
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
        self.tag_patch_versions(repository)?
            .into_iter()
            .find(|tag| belongs_to(tag, superior_version))
            .ok_or_else(|| BackendError::NoPatchVersionsMatch {
                repository: repository.to_string(),
                superior: Some(superior_version.to_string()),
            })
    }

    fn tag_patch_versions(&self, repository: &str) -> Result<Vec<String>, BackendError> {
        let repo = Self::open(repository)?;
        let mut tags: Vec<String> = repo
            .tag_names(None)?
            .iter()
            .flatten()
            .filter(|tag| is_patch_version_like(tag))
            .map(str::to_string)
            .collect();
        sort_newest_first(&mut tags);

        Ok(tags)
    }
}
