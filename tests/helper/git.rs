//! Git repository fixtures

use std::path::Path;

use git2::{Oid, Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

/// Throwaway repository with one commit on `master`
pub struct GitRepository {
    dir: TempDir,
    repo: Repository,
    head: Oid,
}

impl GitRepository {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init_opts(
            dir.path(),
            RepositoryInitOptions::new().initial_head("master"),
        )
        .unwrap();

        let head = {
            let signature = Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &signature, &signature, "initial", &tree, &[])
                .unwrap()
        };

        Self { dir, repo, head }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn location(&self) -> String {
        self.path().to_str().unwrap().to_string()
    }

    pub fn with_branches(self, branches: &[&str]) -> Self {
        {
            let commit = self.repo.find_commit(self.head).unwrap();
            for branch in branches {
                self.repo.branch(branch, &commit, false).unwrap();
            }
        }
        self
    }

    pub fn with_tags(self, tags: &[&str]) -> Self {
        {
            let commit = self.repo.find_object(self.head, None).unwrap();
            for tag in tags {
                self.repo.tag_lightweight(tag, &commit, false).unwrap();
            }
        }
        self
    }

    /// Adds a remote-tracking ref `refs/remotes/<remote>/<branch>`, creating the remote if needed
    pub fn with_remote_branch(self, remote: &str, branch: &str) -> Self {
        if self.repo.find_remote(remote).is_err() {
            self.repo
                .remote(remote, &format!("https://example.com/{remote}/web.git"))
                .unwrap();
        }
        let refname = format!("refs/remotes/{remote}/{branch}");
        self.repo
            .reference(&refname, self.head, true, "remote-tracking branch")
            .unwrap();
        self
    }
}
