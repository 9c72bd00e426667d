//! Backend implementations for reading versions of a repository

pub mod git;

pub use git::GitBackend;
