//! Shared test utilities

#![allow(dead_code)]

pub mod backend;
pub mod git;

pub use backend::{Call, StubBackend};
pub use git::GitRepository;
