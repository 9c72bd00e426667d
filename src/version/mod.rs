//! Version discovery layer over a version-control repository
//!
//! Minor versions are read from branches, patch versions from tags. The
//! catalog answers questions like "what is the latest stable version" and
//! remembers every answer for its lifetime.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────▶│   Backend   │────▶│   Backends  │
//! │ (memoized)  │     │   (trait)   │     │    (git)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │   Labels    │                         │   Semver    │
//! │(human names)│                         │ (classify)  │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Memoizing query façade over a backend
//! - [`backend`]: Backend trait for reading version-like branches and tags
//! - [`backends`]: Concrete backend implementations (git2)
//! - [`labels`]: Human readable version names
//! - [`error`]: Error types for backend and config operations
//! - [`semver`]: Version-like name classification and ordering

pub mod backend;
pub mod backends;
pub mod catalog;
pub mod error;
pub mod labels;
pub mod semver;
