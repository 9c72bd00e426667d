//! Reader of git branches and tags defining the available versions of a web
//!
//! # Modules
//!
//! - [`version`]: Version catalog, backends and version name handling
//! - [`config`]: Configuration file and default paths
//! - [`cli`]: Command-line queries
//! - [`logging`]: Log file setup

pub mod cli;
pub mod config;
pub mod logging;
pub mod version;
