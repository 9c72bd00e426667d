//! Command-line queries against a [`VersionCatalog`]

use clap::Subcommand;
use serde::Serialize;

use crate::version::catalog::VersionCatalog;
use crate::version::error::BackendError;

/// Questions the command line can ask about a repository
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Query {
    /// Name of the unstable version
    Unstable,
    /// All minor versions, the unstable one first
    Minors,
    /// Minor versions without the unstable one
    StableMinors,
    /// Last stable minor version
    LastMinor,
    /// Last stable patch version
    LastPatch,
    /// All patch versions
    Patches,
    /// Last patch version of a minor version
    LastPatchOf { version: String },
    /// Whether a minor version exists
    HasMinor { version: String },
    /// Human readable name of a version
    HumanName { version: String },
}

/// Answer to a [`Query`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Version(String),
    Versions(Vec<String>),
    Flag(bool),
}

impl QueryOutput {
    /// Plain text rendering, one version per line
    pub fn to_text(&self) -> String {
        match self {
            QueryOutput::Version(version) => version.clone(),
            QueryOutput::Versions(versions) => versions.join("\n"),
            QueryOutput::Flag(flag) => flag.to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub fn run_query(catalog: &VersionCatalog, query: &Query) -> Result<QueryOutput, BackendError> {
    let output = match query {
        Query::Unstable => QueryOutput::Version(catalog.last_unstable_version().to_string()),
        Query::Minors => QueryOutput::Versions(catalog.all_minor_versions()?),
        Query::StableMinors => QueryOutput::Versions(catalog.all_stable_minor_versions()?),
        Query::LastMinor => QueryOutput::Version(catalog.last_stable_minor_version()?),
        Query::LastPatch => QueryOutput::Version(catalog.last_stable_patch_version()?),
        Query::Patches => QueryOutput::Versions(catalog.patch_versions()?),
        Query::LastPatchOf { version } => {
            QueryOutput::Version(catalog.last_patch_version_of(version)?)
        }
        Query::HasMinor { version } => QueryOutput::Flag(catalog.has_minor_version(version)?),
        Query::HumanName { version } => QueryOutput::Version(catalog.version_human_name(version)),
    };

    Ok(output)
}
