//! Human readable names of versions

use serde::Deserialize;

/// Default name shown for the unstable version
pub const DEFAULT_UNSTABLE_LABEL: &str = "testing";

/// Default word put in front of a stable version
pub const DEFAULT_STABLE_PREFIX: &str = "version";

/// Labels used to present versions to people
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionLabels {
    /// Fixed name of the unstable version
    pub unstable: String,
    /// Prefix of every other version, e.g. "version" -> "version 1.2"
    pub stable_prefix: String,
}

impl Default for VersionLabels {
    fn default() -> Self {
        Self {
            unstable: DEFAULT_UNSTABLE_LABEL.to_string(),
            stable_prefix: DEFAULT_STABLE_PREFIX.to_string(),
        }
    }
}

impl VersionLabels {
    pub fn human_name(&self, version: &str, unstable_version: &str) -> String {
        if version == unstable_version {
            self.unstable.clone()
        } else {
            format!("{} {}", self.stable_prefix, version)
        }
    }
}
