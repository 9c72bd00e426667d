use std::cmp::Reverse;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

static MINOR_VERSION_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(0|[1-9]\d*)\.(0|[1-9]\d*)$").expect("valid regex"));

static PATCH_VERSION_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)$").expect("valid regex")
});

/// Returns true for names like "1.2" or "v1.2"
///
/// Numbers with leading zeros are rejected, as semver does.
pub fn is_minor_version_like(name: &str) -> bool {
    MINOR_VERSION_LIKE.is_match(name)
}

/// Returns true for names like "1.2.3" or "v1.2.3"
pub fn is_patch_version_like(name: &str) -> bool {
    PATCH_VERSION_LIKE.is_match(name)
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Strips an optional 'v' prefix and pads partial versions with zeros.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Sort versions from newest to oldest
///
/// Unparseable names keep their relative order and go last.
pub fn sort_newest_first(versions: &mut [String]) {
    versions.sort_by_cached_key(|v| Reverse(parse_version(v)));
}

/// Whether `patch_version` lies within `superior_version`
///
/// "1.2.3" belongs to "1.2" and "1", not to "1.20" or "1.2.3" itself.
/// A leading 'v' is ignored on both sides.
pub fn belongs_to(patch_version: &str, superior_version: &str) -> bool {
    let patch = patch_version.strip_prefix('v').unwrap_or(patch_version);
    let superior = superior_version
        .strip_prefix('v')
        .unwrap_or(superior_version);

    patch
        .strip_prefix(superior)
        .is_some_and(|rest| rest.starts_with('.'))
}
