use chrono::NaiveDate;
use serde::Serialize;

/// Canonical release information for a (source, source_version) pair.
///
/// Many source versions appear in several releases; the release a version was
/// first seen in wins, reflecting true provenance rather than latest
/// availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseInfo {
    /// Codename of the release the version was first seen in
    pub release: String,
    /// Earliest catalog date for the version in that release
    pub first_seen: NaiveDate,
}

/// Maps the content of `/etc/debian_version` to a release codename.
///
/// Stable releases report a numeric version (`9.13`); testing/unstable report
/// the codename directly (`buster/sid`), which passes through unchanged.
pub fn codename_for(release_number: &str) -> String {
    let trimmed = release_number.trim();
    if trimmed.starts_with('6') {
        "squeeze".to_string()
    } else if trimmed.starts_with('7') {
        "wheezy".to_string()
    } else if trimmed.starts_with('8') {
        "jessie".to_string()
    } else if trimmed.starts_with('9') {
        "stretch".to_string()
    } else if trimmed.starts_with("10") {
        "buster".to_string()
    } else {
        trimmed.to_string()
    }
}
