use chrono::NaiveDateTime;
use serde::Serialize;

use super::version::{DebianVersion, UpperBound};

/// Which bug tracker table a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BugOrigin {
    Normal,
    Archived,
}

impl std::fmt::Display for BugOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BugOrigin::Normal => write!(f, "normal"),
            BugOrigin::Archived => write!(f, "archived"),
        }
    }
}

/// A defect report against a source package, with its found-in/fixed-in
/// version range. The version bounds may carry a path-like qualifier
/// (`experimental/1.2-1`) that must be stripped before comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct BugRecord {
    pub source: String,
    pub debianbug: u64,
    pub found_in: String,
    /// Absent means the bug is still open (unbounded above)
    pub fixed_in: Option<String>,
    pub origin: BugOrigin,
    pub status: String,
    pub severity: String,
    pub arrival: Option<NaiveDateTime>,
    pub last_modified: Option<NaiveDateTime>,
}

impl BugRecord {
    /// The found-in bound normalized to its trailing version component.
    pub fn found_in_version(&self) -> DebianVersion {
        DebianVersion::new(trailing_component(&self.found_in))
    }

    /// The fixed-in bound normalized to its trailing version component,
    /// unbounded when absent.
    pub fn fixed_in_bound(&self) -> UpperBound {
        match &self.fixed_in {
            Some(fixed) => UpperBound::Fixed(DebianVersion::new(trailing_component(fixed))),
            None => UpperBound::Unbounded,
        }
    }

    /// A bug applies to installed version `v` iff `found_in <= v < fixed_in`.
    pub fn applies_to(&self, version: &DebianVersion) -> bool {
        self.found_in_version() <= *version && self.fixed_in_bound().admits(version)
    }
}

fn trailing_component(version: &str) -> &str {
    version.rsplit('/').next().unwrap_or(version)
}

/// Output record binding a tracked package to a bug that applies to the
/// installed version.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BugMatch {
    pub source: String,
    pub source_version: String,
    pub debianbug: u64,
    pub found_in: String,
    /// Normalized fixed-in version, or `undefined` when the bug is open
    pub fixed_in: String,
    pub origin: BugOrigin,
    pub status: String,
    pub severity: String,
    pub arrival: Option<NaiveDateTime>,
    pub last_modified: Option<NaiveDateTime>,
}
