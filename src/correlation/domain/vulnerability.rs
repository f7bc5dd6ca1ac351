use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder the security tracker convention uses for absent values.
pub const UNDEFINED: &str = "undefined";

/// Per-release status entry of a CVE record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReleaseStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub urgency: String,
    /// Only meaningful for resolved-class statuses. A resolved record
    /// without it is incomplete upstream data and is skipped.
    pub fixed_version: Option<String>,
}

/// The two policy branches for vulnerability applicability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// `open` or `undetermined`: applies to every tracked version of the release
    Open,
    /// Anything else: applies only below the fixed version
    Resolved,
}

impl ReleaseStatus {
    pub fn class(&self) -> StatusClass {
        match self.status.as_str() {
            "open" | "undetermined" => StatusClass::Open,
            _ => StatusClass::Resolved,
        }
    }
}

/// One CVE record of a source package, keyed by release.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CveRecord {
    /// Cross-reference into the Debian bug tracker, when one exists
    pub debianbug: Option<u64>,
    #[serde(default)]
    pub releases: HashMap<String, ReleaseStatus>,
}

impl CveRecord {
    /// Explicit lookup of the per-release status. Key absence is a modeled
    /// outcome: the vulnerability does not apply to that release.
    pub fn release_status(&self, release: &str) -> Option<&ReleaseStatus> {
        self.releases.get(release)
    }
}

/// All vulnerability records of one source package, keyed by advisory id.
/// Some catalogs mix non-CVE cross-references into the map; those keys are
/// retained here and filtered by the correlator.
#[derive(Debug, Clone, Default)]
pub struct SourceVulnerabilities {
    records: HashMap<String, CveRecord>,
}

impl SourceVulnerabilities {
    pub fn new(records: HashMap<String, CveRecord>) -> Self {
        Self { records }
    }

    /// Advisory ids in deterministic (sorted) order.
    pub fn advisory_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.records.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn record(&self, advisory_id: &str) -> Option<&CveRecord> {
        self.records.get(advisory_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The whole vulnerability feed: source package name to its advisories.
#[derive(Debug, Default)]
pub struct VulnerabilityCatalog {
    sources: HashMap<String, SourceVulnerabilities>,
}

impl VulnerabilityCatalog {
    pub fn new(sources: HashMap<String, SourceVulnerabilities>) -> Self {
        Self { sources }
    }

    /// Explicit lookup; a source with no advisories is a modeled outcome,
    /// not a caught fault.
    pub fn lookup(&self, source: &str) -> Option<&SourceVulnerabilities> {
        self.sources.get(source)
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

/// Output record binding a tracked package to a vulnerability that applies
/// to the installed version.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VulnerabilityMatch {
    pub source: String,
    pub source_version: String,
    pub urgency: String,
    pub status: String,
    /// Fixed version, or the literal `undefined` for open-class entries
    pub fixed_version: String,
    /// Debian bug number as a string, or `undefined` when absent
    pub debianbug: String,
    pub release: String,
    pub cve: String,
}
