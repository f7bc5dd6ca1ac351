use crate::correlation::domain::{
    BugMatch, ImageMetadata, ReportMetadata, TrackedPackage, VulnerabilityMatch,
};

/// AuditResponse - Internal response DTO from the container audit use case
///
/// This DTO contains the rich data structures produced by the use case,
/// which adapters can then format into the appropriate output format.
#[derive(Debug, Clone)]
pub struct AuditResponse {
    /// Release codename the container reports, empty when unknown
    pub release: String,
    /// Number of installed packages found in the listing
    pub installed_count: usize,
    /// Packages traced back to the distribution
    pub tracked_packages: Vec<TrackedPackage>,
    /// Vulnerabilities applying to the installed versions
    pub vulnerabilities: Vec<VulnerabilityMatch>,
    /// Defect reports applying to the installed versions
    /// None = not checked, Some(vec) = checked (empty vec means none found)
    pub bugs: Option<Vec<BugMatch>>,
    /// Registry metadata, when fetched
    pub image_info: Option<ImageMetadata>,
    /// Report metadata (timestamp, tool info, serial number)
    pub metadata: ReportMetadata,
}

impl AuditResponse {
    /// Number of installed packages that could not be traced to the
    /// distribution at the exact installed version.
    pub fn untracked_count(&self) -> usize {
        self.installed_count.saturating_sub(self.tracked_packages.len())
    }

    /// True when the audit surfaced at least one vulnerability or bug.
    pub fn has_findings(&self) -> bool {
        !self.vulnerabilities.is_empty()
            || self.bugs.as_ref().is_some_and(|bugs| !bugs.is_empty())
    }
}
