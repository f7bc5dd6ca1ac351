use std::collections::HashSet;

use crate::correlation::domain::{
    compare, PackageCatalog, StatusClass, TrackedPackage, VulnerabilityCatalog,
    VulnerabilityMatch, UNDEFINED,
};
use crate::correlation::services::ReleaseResolver;
use std::cmp::Ordering;

/// VulnerabilityCorrelator service: matches tracked packages against the
/// vulnerability catalog.
///
/// For each unique (source, source_version) the canonical release is
/// resolved, the per-release status of every CVE-tagged advisory is
/// inspected, and the open/resolved policy applied:
/// - open-class entries apply to every tracked version of the release;
/// - resolved-class entries apply only when the installed source version is
///   strictly below the fixed version, and are skipped entirely when the
///   fixed version is missing (incomplete upstream data).
pub struct VulnerabilityCorrelator;

impl VulnerabilityCorrelator {
    pub fn correlate(
        tracked: &[TrackedPackage],
        catalog: &PackageCatalog,
        vulnerabilities: &VulnerabilityCatalog,
    ) -> Vec<VulnerabilityMatch> {
        let resolver = ReleaseResolver::new(catalog);
        let mut matches = Vec::new();

        for (source, source_version) in unique_source_versions(tracked) {
            let Some(release_info) = resolver.resolve(source, source_version) else {
                continue;
            };
            let Some(source_vulns) = vulnerabilities.lookup(source) else {
                continue;
            };

            for advisory_id in source_vulns.advisory_ids() {
                // Some catalogs mix bug-tracker cross-references into the
                // advisory map; only CVE entries are considered.
                if !advisory_id.starts_with("CVE") {
                    continue;
                }
                let Some(record) = source_vulns.record(advisory_id) else {
                    continue;
                };
                // Release absent from the per-release map: the vulnerability
                // does not apply to this release.
                let Some(status) = record.release_status(&release_info.release) else {
                    continue;
                };

                let debianbug = record
                    .debianbug
                    .map(|bug| bug.to_string())
                    .unwrap_or_else(|| UNDEFINED.to_string());

                let fixed_version = match status.class() {
                    StatusClass::Open => UNDEFINED.to_string(),
                    StatusClass::Resolved => {
                        let Some(fixed) = &status.fixed_version else {
                            continue;
                        };
                        if compare(source_version, fixed) != Ordering::Less {
                            continue;
                        }
                        fixed.clone()
                    }
                };

                matches.push(VulnerabilityMatch {
                    source: source.to_string(),
                    source_version: source_version.to_string(),
                    urgency: status.urgency.clone(),
                    status: status.status.clone(),
                    fixed_version,
                    debianbug,
                    release: release_info.release.clone(),
                    cve: advisory_id.to_string(),
                });
            }
        }

        matches
    }
}

/// Unique (source, source_version) pairs in first-occurrence order.
fn unique_source_versions(tracked: &[TrackedPackage]) -> Vec<(&str, &str)> {
    let mut seen = HashSet::new();
    tracked
        .iter()
        .map(|t| (t.source.as_str(), t.source_version.as_str()))
        .filter(|pair| seen.insert(*pair))
        .collect()
}
