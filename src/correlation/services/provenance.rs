use std::collections::HashSet;

use crate::correlation::domain::{InstalledPackage, PackageCatalog, TrackedPackage};

/// ProvenanceTracker service: joins installed packages against the catalog.
///
/// An installed package either came from the distribution verbatim or is
/// untracked; there is no partial or fuzzy matching. Non-matches are dropped,
/// which is explicit policy rather than an error.
pub struct ProvenanceTracker;

impl ProvenanceTracker {
    /// Inner-joins installed packages with catalog entries on
    /// (package, version) and computes the outdatedness score.
    ///
    /// Output is deduplicated: a given (package, version) contributes at
    /// most one row even when the catalog holds multiple snapshots for it.
    pub fn track(
        installed: &[InstalledPackage],
        catalog: &PackageCatalog,
    ) -> Vec<TrackedPackage> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut tracked = Vec::new();

        for package in installed {
            if !seen.insert((&package.package, &package.version)) {
                continue;
            }
            if let Some(entry) = catalog.lookup(&package.package, &package.version) {
                tracked.push(TrackedPackage::from_catalog_match(package, entry));
            }
        }

        tracked
    }
}
