use std::collections::HashMap;

use chrono::NaiveDate;

use crate::correlation::domain::{PackageCatalog, ReleaseInfo};

/// ReleaseResolver service: infers the canonical release of a source version.
///
/// A source version may have been backported into several releases; the
/// release it was first seen in wins, reflecting true provenance rather
/// than latest availability.
pub struct ReleaseResolver<'a> {
    catalog: &'a PackageCatalog,
}

impl<'a> ReleaseResolver<'a> {
    pub fn new(catalog: &'a PackageCatalog) -> Self {
        Self { catalog }
    }

    /// Resolves the canonical release and first-seen date for a
    /// (source, source_version) pair.
    ///
    /// Catalog rows are grouped by release snapshot and reduced to the
    /// earliest date per group; the group with the earliest date overall
    /// wins, with ties broken by release name so the result is
    /// deterministic. Returns `None` when no catalog rows exist, which the
    /// provenance tracker already excludes upstream.
    pub fn resolve(&self, source: &str, source_version: &str) -> Option<ReleaseInfo> {
        let mut earliest_per_release: HashMap<&str, NaiveDate> = HashMap::new();

        for entry in self
            .catalog
            .entries_for_source_version(source, source_version)
        {
            earliest_per_release
                .entry(&entry.release_snapshot)
                .and_modify(|date| {
                    if entry.date < *date {
                        *date = entry.date;
                    }
                })
                .or_insert(entry.date);
        }

        earliest_per_release
            .into_iter()
            .min_by_key(|&(release, date)| (date, release.to_string()))
            .map(|(release, first_seen)| ReleaseInfo {
                release: release.to_string(),
                first_seen,
            })
    }
}
