use chrono::NaiveDate;
use std::collections::HashMap;

/// One binary package shipped by one source package in one distribution
/// snapshot. Immutable reference data owned by the catalog feed.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Source package that produced this binary package
    pub source: String,
    /// Version of the source package
    pub source_version: String,
    /// Binary package name
    pub package: String,
    /// Binary package version
    pub version: String,
    /// Distribution release the snapshot belongs to (codename)
    pub release_snapshot: String,
    /// Date this entry was seen in the snapshot
    pub date: NaiveDate,
    /// Externally assigned rank of this version; higher means newer
    pub version_order: u64,
    /// Rank of the newest known version of this package
    pub last_order: u64,
}

/// In-memory package catalog with lookup indexes.
///
/// Correlation needs random access by (package, version) and by
/// (source, source_version) across the whole dataset, so the catalog is
/// fully materialized before any correlation starts.
#[derive(Debug, Default)]
pub struct PackageCatalog {
    entries: Vec<CatalogEntry>,
    by_package_version: HashMap<(String, String), usize>,
    by_source_version: HashMap<(String, String), Vec<usize>>,
}

impl PackageCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut by_package_version = HashMap::new();
        let mut by_source_version: HashMap<(String, String), Vec<usize>> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            // First match wins: later snapshots of the same (package, version)
            // do not override the index.
            by_package_version
                .entry((entry.package.clone(), entry.version.clone()))
                .or_insert(idx);
            by_source_version
                .entry((entry.source.clone(), entry.source_version.clone()))
                .or_default()
                .push(idx);
        }

        Self {
            entries,
            by_package_version,
            by_source_version,
        }
    }

    /// Looks up the catalog entry for an exact (package, version) pair.
    /// Absence means the installed package is not traceable to the
    /// distribution; that is an expected outcome, not an error.
    pub fn lookup(&self, package: &str, version: &str) -> Option<&CatalogEntry> {
        self.by_package_version
            .get(&(package.to_string(), version.to_string()))
            .map(|&idx| &self.entries[idx])
    }

    /// All catalog rows for a given (source, source_version).
    pub fn entries_for_source_version(
        &self,
        source: &str,
        source_version: &str,
    ) -> impl Iterator<Item = &CatalogEntry> {
        self.by_source_version
            .get(&(source.to_string(), source_version.to_string()))
            .into_iter()
            .flatten()
            .map(|&idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
