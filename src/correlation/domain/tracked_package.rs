use chrono::NaiveDate;
use serde::Serialize;

use super::catalog::CatalogEntry;
use super::installed_package::InstalledPackage;

/// An installed package that was traced back to the distribution by an exact
/// (package, version) catalog match.
///
/// `outdate` measures how far the installed version lags behind the newest
/// known version of the package, in catalog rank steps; 0 means current.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedPackage {
    pub container_id: String,
    pub package: String,
    pub version: String,
    pub source: String,
    pub source_version: String,
    pub release_snapshot: String,
    pub date: NaiveDate,
    pub outdate: u64,
}

impl TrackedPackage {
    /// Joins an installed package with its catalog entry.
    ///
    /// Valid catalogs guarantee `last_order >= version_order`; saturating
    /// subtraction keeps a malformed row from underflowing.
    pub fn from_catalog_match(installed: &InstalledPackage, entry: &CatalogEntry) -> Self {
        Self {
            container_id: installed.container_id.clone(),
            package: installed.package.clone(),
            version: installed.version.clone(),
            source: entry.source.clone(),
            source_version: entry.source_version.clone(),
            release_snapshot: entry.release_snapshot.clone(),
            date: entry.date,
            outdate: entry.last_order.saturating_sub(entry.version_order),
        }
    }

    pub fn is_current(&self) -> bool {
        self.outdate == 0
    }
}
