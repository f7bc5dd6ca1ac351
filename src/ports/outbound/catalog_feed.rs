use crate::correlation::domain::PackageCatalog;
use crate::shared::Result;

/// CatalogFeed port for loading the historical package catalog.
///
/// The catalog must be fully resident before correlation starts; correlation
/// requires random access by (package, version) and by (source,
/// source_version) across the whole dataset.
pub trait CatalogFeed {
    /// Loads the complete package catalog.
    ///
    /// # Errors
    /// Returns an error if the feed cannot be read; individual malformed
    /// rows are skipped by the adapter, never failing the batch.
    fn load_catalog(&self) -> Result<PackageCatalog>;
}
