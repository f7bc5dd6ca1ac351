use crate::correlation::domain::VulnerabilityCatalog;
use crate::shared::Result;

/// VulnerabilityFeed port for loading the vulnerability catalog.
///
/// The feed is a nested mapping `source → advisory id → per-release status`,
/// typically a security-tracker JSON export.
pub trait VulnerabilityFeed {
    /// Loads the complete vulnerability catalog.
    ///
    /// # Errors
    /// Returns an error if the feed cannot be read or is not a JSON object;
    /// individual records with unexpected shapes are skipped by the adapter.
    fn load_vulnerabilities(&self) -> Result<VulnerabilityCatalog>;
}
