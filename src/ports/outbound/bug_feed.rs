use crate::correlation::domain::BugRecord;
use crate::shared::Result;
use async_trait::async_trait;

/// BugFeed port for fetching defect reports per source package.
///
/// The upstream source is a remote bug-tracking database queried per source
/// package (two logical queries: active and archived reports).
///
/// # Async Support
/// Fetching is async because the canonical implementation is I/O bound.
/// Implementations must be `Send + Sync` to support concurrent access.
#[async_trait]
pub trait BugFeed: Send + Sync {
    /// Fetches all defect reports filed against a source package.
    ///
    /// # Arguments
    /// * `source` - Source package name
    ///
    /// # Returns
    /// All known reports, both active and archived. An empty vector means
    /// no reports exist, which is the common case.
    async fn fetch_bugs(&self, source: &str) -> Result<Vec<BugRecord>>;
}
