/// Mock implementations for testing
mod mock_bug_feed;
mod mock_catalog_feed;
mod mock_listing_source;
mod mock_metadata_client;
mod mock_progress_reporter;
mod mock_vulnerability_feed;

pub use mock_bug_feed::MockBugFeed;
pub use mock_catalog_feed::MockCatalogFeed;
pub use mock_listing_source::MockListingSource;
pub use mock_metadata_client::MockMetadataClient;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_vulnerability_feed::MockVulnerabilityFeed;
