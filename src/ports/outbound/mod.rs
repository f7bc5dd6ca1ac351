/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod bug_feed;
pub mod catalog_feed;
pub mod image_metadata;
pub mod output_presenter;
pub mod package_listing_source;
pub mod progress_reporter;
pub mod report_formatter;
pub mod vulnerability_feed;

pub use bug_feed::BugFeed;
pub use catalog_feed::CatalogFeed;
pub use image_metadata::ImageMetadataClient;
pub use output_presenter::OutputPresenter;
pub use package_listing_source::PackageListingSource;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use vulnerability_feed::VulnerabilityFeed;
