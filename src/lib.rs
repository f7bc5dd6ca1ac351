//! debtective - package provenance and vulnerability auditing for Debian containers
//!
//! This library traces the packages installed in a Debian-based container image
//! back to the distribution, then correlates the installed versions with known
//! vulnerabilities and defect reports, following hexagonal architecture
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`correlation`): Pure correlation engine and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use debtective::prelude::*;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let data_dir = Path::new("data");
//!
//! // Create adapters
//! let listing_source = DpkgListingReader::new(data_dir, "debian:stretch");
//! let catalog_feed = CatalogCsvReader::new(data_dir);
//! let vulnerability_feed = VulnerabilityJsonReader::new(data_dir);
//! let bug_feed = BugCsvReader::new(data_dir);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = RunAuditUseCase::new(
//!     listing_source,
//!     catalog_feed,
//!     vulnerability_feed,
//!     Some(bug_feed),
//!     None::<DockerHubMetadataClient>,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = AuditRequest::new("debian:stretch", true, false);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = JsonFormatter::new();
//! let output = formatter.format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod correlation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        BugCsvReader, CatalogCsvReader, DpkgListingReader, FileSystemWriter, StdoutPresenter,
        VulnerabilityJsonReader,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter};
    pub use crate::adapters::outbound::network::{
        CachingImageMetadataClient, DockerHubMetadataClient,
    };
    pub use crate::application::dto::{AuditRequest, AuditResponse};
    pub use crate::application::use_cases::RunAuditUseCase;
    pub use crate::correlation::domain::{
        compare, BugMatch, BugRecord, CatalogEntry, DebianVersion, InstalledPackage,
        PackageCatalog, TrackedPackage, VulnerabilityCatalog, VulnerabilityMatch,
    };
    pub use crate::correlation::services::{
        BugCorrelator, PackageExtractor, ProvenanceTracker, ReleaseResolver,
        VulnerabilityCorrelator,
    };
    pub use crate::ports::outbound::{
        BugFeed, CatalogFeed, ImageMetadataClient, OutputPresenter, PackageListingSource,
        ProgressReporter, ReportFormatter, VulnerabilityFeed,
    };
    pub use crate::shared::Result;
}
