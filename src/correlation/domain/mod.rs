//! Domain models of the correlation engine: pure value types with no I/O.

pub mod bug;
pub mod catalog;
pub mod installed_package;
pub mod release;
pub mod report;
pub mod tracked_package;
pub mod version;
pub mod vulnerability;

pub use bug::{BugMatch, BugOrigin, BugRecord};
pub use catalog::{CatalogEntry, PackageCatalog};
pub use installed_package::InstalledPackage;
pub use release::{codename_for, ReleaseInfo};
pub use report::{ImageMetadata, ReportMetadata};
pub use tracked_package::TrackedPackage;
pub use version::{compare, DebianVersion, UpperBound};
pub use vulnerability::{
    CveRecord, ReleaseStatus, SourceVulnerabilities, StatusClass, VulnerabilityCatalog,
    VulnerabilityMatch, UNDEFINED,
};
