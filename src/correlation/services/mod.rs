//! Services of the correlation engine: pure, synchronous batch computations
//! over fully materialized reference data.

pub mod bug_correlator;
pub mod extractor;
pub mod provenance;
pub mod release_resolver;
pub mod report_generator;
pub mod vulnerability_correlator;

pub use bug_correlator::BugCorrelator;
pub use extractor::PackageExtractor;
pub use provenance::ProvenanceTracker;
pub use release_resolver::ReleaseResolver;
pub use report_generator::ReportGenerator;
pub use vulnerability_correlator::VulnerabilityCorrelator;
