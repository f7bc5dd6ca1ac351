/// Filesystem adapters - batch data directory and report output
pub mod bug_reader;
pub mod catalog_reader;
pub mod file_writer;
pub mod listing_reader;
pub mod vulnerability_reader;

pub use bug_reader::BugCsvReader;
pub use catalog_reader::CatalogCsvReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use listing_reader::DpkgListingReader;
pub use vulnerability_reader::VulnerabilityJsonReader;
