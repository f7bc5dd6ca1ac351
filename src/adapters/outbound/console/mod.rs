/// Console adapters - stderr progress reporting
pub mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
