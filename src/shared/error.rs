use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the audit completed (findings may still be present)
    Success = 0,
    /// Findings were detected and --fail-on-findings was requested
    FindingsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (feed parse error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FindingsDetected => write!(f, "Findings Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for container package auditing.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Package listing not found: {path}\n\n💡 Hint: {suggestion}")]
    ListingNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse data feed: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the feed file is in the expected format")]
    FeedParseError { path: PathBuf, details: String },

    #[error("Package catalog not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to fetch registry metadata for image \"{image}\"\nDetails: {details}\n\n💡 Hint: Check your network connection, or rerun with --offline")]
    MetadataFetchError { image: String, details: String },

    #[error("Failed to generate {format} output\nDetails: {details}")]
    OutputGenerationError { format: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for request/config values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid data directory: {path}\nReason: {reason}\n\n💡 Hint: Please point --data-dir at the directory holding the catalog and vulnerability feeds")]
    InvalidDataDir { path: PathBuf, reason: String },
}
