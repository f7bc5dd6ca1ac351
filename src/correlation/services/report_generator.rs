use chrono::Utc;
use uuid::Uuid;

use crate::correlation::domain::ReportMetadata;

/// ReportGenerator service for producing audit report metadata.
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates report metadata with the current timestamp and a unique
    /// serial number.
    pub fn generate_metadata(
        tool_name: &str,
        tool_version: &str,
        image: &str,
        release: &str,
    ) -> ReportMetadata {
        ReportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            tool_name: tool_name.to_string(),
            tool_version: tool_version.to_string(),
            serial_number: format!("urn:uuid:{}", Uuid::new_v4()),
            image: image.to_string(),
            release: release.to_string(),
        }
    }

    /// Generates metadata with this tool's identity from Cargo.toml.
    pub fn generate_default_metadata(image: &str, release: &str) -> ReportMetadata {
        Self::generate_metadata("debtective", env!("CARGO_PKG_VERSION"), image, release)
    }
}
