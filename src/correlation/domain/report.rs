use serde::Serialize;

/// Metadata attached to every audit report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    /// RFC3339 timestamp of report generation
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    /// Unique serial number (urn:uuid form)
    pub serial_number: String,
    /// Image the audit ran against
    pub image: String,
    /// Release codename the container reports, empty when unknown
    pub release: String,
}

/// General information about the audited image, as reported by the registry.
/// Every field is optional; the registry omits keys freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageMetadata {
    pub description: Option<String>,
    pub star_count: Option<u64>,
    pub pull_count: Option<u64>,
    pub full_size: Option<u64>,
    pub last_updated: Option<String>,
    pub architectures: Option<Vec<String>>,
}
