use crate::application::dto::AuditResponse;
use crate::correlation::domain::{
    BugMatch, ImageMetadata, ReportMetadata, TrackedPackage, VulnerabilityMatch,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::AuditError;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: &'a ReportMetadata,
    summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_info: Option<&'a ImageMetadata>,
    tracked_packages: &'a [TrackedPackage],
    vulnerabilities: &'a [VulnerabilityMatch],
    #[serde(skip_serializing_if = "Option::is_none")]
    bugs: Option<&'a [BugMatch]>,
}

#[derive(Debug, Serialize)]
struct Summary {
    installed: usize,
    tracked: usize,
    untracked: usize,
    vulnerabilities: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    bugs: Option<usize>,
}

/// JsonFormatter adapter for generating the JSON report document
///
/// This adapter implements the ReportFormatter port for JSON format.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &AuditResponse) -> Result<String> {
        let report = Report {
            metadata: &response.metadata,
            summary: Summary {
                installed: response.installed_count,
                tracked: response.tracked_packages.len(),
                untracked: response.untracked_count(),
                vulnerabilities: response.vulnerabilities.len(),
                bugs: response.bugs.as_ref().map(Vec::len),
            },
            image_info: response.image_info.as_ref(),
            tracked_packages: &response.tracked_packages,
            vulnerabilities: &response.vulnerabilities,
            bugs: response.bugs.as_deref(),
        };

        let mut output =
            serde_json::to_string_pretty(&report).map_err(|e| AuditError::OutputGenerationError {
                format: "JSON".to_string(),
                details: e.to_string(),
            })?;
        output.push('\n');
        Ok(output)
    }
}
