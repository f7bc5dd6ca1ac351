use crate::application::dto::AuditResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use chrono::NaiveDateTime;

const FIELD_SEPARATOR: char = ';';
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CsvFormatter adapter for generating semicolon-separated tabular output
///
/// This adapter implements the ReportFormatter port for CSV format,
/// mirroring the layout of the input feeds: one table per finding kind,
/// separated by a blank line when both are present.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn vulnerability_table(response: &AuditResponse, out: &mut String) {
        push_row(
            out,
            &[
                "source",
                "source_version",
                "urgency",
                "status",
                "fixed_version",
                "debianbug",
                "release",
                "cve",
            ],
        );
        for vuln in &response.vulnerabilities {
            push_row(
                out,
                &[
                    &vuln.source,
                    &vuln.source_version,
                    &vuln.urgency,
                    &vuln.status,
                    &vuln.fixed_version,
                    &vuln.debianbug,
                    &vuln.release,
                    &vuln.cve,
                ],
            );
        }
    }

    fn bug_table(response: &AuditResponse, out: &mut String) {
        let Some(bugs) = &response.bugs else {
            return;
        };

        if !out.is_empty() {
            out.push('\n');
        }
        push_row(
            out,
            &[
                "source",
                "debianbug",
                "found_in",
                "fixed_in",
                "origin",
                "status",
                "severity",
                "arrival",
                "last_modified",
            ],
        );
        for bug in bugs {
            push_row(
                out,
                &[
                    &bug.source,
                    &bug.debianbug.to_string(),
                    &bug.found_in,
                    &bug.fixed_in,
                    &bug.origin.to_string(),
                    &bug.status,
                    &bug.severity,
                    &format_timestamp(bug.arrival),
                    &format_timestamp(bug.last_modified),
                ],
            );
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_row(out: &mut String, fields: &[&str]) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(FIELD_SEPARATOR);
        }
        out.push_str(field);
        first = false;
    }
    out.push('\n');
}

fn format_timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, response: &AuditResponse) -> Result<String> {
        let mut output = String::new();
        Self::vulnerability_table(response, &mut output);
        Self::bug_table(response, &mut output);
        Ok(output)
    }
}
