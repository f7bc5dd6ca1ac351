use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::correlation::domain::{CveRecord, SourceVulnerabilities, VulnerabilityCatalog};
use crate::ports::outbound::VulnerabilityFeed;
use crate::shared::error::AuditError;
use crate::shared::Result;

const VULNERABILITY_FILENAME: &str = "vulnerabilities.json";

/// VulnerabilityJsonReader adapter for loading the security-tracker JSON
/// export from the data directory.
///
/// The export is a nested object `source → advisory id → record`. Records
/// with unexpected shapes are skipped individually so a handful of odd
/// entries never fails the whole feed.
pub struct VulnerabilityJsonReader {
    path: PathBuf,
}

impl VulnerabilityJsonReader {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(VULNERABILITY_FILENAME),
        }
    }
}

impl VulnerabilityFeed for VulnerabilityJsonReader {
    fn load_vulnerabilities(&self) -> Result<VulnerabilityCatalog> {
        if !self.path.exists() {
            return Err(AuditError::FeedParseError {
                path: self.path.clone(),
                details: "Vulnerability feed file does not exist".to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| AuditError::FileReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        let root: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| AuditError::FeedParseError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        let object = root.as_object().ok_or_else(|| AuditError::FeedParseError {
            path: self.path.clone(),
            details: "Top-level value is not a JSON object".to_string(),
        })?;

        let mut skipped = 0usize;
        let mut sources = HashMap::with_capacity(object.len());
        for (source, advisories) in object {
            let Some(advisories) = advisories.as_object() else {
                skipped += 1;
                continue;
            };

            let mut records = HashMap::with_capacity(advisories.len());
            for (advisory_id, record) in advisories {
                match serde_json::from_value::<CveRecord>(record.clone()) {
                    Ok(record) => {
                        records.insert(advisory_id.clone(), record);
                    }
                    Err(_) => skipped += 1,
                }
            }
            sources.insert(source.clone(), SourceVulnerabilities::new(records));
        }

        if skipped > 0 {
            eprintln!(
                "⚠️  Warning: Skipped {} malformed vulnerability record(s) in {}",
                skipped,
                self.path.display()
            );
        }

        Ok(VulnerabilityCatalog::new(sources))
    }
}
