use std::collections::HashMap;

use debtective::correlation::domain::{CveRecord, ReleaseStatus, SourceVulnerabilities};
use debtective::prelude::*;

/// Mock VulnerabilityFeed for testing, built with a small builder API
#[derive(Default)]
pub struct MockVulnerabilityFeed {
    sources: HashMap<String, HashMap<String, CveRecord>>,
    should_fail: bool,
}

impl MockVulnerabilityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an advisory for a source package, applying to one release.
    #[allow(clippy::too_many_arguments)]
    pub fn with_advisory(
        mut self,
        source: &str,
        advisory_id: &str,
        release: &str,
        status: &str,
        urgency: &str,
        fixed_version: Option<&str>,
        debianbug: Option<u64>,
    ) -> Self {
        let record = self
            .sources
            .entry(source.to_string())
            .or_default()
            .entry(advisory_id.to_string())
            .or_insert_with(|| CveRecord {
                debianbug,
                releases: HashMap::new(),
            });
        record.releases.insert(
            release.to_string(),
            ReleaseStatus {
                status: status.to_string(),
                urgency: urgency.to_string(),
                fixed_version: fixed_version.map(String::from),
            },
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            sources: HashMap::new(),
            should_fail: true,
        }
    }
}

impl VulnerabilityFeed for MockVulnerabilityFeed {
    fn load_vulnerabilities(&self) -> Result<VulnerabilityCatalog> {
        if self.should_fail {
            anyhow::bail!("Mock vulnerability load failure");
        }
        let sources = self
            .sources
            .iter()
            .map(|(source, records)| {
                (
                    source.clone(),
                    SourceVulnerabilities::new(records.clone()),
                )
            })
            .collect();
        Ok(VulnerabilityCatalog::new(sources))
    }
}
