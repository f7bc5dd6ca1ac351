use debtective::prelude::*;

/// Mock PackageListingSource for testing
pub struct MockListingSource {
    pub release_version: String,
    pub lines: Vec<String>,
    pub should_fail: bool,
}

impl MockListingSource {
    pub fn new(release_version: &str, lines: &[&str]) -> Self {
        Self {
            release_version: release_version.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            release_version: String::new(),
            lines: vec![],
            should_fail: true,
        }
    }
}

impl PackageListingSource for MockListingSource {
    fn read_release_version(&self) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock listing read failure");
        }
        Ok(self.release_version.clone())
    }

    fn read_listing(&self) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Mock listing read failure");
        }
        Ok(self.lines.clone())
    }
}
